// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, construction, queries.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::error::{MenuError, MenuResult};
use crate::option::ItemOption;
use crate::types::{Item, ItemId, ItemKey};

static NEXT_MENU_KEY: AtomicU64 = AtomicU64::new(1);

fn next_menu_key() -> u64 {
    NEXT_MENU_KEY.fetch_add(1, Ordering::Relaxed)
}

/// Arena of menu items.
///
/// A menu may hold any number of independent trees; every item created and
/// not yet attached is a root.
pub struct Menu {
    key: u64,
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Menu {
    /// Clones every item; the clone gets its own key so cached match results
    /// for one menu never apply to the other.
    fn clone(&self) -> Self {
        Self {
            key: next_menu_key(),
            nodes: self.nodes.clone(),
            generations: self.generations.clone(),
            free_list: self.free_list.clone(),
        }
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = self.len();
        let free = self.free_list.len();
        f.debug_struct("Menu")
            .field("key", &self.key)
            .field("items_total", &total)
            .field("items_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ItemId>,
    children: Vec<ItemId>,
    item: Item,
}

impl Node {
    fn new(generation: u32, item: Item) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            item,
        }
    }
}

/// The value handed to [`Menu::add_child`].
///
/// Either an existing item, or a name for a freshly created leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    /// Attach this existing root item.
    Item(ItemId),
    /// Create a new item with this name.
    Named(String),
}

impl Child {
    /// Name a new item by the string rendering of `value`.
    pub fn named(value: impl fmt::Display) -> Self {
        Self::Named(value.to_string())
    }
}

impl From<ItemId> for Child {
    fn from(id: ItemId) -> Self {
        Self::Item(id)
    }
}

impl From<&str> for Child {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for Child {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl Menu {
    /// Create a new empty menu.
    pub fn new() -> Self {
        Self {
            key: next_menu_key(),
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Process-unique key of this menu.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// True if the menu holds no live items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `id` refers to a live item.
    ///
    /// See [`ItemId`] docs for the generational semantics.
    pub fn is_alive(&self, id: ItemId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Borrow a live item together with its structure.
    pub fn item(&self, id: ItemId) -> Option<ItemRef<'_>> {
        self.node_opt(id).map(|node| ItemRef {
            menu: self,
            id,
            node,
        })
    }

    /// Mutable access to a live item's data.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.node_opt_mut(id).map(|n| &mut n.item)
    }

    /// Iterate the root items, in slot order.
    pub fn roots(&self) -> impl Iterator<Item = ItemRef<'_>> + '_ {
        self.nodes.iter().enumerate().filter_map(move |(i, n)| {
            let node = n.as_ref().filter(|n| n.parent.is_none())?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId uses 32-bit indices by design."
            )]
            let id = ItemId::new(i as u32, node.generation);
            Some(ItemRef {
                menu: self,
                id,
                node,
            })
        })
    }

    /// Create a new root item and apply `options` in order.
    ///
    /// The first failing option aborts construction and its error is returned;
    /// nothing is inserted in that case, and items named by
    /// [`ItemOption::Child`] stay where they were.
    pub fn create_item(
        &mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = ItemOption>,
    ) -> MenuResult<ItemId> {
        let mut item = Item::new(name);
        let mut staged = Vec::new();
        for option in options {
            match option {
                ItemOption::Child(child) => self.stage_child(child, &mut staged)?,
                ItemOption::Children(children) => {
                    for child in children {
                        self.stage_child(child, &mut staged)?;
                    }
                }
                option => option.apply(&mut item)?,
            }
        }
        let id = self.alloc(item);
        for child in staged {
            self.link_parent(child, id);
        }
        trace!(item = %id, "created menu item");
        Ok(id)
    }

    /// Attach a child to `parent`.
    ///
    /// If `child` names an existing item it must be a root that is not an
    /// ancestor of `parent`; `options` are ignored in that case.
    /// Otherwise a new item is created from the name and `options`.
    /// Returns the attached item.
    pub fn add_child(
        &mut self,
        parent: ItemId,
        child: impl Into<Child>,
        options: impl IntoIterator<Item = ItemOption>,
    ) -> MenuResult<ItemId> {
        if !self.is_alive(parent) {
            return Err(MenuError::StaleItem(parent));
        }
        let child = match child.into() {
            Child::Item(child) => {
                self.check_attachable(child)?;
                if self.root_of(parent) == child {
                    debug!(item = %child, parent = %parent, "refusing to attach an ancestor");
                    return Err(MenuError::WouldCycle {
                        item: child,
                        parent,
                    });
                }
                child
            }
            Child::Named(name) => self.create_item(name, options)?,
        };
        self.link_parent(child, parent);
        Ok(child)
    }

    /// Deep-copy an item and its subtree. The copy is a new root.
    pub fn copy_subtree(&mut self, id: ItemId) -> MenuResult<ItemId> {
        let (item, children) = {
            let node = self.node_opt(id).ok_or(MenuError::StaleItem(id))?;
            (node.item.clone(), node.children.clone())
        };
        let copy = self.alloc(item);
        for child in children {
            let child_copy = self.copy_subtree(child)?;
            self.link_parent(child_copy, copy);
        }
        Ok(copy)
    }

    /// Remove an item (and its subtree) from the menu.
    pub fn remove(&mut self, id: ItemId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
        trace!(item = %id, "removed menu item");
    }

    /// Sort the children of `id` by ascending position.
    ///
    /// The sort is stable, so equal positions keep their insertion order and
    /// calling this twice is the same as calling it once.
    pub fn reorder_children(&mut self, id: ItemId) {
        let Some(children) = self.node_opt(id).map(|n| n.children.clone()) else {
            return;
        };
        let mut keyed: Vec<(i32, ItemId)> = children
            .into_iter()
            .map(|c| (self.node(c).item.position, c))
            .collect();
        keyed.sort_by_key(|(position, _)| *position);
        self.node_mut(id).children = keyed.into_iter().map(|(_, c)| c).collect();
    }

    // --- internals ---

    fn alloc(&mut self, item: Item) -> ItemId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, item));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, item)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        ItemId::new(idx, generation)
    }

    fn check_attachable(&self, child: ItemId) -> MenuResult<()> {
        let node = self.node_opt(child).ok_or(MenuError::StaleItem(child))?;
        if let Some(parent) = node.parent {
            debug!(item = %child, parent = %parent, "menu item already has a parent");
            return Err(MenuError::AlreadyOwned { item: child });
        }
        Ok(())
    }

    fn stage_child(&self, child: ItemId, staged: &mut Vec<ItemId>) -> MenuResult<()> {
        self.check_attachable(child)?;
        if staged.contains(&child) {
            return Err(MenuError::AlreadyOwned { item: child });
        }
        staged.push(child);
        Ok(())
    }

    fn root_of(&self, mut id: ItemId) -> ItemId {
        while let Some(parent) = self.node(id).parent {
            id = parent;
        }
        id
    }

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: ItemId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling ItemId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: ItemId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling ItemId")
    }

    fn node_opt(&self, id: ItemId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ItemId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: ItemId, parent: ItemId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ItemId, parent: ItemId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

/// A live item borrowed from its [`Menu`], with structural queries.
///
/// Dereferences to the item's [`Item`] data.
#[derive(Clone, Copy)]
pub struct ItemRef<'a> {
    menu: &'a Menu,
    id: ItemId,
    node: &'a Node,
}

impl fmt::Debug for ItemRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRef")
            .field("id", &self.id)
            .field("name", &self.node.item.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ItemRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node.item, f)
    }
}

impl Deref for ItemRef<'_> {
    type Target = Item;

    fn deref(&self) -> &Item {
        &self.node.item
    }
}

impl PartialEq for ItemRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ItemRef<'_> {}

impl<'a> ItemRef<'a> {
    /// Handle of this item.
    pub fn id(self) -> ItemId {
        self.id
    }

    /// Process-wide identity of this item.
    pub fn key(self) -> ItemKey {
        ItemKey {
            menu: self.menu.key,
            item: self.id,
        }
    }

    /// The menu this item lives in.
    pub fn menu(self) -> &'a Menu {
        self.menu
    }

    /// The item's data, with the menu's lifetime.
    pub fn data(self) -> &'a Item {
        &self.node.item
    }

    /// The parent item, if any.
    pub fn parent(self) -> Option<Self> {
        self.menu.item(self.node.parent?)
    }

    /// True if the item has no parent.
    pub fn is_root(self) -> bool {
        self.node.parent.is_none()
    }

    /// Walk up to the top of the tree.
    pub fn root(self) -> Self {
        let mut item = self;
        while let Some(parent) = item.parent() {
            item = parent;
        }
        item
    }

    /// Depth in the tree; roots are level 0.
    pub fn level(self) -> usize {
        let mut level = 0;
        let mut item = self;
        while let Some(parent) = item.parent() {
            level += 1;
            item = parent;
        }
        level
    }

    /// Handles of all children, displayed or not.
    pub fn child_ids(self) -> &'a [ItemId] {
        &self.node.children
    }

    /// All children, displayed or not.
    pub fn children(self) -> impl DoubleEndedIterator<Item = ItemRef<'a>> + 'a {
        let menu = self.menu;
        self.node.children.iter().filter_map(move |&id| menu.item(id))
    }

    /// True if at least one child is displayed.
    pub fn has_children(self) -> bool {
        self.children().any(|child| child.display())
    }

    /// First child with the given name.
    pub fn child(self, name: &str) -> Option<Self> {
        self.children().find(|child| child.name == name)
    }

    /// First child, displayed or not. `None` when there are no children.
    pub fn first_child(self) -> Option<Self> {
        self.menu.item(*self.node.children.first()?)
    }

    /// Last child, displayed or not. `None` when there are no children.
    pub fn last_child(self) -> Option<Self> {
        self.menu.item(*self.node.children.last()?)
    }

    /// True if this is its parent's first child.
    pub fn is_first(self) -> bool {
        self.parent()
            .and_then(Self::first_child)
            .is_some_and(|first| first.id == self.id)
    }

    /// True if this is its parent's last child.
    pub fn is_last(self) -> bool {
        self.parent()
            .and_then(Self::last_child)
            .is_some_and(|last| last.id == self.id)
    }

    /// True if this is the first displayed sibling.
    ///
    /// Siblings are compared by name, so every displayed sibling sharing the
    /// first displayed sibling's name acts like first.
    pub fn acts_like_first(self) -> bool {
        // roots are never marked as first
        let Some(parent) = self.parent() else {
            return false;
        };
        if !self.display() {
            return false;
        }
        if self.is_first() {
            return true;
        }
        parent
            .children()
            .find(|sibling| sibling.display())
            .is_some_and(|sibling| sibling.name == self.name)
    }

    /// True if this is the last displayed sibling.
    ///
    /// Compares by name, like [`acts_like_first`](Self::acts_like_first).
    pub fn acts_like_last(self) -> bool {
        let Some(parent) = self.parent() else {
            return false;
        };
        if !self.display() {
            return false;
        }
        if self.is_last() {
            return true;
        }
        parent
            .children()
            .rev()
            .find(|sibling| sibling.display())
            .is_some_and(|sibling| sibling.name == self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf(menu: &mut Menu, parent: ItemId, name: &str) -> ItemId {
        menu.add_child(parent, name, []).unwrap()
    }

    #[test]
    fn reattaching_an_owned_item_fails() {
        let mut menu = Menu::new();
        let x = menu.create_item("x", []).unwrap();
        let y = menu.create_item("y", []).unwrap();
        let z = menu.create_item("z", []).unwrap();
        menu.add_child(x, y, []).unwrap();
        menu.add_child(y, z, []).unwrap();

        let again = menu.add_child(x, y, []);
        assert!(matches!(again, Err(MenuError::AlreadyOwned { item }) if item == y));

        let other = menu.create_item("other", []).unwrap();
        assert!(matches!(
            menu.add_child(other, y, []),
            Err(MenuError::AlreadyOwned { .. })
        ));
        assert_eq!(menu.item(x).unwrap().child_ids(), &[y], "tree left unmodified");
    }

    #[test]
    fn attaching_an_ancestor_is_rejected() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let a = leaf(&mut menu, root, "a");
        let err = menu.add_child(a, root, []).unwrap_err();
        assert!(matches!(err, MenuError::WouldCycle { item, parent } if item == root && parent == a));
        assert!(matches!(
            menu.add_child(root, root, []),
            Err(MenuError::WouldCycle { .. })
        ));
    }

    #[test]
    fn named_children_use_the_string_rendering() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let child = menu
            .add_child(root, Child::named(42), [ItemOption::uri("/42")])
            .unwrap();
        let child = menu.item(child).unwrap();
        assert_eq!(child.name, "42");
        assert_eq!(child.uri, "/42");
        assert_eq!(child.parent().map(ItemRef::id), Some(root));
    }

    #[test]
    fn failed_construction_inserts_nothing() {
        let mut menu = Menu::new();
        let orphan = menu.create_item("orphan", []).unwrap();
        let owner = menu.create_item("owner", []).unwrap();
        let taken = leaf(&mut menu, owner, "taken");
        let before = menu.len();

        let err = menu
            .create_item(
                "broken",
                [
                    ItemOption::child(orphan),
                    ItemOption::label("Broken"),
                    ItemOption::child(taken),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, MenuError::AlreadyOwned { item } if item == taken));
        assert_eq!(menu.len(), before);
        assert!(menu.item(orphan).unwrap().is_root(), "staged child stays a root");

        let err = menu
            .create_item("twice", [ItemOption::children([orphan, orphan])])
            .unwrap_err();
        assert!(matches!(err, MenuError::AlreadyOwned { .. }));
    }

    #[test]
    fn child_options_attach_in_order() {
        let mut menu = Menu::new();
        let a = menu.create_item("a", []).unwrap();
        let b = menu.create_item("b", []).unwrap();
        let c = menu.create_item("c", []).unwrap();
        let root = menu
            .create_item("root", [ItemOption::child(a), ItemOption::children([b, c])])
            .unwrap();
        assert_eq!(menu.item(root).unwrap().child_ids(), &[a, b, c]);
        assert_eq!(menu.roots().count(), 1);
    }

    #[test]
    fn levels_and_roots() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let a = leaf(&mut menu, root, "a");
        let b = leaf(&mut menu, a, "b");
        let b = menu.item(b).unwrap();
        assert_eq!(menu.item(root).unwrap().level(), 0);
        assert_eq!(b.level(), 2);
        assert_eq!(b.root().id(), root);
        assert!(!b.is_root());
        assert!(menu.item(root).unwrap().is_root());
    }

    #[test]
    fn first_and_last_child_on_empty_list() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let root = menu.item(root).unwrap();
        assert!(root.first_child().is_none());
        assert!(root.last_child().is_none());
        assert!(!root.is_first() && !root.is_last());
    }

    #[test]
    fn acts_like_first_and_last_skip_hidden_siblings() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let a = menu
            .add_child(root, "A", [ItemOption::display(false)])
            .unwrap();
        let b = leaf(&mut menu, root, "B");
        let c = leaf(&mut menu, root, "C");
        let d = menu
            .add_child(root, "D", [ItemOption::display(false)])
            .unwrap();

        let menu = &menu;
        let item = move |id| menu.item(id).unwrap();
        assert!(!item(a).acts_like_first());
        assert!(item(b).acts_like_first());
        assert!(!item(c).acts_like_first());
        assert!(item(c).acts_like_last());
        assert!(!item(d).acts_like_last());
        assert!(item(d).is_last(), "raw position ignores display");
        assert!(!item(root).acts_like_first(), "roots are never first");
    }

    #[test]
    fn siblings_sharing_a_name_are_indistinguishable() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let _first = leaf(&mut menu, root, "dup");
        let second = leaf(&mut menu, root, "dup");
        let _tail = leaf(&mut menu, root, "tail");
        assert!(menu.item(second).unwrap().acts_like_first());
    }

    #[test]
    fn has_children_ignores_hidden() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let hidden = menu
            .add_child(root, "hidden", [ItemOption::display(false)])
            .unwrap();
        assert!(!menu.item(root).unwrap().has_children());
        menu.item_mut(hidden).unwrap().set_display(true);
        assert!(menu.item(root).unwrap().has_children());
        assert_eq!(menu.item(root).unwrap().child("hidden").map(ItemRef::id), Some(hidden));
        assert!(menu.item(root).unwrap().child("missing").is_none());
    }

    #[test]
    fn reorder_is_stable_and_idempotent() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let home = leaf(&mut menu, root, "home");
        let about = menu
            .add_child(root, "about", [ItemOption::position(2)])
            .unwrap();
        let blog = menu
            .add_child(root, "blog", [ItemOption::position(1)])
            .unwrap();
        let contact = leaf(&mut menu, root, "contact");

        menu.reorder_children(root);
        let expected = [home, contact, blog, about];
        assert_eq!(menu.item(root).unwrap().child_ids(), &expected);
        menu.reorder_children(root);
        assert_eq!(menu.item(root).unwrap().child_ids(), &expected);
    }

    #[test]
    fn copy_is_deep_and_detached() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let blog = menu
            .add_child(root, "blog", [ItemOption::attribute("class", "nav")])
            .unwrap();
        let article = leaf(&mut menu, blog, "article");

        let copy = menu.copy_subtree(blog).unwrap();
        let copied = menu.item(copy).unwrap();
        assert!(copied.is_root());
        assert_eq!(copied.name, "blog");
        let copied_article = copied.child("article").unwrap().id();
        assert_ne!(copied_article, article);

        menu.item_mut(copy)
            .unwrap()
            .attributes
            .insert("class".into(), "changed".into());
        assert_eq!(
            menu.item(blog).unwrap().attribute("class"),
            Some(&serde_json::json!("nav")),
            "attribute bags are not shared"
        );

        menu.remove(copy);
        assert!(matches!(
            menu.copy_subtree(copy),
            Err(MenuError::StaleItem(id)) if id == copy
        ));
    }

    #[test]
    fn liveness_create_remove_reuse() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let a = leaf(&mut menu, root, "a");
        let _a_child = leaf(&mut menu, a, "a1");

        menu.remove(a);
        assert!(!menu.is_alive(a));
        assert_eq!(menu.len(), 1, "subtree removed with its root");
        assert!(menu.item(root).unwrap().child_ids().is_empty());

        let b = leaf(&mut menu, root, "b");
        assert!(menu.is_alive(b));
        assert!(!menu.is_alive(a));
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
        assert!(matches!(
            menu.add_child(a, "late", []),
            Err(MenuError::StaleItem(_))
        ));
    }

    #[test]
    fn clones_get_their_own_key() {
        let mut menu = Menu::new();
        let root = menu.create_item("root", []).unwrap();
        let clone = menu.clone();
        assert_ne!(menu.key(), clone.key());
        assert_ne!(menu.item(root).unwrap().key(), clone.item(root).unwrap().key());
        assert_eq!(clone.item(root).unwrap().name, "root");
    }

    proptest! {
        #[test]
        fn level_is_parent_level_plus_one(parents in proptest::collection::vec(any::<prop::sample::Index>(), 1..40)) {
            let mut menu = Menu::new();
            let mut ids = vec![menu.create_item("root", []).unwrap()];
            for (n, pick) in parents.iter().enumerate() {
                let parent = ids[pick.index(ids.len())];
                ids.push(menu.add_child(parent, Child::named(n), []).unwrap());
            }
            for &id in &ids {
                let item = menu.item(id).unwrap();
                match item.parent() {
                    None => prop_assert_eq!(item.level(), 0),
                    Some(parent) => prop_assert_eq!(item.level(), parent.level() + 1),
                }
            }
        }
    }
}
