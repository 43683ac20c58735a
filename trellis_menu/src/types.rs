// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the menu tree: item identifiers, flags, and per-item data.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// String-keyed attribute bag.
///
/// Sorted so that rendered attribute order is deterministic.
pub type Attributes = BTreeMap<String, Value>;

/// Extra key used to mark an item's label as pre-sanitized markup.
pub const SAFE_LABEL_EXTRA: &str = "safe_label";

/// Identifier for an item in a [`Menu`](crate::Menu).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On create, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ItemId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ItemId`.
///
/// Use [`Menu::is_alive`](crate::Menu::is_alive) to check whether an `ItemId` still refers to a live item.
/// Stale `ItemId`s never alias a different live item because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u32, pub(crate) u32);

impl ItemId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0, self.1)
    }
}

/// Process-wide identity of an item: the owning menu plus the item handle.
///
/// Two menus never share a key, so caches keyed by `ItemKey` can be shared
/// between trees without collisions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemKey {
    /// Unique key of the owning [`Menu`](crate::Menu).
    pub menu: u64,
    /// Handle of the item inside that menu.
    pub item: ItemId,
}

bitflags::bitflags! {
    /// Item flags controlling visibility.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is displayed (participates in rendering and first/last resolution).
        const DISPLAY          = 0b0000_0001;
        /// Item's children are displayed.
        const DISPLAY_CHILDREN = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::DISPLAY | Self::DISPLAY_CHILDREN
    }
}

/// Per-item data.
///
/// Structure (parent and children) lives in the owning [`Menu`](crate::Menu);
/// this struct only carries what an item says about itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    /// Human label used for lookups and first/last comparisons. Not unique.
    pub name: String,
    /// Link target; empty means the item renders as a plain label.
    pub uri: String,
    /// Display label.
    pub label: String,
    /// Sort key used by [`Menu::reorder_children`](crate::Menu::reorder_children).
    pub position: i32,
    /// Visibility flags.
    pub flags: ItemFlags,
    /// Forced current state; `None` lets the matcher decide.
    pub current: Option<bool>,
    /// Attributes of the list element.
    pub attributes: Attributes,
    /// Attributes of the link element.
    pub link_attributes: Attributes,
    /// Attributes of the nested children list.
    pub children_attributes: Attributes,
    /// Attributes of the label element.
    pub label_attributes: Attributes,
    /// Out-of-band values, for example [`SAFE_LABEL_EXTRA`].
    pub extras: Attributes,
}

impl Item {
    /// Create item data with the given name and default state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the item is displayed.
    pub fn display(&self) -> bool {
        self.flags.contains(ItemFlags::DISPLAY)
    }

    /// Show or hide the item.
    pub fn set_display(&mut self, display: bool) {
        self.flags.set(ItemFlags::DISPLAY, display);
    }

    /// Whether the item's children are displayed.
    pub fn display_children(&self) -> bool {
        self.flags.contains(ItemFlags::DISPLAY_CHILDREN)
    }

    /// Show or hide the item's children.
    pub fn set_display_children(&mut self, display_children: bool) {
        self.flags.set(ItemFlags::DISPLAY_CHILDREN, display_children);
    }

    /// Force the item to be current.
    pub fn set_current(&mut self) {
        self.current = Some(true);
    }

    /// Force the item to not be current.
    pub fn set_not_current(&mut self) {
        self.current = Some(false);
    }

    /// True only when the item is forced current.
    pub fn is_current(&self) -> bool {
        self.current == Some(true)
    }

    /// Look up a generic attribute.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Look up a link attribute.
    pub fn link_attribute(&self, name: &str) -> Option<&Value> {
        self.link_attributes.get(name)
    }

    /// Look up a children-list attribute.
    pub fn children_attribute(&self, name: &str) -> Option<&Value> {
        self.children_attributes.get(name)
    }

    /// Look up a label attribute.
    pub fn label_attribute(&self, name: &str) -> Option<&Value> {
        self.label_attributes.get(name)
    }

    /// Look up an extra value.
    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extras.get(name)
    }

    /// Whether the label is marked as pre-sanitized markup.
    pub fn safe_label(&self) -> bool {
        self.extra(SAFE_LABEL_EXTRA)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("n/a")
        } else {
            f.write_str(&self.name)
        }
    }
}
