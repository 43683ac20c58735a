// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Menu: an arena-backed navigation menu tree.
//!
//! Trellis Menu is the data model underneath the Trellis matcher and renderers.
//!
//! - Represents a hierarchy of menu items with labels, links, positions, display flags, and attribute bags.
//! - Enforces single ownership: an item has at most one parent, and attaching an owned item fails.
//! - Answers the structural questions renderers ask (level, root, first/last displayed sibling).
//!
//! ## Where this fits
//!
//! - Menu tree: items and structure (this crate).
//! - Matcher: which items are current for a request (`trellis_matcher`).
//! - Renderers: nested list markup or theme templates (`trellis_render`).
//!
//! ## Ownership model
//!
//! Items live in a [`Menu`] arena and are addressed by generational [`ItemId`] handles.
//! Parents own their children; the parent link is a plain handle used for upward traversal.
//! Removing an item frees its whole subtree and makes the old handles stale.
//!
//! ## API overview
//!
//! - [`Menu`]: container managing items and structure.
//! - [`Item`]: per-item data (name, URI, label, position, flags, attribute bags).
//! - [`ItemRef`]: a borrowed live item with structural queries; dereferences to [`Item`].
//! - [`ItemOption`]: construction steps applied in order by [`Menu::create_item`] and [`Menu::add_child`].
//! - [`Node`], [`SimpleNode`], [`Loader`], [`NodeLoader`]: build menus from external node graphs.
//!
//! Key operations:
//! - [`Menu::create_item`] → [`ItemId`]
//! - [`Menu::add_child`] / [`Menu::copy_subtree`] / [`Menu::remove`]
//! - [`Menu::reorder_children`]
//! - [`ItemRef::acts_like_first`] and [`ItemRef::acts_like_last`] skip hidden siblings.
//!
//! ## Example
//!
//! ```
//! use trellis_menu::{ItemOption, Menu, MenuError};
//!
//! let mut menu = Menu::new();
//! let root = menu.create_item("root", []).unwrap();
//! let home = menu
//!     .add_child(root, "home", [ItemOption::uri("/"), ItemOption::label("Home")])
//!     .unwrap();
//! let blog = menu
//!     .add_child(root, "blog", [ItemOption::uri("/blog"), ItemOption::position(-1)])
//!     .unwrap();
//!
//! menu.reorder_children(root);
//! assert_eq!(menu.item(root).unwrap().child_ids(), &[blog, home]);
//!
//! // An item belongs to one parent only.
//! let other = menu.create_item("other", []).unwrap();
//! assert!(matches!(
//!     menu.add_child(other, home, []),
//!     Err(MenuError::AlreadyOwned { .. })
//! ));
//!
//! let home = menu.item(home).unwrap();
//! assert_eq!(home.level(), 1);
//! assert!(home.acts_like_last());
//! ```

mod error;
mod loader;
mod option;
mod tree;
mod types;

pub use error::{MenuError, MenuResult};
pub use loader::{Loader, Node, NodeLoader, SimpleNode};
pub use option::{CustomOption, ItemOption};
pub use tree::{Child, ItemRef, Menu};
pub use types::{Attributes, Item, ItemFlags, ItemId, ItemKey, SAFE_LABEL_EXTRA};
