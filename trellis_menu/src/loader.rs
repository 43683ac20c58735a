// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build menus from external node graphs.
//!
//! ## Overview
//!
//! A [`Node`] exposes a name, construction options, and child nodes.
//! [`NodeLoader`] walks such a graph depth-first and creates one item per node.
//! [`SimpleNode`] is an owned node that can be written by hand or read from JSON:
//!
//! ```
//! use trellis_menu::{Loader, Menu, NodeLoader};
//!
//! let doc = serde_json::json!({
//!     "name": "root",
//!     "children": [
//!         {"name": "home", "options": [{"uri": "/"}, {"label": "Home"}]},
//!         {"name": "blog", "options": [{"uri": "/blog"}]}
//!     ]
//! });
//!
//! let mut menu = Menu::new();
//! let root = NodeLoader::new().load(&mut menu, &doc).unwrap();
//! let root = menu.item(root).unwrap();
//! assert_eq!(root.child("home").unwrap().label, "Home");
//! ```

use std::any::{Any, type_name};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuError, MenuResult};
use crate::option::ItemOption;
use crate::tree::Menu;
use crate::types::ItemId;

/// A source node describing one menu item and its children.
pub trait Node {
    /// Name of the item.
    fn name(&self) -> &str;

    /// Construction options, applied in order.
    fn options(&self) -> Vec<ItemOption>;

    /// Child nodes, in order.
    fn children(&self) -> Vec<&dyn Node>;
}

/// An owned [`Node`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimpleNode {
    /// Name of the item.
    pub name: String,
    /// Construction options.
    #[serde(default)]
    pub options: Vec<ItemOption>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<SimpleNode>,
}

impl SimpleNode {
    /// Create a node.
    pub fn new(name: impl Into<String>, options: Vec<ItemOption>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            options,
            children,
        }
    }
}

impl Node for SimpleNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> Vec<ItemOption> {
        self.options.clone()
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.children.iter().map(|c| c as &dyn Node).collect()
    }
}

/// Turns arbitrary input into a menu tree.
pub trait Loader {
    /// Load `data` into `menu` and return the new root item.
    fn load<T: Any>(&self, menu: &mut Menu, data: &T) -> MenuResult<ItemId>;

    /// Whether `data` is something this loader can read.
    fn supports<T: Any>(&self, data: &T) -> bool;
}

/// Loads [`SimpleNode`]s, boxed [`Node`] trait objects, and JSON documents
/// describing a [`SimpleNode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeLoader;

impl NodeLoader {
    /// Create a loader.
    pub fn new() -> Self {
        Self
    }

    /// Load a typed node graph.
    ///
    /// On failure the partially built subtree is removed from `menu`.
    pub fn load_node(&self, menu: &mut Menu, node: &dyn Node) -> MenuResult<ItemId> {
        let item = menu.create_item(node.name(), node.options())?;
        for child_node in node.children() {
            let attached = self
                .load_node(menu, child_node)
                .and_then(|child| menu.add_child(item, child, []));
            if let Err(err) = attached {
                debug!(node = node.name(), error = %err, "discarding partially loaded menu");
                menu.remove(item);
                return Err(err);
            }
        }
        Ok(item)
    }
}

impl Loader for NodeLoader {
    fn load<T: Any>(&self, menu: &mut Menu, data: &T) -> MenuResult<ItemId> {
        let data = data as &dyn Any;
        if let Some(node) = data.downcast_ref::<SimpleNode>() {
            return self.load_node(menu, node);
        }
        if let Some(node) = data.downcast_ref::<Box<dyn Node>>() {
            return self.load_node(menu, node.as_ref());
        }
        if let Some(value) = data.downcast_ref::<serde_json::Value>() {
            let node = SimpleNode::deserialize(value)?;
            return self.load_node(menu, &node);
        }
        Err(MenuError::Unsupported {
            expected: "menu node",
            found: type_name::<T>(),
        })
    }

    fn supports<T: Any>(&self, data: &T) -> bool {
        let data = data as &dyn Any;
        data.is::<SimpleNode>() || data.is::<Box<dyn Node>>() || data.is::<serde_json::Value>()
    }
}
