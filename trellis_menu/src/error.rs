// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for menu construction and loading.

use thiserror::Error;

use crate::types::ItemId;

/// Result type alias for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors raised while building or loading a menu tree.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The item already has a parent and cannot be attached again.
    #[error("cannot add menu item {item} as child, it already belongs to another menu (e.g. has a parent)")]
    AlreadyOwned {
        /// The item that was being attached.
        item: ItemId,
    },

    /// Attaching the item would make it its own ancestor.
    #[error("cannot add menu item {item} under {parent}, it is an ancestor of that item")]
    WouldCycle {
        /// The item that was being attached.
        item: ItemId,
        /// The requested parent.
        parent: ItemId,
    },

    /// The handle does not refer to a live item.
    #[error("menu item {0} does not exist")]
    StaleItem(ItemId),

    /// A loader was handed a value it cannot read.
    #[error("unsupported data: expected {expected}, got {found}")]
    Unsupported {
        /// What the loader accepts.
        expected: &'static str,
        /// Type name of the rejected value.
        found: &'static str,
    },

    /// A JSON document did not describe a menu node.
    #[error("invalid menu node: {0}")]
    InvalidNode(#[from] serde_json::Error),

    /// A custom item option failed.
    #[error("invalid item option: {0}")]
    InvalidOption(String),
}
