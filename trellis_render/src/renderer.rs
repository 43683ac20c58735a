// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer interface.

use trellis_matcher::Context;
use trellis_menu::{ItemId, ItemRef, Menu, MenuError};

use crate::error::RenderResult;
use crate::options::RenderOption;

/// Turns a menu subtree into markup.
pub trait Renderer {
    /// Render `item` and its descendants for the request in `ctx`.
    ///
    /// `overrides` apply on top of the renderer's configured options for this
    /// call only.
    fn render(
        &self,
        ctx: &Context,
        item: ItemRef<'_>,
        overrides: &[RenderOption],
    ) -> RenderResult<String>;

    /// Render the item behind `id` in `menu`.
    ///
    /// Fails with [`MenuError::StaleItem`] when `id` is not live.
    fn render_id(
        &self,
        ctx: &Context,
        menu: &Menu,
        id: ItemId,
        overrides: &[RenderOption],
    ) -> RenderResult<String> {
        let item = menu.item(id).ok_or(MenuError::StaleItem(id))?;
        self.render(ctx, item, overrides)
    }
}
