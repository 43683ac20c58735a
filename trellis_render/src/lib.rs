// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Render: turns Trellis menus into markup.
//!
//! ## Overview
//!
//! Two [`Renderer`]s share one configuration model:
//!
//! - [`ListRenderer`] writes nested `<ul>`/`<li>` lists directly.
//! - [`TemplateRenderer`] delegates markup to a [`Theme`] and only prepares the data.
//!
//! Both consult a [`Matcher`](trellis_matcher::Matcher) to mark current items and
//! their ancestors, and both clear it after each pass unless
//! [`Options::clear_matcher`] is off.
//!
//! ## Options
//!
//! A renderer holds default [`Options`]. Each call may pass [`RenderOption`]
//! overrides, which apply to a private copy for that call only. While walking
//! down the tree every level gets its own derived copy, spending one unit of the
//! `depth` and `matching_depth` budgets.
//!
//! ## Example
//!
//! ```
//! use trellis_matcher::{Context, CoreMatcher, UrlVoter};
//! use trellis_menu::{ItemOption, Menu};
//! use trellis_render::{ListRenderer, RenderOption, Renderer};
//!
//! let mut menu = Menu::new();
//! let root = menu.create_item("root", []).unwrap();
//! menu.add_child(root, "home", [ItemOption::label("Home"), ItemOption::uri("/")]).unwrap();
//! menu.add_child(root, "blog", [ItemOption::label("Blog"), ItemOption::uri("/blog")]).unwrap();
//!
//! let renderer = ListRenderer::new(CoreMatcher::new().with_voter(UrlVoter));
//! let ctx = Context::new().with_url("http://localhost/blog");
//! let html = renderer
//!     .render(&ctx, menu.item(root).unwrap(), &[RenderOption::compressed(true)])
//!     .unwrap();
//!
//! assert_eq!(
//!     html,
//!     r#"<ul><li class="first"><a href="/">Home</a></li><li class="current last"><a href="/blog">Blog</a></li></ul>"#
//! );
//! ```

mod error;
pub mod html;
mod list;
mod options;
mod renderer;
mod template;

#[cfg(test)]
mod fixtures;

pub use error::{RenderError, RenderResult, ThemeError};
pub use list::ListRenderer;
pub use options::{COMPRESSED_EXTRA, Extras, MENU_TEMPLATE, Options, RenderOption, TEMPLATE_EXTRA};
pub use renderer::Renderer;
pub use template::{TemplateData, TemplateRenderer, Theme};
