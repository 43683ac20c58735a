// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Matcher: decides which menu items are current for a request.
//!
//! ## Overview
//!
//! A [`Matcher`] answers two questions about an item: is it current, and does it
//! have a current descendant. [`CoreMatcher`] answers the first by consulting an
//! ordered list of [`Voter`]s and caching the outcome per item, and the second by
//! searching the item's subtree.
//!
//! ## Inputs
//!
//! Voters see a [`Context`]: an opaque bag of per-request values. The stock
//! [`UrlVoter`] reads the request URL stored with [`Context::with_url`] and
//! compares its path to the item's URI. Any `Fn(&Context, ItemRef<'_>) -> Vote`
//! closure is a voter too.
//!
//! ## Caching
//!
//! Outcomes are keyed by menu and item, so one matcher can serve several menus.
//! The cache is never invalidated implicitly: call [`Matcher::clear`] between
//! requests. Renderers do this after each pass by default.
//!
//! ## Example
//!
//! ```
//! use trellis_matcher::{Context, CoreMatcher, Matcher, UrlVoter};
//! use trellis_menu::{ItemOption, Menu};
//!
//! let mut menu = Menu::new();
//! let root = menu.create_item("root", []).unwrap();
//! let blog = menu.add_child(root, "blog", [ItemOption::uri("/blog")]).unwrap();
//! let post = menu.add_child(blog, "post", [ItemOption::uri("/blog/post")]).unwrap();
//!
//! let matcher = CoreMatcher::new().with_voter(UrlVoter);
//! let ctx = Context::new().with_url("https://example.com/blog/post?ref=feed");
//!
//! assert!(matcher.is_current(&ctx, menu.item(post).unwrap()));
//! assert!(matcher.is_ancestor(&ctx, menu.item(root).unwrap(), None));
//! assert!(!matcher.is_current(&ctx, menu.item(blog).unwrap()));
//! ```

mod context;
mod matcher;
mod voter;

pub use context::{Context, URL_KEY, path_of};
pub use matcher::{CoreMatcher, Matcher};
pub use voter::{UrlVoter, Vote, Voter};
