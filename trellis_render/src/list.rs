// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested `<ul>`/`<li>` list renderer.
//!
//! ## Output shape
//!
//! - The rendered item's children form the top-level list, which carries the
//!   item's children attributes.
//! - Each displayed child becomes an `<li>` holding a link (or a `<span>` label)
//!   and, when it has displayed children and depth remains, a nested `<ul>`
//!   classed `menu-level-{level}`.
//! - Lists and links are indented `4 × level` spaces and items `4 × level − 2`,
//!   one tag per line. The `compressed` extra drops indentation and newlines.
//!
//! ## Classes
//!
//! An `<li>` carries, in order: its own `class` attribute, the current class or
//! else the ancestor class, the first and last classes for the first and last
//! displayed siblings, and the branch class or else the leaf class.

use std::borrow::Cow;

use serde_json::Value;
use tracing::debug;
use trellis_matcher::{Context, Matcher};
use trellis_menu::{Attributes, ItemRef};

use crate::error::RenderResult;
use crate::html;
use crate::options::{Options, RenderOption};
use crate::renderer::Renderer;

/// Renders menus as nested HTML lists.
#[derive(Debug)]
pub struct ListRenderer<M> {
    matcher: M,
    options: Options,
}

impl<M: Matcher> ListRenderer<M> {
    /// Create a renderer with default options.
    pub fn new(matcher: M) -> Self {
        Self::with_options(matcher, Options::default())
    }

    /// Create a renderer with the given default options.
    pub fn with_options(matcher: M, options: Options) -> Self {
        Self { matcher, options }
    }

    /// Default options for every pass.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The matcher deciding current and ancestor items.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    fn render_list(
        &self,
        ctx: &Context,
        item: ItemRef<'_>,
        attributes: &Attributes,
        options: &Options,
        out: &mut String,
    ) {
        if options.is_stop() || !item.has_children() || !item.display_children() {
            return;
        }

        let indent = item.level() * 4;
        let compressed = options.is_compressed();
        emit(out, indent, &format!("<ul{}>", html::attributes(attributes)), compressed);
        self.render_children(ctx, item, options, out);
        emit(out, indent, "</ul>", compressed);
    }

    fn render_children(&self, ctx: &Context, item: ItemRef<'_>, options: &Options, out: &mut String) {
        let options = options.descend();
        for child in item.children() {
            self.render_item(ctx, child, &options, out);
        }
    }

    fn render_item(&self, ctx: &Context, item: ItemRef<'_>, options: &Options, out: &mut String) {
        if !item.display() {
            return;
        }

        let own_class = class_of(item.attribute("class"));
        let mut classes = Vec::with_capacity(5);
        classes.push(own_class.as_str());

        let current = self.matcher.is_current(ctx, item);
        if current {
            classes.push(&options.current_class);
        } else {
            let mut budget = options.matching_depth;
            if self.matcher.is_ancestor(ctx, item, budget.as_mut()) {
                classes.push(&options.ancestor_class);
            }
        }
        if item.acts_like_first() {
            classes.push(&options.first_class);
        }
        if item.acts_like_last() {
            classes.push(&options.last_class);
        }
        if !options.is_stop() && item.has_children() && item.display_children() {
            classes.push(&options.branch_class);
        } else {
            classes.push(&options.leaf_class);
        }

        let mut attributes = item.attributes.clone();
        attributes.insert("class".into(), Value::String(html::classes(classes)));

        let level = item.level();
        let compressed = options.is_compressed();
        emit(
            out,
            (level * 4).saturating_sub(2),
            &format!("<li{}>", html::attributes(&attributes)),
            compressed,
        );
        emit(out, level * 4, &self.render_link(item, current, options), compressed);

        let children_class = class_of(item.children_attribute("class"));
        let mut children_attributes = item.children_attributes.clone();
        children_attributes.insert(
            "class".into(),
            Value::String(html::classes([
                children_class,
                format!("menu-level-{level}"),
            ])),
        );
        self.render_list(ctx, item, &children_attributes, options, out);

        emit(out, (level * 4).saturating_sub(2), "</li>", compressed);
    }

    fn render_link(&self, item: ItemRef<'_>, current: bool, options: &Options) -> String {
        let label = render_label(item, options);
        if !item.uri.is_empty() && (!current || options.current_as_link) {
            format!(
                r#"<a href="{}"{}>{label}</a>"#,
                html::escape(&item.uri),
                html::attributes(&item.link_attributes),
            )
        } else {
            format!("<span{}>{label}</span>", html::attributes(&item.label_attributes))
        }
    }
}

impl<M: Matcher> Renderer for ListRenderer<M> {
    fn render(
        &self,
        ctx: &Context,
        item: ItemRef<'_>,
        overrides: &[RenderOption],
    ) -> RenderResult<String> {
        let mut options = self.options.clone();
        options.apply(overrides.iter().cloned());
        debug!(item = %item, depth = ?options.depth, "rendering menu list");

        let mut out = String::new();
        self.render_list(ctx, item, &item.children_attributes, &options, &mut out);

        if options.clear_matcher {
            self.matcher.clear();
        }
        Ok(out)
    }
}

fn render_label<'a>(item: ItemRef<'a>, options: &Options) -> Cow<'a, str> {
    let label = &item.data().label;
    if options.allow_safe_labels && item.safe_label() {
        Cow::Borrowed(label)
    } else {
        html::escape(label)
    }
}

fn class_of(value: Option<&Value>) -> String {
    value.and_then(html::value_text).unwrap_or_default()
}

fn emit(out: &mut String, indent: usize, content: &str, compressed: bool) {
    if compressed {
        out.push_str(content);
        return;
    }
    out.extend(std::iter::repeat_n(' ', indent));
    out.push_str(content);
    out.push('\n');
}
