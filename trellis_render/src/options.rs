// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render configuration.
//!
//! [`Options`] is a plain value. Renderers start from their configured defaults,
//! apply per-call [`RenderOption`] overrides to a private copy, and derive a
//! fresh copy for every level they descend into, so budgets consumed in one
//! branch never leak into a sibling or back to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extras key: when `true`, list output has no indentation or newlines.
pub const COMPRESSED_EXTRA: &str = "compressed";

/// Extras key: template name handed to a [`Theme`](crate::Theme).
pub const TEMPLATE_EXTRA: &str = "template";

/// Template used when [`TEMPLATE_EXTRA`] is not set.
pub const MENU_TEMPLATE: &str = "@menu/menu.html";

/// Open-ended render settings.
pub type Extras = BTreeMap<String, Value>;

/// Settings for one render pass.
///
/// Deserialization layers a partial document over [`Options::default`]:
///
/// ```
/// use trellis_render::Options;
///
/// let options: Options = serde_json::from_str(r#"{"depth": 2, "current_class": "active"}"#).unwrap();
/// assert_eq!(options.depth, Some(2));
/// assert_eq!(options.current_class, "active");
/// assert_eq!(options.ancestor_class, "current-ancestor");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Remaining levels to render; `None` renders the whole tree.
    pub depth: Option<usize>,
    /// Remaining ancestor-search budget; `None` searches without limit.
    pub matching_depth: Option<usize>,
    /// Class for the current item.
    pub current_class: String,
    /// Class for ancestors of the current item.
    pub ancestor_class: String,
    /// Class for the first displayed sibling.
    pub first_class: String,
    /// Class for the last displayed sibling.
    pub last_class: String,
    /// Class for items rendered without a nested list.
    pub leaf_class: String,
    /// Class for items rendered with a nested list.
    pub branch_class: String,
    /// Whether the current item still renders as a link.
    pub current_as_link: bool,
    /// Whether labels marked safe bypass escaping.
    pub allow_safe_labels: bool,
    /// Whether the matcher cache is cleared after each pass.
    pub clear_matcher: bool,
    /// Renderer-specific settings.
    pub extras: Extras,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            depth: None,
            matching_depth: None,
            current_class: "current".into(),
            ancestor_class: "current-ancestor".into(),
            first_class: "first".into(),
            last_class: "last".into(),
            leaf_class: String::new(),
            branch_class: String::new(),
            current_as_link: true,
            allow_safe_labels: false,
            clear_matcher: true,
            extras: Extras::new(),
        }
    }
}

impl Options {
    /// Apply overrides in order.
    pub fn apply(&mut self, overrides: impl IntoIterator<Item = RenderOption>) -> &mut Self {
        for option in overrides {
            option.apply(self);
        }
        self
    }

    /// Builder form of [`Options::apply`] for a single override.
    #[must_use]
    pub fn with(mut self, option: RenderOption) -> Self {
        option.apply(&mut self);
        self
    }

    /// Whether the depth budget is exhausted.
    pub fn is_stop(&self) -> bool {
        self.depth == Some(0)
    }

    /// Spend one level of the depth budget.
    pub fn sub_depth(&mut self) -> &mut Self {
        if let Some(depth) = &mut self.depth {
            *depth = depth.saturating_sub(1);
        }
        self
    }

    /// Spend one level of the ancestor-search budget; it never drops below zero.
    pub fn sub_matching_depth(&mut self) -> &mut Self {
        if let Some(depth) = &mut self.matching_depth {
            *depth = depth.saturating_sub(1);
        }
        self
    }

    /// Copy for the next level down, with both budgets spent once.
    #[must_use]
    pub fn descend(&self) -> Self {
        let mut next = self.clone();
        next.sub_depth().sub_matching_depth();
        next
    }

    /// Extras value under `name`.
    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extras.get(name)
    }

    /// Whether compact output was requested.
    pub fn is_compressed(&self) -> bool {
        self.extra(COMPRESSED_EXTRA).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Template selected for theme rendering.
    pub fn template(&self) -> &str {
        self.extra(TEMPLATE_EXTRA)
            .and_then(Value::as_str)
            .unwrap_or(MENU_TEMPLATE)
    }

    /// Overrides that turn any options value into a copy of this one.
    pub fn to_overrides(&self) -> Vec<RenderOption> {
        vec![
            RenderOption::Depth(self.depth),
            RenderOption::MatchingDepth(self.matching_depth),
            RenderOption::CurrentClass(self.current_class.clone()),
            RenderOption::AncestorClass(self.ancestor_class.clone()),
            RenderOption::FirstClass(self.first_class.clone()),
            RenderOption::LastClass(self.last_class.clone()),
            RenderOption::LeafClass(self.leaf_class.clone()),
            RenderOption::BranchClass(self.branch_class.clone()),
            RenderOption::CurrentAsLink(self.current_as_link),
            RenderOption::AllowSafeLabels(self.allow_safe_labels),
            RenderOption::ClearMatcher(self.clear_matcher),
            RenderOption::Extras(self.extras.clone()),
        ]
    }
}

/// A single override of an [`Options`] field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderOption {
    /// Set [`Options::depth`].
    Depth(Option<usize>),
    /// Set [`Options::matching_depth`].
    MatchingDepth(Option<usize>),
    /// Set [`Options::current_class`].
    CurrentClass(String),
    /// Set [`Options::ancestor_class`].
    AncestorClass(String),
    /// Set [`Options::first_class`].
    FirstClass(String),
    /// Set [`Options::last_class`].
    LastClass(String),
    /// Set [`Options::leaf_class`].
    LeafClass(String),
    /// Set [`Options::branch_class`].
    BranchClass(String),
    /// Set [`Options::current_as_link`].
    CurrentAsLink(bool),
    /// Set [`Options::allow_safe_labels`].
    AllowSafeLabels(bool),
    /// Set [`Options::clear_matcher`].
    ClearMatcher(bool),
    /// Replace [`Options::extras`].
    Extras(Extras),
    /// Set one extras entry.
    Extra(String, Value),
}

impl RenderOption {
    /// Request compact list output.
    pub fn compressed(compressed: bool) -> Self {
        Self::Extra(COMPRESSED_EXTRA.into(), Value::Bool(compressed))
    }

    /// Select the theme template.
    pub fn template(name: impl Into<String>) -> Self {
        Self::Extra(TEMPLATE_EXTRA.into(), Value::String(name.into()))
    }

    fn apply(self, options: &mut Options) {
        match self {
            Self::Depth(v) => options.depth = v,
            Self::MatchingDepth(v) => options.matching_depth = v,
            Self::CurrentClass(v) => options.current_class = v,
            Self::AncestorClass(v) => options.ancestor_class = v,
            Self::FirstClass(v) => options.first_class = v,
            Self::LastClass(v) => options.last_class = v,
            Self::LeafClass(v) => options.leaf_class = v,
            Self::BranchClass(v) => options.branch_class = v,
            Self::CurrentAsLink(v) => options.current_as_link = v,
            Self::AllowSafeLabels(v) => options.allow_safe_labels = v,
            Self::ClearMatcher(v) => options.clear_matcher = v,
            Self::Extras(v) => options.extras = v,
            Self::Extra(name, value) => {
                options.extras.insert(name, value);
            }
        }
    }
}
