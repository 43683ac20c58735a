// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item construction options.
//!
//! Options are plain data so node sources can hand out the same list more than
//! once and menus can be described in configuration files:
//!
//! ```
//! use trellis_menu::ItemOption;
//!
//! let options: Vec<ItemOption> =
//!     serde_json::from_str(r#"[{"uri": "/blog"}, {"label": "Blog"}, {"position": 1}]"#).unwrap();
//! assert_eq!(options.len(), 3);
//! ```
//!
//! Structural options ([`ItemOption::Child`], [`ItemOption::Children`]) and
//! [`ItemOption::Custom`] closures are not serializable.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MenuResult;
use crate::types::{Attributes, Item, ItemId, SAFE_LABEL_EXTRA};

/// A fallible, user-supplied item mutation.
#[derive(Clone)]
pub struct CustomOption(Arc<dyn Fn(&mut Item) -> MenuResult<()> + Send + Sync>);

impl fmt::Debug for CustomOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomOption(..)")
    }
}

/// One configuration step applied while an item is constructed.
///
/// Steps run in order; the first failure aborts construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOption {
    /// Set the link target.
    Uri(String),
    /// Set the display label.
    Label(String),
    /// Set the sort position.
    Position(i32),
    /// Show or hide the item.
    Display(bool),
    /// Show or hide the item's children.
    DisplayChildren(bool),
    /// Force the current state, or clear the override with `None`.
    Current(Option<bool>),
    /// Replace the generic attributes.
    Attributes(Attributes),
    /// Set one generic attribute.
    Attribute(String, Value),
    /// Replace the link attributes.
    LinkAttributes(Attributes),
    /// Set one link attribute.
    LinkAttribute(String, Value),
    /// Replace the children-list attributes.
    ChildrenAttributes(Attributes),
    /// Set one children-list attribute.
    ChildrenAttribute(String, Value),
    /// Replace the label attributes.
    LabelAttributes(Attributes),
    /// Set one label attribute.
    LabelAttribute(String, Value),
    /// Replace the extras.
    Extras(Attributes),
    /// Set one extra.
    Extra(String, Value),
    /// Mark the label as pre-sanitized markup.
    SafeLabel(bool),
    /// Attach an existing root item as a child.
    #[serde(skip)]
    Child(ItemId),
    /// Attach existing root items as children, in order.
    #[serde(skip)]
    Children(Vec<ItemId>),
    /// Run a custom mutation.
    #[serde(skip)]
    Custom(CustomOption),
}

impl ItemOption {
    /// Set the link target.
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// Set the display label.
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// Set the sort position.
    pub fn position(position: i32) -> Self {
        Self::Position(position)
    }

    /// Show or hide the item.
    pub fn display(display: bool) -> Self {
        Self::Display(display)
    }

    /// Show or hide the item's children.
    pub fn display_children(display_children: bool) -> Self {
        Self::DisplayChildren(display_children)
    }

    /// Force the current state.
    pub fn current(current: Option<bool>) -> Self {
        Self::Current(current)
    }

    /// Set one generic attribute.
    pub fn attribute(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Attribute(name.into(), value.into())
    }

    /// Set one link attribute.
    pub fn link_attribute(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::LinkAttribute(name.into(), value.into())
    }

    /// Set one children-list attribute.
    pub fn children_attribute(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::ChildrenAttribute(name.into(), value.into())
    }

    /// Set one label attribute.
    pub fn label_attribute(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::LabelAttribute(name.into(), value.into())
    }

    /// Set one extra.
    pub fn extra(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Extra(name.into(), value.into())
    }

    /// Mark the label as pre-sanitized markup.
    pub fn safe_label(safe_label: bool) -> Self {
        Self::SafeLabel(safe_label)
    }

    /// Attach an existing root item as a child.
    pub fn child(child: ItemId) -> Self {
        Self::Child(child)
    }

    /// Attach existing root items as children.
    pub fn children(children: impl IntoIterator<Item = ItemId>) -> Self {
        Self::Children(children.into_iter().collect())
    }

    /// Run a custom mutation.
    pub fn custom(f: impl Fn(&mut Item) -> MenuResult<()> + Send + Sync + 'static) -> Self {
        Self::Custom(CustomOption(Arc::new(f)))
    }

    /// Apply a data option to `item`.
    ///
    /// Structural options are no-ops here; [`Menu`](crate::Menu) stages them.
    pub(crate) fn apply(self, item: &mut Item) -> MenuResult<()> {
        match self {
            Self::Uri(uri) => item.uri = uri,
            Self::Label(label) => item.label = label,
            Self::Position(position) => item.position = position,
            Self::Display(display) => item.set_display(display),
            Self::DisplayChildren(display_children) => item.set_display_children(display_children),
            Self::Current(current) => item.current = current,
            Self::Attributes(attributes) => item.attributes = attributes,
            Self::Attribute(name, value) => {
                item.attributes.insert(name, value);
            }
            Self::LinkAttributes(attributes) => item.link_attributes = attributes,
            Self::LinkAttribute(name, value) => {
                item.link_attributes.insert(name, value);
            }
            Self::ChildrenAttributes(attributes) => item.children_attributes = attributes,
            Self::ChildrenAttribute(name, value) => {
                item.children_attributes.insert(name, value);
            }
            Self::LabelAttributes(attributes) => item.label_attributes = attributes,
            Self::LabelAttribute(name, value) => {
                item.label_attributes.insert(name, value);
            }
            Self::Extras(extras) => item.extras = extras,
            Self::Extra(name, value) => {
                item.extras.insert(name, value);
            }
            Self::SafeLabel(safe_label) => {
                item.extras
                    .insert(SAFE_LABEL_EXTRA.into(), Value::Bool(safe_label));
            }
            Self::Custom(CustomOption(f)) => f(item)?,
            Self::Child(_) | Self::Children(_) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use serde_json::json;

    #[test]
    fn later_options_override_earlier_ones() {
        let mut item = Item::new("home");
        for option in [
            ItemOption::label("Home"),
            ItemOption::attribute("class", "nav"),
            ItemOption::label("Start"),
            ItemOption::attribute("class", "main"),
        ] {
            option.apply(&mut item).unwrap();
        }
        assert_eq!(item.label, "Start");
        assert_eq!(item.attribute("class"), Some(&json!("main")));
    }

    #[test]
    fn whole_bag_replaces_single_keys() {
        let mut item = Item::new("home");
        ItemOption::extra("a", 1).apply(&mut item).unwrap();
        ItemOption::Extras(Attributes::from([("b".to_string(), json!(2))]))
            .apply(&mut item)
            .unwrap();
        assert_eq!(item.extra("a"), None);
        assert_eq!(item.extra("b"), Some(&json!(2)));
    }

    #[test]
    fn custom_failure_surfaces() {
        let mut item = Item::new("home");
        let err = ItemOption::custom(|_| Err(MenuError::InvalidOption("nope".into())))
            .apply(&mut item)
            .unwrap_err();
        assert!(matches!(err, MenuError::InvalidOption(msg) if msg == "nope"));
    }

    #[test]
    fn safe_label_sets_the_extra() {
        let mut item = Item::new("home");
        ItemOption::safe_label(true).apply(&mut item).unwrap();
        assert!(item.safe_label());
    }

    #[test]
    fn deserializes_from_json() {
        let options: Vec<ItemOption> = serde_json::from_value(json!([
            {"uri": "/about"},
            {"display": false},
            {"current": null},
            {"link_attribute": ["target", "_blank"]},
        ]))
        .unwrap();
        let mut item = Item::new("about");
        for option in options {
            option.apply(&mut item).unwrap();
        }
        assert_eq!(item.uri, "/about");
        assert!(!item.display());
        assert_eq!(item.link_attribute("target"), Some(&json!("_blank")));
    }
}
