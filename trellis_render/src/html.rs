// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup helpers shared by the renderers and available to themes.

use std::borrow::Cow;

use serde_json::Value;
use trellis_menu::Attributes;

/// Escape the five HTML-significant characters `& < > " '`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Plain text of an attribute value, or `None` for `null`.
///
/// Strings are taken verbatim, arrays are joined with single spaces, and other
/// values use their JSON text.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(values) => Some(classes(values.iter().filter_map(value_text))),
        other => Some(other.to_string()),
    }
}

/// Format one attribute as `name="value"`.
///
/// `true` renders as `name="name"`. `false`, `null`, and an empty `class`
/// render nothing; `false` is never written as a bare `name`.
pub fn attribute(name: &str, value: &Value) -> Option<String> {
    let text = match value {
        Value::Bool(false) => return None,
        Value::Bool(true) => name.to_owned(),
        other => value_text(other)?,
    };
    if name == "class" && text.is_empty() {
        return None;
    }
    Some(format!(r#"{name}="{}""#, escape(&text)))
}

/// Format an attribute bag, each attribute preceded by a space.
///
/// Attributes appear in key order.
pub fn attributes(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        if let Some(attr) = attribute(name, value) {
            out.push(' ');
            out.push_str(&attr);
        }
    }
    out
}

/// Join class names with single spaces, dropping empty entries.
pub fn classes<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for class in classes {
        let class = class.as_ref().trim();
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}
