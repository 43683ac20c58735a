// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menus and render options from JSON.
//!
//! Load a menu tree and renderer defaults from JSON documents, as an
//! application would from its configuration files.
//!
//! Run:
//! - `cargo run -p trellis_examples --example menu_from_json`

use tracing::info;
use tracing_subscriber::EnvFilter;
use trellis_matcher::{Context, CoreMatcher, UrlVoter};
use trellis_menu::{Loader, Menu, NodeLoader};
use trellis_render::{ListRenderer, Options, Renderer};

const MENU: &str = r#"{
    "name": "root",
    "options": [{"children_attributes": {"class": "nav", "id": "main-nav"}}],
    "children": [
        {"name": "docs", "options": [{"label": "Docs"}, {"uri": "/docs"}], "children": [
            {"name": "install", "options": [{"label": "Install"}, {"uri": "/docs/install"}]},
            {"name": "faq", "options": [{"label": "Q&A"}, {"uri": "/docs/faq"}, {"position": -1}]}
        ]},
        {"name": "admin", "options": [{"label": "Admin"}, {"uri": "/admin"}, {"display": false}]},
        {"name": "news", "options": [
            {"label": "<em>News</em>"}, {"uri": "/news"}, {"safe_label": true},
            {"link_attributes": {"rel": "nofollow"}}
        ]}
    ]
}"#;

const OPTIONS: &str = r#"{
    "current_class": "active",
    "ancestor_class": "open",
    "allow_safe_labels": true,
    "current_as_link": false
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let doc: serde_json::Value = serde_json::from_str(MENU)?;
    let options: Options = serde_json::from_str(OPTIONS)?;

    let mut menu = Menu::new();
    let loader = NodeLoader::new();
    assert!(loader.supports(&doc), "JSON documents are loadable");
    let root = loader.load(&mut menu, &doc)?;
    info!(items = menu.len(), current_class = %options.current_class, "loaded menu and options");

    let docs = menu.item(root).and_then(|r| r.child("docs")).ok_or("docs missing")?;
    let docs = docs.id();
    menu.reorder_children(docs);

    let renderer = ListRenderer::with_options(CoreMatcher::new().with_voter(UrlVoter), options);
    let ctx = Context::new().with_url("https://example.com/docs/install?ref=home");
    println!("{}", renderer.render_id(&ctx, &menu, root, &[])?);
    Ok(())
}
