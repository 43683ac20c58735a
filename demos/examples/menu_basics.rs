// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu basics.
//!
//! Build a small site menu, reorder it, and render it for a request.
//!
//! Run:
//! - `cargo run -p trellis_examples --example menu_basics`
//! - `RUST_LOG=trellis_matcher=trace cargo run -p trellis_examples --example menu_basics`

use tracing::info;
use tracing_subscriber::EnvFilter;
use trellis_matcher::{Context, CoreMatcher, UrlVoter};
use trellis_menu::{ItemOption, Menu, MenuResult};
use trellis_render::{ListRenderer, RenderOption, Renderer};

const REQUEST_URL: &str = "http://localhost/blog/article-test-1";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut menu = Menu::new();
    let root = build(&mut menu)?;
    menu.reorder_children(root);
    info!(items = menu.len(), "built site menu");

    let renderer = ListRenderer::new(CoreMatcher::new().with_voter(UrlVoter));
    let ctx = Context::new().with_url(REQUEST_URL);
    let root = menu.item(root).ok_or("root vanished")?;
    info!(url = REQUEST_URL, "rendering for request");

    println!("{}", renderer.render(&ctx, root, &[])?);
    println!("{}", renderer.render(&ctx, root, &[RenderOption::compressed(true)])?);
    println!("{}", renderer.render(&ctx, root, &[RenderOption::Depth(Some(1))])?);
    Ok(())
}

fn build(menu: &mut Menu) -> MenuResult<trellis_menu::ItemId> {
    let article = menu.create_item(
        "article1",
        [
            ItemOption::label("Article 1"),
            ItemOption::uri("/blog/article-test-1"),
        ],
    )?;
    let blog = menu.create_item(
        "blog",
        [
            ItemOption::label("Blog"),
            ItemOption::uri("/blog"),
            ItemOption::position(1),
            ItemOption::child(article),
        ],
    )?;
    let root = menu.create_item("root", [])?;
    menu.add_child(root, "home", [ItemOption::label("Home"), ItemOption::uri("/")])?;
    menu.add_child(
        root,
        "about",
        [
            ItemOption::label("About"),
            ItemOption::uri("/about"),
            ItemOption::position(2),
        ],
    )?;
    menu.add_child(root, blog, [])?;
    Ok(root)
}
