// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test menus.

use trellis_menu::{ItemId, ItemOption, Menu};

/// Request URL under which `article1` is current.
pub(crate) const ARTICLE_URL: &str = "http://localhost/blog/article-test-1";

/// `root → home(/), about(/about, 2), blog(/blog, 1) → article1`, reordered.
pub(crate) fn site() -> (Menu, ItemId) {
    let mut menu = Menu::new();
    let root = menu.create_item("root", []).unwrap();
    menu.add_child(root, "home", [ItemOption::label("Home"), ItemOption::uri("/")])
        .unwrap();
    menu.add_child(
        root,
        "about",
        [
            ItemOption::label("About"),
            ItemOption::uri("/about"),
            ItemOption::position(2),
        ],
    )
    .unwrap();
    let blog = menu
        .add_child(
            root,
            "blog",
            [
                ItemOption::label("Blog"),
                ItemOption::uri("/blog"),
                ItemOption::position(1),
            ],
        )
        .unwrap();
    menu.add_child(
        blog,
        "article1",
        [
            ItemOption::label("Article 1"),
            ItemOption::uri("/blog/article-test-1"),
        ],
    )
    .unwrap();
    menu.reorder_children(root);
    (menu, root)
}
