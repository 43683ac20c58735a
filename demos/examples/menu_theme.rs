// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme-backed rendering.
//!
//! A minimal theme with two named templates: the default nested menu and a
//! breadcrumb trail. Real applications plug in their template engine here.
//!
//! Run:
//! - `cargo run -p trellis_examples --example menu_theme`

use std::collections::HashMap;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trellis_matcher::{Context, CoreMatcher, UrlVoter};
use trellis_menu::{ItemOption, ItemRef, Menu};
use trellis_render::{
    MENU_TEMPLATE, RenderOption, Renderer, TemplateData, TemplateRenderer, Theme, ThemeError,
};

type Template = fn(&TemplateData<'_>) -> String;

struct CodeTheme {
    templates: HashMap<&'static str, Template>,
}

impl Theme for CodeTheme {
    fn html(
        &self,
        _ctx: &Context,
        template: &str,
        data: &TemplateData<'_>,
    ) -> Result<String, ThemeError> {
        let render = self
            .templates
            .get(template)
            .ok_or_else(|| format!("template `{template}` not found"))?;
        info!(template, item = %data.item, "theme rendering template");
        Ok(render(data))
    }
}

fn menu_template(data: &TemplateData<'_>) -> String {
    fn list(data: &TemplateData<'_>, item: ItemRef<'_>, out: &mut String) {
        out.push_str(&format!("<ul{}>", data.attributes(&item.children_attributes)));
        for child in item.children().filter(|c| c.display()) {
            let state = if data.is_current(child) {
                data.options.current_class.as_str()
            } else if data.is_ancestor(child) {
                data.options.ancestor_class.as_str()
            } else {
                ""
            };
            out.push_str(&format!(
                r#"<li class="{}"><a href="{}">{}</a>"#,
                data.classes([state, "nav-item"]),
                data.escape(&child.uri),
                data.escape(&child.label),
            ));
            if child.has_children() {
                list(data, child, out);
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }

    let mut out = String::new();
    list(data, data.item, &mut out);
    out
}

fn breadcrumb_template(data: &TemplateData<'_>) -> String {
    let mut trail = Vec::new();
    let mut cursor = Some(data.item);
    while let Some(item) = cursor {
        cursor = item
            .children()
            .find(|c| data.is_current(*c) || data.is_ancestor(*c));
        if let Some(step) = cursor {
            trail.push(data.escape(&step.label));
        }
    }
    trail.join(" / ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut menu = Menu::new();
    let root = menu.create_item("root", [])?;
    menu.add_child(root, "home", [ItemOption::label("Home"), ItemOption::uri("/")])?;
    let shop = menu.add_child(root, "shop", [ItemOption::label("Shop"), ItemOption::uri("/shop")])?;
    menu.add_child(
        shop,
        "tea",
        [ItemOption::label("Tea & Herbs"), ItemOption::uri("/shop/tea")],
    )?;

    let theme = CodeTheme {
        templates: HashMap::from([
            (MENU_TEMPLATE, menu_template as Template),
            ("@menu/breadcrumb.html", breadcrumb_template as Template),
        ]),
    };
    let renderer = TemplateRenderer::new(theme, CoreMatcher::new().with_voter(UrlVoter));
    let ctx = Context::new().with_url("http://localhost/shop/tea");

    println!("{}", renderer.render_id(&ctx, &menu, root, &[])?);
    println!(
        "{}",
        renderer.render_id(
            &ctx,
            &menu,
            root,
            &[RenderOption::template("@menu/breadcrumb.html")]
        )?
    );

    match renderer.render_id(&ctx, &menu, root, &[RenderOption::template("@menu/missing.html")]) {
        Ok(_) => unreachable!("missing templates fail"),
        Err(err) => warn!(error = %err, "theme could not render the menu"),
    }
    Ok(())
}
