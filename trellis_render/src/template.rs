// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme-backed renderer.
//!
//! [`TemplateRenderer`] owns no markup. It resolves options, then hands a
//! [`TemplateData`] payload to a [`Theme`] together with the template named by
//! the `template` extra (default [`MENU_TEMPLATE`](crate::MENU_TEMPLATE)).

use std::fmt;

use tracing::debug;
use trellis_matcher::{Context, Matcher};
use trellis_menu::{Attributes, ItemRef};

use crate::error::{RenderError, RenderResult, ThemeError};
use crate::html;
use crate::options::{Options, RenderOption};
use crate::renderer::Renderer;

/// A template engine able to render a named template.
pub trait Theme {
    /// Render `template` with `data`.
    fn html(
        &self,
        ctx: &Context,
        template: &str,
        data: &TemplateData<'_>,
    ) -> Result<String, ThemeError>;
}

impl<T: Theme + ?Sized> Theme for &T {
    fn html(
        &self,
        ctx: &Context,
        template: &str,
        data: &TemplateData<'_>,
    ) -> Result<String, ThemeError> {
        (**self).html(ctx, template, data)
    }
}

/// Everything a menu template can use.
pub struct TemplateData<'a> {
    /// Request context.
    pub ctx: &'a Context,
    /// Item being rendered; templates usually iterate its children.
    pub item: ItemRef<'a>,
    /// Resolved options for this pass.
    pub options: &'a Options,
    /// Matcher for current/ancestor checks.
    pub matcher: &'a dyn Matcher,
}

impl fmt::Debug for TemplateData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateData")
            .field("ctx", self.ctx)
            .field("item", &self.item)
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

impl TemplateData<'_> {
    /// Whether `item` is current for this request.
    pub fn is_current(&self, item: ItemRef<'_>) -> bool {
        self.matcher.is_current(self.ctx, item)
    }

    /// Whether `item` is an ancestor of a current item, within the matching budget.
    pub fn is_ancestor(&self, item: ItemRef<'_>) -> bool {
        let mut budget = self.options.matching_depth;
        self.matcher.is_ancestor(self.ctx, item, budget.as_mut())
    }

    /// See [`html::classes`].
    pub fn classes<I, S>(&self, classes: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        html::classes(classes)
    }

    /// See [`html::attributes`].
    pub fn attributes(&self, attributes: &Attributes) -> String {
        html::attributes(attributes)
    }

    /// See [`html::escape`].
    pub fn escape(&self, text: &str) -> String {
        html::escape(text).into_owned()
    }
}

/// Renders menus through a [`Theme`].
#[derive(Debug)]
pub struct TemplateRenderer<T, M> {
    theme: T,
    matcher: M,
    options: Options,
}

impl<T: Theme, M: Matcher> TemplateRenderer<T, M> {
    /// Create a renderer with default options.
    pub fn new(theme: T, matcher: M) -> Self {
        Self::with_options(theme, matcher, Options::default())
    }

    /// Create a renderer with the given default options.
    pub fn with_options(theme: T, matcher: M, options: Options) -> Self {
        Self {
            theme,
            matcher,
            options,
        }
    }

    /// Default options for every pass.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The matcher handed to templates.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }
}

impl<T: Theme, M: Matcher> Renderer for TemplateRenderer<T, M> {
    fn render(
        &self,
        ctx: &Context,
        item: ItemRef<'_>,
        overrides: &[RenderOption],
    ) -> RenderResult<String> {
        let mut options = self.options.clone();
        options.apply(overrides.iter().cloned());
        let template = options.template();
        debug!(item = %item, template, "rendering menu template");

        let data = TemplateData {
            ctx,
            item,
            options: &options,
            matcher: &self.matcher,
        };
        let result = self.theme.html(ctx, template, &data);

        if options.clear_matcher {
            self.matcher.clear();
        }
        result.map_err(|source| RenderError::Theme {
            template: template.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ARTICLE_URL, site};
    use crate::options::MENU_TEMPLATE;
    use parking_lot::Mutex;
    use trellis_matcher::{CoreMatcher, UrlVoter};

    /// Writes one line per top-level child: `name[classes]`.
    #[derive(Debug, Default)]
    struct LineTheme {
        requested: Mutex<Vec<String>>,
    }

    impl Theme for LineTheme {
        fn html(
            &self,
            _ctx: &Context,
            template: &str,
            data: &TemplateData<'_>,
        ) -> Result<String, ThemeError> {
            self.requested.lock().push(template.to_owned());
            if template == "@menu/broken.html" {
                return Err("unknown template".into());
            }
            let lines: Vec<String> = data
                .item
                .children()
                .map(|child| {
                    let state = if data.is_current(child) {
                        data.options.current_class.as_str()
                    } else if data.is_ancestor(child) {
                        data.options.ancestor_class.as_str()
                    } else {
                        ""
                    };
                    format!("{}[{}]", data.escape(&child.label), data.classes([state]))
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }

    #[test]
    fn theme_receives_template_and_data() {
        let (menu, root) = site();
        let theme = LineTheme::default();
        let matcher = CoreMatcher::new().with_voter(UrlVoter);
        let renderer = TemplateRenderer::new(&theme, &matcher);
        let ctx = Context::new().with_url(ARTICLE_URL);

        let out = renderer.render(&ctx, menu.item(root).unwrap(), &[]).unwrap();
        assert_eq!(out, "Home[]\nBlog[current-ancestor]\nAbout[]");
        assert_eq!(*theme.requested.lock(), [MENU_TEMPLATE]);
        assert_eq!(matcher.cached_len(), 0, "matcher cleared after the pass");
    }

    #[test]
    fn template_extra_selects_the_template() {
        let (menu, root) = site();
        let theme = LineTheme::default();
        let renderer = TemplateRenderer::new(&theme, CoreMatcher::new());
        renderer
            .render(
                &Context::new(),
                menu.item(root).unwrap(),
                &[RenderOption::template("@site/nav.html")],
            )
            .unwrap();
        assert_eq!(*theme.requested.lock(), ["@site/nav.html"]);
    }

    #[test]
    fn theme_failures_still_clear_the_matcher() {
        let (menu, root) = site();
        let matcher = CoreMatcher::new().with_voter(UrlVoter);
        let renderer = TemplateRenderer::new(LineTheme::default(), &matcher);
        let ctx = Context::new().with_url(ARTICLE_URL);
        let item = menu.item(root).unwrap();

        matcher.is_current(&ctx, item);
        assert_eq!(matcher.cached_len(), 1);

        let err = renderer
            .render(&ctx, item, &[RenderOption::template("@menu/broken.html")])
            .unwrap_err();
        assert!(matches!(&err, RenderError::Theme { template, .. } if template == "@menu/broken.html"));
        assert_eq!(matcher.cached_len(), 0);
    }

    #[test]
    fn matcher_survives_when_clearing_is_disabled() {
        let (menu, root) = site();
        let matcher = CoreMatcher::new().with_voter(UrlVoter);
        let renderer = TemplateRenderer::with_options(
            LineTheme::default(),
            &matcher,
            Options::default().with(RenderOption::ClearMatcher(false)),
        );
        let ctx = Context::new().with_url(ARTICLE_URL);
        renderer.render(&ctx, menu.item(root).unwrap(), &[]).unwrap();
        assert!(matcher.cached_len() > 0);
    }
}
