// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for rendering.

use thiserror::Error;
use trellis_menu::MenuError;

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Failure reported by a [`Theme`](crate::Theme).
pub type ThemeError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by renderers.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The theme failed to render the menu template.
    #[error("theme failed to render template `{template}`: {source}")]
    Theme {
        /// Template that was requested.
        template: String,
        /// Error reported by the theme.
        #[source]
        source: ThemeError,
    },

    /// The menu could not be read.
    #[error(transparent)]
    Menu(#[from] MenuError),
}
