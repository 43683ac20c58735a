// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Request-scoped values handed to voters and renderers.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use tracing::trace;
use url::{ParseError, Url};

/// Key under which [`UrlVoter`](crate::UrlVoter) expects the request URL, as a `String` or a [`Url`].
pub const URL_KEY: &str = "url";

/// An opaque bag of per-request values keyed by static names.
///
/// Cloning is cheap; values are shared.
#[derive(Clone, Default)]
pub struct Context {
    values: HashMap<&'static str, Arc<dyn Any + Send + Sync>>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a context that also carries `value` under `key`.
    pub fn with_value<T: Any + Send + Sync>(mut self, key: &'static str, value: T) -> Self {
        self.values.insert(key, Arc::new(value));
        self
    }

    /// Return a context carrying the request URL (or bare path) under [`URL_KEY`].
    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.with_value(URL_KEY, url.into())
    }

    /// Value stored under `key`, if present and of type `T`.
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref()
    }

    /// The decoded request path of the URL under [`URL_KEY`].
    ///
    /// The URL may be stored as a `String` or as a parsed [`Url`]. `None` when
    /// there is no URL or it does not parse.
    pub fn request_path(&self) -> Option<String> {
        if let Some(url) = self.value::<Url>(URL_KEY) {
            return Some(decoded_path(url));
        }
        path_of(self.value::<String>(URL_KEY)?)
    }
}

/// Base joined onto bare paths and scheme-relative URLs.
const RELATIVE_BASE: &str = "http://localhost/";

/// Percent-decoded path of an absolute URL, a scheme-relative URL, or a bare path.
///
/// Query and fragment are dropped; an absolute URL without a path yields `/`.
/// `None` when `url` does not parse.
pub fn path_of(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).and_then(|base| base.join(url))
        }
        other => other,
    };
    match parsed {
        Ok(parsed) => Some(decoded_path(&parsed)),
        Err(err) => {
            trace!(url, error = %err, "request url does not parse");
            None
        }
    }
}

fn decoded_path(url: &Url) -> String {
    percent_decode_str(url.path()).decode_utf8_lossy().into_owned()
}
