// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Voters: pluggable predicates deciding whether an item is current.

use trellis_menu::ItemRef;

use crate::context::Context;

/// Outcome of a single voter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Vote {
    /// The item is current.
    Yes,
    /// The item is not current.
    No,
    /// No opinion; let the next voter decide.
    Abstain,
}

impl Vote {
    /// The decided value, or `None` for [`Vote::Abstain`].
    pub fn decision(self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::Abstain => None,
        }
    }
}

impl From<Option<bool>> for Vote {
    fn from(decision: Option<bool>) -> Self {
        match decision {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Abstain,
        }
    }
}

/// Decides whether an item is current for a request.
///
/// Voters must be pure functions of `(ctx, item)`: matchers cache outcomes and
/// may evaluate the same item more than once.
pub trait Voter: Send + Sync {
    /// Vote on `item`. Return [`Vote::Abstain`] when undecided.
    fn vote(&self, ctx: &Context, item: ItemRef<'_>) -> Vote;
}

impl<F> Voter for F
where
    F: Fn(&Context, ItemRef<'_>) -> Vote + Send + Sync,
{
    fn vote(&self, ctx: &Context, item: ItemRef<'_>) -> Vote {
        self(ctx, item)
    }
}

/// Votes [`Vote::Yes`] when the decoded request path equals the item's URI.
///
/// Abstains otherwise, including when the context carries no URL or the URL
/// does not parse.
#[derive(Clone, Copy, Debug, Default)]
pub struct UrlVoter;

impl Voter for UrlVoter {
    fn vote(&self, ctx: &Context, item: ItemRef<'_>) -> Vote {
        match ctx.request_path() {
            Some(path) if path == item.uri => Vote::Yes,
            _ => Vote::Abstain,
        }
    }
}
