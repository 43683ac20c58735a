// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matcher implementation.
//!
//! ## Overview
//!
//! Decides whether an item is current, or an ancestor of a current item, and
//! memoizes the per-item outcome until [`Matcher::clear`] is called.
//!
//! ## Decision order
//!
//! - A forced current flag on the item wins and is never cached.
//! - A cached outcome is returned as-is, even if the voters would now answer differently.
//! - Otherwise voters run in registration order; the first non-abstaining vote decides.
//! - When every voter abstains the item is not current.
//!
//! ## Ancestor budget
//!
//! [`Matcher::is_ancestor`] takes an optional counter shared by the whole search.
//! It is decremented once per visited item, across all branches, and the search
//! answers `false` once it reads zero. This bounds the total work, not the depth
//! of any one path.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};
use trellis_menu::{ItemKey, ItemRef};

use crate::context::Context;
use crate::voter::Voter;

/// Current/ancestor decisions for menu items.
pub trait Matcher {
    /// Whether `item` is current.
    fn is_current(&self, ctx: &Context, item: ItemRef<'_>) -> bool;

    /// Whether `item` has a current descendant within `budget` visits.
    ///
    /// `None` means unbounded.
    fn is_ancestor(&self, ctx: &Context, item: ItemRef<'_>, budget: Option<&mut usize>) -> bool;

    /// Forget all cached outcomes.
    fn clear(&self);
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn is_current(&self, ctx: &Context, item: ItemRef<'_>) -> bool {
        (**self).is_current(ctx, item)
    }

    fn is_ancestor(&self, ctx: &Context, item: ItemRef<'_>, budget: Option<&mut usize>) -> bool {
        (**self).is_ancestor(ctx, item, budget)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn is_current(&self, ctx: &Context, item: ItemRef<'_>) -> bool {
        (**self).is_current(ctx, item)
    }

    fn is_ancestor(&self, ctx: &Context, item: ItemRef<'_>, budget: Option<&mut usize>) -> bool {
        (**self).is_ancestor(ctx, item, budget)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Voter-driven matcher with a per-item outcome cache.
///
/// ## Usage
///
/// - Construct with [`CoreMatcher::new`] and register voters with
///   [`CoreMatcher::with_voter`] (or [`CoreMatcher::from_voters`]).
/// - Share one matcher between renderers for a request; clear it between
///   requests (renderers do this after each pass unless configured otherwise).
///
/// ## Concurrency
///
/// The cache sits behind a read/write lock. A miss releases the shared lock
/// before voting and takes the exclusive lock to store the outcome, so two
/// threads may evaluate the same item concurrently; both store the same value.
#[derive(Default)]
pub struct CoreMatcher {
    voters: Vec<Box<dyn Voter>>,
    cache: RwLock<HashMap<ItemKey, bool>>,
}

impl fmt::Debug for CoreMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreMatcher")
            .field("voters", &self.voters.len())
            .field("cached", &self.cached_len())
            .finish()
    }
}

impl CoreMatcher {
    /// Create a matcher without voters; nothing is current unless forced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher consulting `voters` in order.
    pub fn from_voters(voters: Vec<Box<dyn Voter>>) -> Self {
        Self {
            voters,
            cache: RwLock::default(),
        }
    }

    /// Register another voter after the existing ones.
    #[must_use]
    pub fn with_voter(mut self, voter: impl Voter + 'static) -> Self {
        self.voters.push(Box::new(voter));
        self
    }

    /// Number of items with a cached outcome.
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    fn vote(&self, ctx: &Context, item: ItemRef<'_>) -> bool {
        self.voters
            .iter()
            .find_map(|voter| voter.vote(ctx, item).decision())
            .unwrap_or(false)
    }
}

impl Matcher for CoreMatcher {
    fn is_current(&self, ctx: &Context, item: ItemRef<'_>) -> bool {
        if let Some(current) = item.current {
            return current;
        }

        let key = item.key();
        if let Some(&current) = self.cache.read().get(&key) {
            trace!(item = %item, current, "matcher cache hit");
            return current;
        }

        let current = self.vote(ctx, item);
        trace!(item = %item, current, "matcher cache miss");
        self.cache.write().insert(key, current);
        current
    }

    fn is_ancestor(
        &self,
        ctx: &Context,
        item: ItemRef<'_>,
        mut budget: Option<&mut usize>,
    ) -> bool {
        if let Some(remaining) = budget.as_deref_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        item.children().any(|child| {
            self.is_current(ctx, child) || self.is_ancestor(ctx, child, budget.as_deref_mut())
        })
    }

    fn clear(&self) {
        let mut cache = self.cache.write();
        debug!(entries = cache.len(), "clearing matcher cache");
        cache.clear();
    }
}
