//! Open/closed bookkeeping for an A* search.
//!
//! A location moves one way through `unseen -> open -> closed`. The open set is
//! insertion ordered so that ties on total cost always resolve to the location
//! that was discovered first. A NaN cost, whatever its sign bit, never beats
//! a real one.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::errors::{GridError, Result};
use crate::location::Location;
use crate::waypoint::{SearchNode, Waypoint};

/// Outcome of [`SearchFrontier::add_or_relax`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// No open entry existed at the location.
    Inserted,
    /// The new node had a strictly smaller cost so far and took the slot.
    Replaced,
    /// The existing entry was at least as cheap and was kept.
    Rejected,
}

impl Relaxation {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Relaxation::Rejected)
    }
}

/// Outcome of [`SearchFrontier::close`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum CloseOutcome {
    Closed,
    /// The location had no open entry; nothing changed.
    NotOpen,
}

pub struct SearchFrontier<'a, M, N = Waypoint> {
    map: &'a M,
    open: IndexMap<Location, N>,
    closed: HashMap<Location, N>,
}

impl<'a, M, N: SearchNode> SearchFrontier<'a, M, N> {
    pub fn new(map: &'a M) -> Self {
        Self { map, open: IndexMap::new(), closed: HashMap::new() }
    }

    /// Like [`SearchFrontier::new`] for callers that may not have a map yet.
    pub fn bind(map: Option<&'a M>) -> Result<Self> {
        match map {
            Some(m) => Ok(Self::new(m)),
            None => Err(GridError::InvalidArgument("map cannot be null".into())),
        }
    }

    pub fn map(&self) -> &'a M { self.map }

    /// Open entry with the smallest total cost, or `None` when nothing is open.
    pub fn min_open(&self) -> Option<&N> {
        let mut best: Option<&N> = None;
        for node in self.open.values() {
            match best {
                Some(b) if !cheaper(node.total_cost(), b.total_cost()) => {}
                _ => best = Some(node),
            }
        }
        best
    }

    /// Adds `node` to the open set, or replaces the open entry at the same
    /// location when `node` reaches it with a strictly smaller cost so far.
    pub fn add_or_relax(&mut self, node: N) -> Relaxation {
        let loc = node.location();
        match self.open.get_mut(&loc) {
            None => {
                trace!(%loc, g = node.cost_so_far(), f = node.total_cost(), "open insert");
                self.open.insert(loc, node);
                Relaxation::Inserted
            }
            Some(current) if cheaper(node.cost_so_far(), current.cost_so_far()) => {
                trace!(%loc, old_g = current.cost_so_far(), g = node.cost_so_far(), "open relax");
                *current = node;
                Relaxation::Replaced
            }
            Some(current) => {
                trace!(%loc, kept_g = current.cost_so_far(), g = node.cost_so_far(), "open reject");
                Relaxation::Rejected
            }
        }
    }

    pub fn open_len(&self) -> usize { self.open.len() }
    pub fn closed_len(&self) -> usize { self.closed.len() }

    /// Moves the open entry at `loc` into the closed set.
    pub fn close(&mut self, loc: Location) -> CloseOutcome {
        match self.open.shift_remove(&loc) {
            Some(node) => {
                trace!(%loc, g = node.cost_so_far(), "close");
                self.closed.insert(loc, node);
                CloseOutcome::Closed
            }
            None => {
                warn!(%loc, already_closed = self.closed.contains_key(&loc), "close called on a location with no open entry");
                CloseOutcome::NotOpen
            }
        }
    }

    pub fn is_closed(&self, loc: Location) -> bool { self.closed.contains_key(&loc) }
    pub fn is_open(&self, loc: Location) -> bool { self.open.contains_key(&loc) }
    pub fn open_entry(&self, loc: Location) -> Option<&N> { self.open.get(&loc) }
    pub fn closed_entry(&self, loc: Location) -> Option<&N> { self.closed.get(&loc) }
}

/// Strict less-than where NaN loses to every real cost and never wins.
fn cheaper(a: f32, b: f32) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, _) => false,
        (false, true) => true,
        (false, false) => a < b,
    }
}
