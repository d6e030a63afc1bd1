//! Agent selection strategies
//!
//! The two assignment policies the engine supports, kept behind the
//! [`AgentSelector`] trait so the engine never hard-codes either one and a
//! different rotation scheme can be swapped in later.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::Agent;

/// Which assignment policy the engine applies by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingStrategy {
    /// Cyclic rotation over the eligible set
    RoundRobin,

    /// Lowest current call count, earliest registry order on ties
    LeastLoaded,
}

impl Default for RoutingStrategy {
    fn default() -> Self {
        RoutingStrategy::RoundRobin
    }
}

/// Picks one agent out of the eligible set
///
/// `eligible` is the registry-order subsequence of agents passing the
/// eligibility predicate, filtered at call time. Implementations return an
/// index into that slice, or `None` when it is empty. Selectors may carry
/// state across calls (the round-robin cursor does); the engine keeps one
/// selector instance alive for the lifetime of the registry.
pub trait AgentSelector {
    /// Select an agent from the eligible slice
    fn select(&mut self, eligible: &[&Agent]) -> Option<usize>;
}

/// Cyclic selector advancing a cursor over the eligible set
///
/// The cursor is positional and rotates over the *eligible subsequence as
/// computed at call time*, not over the full registry. When the eligible
/// set shrinks or grows between calls the rotation point can skip or
/// repeat an agent relative to a strict global rotation. That drift is the
/// documented product behavior, not a bug; with a static eligible set the
/// rotation is perfectly fair.
#[derive(Debug, Default)]
pub struct RoundRobinSelector {
    cursor: usize,
}

impl RoundRobinSelector {
    /// Create a selector with its cursor at the start of the rotation
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Current cursor position (exposed for observability)
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl AgentSelector for RoundRobinSelector {
    fn select(&mut self, eligible: &[&Agent]) -> Option<usize> {
        if eligible.is_empty() {
            return None;
        }

        let index = self.cursor % eligible.len();
        self.cursor = (self.cursor + 1) % eligible.len();
        debug!("🔁 Round robin picked slot {} of {}; cursor now {}", index, eligible.len(), self.cursor);
        Some(index)
    }
}

/// Selector returning the least-loaded eligible agent
///
/// Ties break toward the earliest agent in registry order: a plain
/// left-to-right scan keeping the first strict minimum. Deliberately not
/// `Iterator::min_by_key`, which keeps the *last* of equal minima.
#[derive(Debug, Default)]
pub struct LeastLoadedSelector;

impl LeastLoadedSelector {
    /// Create the stateless least-loaded selector
    pub fn new() -> Self {
        Self
    }
}

impl AgentSelector for LeastLoadedSelector {
    fn select(&mut self, eligible: &[&Agent]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, agent) in eligible.iter().enumerate() {
            match best {
                Some(b) if eligible[b].current_calls <= agent.current_calls => {}
                _ => best = Some(i),
            }
        }
        best
    }
}
