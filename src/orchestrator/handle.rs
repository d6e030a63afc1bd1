//! Thread-safe engine handle

use std::sync::Arc;

use parking_lot::Mutex;

use crate::agent::{Agent, AgentId};
use crate::config::CallCenterConfig;
use crate::error::Result;
use crate::orchestrator::core::{CallCenterEngine, EngineStats};

/// Cloneable, thread-safe handle to a [`CallCenterEngine`]
///
/// Each operation takes the engine lock for its entire read-modify-write,
/// so the eligibility scan and the following mutation form one critical
/// section per call. That is what keeps `current_calls <= max_calls` true
/// under concurrent assignment requests; never split an operation into a
/// separate scan and mutation around the lock.
///
/// Operations never block beyond the lock itself, never suspend, and have
/// no timeout or cancellation semantics: each one either completes or is a
/// no-op, in time linear in the roster size.
///
/// # Examples
///
/// ```
/// use callcenter_engine::prelude::*;
/// use std::thread;
///
/// # fn example() -> Result<()> {
/// let engine = SharedEngine::new(CallCenterConfig::default())?;
///
/// let worker = {
///     let engine = engine.clone();
///     thread::spawn(move || engine.assign_round_robin())
/// };
///
/// let here = engine.assign_round_robin();
/// let there = worker.join().unwrap();
///
/// // Both assignments went through the same critical section; the
/// // capacity invariant holds regardless of interleaving.
/// assert!(engine.stats().active_calls <= engine.stats().total_capacity);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<CallCenterEngine>>,
}

impl SharedEngine {
    /// Build a shared engine from a configuration
    pub fn new(config: CallCenterConfig) -> Result<Self> {
        Ok(Self::from_engine(CallCenterEngine::new(config)?))
    }

    /// Wrap an already-built engine
    pub fn from_engine(engine: CallCenterEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`CallCenterEngine::agents`]
    pub fn agents(&self) -> Vec<Agent> {
        self.inner.lock().agents()
    }

    /// See [`CallCenterEngine::agent`]
    pub fn agent(&self, id: &AgentId) -> Option<Agent> {
        self.inner.lock().agent(id)
    }

    /// See [`CallCenterEngine::eligible_agents`]
    pub fn eligible_agents(&self) -> Vec<Agent> {
        self.inner.lock().eligible_agents()
    }

    /// See [`CallCenterEngine::assign`]
    pub fn assign(&self) -> Option<Agent> {
        self.inner.lock().assign()
    }

    /// See [`CallCenterEngine::assign_round_robin`]
    pub fn assign_round_robin(&self) -> Option<Agent> {
        self.inner.lock().assign_round_robin()
    }

    /// See [`CallCenterEngine::assign_least_loaded`]
    pub fn assign_least_loaded(&self, skill: Option<&str>) -> Option<Agent> {
        self.inner.lock().assign_least_loaded(skill)
    }

    /// See [`CallCenterEngine::release`]
    pub fn release(&self, id: &AgentId) {
        self.inner.lock().release(id)
    }

    /// See [`CallCenterEngine::toggle_availability`]
    pub fn toggle_availability(&self, id: &AgentId) {
        self.inner.lock().toggle_availability(id)
    }

    /// See [`CallCenterEngine::reassign`]
    pub fn reassign(&self, from: &AgentId, to: &AgentId) -> Result<Agent> {
        self.inner.lock().reassign(from, to)
    }

    /// See [`CallCenterEngine::reassignment_candidates`]
    pub fn reassignment_candidates(&self, exclude: &AgentId) -> Vec<Agent> {
        self.inner.lock().reassignment_candidates(exclude)
    }

    /// See [`CallCenterEngine::stats`]
    pub fn stats(&self) -> EngineStats {
        self.inner.lock().stats()
    }
}
