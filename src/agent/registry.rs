//! # Agent Registry
//!
//! In-memory roster of call center agents. The registry is the single
//! owner of every agent's mutable state (`current_calls`, `is_available`)
//! and is only ever mutated through the engine's operations.
//!
//! ## Storage layout
//!
//! Agents live in an insertion-ordered `Vec`, because registry order is
//! significant: the round-robin cursor and the least-loaded tie-break both
//! walk agents in the order they were seeded. A side `HashMap` from agent
//! id to vector index gives O(1) per-agent updates without rebuilding the
//! collection on every mutation.
//!
//! ## Lifecycle
//!
//! Agents are provisioned once at startup from a seed roster; there are no
//! create/delete operations afterwards. Nothing is persisted, so the
//! registry resets on restart.
//!
//! # Examples
//!
//! ```
//! use callcenter_engine::agent::{AgentRegistry, AgentSeed, AgentRole};
//!
//! # fn example() -> callcenter_engine::Result<()> {
//! let mut registry = AgentRegistry::new();
//!
//! registry.register(AgentSeed {
//!     id: "alice".into(),
//!     name: "Alice Johnson".to_string(),
//!     email: "alice@company.com".to_string(),
//!     role: AgentRole::Agent,
//!     max_calls: 5,
//!     available: true,
//!     active: true,
//! })?;
//!
//! assert_eq!(registry.len(), 1);
//! assert_eq!(registry.eligible_agents().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::agent::{Agent, AgentId, AgentSeed};
use crate::error::{CallCenterError, Result};

/// Insertion-ordered agent roster with O(1) id lookup
///
/// The registry exposes read access freely but keeps mutation narrow:
/// the only ways to move an agent's state are the load-counter and
/// availability methods below, which uphold `current_calls <= max_calls`
/// and the floor at zero after every call.
pub struct AgentRegistry {
    /// Agents in seed order; order drives round-robin rotation
    agents: Vec<Agent>,

    /// Agent id to `agents` index
    index: HashMap<AgentId, usize>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a registry from a seed roster
    ///
    /// Fails if the roster contains a duplicate id or an agent with a zero
    /// call capacity.
    pub fn from_seeds(seeds: impl IntoIterator<Item = AgentSeed>) -> Result<Self> {
        let mut registry = Self::new();
        for seed in seeds {
            registry.register(seed)?;
        }
        Ok(registry)
    }

    /// Register a single agent from a seed entry
    ///
    /// Registration happens only during startup; ids must be unique and
    /// `max_calls` must be greater than zero.
    pub fn register(&mut self, seed: AgentSeed) -> Result<AgentId> {
        if seed.id.as_ref().is_empty() {
            return Err(CallCenterError::invalid_input("Agent id must not be empty"));
        }
        if seed.max_calls == 0 {
            return Err(CallCenterError::invalid_input(format!(
                "Agent {} must have max_calls > 0",
                seed.id
            )));
        }
        if self.index.contains_key(&seed.id) {
            return Err(CallCenterError::agent(format!("Duplicate agent id: {}", seed.id)));
        }

        let agent: Agent = seed.into();
        let id = agent.id.clone();
        info!("👤 Registered agent: {} ({})", agent.name, id);

        self.index.insert(id.clone(), self.agents.len());
        self.agents.push(agent);
        Ok(id)
    }

    /// Number of agents in the roster
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Look up an agent by id
    pub fn get(&self, id: &AgentId) -> Option<&Agent> {
        self.index.get(id).map(|&i| &self.agents[i])
    }

    /// All agents, in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Agents eligible for a new assignment, in registry order
    ///
    /// An agent is eligible iff active, available, and under capacity.
    /// Pure read; the result may be empty.
    pub fn eligible_agents(&self) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.is_eligible()).collect()
    }

    /// Add one call to an agent's load
    ///
    /// Callers must have established eligibility first; this method still
    /// refuses to push an agent past capacity so the invariant holds even
    /// on a buggy call path.
    pub(crate) fn increment_calls(&mut self, id: &AgentId) -> Result<&Agent> {
        let agent = self
            .agent_mut(id)
            .ok_or_else(|| CallCenterError::not_found(format!("Agent not found: {}", id)))?;

        if agent.current_calls >= agent.max_calls {
            return Err(CallCenterError::routing(format!(
                "Agent {} is at capacity ({}/{})",
                id, agent.current_calls, agent.max_calls
            )));
        }

        agent.current_calls += 1;
        agent.last_activity = chrono::Utc::now();
        Ok(&self.agents[self.index[id]])
    }

    /// Remove one call from an agent's load, floored at zero
    ///
    /// Unknown ids are tolerated as a no-op: release is fire-and-forget on
    /// call teardown and stale ids are expected. Returns whether the agent
    /// was found.
    pub(crate) fn decrement_calls(&mut self, id: &AgentId) -> bool {
        match self.agent_mut(id) {
            Some(agent) => {
                if agent.current_calls == 0 {
                    debug!("📴 Release for {} with no assigned calls; staying at 0", id);
                }
                agent.current_calls = agent.current_calls.saturating_sub(1);
                agent.last_activity = chrono::Utc::now();
                true
            }
            None => {
                warn!("📴 Release for unknown agent {}; ignoring", id);
                false
            }
        }
    }

    /// Flip an agent's availability toggle
    ///
    /// Does not touch the load counter. Unknown ids are tolerated as a
    /// no-op. Returns the new availability when the agent was found.
    pub(crate) fn toggle_availability(&mut self, id: &AgentId) -> Option<bool> {
        match self.agent_mut(id) {
            Some(agent) => {
                agent.is_available = !agent.is_available;
                agent.last_activity = chrono::Utc::now();
                Some(agent.is_available)
            }
            None => {
                warn!("🔀 Availability toggle for unknown agent {}; ignoring", id);
                None
            }
        }
    }

    fn agent_mut(&mut self, id: &AgentId) -> Option<&mut Agent> {
        let i = *self.index.get(id)?;
        Some(&mut self.agents[i])
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
