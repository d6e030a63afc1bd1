//! Core call assignment engine

use tracing::{debug, info, warn};

use crate::agent::{Agent, AgentId, AgentRegistry};
use crate::config::CallCenterConfig;
use crate::error::{CallCenterError, Result};
use crate::routing::{AgentSelector, LeastLoadedSelector, RoundRobinSelector, RoutingStrategy};

/// The agent registry and call assignment engine
///
/// Owns the agent roster, the round-robin cursor, and the assignment
/// policies. Every operation executes synchronously as one atomic step:
/// the eligibility scan and the following mutation are never interleaved
/// with another operation on the same engine instance.
///
/// The engine is an explicitly owned value, not ambient state: construct
/// one per process (or per test) and pass it by reference. For use across
/// threads, wrap it in [`SharedEngine`](crate::orchestrator::SharedEngine),
/// which takes a lock around each whole operation.
///
/// # Examples
///
/// ```
/// use callcenter_engine::prelude::*;
///
/// # fn example() -> Result<()> {
/// let config = CallCenterConfig::default();
/// let mut engine = CallCenterEngine::new(config)?;
///
/// match engine.assign_round_robin() {
///     Some(agent) => println!("Assigned call to {}", agent.name),
///     None => println!("No available agents"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct CallCenterEngine {
    config: CallCenterConfig,
    registry: AgentRegistry,

    /// Round-robin cursor state, kept for the registry's lifetime
    round_robin: RoundRobinSelector,
    least_loaded: LeastLoadedSelector,
}

impl CallCenterEngine {
    /// Build an engine from a validated configuration
    ///
    /// Validates the configuration, seeds the roster in order, and starts
    /// the round-robin cursor at the beginning of the rotation.
    pub fn new(config: CallCenterConfig) -> Result<Self> {
        config.validate()?;

        let registry = AgentRegistry::from_seeds(config.agents.seed.iter().cloned())?;
        info!(
            "🏢 Call center engine '{}' ready with {} agents",
            config.general.name,
            registry.len()
        );

        Ok(Self {
            config,
            registry,
            round_robin: RoundRobinSelector::new(),
            least_loaded: LeastLoadedSelector::new(),
        })
    }

    /// The configuration this engine was built from
    pub fn config(&self) -> &CallCenterConfig {
        &self.config
    }

    /// Snapshot of every agent, in registry order
    pub fn agents(&self) -> Vec<Agent> {
        self.registry.iter().cloned().collect()
    }

    /// Snapshot of a single agent by id
    pub fn agent(&self, id: &AgentId) -> Option<Agent> {
        self.registry.get(id).cloned()
    }

    /// Agents currently eligible for assignment, in registry order
    ///
    /// Pure read with no side effects; the result may be empty. Eligibility
    /// means active, available, and under capacity, evaluated now.
    pub fn eligible_agents(&self) -> Vec<Agent> {
        self.registry.eligible_agents().into_iter().cloned().collect()
    }

    /// Assign a call using the configured default strategy
    ///
    /// Returns `None` when no agent is eligible; callers decide the
    /// fallback (typically leaving the call unassigned).
    pub fn assign(&mut self) -> Option<Agent> {
        match self.config.routing.default_strategy {
            RoutingStrategy::RoundRobin => self.assign_round_robin(),
            RoutingStrategy::LeastLoaded => self.assign_least_loaded(None),
        }
    }

    /// Assign a call by round robin over the eligible set
    ///
    /// The eligible set is computed at call time and the cursor rotates
    /// over that subsequence, not over the full roster. The selected
    /// agent's `current_calls` goes up by one; every other agent is
    /// untouched. Returns the selected agent's post-assignment snapshot,
    /// or `None` when nobody is eligible (no state changes in that case).
    pub fn assign_round_robin(&mut self) -> Option<Agent> {
        let eligible = self.registry.eligible_agents();
        let index = match self.round_robin.select(&eligible) {
            Some(i) => i,
            None => {
                info!("📵 Round robin assignment: no eligible agents");
                return None;
            }
        };

        let id = eligible[index].id.clone();
        drop(eligible);

        // Eligibility was established in this same uninterrupted step,
        // so the capacity-checked increment cannot refuse.
        let agent = self.registry.increment_calls(&id).ok()?.clone();
        info!(
            "📞 Round robin assigned call to {} ({}/{})",
            agent.name, agent.current_calls, agent.max_calls
        );
        Some(agent)
    }

    /// Assign a call to the least-loaded eligible agent
    ///
    /// Ties break toward the earliest agent in registry order. The `skill`
    /// hint is accepted for interface compatibility with future skill-based
    /// routing and is currently ignored: the eligible set is never filtered
    /// by it. Returns the post-assignment snapshot, or `None` when nobody
    /// is eligible.
    pub fn assign_least_loaded(&mut self, skill: Option<&str>) -> Option<Agent> {
        if let Some(skill) = skill {
            debug!("🎯 Skill hint '{}' ignored; skill-based routing is not in effect", skill);
        }

        let eligible = self.registry.eligible_agents();
        let index = match self.least_loaded.select(&eligible) {
            Some(i) => i,
            None => {
                info!("📵 Least-loaded assignment: no eligible agents");
                return None;
            }
        };

        let id = eligible[index].id.clone();
        drop(eligible);

        let agent = self.registry.increment_calls(&id).ok()?.clone();
        info!(
            "📞 Least-loaded assigned call to {} ({}/{})",
            agent.name, agent.current_calls, agent.max_calls
        );
        Some(agent)
    }

    /// Release one call from an agent on teardown
    ///
    /// Decrements the agent's load, floored at zero, and leaves their
    /// availability toggle alone. Unknown ids are a silent no-op: release
    /// is best-effort cleanup and stale ids are expected.
    pub fn release(&mut self, id: &AgentId) {
        if self.registry.decrement_calls(id) {
            if let Some(agent) = self.registry.get(id) {
                info!("📴 Released call from {} ({}/{})", agent.name, agent.current_calls, agent.max_calls);
            }
        }
    }

    /// Flip an agent's availability toggle
    ///
    /// Availability is orthogonal to load: the call counter is neither
    /// checked nor altered. Unknown ids are a silent no-op.
    pub fn toggle_availability(&mut self, id: &AgentId) {
        if let Some(now_available) = self.registry.toggle_availability(id) {
            info!(
                "🔀 Agent {} is now {}",
                id,
                if now_available { "available" } else { "unavailable" }
            );
        }
    }

    /// Atomically move one call from one agent to another
    ///
    /// The target must exist, be available, and have spare capacity, all
    /// checked against current state; any violation returns
    /// [`CallCenterError::TargetUnavailable`] with no mutation at all.
    ///
    /// The source is deliberately not validated: it may be unknown (no-op
    /// decrement) or already at zero (floored). Callers are expected to
    /// invoke this only when a call is known to be assigned to `from`.
    ///
    /// On success both counters move together and the target's
    /// post-transfer snapshot is returned.
    pub fn reassign(&mut self, from: &AgentId, to: &AgentId) -> Result<Agent> {
        let target = match self.registry.get(to) {
            Some(agent) => agent,
            None => {
                warn!("🔁 Reassign rejected: target agent {} not found", to);
                return Err(CallCenterError::target_unavailable(format!(
                    "Target agent {} is not registered",
                    to
                )));
            }
        };

        if !target.is_available {
            warn!("🔁 Reassign rejected: target agent {} is unavailable", to);
            return Err(CallCenterError::target_unavailable(format!(
                "Target agent {} is not available for assignment",
                to
            )));
        }
        if target.current_calls >= target.max_calls {
            warn!(
                "🔁 Reassign rejected: target agent {} is at capacity ({}/{})",
                to, target.current_calls, target.max_calls
            );
            return Err(CallCenterError::target_unavailable(format!(
                "Target agent {} is at capacity ({}/{})",
                to, target.current_calls, target.max_calls
            )));
        }

        // Preconditions hold and nothing can interleave before the two
        // counter moves below, so the transfer is atomic.
        self.registry.decrement_calls(from);
        let agent = self.registry.increment_calls(to)?.clone();

        info!(
            "🔁 Reassigned call from {} to {} ({}/{})",
            from, agent.name, agent.current_calls, agent.max_calls
        );
        Ok(agent)
    }

    /// Agents a call could be reassigned to, excluding the current holder
    ///
    /// Mirrors the reassign precondition exactly: available and under
    /// capacity. `is_active` is intentionally not consulted here, matching
    /// what `reassign` itself checks.
    pub fn reassignment_candidates(&self, exclude: &AgentId) -> Vec<Agent> {
        self.registry
            .iter()
            .filter(|a| &a.id != exclude && a.is_available && a.current_calls < a.max_calls)
            .cloned()
            .collect()
    }

    /// Current engine statistics for the dashboard header
    pub fn stats(&self) -> EngineStats {
        let total_agents = self.registry.len();
        let available_agents = self.registry.eligible_agents().len();
        let active_calls: u64 = self.registry.iter().map(|a| a.current_calls as u64).sum();
        let total_capacity: u64 = self.registry.iter().map(|a| a.max_calls as u64).sum();

        EngineStats {
            total_agents,
            available_agents,
            busy_agents: total_agents - available_agents,
            active_calls,
            total_capacity,
        }
    }
}

/// Snapshot of the engine's aggregate state
///
/// Matches the overview cards the dashboard renders: totals, the count of
/// agents ready for assignment right now, and the live call volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
    /// Total number of agents in the roster
    pub total_agents: usize,

    /// Agents eligible for a new assignment right now
    pub available_agents: usize,

    /// Agents not currently eligible (inactive, toggled off, or full)
    pub busy_agents: usize,

    /// Sum of calls assigned across all agents
    pub active_calls: u64,

    /// Sum of call capacity across all agents
    pub total_capacity: u64,
}
