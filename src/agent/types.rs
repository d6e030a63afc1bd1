//! Core types for agent management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent identifier type for strongly-typed agent references
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        AgentId(s)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        AgentId(s.to_string())
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Agent role within the call center
///
/// Roles are informational only: they are displayed by the presentation
/// layer but never consulted by the assignment policies. A supervisor with
/// spare capacity is as valid an assignment target as a regular agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// Regular call-handling agent
    Agent,

    /// Team supervisor, may also take calls
    Supervisor,

    /// System administrator
    Admin,
}

impl std::str::FromStr for AgentRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "agent" => Ok(AgentRole::Agent),
            "supervisor" => Ok(AgentRole::Supervisor),
            "admin" => Ok(AgentRole::Admin),
            _ => Err(format!("Unknown agent role: {}", s)),
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentRole::Agent => write!(f, "agent"),
            AgentRole::Supervisor => write!(f, "supervisor"),
            AgentRole::Admin => write!(f, "admin"),
        }
    }
}

/// Agent profile and live assignment state
///
/// Combines the display attributes shown by the dashboard with the two
/// mutable fields owned exclusively by the engine: `current_calls` and
/// `is_available`. After every engine operation the invariant
/// `0 <= current_calls <= max_calls` holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique, stable agent identifier
    pub id: AgentId,

    /// Human-readable agent name
    pub name: String,

    /// Contact email for display
    pub email: String,

    /// Role within the call center (informational only)
    pub role: AgentRole,

    /// Whether the agent is a valid assignment target at all
    ///
    /// Distinct from `is_available`: an inactive agent is never eligible,
    /// regardless of their availability toggle.
    pub is_active: bool,

    /// Availability toggle set by the agent or a supervisor
    ///
    /// Independent of load: an available agent at capacity is still
    /// ineligible for new assignments.
    pub is_available: bool,

    /// Number of calls presently assigned to this agent
    pub current_calls: u32,

    /// Capacity ceiling, always greater than zero
    pub max_calls: u32,

    /// When this agent's state last changed through the engine
    pub last_activity: DateTime<Utc>,
}

impl Agent {
    /// Whether this agent can receive a new assignment right now
    ///
    /// An agent is eligible iff they are active, available, and under
    /// capacity. All three conditions are re-evaluated at every assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use callcenter_engine::agent::{Agent, AgentRole};
    ///
    /// let mut agent = Agent::new("alice", "Alice Johnson", "alice@company.com", AgentRole::Agent, 5);
    /// assert!(agent.is_eligible());
    ///
    /// agent.current_calls = 5;
    /// assert!(!agent.is_eligible());
    /// ```
    pub fn is_eligible(&self) -> bool {
        self.is_active && self.is_available && self.current_calls < self.max_calls
    }

    /// Remaining call slots before this agent hits capacity
    pub fn free_slots(&self) -> u32 {
        self.max_calls.saturating_sub(self.current_calls)
    }

    /// Create a new active, available agent with zero assigned calls
    pub fn new(
        id: impl Into<AgentId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: AgentRole,
        max_calls: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            is_active: true,
            is_available: true,
            current_calls: 0,
            max_calls,
            last_activity: Utc::now(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Roster entry used to seed the registry at startup
///
/// Seeds are what configuration files carry: everything an [`Agent`] has
/// except the live load counter, which always starts at zero. The registry
/// is built once from the configured seed list and afterwards mutated only
/// through engine operations; nothing is persisted across restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSeed {
    /// Unique agent identifier
    pub id: AgentId,

    /// Human-readable agent name
    pub name: String,

    /// Contact email for display
    pub email: String,

    /// Role within the call center
    pub role: AgentRole,

    /// Capacity ceiling for this agent
    pub max_calls: u32,

    /// Initial availability toggle (defaults to available)
    #[serde(default = "default_true")]
    pub available: bool,

    /// Whether the agent is active at all (defaults to active)
    #[serde(default = "default_true")]
    pub active: bool,
}

impl From<AgentSeed> for Agent {
    fn from(seed: AgentSeed) -> Self {
        Agent {
            id: seed.id,
            name: seed.name,
            email: seed.email,
            role: seed.role,
            is_active: seed.active,
            is_available: seed.available,
            current_calls: 0,
            max_calls: seed.max_calls,
            last_activity: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_requires_all_three_conditions() {
        let mut agent = Agent::new("alice", "Alice Johnson", "alice@company.com", AgentRole::Agent, 5);
        assert!(agent.is_eligible());

        agent.is_available = false;
        assert!(!agent.is_eligible());

        agent.is_available = true;
        agent.is_active = false;
        assert!(!agent.is_eligible());

        agent.is_active = true;
        agent.current_calls = agent.max_calls;
        assert!(!agent.is_eligible());
    }

    #[test]
    fn role_round_trips_through_strings() {
        for role in [AgentRole::Agent, AgentRole::Supervisor, AgentRole::Admin] {
            let parsed: AgentRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("manager".parse::<AgentRole>().is_err());
    }

    #[test]
    fn seed_starts_with_zero_calls() {
        let seed = AgentSeed {
            id: "charlie".into(),
            name: "Charlie Brown".to_string(),
            email: "charlie@company.com".to_string(),
            role: AgentRole::Agent,
            max_calls: 3,
            available: false,
            active: true,
        };

        let agent: Agent = seed.into();
        assert_eq!(agent.current_calls, 0);
        assert!(!agent.is_available);
        assert!(agent.is_active);
    }

    #[test]
    fn seed_defaults_apply_when_fields_omitted() {
        let seed: AgentSeed = serde_json::from_str(
            r#"{"id": "bob", "name": "Bob Wilson", "email": "bob@company.com",
                "role": "agent", "max_calls": 4}"#,
        )
        .unwrap();

        assert!(seed.available);
        assert!(seed.active);
    }
}
