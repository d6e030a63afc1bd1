use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::agent::{AgentRole, AgentSeed};
use crate::error::{CallCenterError, Result};
use crate::routing::RoutingStrategy;

/// Call center engine configuration
///
/// Everything the engine needs at startup: system limits, the seed roster
/// of agents, and the default assignment strategy. The default
/// configuration mirrors the demo deployment (a four-agent team with one
/// supervisor), so a config file is only needed to change something.
///
/// # Configuration Sections
///
/// - [`general`](CallCenterConfig::general): engine name and system limits
/// - [`agents`](CallCenterConfig::agents): agent defaults and the seed roster
/// - [`routing`](CallCenterConfig::routing): default assignment strategy
///
/// # Examples
///
/// ## Default Configuration
///
/// ```
/// use callcenter_engine::config::CallCenterConfig;
///
/// let config = CallCenterConfig::default();
/// assert_eq!(config.agents.seed.len(), 4);
/// assert!(config.validate().is_ok());
/// ```
///
/// ## Custom Configuration
///
/// ```
/// use callcenter_engine::config::CallCenterConfig;
/// use callcenter_engine::routing::RoutingStrategy;
///
/// let mut config = CallCenterConfig::default();
/// config.routing.default_strategy = RoutingStrategy::LeastLoaded;
/// config.general.max_agents = 50;
///
/// config.validate().expect("Configuration should be valid");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallCenterConfig {
    /// General engine settings and system limits
    #[serde(default)]
    pub general: GeneralConfig,

    /// Agent defaults and the startup seed roster
    #[serde(default)]
    pub agents: AgentConfig,

    /// Assignment strategy configuration
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl Default for CallCenterConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            agents: AgentConfig::default(),
            routing: RoutingConfig::default(),
        }
    }
}

impl CallCenterConfig {
    /// Load configuration from a JSON file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use callcenter_engine::config::CallCenterConfig;
    ///
    /// # fn example() -> callcenter_engine::Result<()> {
    /// let config = CallCenterConfig::from_json_file("callcenter.json")?;
    /// config.validate()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CallCenterError::configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            CallCenterError::configuration(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Validate the configuration
    ///
    /// Checks the limits and the seed roster before the engine is built,
    /// so startup fails fast with a readable message instead of producing
    /// an engine that can never assign a call.
    pub fn validate(&self) -> Result<()> {
        if self.general.max_agents == 0 {
            return Err(CallCenterError::configuration("general.max_agents must be greater than 0"));
        }
        if self.agents.seed.len() > self.general.max_agents {
            return Err(CallCenterError::configuration(format!(
                "Seed roster has {} agents but general.max_agents is {}",
                self.agents.seed.len(),
                self.general.max_agents
            )));
        }
        for seed in &self.agents.seed {
            if seed.max_calls == 0 {
                return Err(CallCenterError::configuration(format!(
                    "Seed agent {} must have max_calls > 0",
                    seed.id
                )));
            }
        }
        Ok(())
    }
}

/// General engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Display name for this engine instance
    pub name: String,

    /// Maximum number of agents the roster may hold
    pub max_agents: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: "call-center".to_string(),
            max_agents: 100,
        }
    }
}

/// Agent management configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agents provisioned at startup, in roster order
    ///
    /// Roster order matters: it is the order round-robin rotates over and
    /// the order least-loaded uses to break ties.
    pub seed: Vec<AgentSeed>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: default_seed_roster(),
        }
    }
}

/// Routing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Strategy applied when the caller does not pick one explicitly
    pub default_strategy: RoutingStrategy,
}

/// The demo team the engine ships with
///
/// Alice and Bob are regular agents, Charlie starts toggled unavailable,
/// and Diana is a supervisor with the largest capacity.
pub fn default_seed_roster() -> Vec<AgentSeed> {
    vec![
        AgentSeed {
            id: "alice".into(),
            name: "Alice Johnson".to_string(),
            email: "alice@company.com".to_string(),
            role: AgentRole::Agent,
            max_calls: 5,
            available: true,
            active: true,
        },
        AgentSeed {
            id: "bob".into(),
            name: "Bob Wilson".to_string(),
            email: "bob@company.com".to_string(),
            role: AgentRole::Agent,
            max_calls: 4,
            available: true,
            active: true,
        },
        AgentSeed {
            id: "charlie".into(),
            name: "Charlie Brown".to_string(),
            email: "charlie@company.com".to_string(),
            role: AgentRole::Agent,
            max_calls: 3,
            available: false,
            active: true,
        },
        AgentSeed {
            id: "diana".into(),
            name: "Diana Smith".to_string(),
            email: "diana@company.com".to_string(),
            role: AgentRole::Supervisor,
            max_calls: 8,
            available: true,
            active: true,
        },
    ]
}
