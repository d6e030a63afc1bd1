//! # Call Center Engine
//!
//! The agent registry and call assignment engine behind a call-center CRM
//! dashboard. This crate owns the decision logic the dashboard renders:
//! which agents can take a call right now, who gets the next call under
//! round-robin or least-loaded distribution, and how calls are released
//! and reassigned without ever breaking an agent's capacity ceiling.
//!
//! ## Overview
//!
//! - **Agent Registry**: an insertion-ordered roster seeded once at
//!   startup, with per-agent availability and load tracking
//! - **Round-Robin Assignment**: a persistent cursor rotating over the
//!   eligible set, fair while the eligible set is static
//! - **Least-Loaded Assignment**: lowest current call count wins, earliest
//!   roster position breaking ties
//! - **Release & Reassignment**: floored release on call teardown and an
//!   atomic one-call transfer between agents
//! - **Statistics**: the aggregate counts the dashboard's overview cards
//!   display
//!
//! Everything else a call-center CRM does — call records, contacts,
//! follow-ups, rendering — is a collaborator that calls into this engine
//! and displays its results. The engine holds no call records and talks to
//! no network or database; its state lives in memory and resets on
//! restart.
//!
//! ## Architecture
//!
//! ```text
//!  ┌─────────────────────────────────────────────────┐
//!  │              Presentation layer                 │
//!  │   (dashboard, reassign dialog, availability     │
//!  │        switches — out of scope here)            │
//!  └───────────────────────┬─────────────────────────┘
//!                          │ assign / release / toggle / reassign
//!  ┌───────────────────────▼─────────────────────────┐
//!  │               CallCenterEngine                  │
//!  │  ┌───────────────┐       ┌───────────────────┐  │
//!  │  │ AgentRegistry │◄──────│  AgentSelectors   │  │
//!  │  │  Vec + id map │       │ round robin cursor│  │
//!  │  └───────────────┘       │ least-loaded scan │  │
//!  │                          └───────────────────┘  │
//!  └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use callcenter_engine::prelude::*;
//!
//! # fn example() -> Result<()> {
//! // The default configuration seeds a four-agent demo roster.
//! let config = CallCenterConfig::default();
//! let mut engine = CallCenterEngine::new(config)?;
//!
//! // Assign a call; absence means nobody is eligible right now.
//! if let Some(agent) = engine.assign_round_robin() {
//!     println!("Assigned call to {} ({}/{})", agent.name, agent.current_calls, agent.max_calls);
//! } else {
//!     println!("No available agents");
//! }
//!
//! // Later, on call teardown:
//! engine.release(&"alice".into());
//! # Ok(())
//! # }
//! ```
//!
//! ## Reassignment
//!
//! ```
//! use callcenter_engine::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let mut engine = CallCenterEngine::new(CallCenterConfig::default())?;
//! let alice = engine.assign_least_loaded(None).expect("roster has eligible agents");
//!
//! // Move that call to Bob; the transfer either applies to both sides
//! // or not at all.
//! match engine.reassign(&alice.id, &"bob".into()) {
//!     Ok(bob) => println!("Call reassigned to {}", bob.name),
//!     Err(CallCenterError::TargetUnavailable(msg)) => eprintln!("{}", msg),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Threading
//!
//! [`CallCenterEngine`] is a plain owned value with `&mut self`
//! operations — construct isolated instances freely, one per test. When
//! multiple threads need the same roster, use
//! [`SharedEngine`](orchestrator::SharedEngine): it wraps the engine in a
//! mutex held for each whole operation, so every eligibility scan and the
//! mutation it feeds stay one critical section.
//!
//! ## Key Modules
//!
//! - [`orchestrator`]: the engine itself and the thread-safe handle
//! - [`agent`]: agent types and the ordered registry
//! - [`routing`]: the assignment strategies behind one selector trait
//! - [`config`]: configuration and the startup seed roster
//! - [`error`]: error types and the crate-wide `Result`

// Core modules
pub mod config;
pub mod error;

// Call center functionality modules
pub mod agent;
pub mod orchestrator;
pub mod routing;

// Re-exports for convenience
pub use config::CallCenterConfig;
pub use error::{CallCenterError, Result};
pub use orchestrator::{CallCenterEngine, EngineStats, SharedEngine};

/// Prelude module for convenient imports
///
/// Import this module to get access to the most commonly used types:
///
/// ```
/// use callcenter_engine::prelude::*;
/// ```
pub mod prelude {
    //! Commonly used types for call center applications

    pub use crate::{CallCenterConfig, CallCenterError, Result};

    pub use crate::orchestrator::{CallCenterEngine, EngineStats, SharedEngine};

    // Configuration types
    pub use crate::config::{AgentConfig, GeneralConfig, RoutingConfig};

    // Agent types
    pub use crate::agent::{Agent, AgentId, AgentRegistry, AgentRole, AgentSeed};

    // Routing types
    pub use crate::routing::{
        AgentSelector, LeastLoadedSelector, RoundRobinSelector, RoutingStrategy,
    };

    // Common external types
    pub use chrono::{DateTime, Utc};
}
