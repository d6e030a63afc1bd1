//! Agent management module for the call center
//!
//! This module owns the roster of call center agents and everything the
//! assignment engine knows about them: identity, role, availability, and
//! the live call-load counter.
//!
//! # Core Concepts
//!
//! ## Eligibility
//!
//! An agent is **eligible** for a new assignment iff all three hold:
//!
//! 1. `is_active` — the agent is a valid assignment target at all
//! 2. `is_available` — the agent (or a supervisor) has toggled them in
//! 3. `current_calls < max_calls` — they have spare capacity
//!
//! The three conditions are orthogonal. Toggling availability never touches
//! the load counter, and releasing a call never touches availability.
//!
//! ## Load counter state machine
//!
//! An agent's load is an integer in `[0, max_calls]`. The only transitions
//! are `+1` on successful assignment (or reassignment-in) and `-1` floored
//! at zero on release (or reassignment-out). No other operation moves it.
//!
//! # Examples
//!
//! ```
//! use callcenter_engine::agent::{AgentRegistry, AgentSeed, AgentRole};
//!
//! # fn example() -> callcenter_engine::Result<()> {
//! let registry = AgentRegistry::from_seeds([
//!     AgentSeed {
//!         id: "alice".into(),
//!         name: "Alice Johnson".to_string(),
//!         email: "alice@company.com".to_string(),
//!         role: AgentRole::Agent,
//!         max_calls: 5,
//!         available: true,
//!         active: true,
//!     },
//! ])?;
//!
//! for agent in registry.eligible_agents() {
//!     println!("{} has {} free slots", agent.name, agent.free_slots());
//! }
//! # Ok(())
//! # }
//! ```

pub mod registry;
pub mod types;

pub use registry::AgentRegistry;
pub use types::{Agent, AgentId, AgentRole, AgentSeed};
