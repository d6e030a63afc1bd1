//! # Call Routing Module
//!
//! Assignment policies for distributing incoming calls across the agent
//! roster. The engine supports two strategies that share one interface:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Assignment Request                        │
//! └─────────────────────────┬───────────────────────────────────┘
//!                           │
//! ┌─────────────────────────▼───────────────────────────────────┐
//! │           Eligible set (registry order, call time)          │
//! │       is_active ∧ is_available ∧ current < max              │
//! └─────────────────────────┬───────────────────────────────────┘
//!               ┌───────────┴───────────┐
//!     ┌─────────▼─────────┐   ┌─────────▼─────────┐
//!     │    Round Robin    │   │   Least Loaded    │
//!     │ positional cursor │   │ first strict min  │
//!     └───────────────────┘   └───────────────────┘
//! ```
//!
//! ## Round Robin
//!
//! A single process-wide cursor rotates over the eligible subsequence as
//! filtered at call time. With a static eligible set of size `n`, `k`
//! consecutive assignments hit every agent `⌊k/n⌋` or `⌈k/n⌉` times. When
//! the eligible set changes size between calls the rotation point can skip
//! or repeat an agent; that drift is accepted product behavior and is
//! documented on [`RoundRobinSelector`].
//!
//! ## Least Loaded
//!
//! Picks the eligible agent with the lowest `current_calls`, breaking ties
//! toward the earliest agent in registry order. Callers may pass a skill
//! hint for interface compatibility; skill-based routing is out of scope
//! for the current policy and the hint is ignored.
//!
//! ## Extending
//!
//! Both policies implement [`AgentSelector`], which is the seam to swap in
//! a different rotation scheme (for example an id-keyed cursor that is
//! stable under eligibility churn) without touching the engine.
//!
//! # Examples
//!
//! ```
//! use callcenter_engine::routing::{AgentSelector, RoundRobinSelector};
//! use callcenter_engine::agent::{Agent, AgentRole};
//!
//! let alice = Agent::new("alice", "Alice Johnson", "alice@company.com", AgentRole::Agent, 5);
//! let bob = Agent::new("bob", "Bob Wilson", "bob@company.com", AgentRole::Agent, 4);
//! let eligible = vec![&alice, &bob];
//!
//! let mut selector = RoundRobinSelector::new();
//! assert_eq!(selector.select(&eligible), Some(0));
//! assert_eq!(selector.select(&eligible), Some(1));
//! ```

pub mod strategies;

pub use strategies::{AgentSelector, LeastLoadedSelector, RoundRobinSelector, RoutingStrategy};
