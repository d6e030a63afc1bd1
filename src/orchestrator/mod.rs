//! # Call Center Orchestration Module
//!
//! Home of [`CallCenterEngine`], the component that ties the agent
//! registry to the assignment policies and exposes the callable contract
//! the presentation layer consumes:
//!
//! | Operation | Input | Output |
//! |---|---|---|
//! | `eligible_agents` | — | agents in registry order |
//! | `assign_round_robin` | — | `Option<Agent>` |
//! | `assign_least_loaded` | optional skill hint (ignored) | `Option<Agent>` |
//! | `release` | agent id | — |
//! | `toggle_availability` | agent id | — |
//! | `reassign` | from id, to id | target `Agent` or failure |
//!
//! The engine owns the mutable agent state exclusively. It does not own
//! call records: correlating which call maps to which agent, and invoking
//! `release`/`reassign` at call teardown or on a manual reassignment
//! request, is the caller's job.
//!
//! ## Failure signaling
//!
//! An empty eligible set is signaled as `None` from the assignment
//! operations, not as an error. `reassign` against a missing, unavailable,
//! or full target returns [`CallCenterError::TargetUnavailable`] and is
//! guaranteed not to have mutated anything. `release` and
//! `toggle_availability` on unknown ids are silent no-ops, matching their
//! fire-and-forget role at call teardown.
//!
//! ## Concurrency
//!
//! [`CallCenterEngine`] itself is single-threaded by construction
//! (`&mut self` operations). [`SharedEngine`] is the multi-threaded
//! wrapper: one mutex around the engine, held for each whole operation so
//! the eligibility scan and the mutation it feeds are never split.
//!
//! [`CallCenterError::TargetUnavailable`]: crate::error::CallCenterError::TargetUnavailable

pub mod core;
pub mod handle;

pub use core::{CallCenterEngine, EngineStats};
pub use handle::SharedEngine;
