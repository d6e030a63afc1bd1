//! Integration tests for the call assignment engine
//!
//! These tests exercise the engine end to end through its public API:
//! eligibility, both assignment policies, release, availability toggles,
//! and atomic reassignment.

use anyhow::Result;
use callcenter_engine::prelude::*;

fn seed(id: &str, role: AgentRole, max_calls: u32, available: bool) -> AgentSeed {
    AgentSeed {
        id: id.into(),
        name: format!("Agent {}", id),
        email: format!("{}@company.com", id),
        role,
        max_calls,
        available,
        active: true,
    }
}

fn engine_with(seeds: Vec<AgentSeed>) -> Result<CallCenterEngine> {
    let mut config = CallCenterConfig::default();
    config.agents.seed = seeds;
    Ok(CallCenterEngine::new(config)?)
}

fn default_engine() -> Result<CallCenterEngine> {
    Ok(CallCenterEngine::new(CallCenterConfig::default())?)
}

#[test]
fn eligible_agents_follow_registry_order() -> Result<()> {
    let engine = default_engine()?;

    // Charlie is seeded unavailable and drops out; everyone else appears
    // in roster order.
    let ids: Vec<String> = engine.eligible_agents().iter().map(|a| a.id.to_string()).collect();
    assert_eq!(ids, ["alice", "bob", "diana"]);
    Ok(())
}

#[test]
fn least_loaded_prefers_lowest_count_and_skips_unavailable() -> Result<()> {
    // Alice available at 0/5, Bob available with one call at 1/4,
    // Charlie unavailable at 0/3.
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 5, true),
        seed("bob", AgentRole::Agent, 4, true),
        seed("charlie", AgentRole::Agent, 3, false),
    ])?;
    engine.reassign(&"nobody".into(), &"bob".into())?; // push Bob to 1

    let assigned = engine.assign_least_loaded(None).expect("eligible agents exist");
    assert_eq!(assigned.id, "alice".into());
    assert_eq!(assigned.current_calls, 1);
    assert_eq!(engine.agent(&"alice".into()).unwrap().current_calls, 1);
    assert_eq!(engine.agent(&"charlie".into()).unwrap().current_calls, 0);
    Ok(())
}

#[test]
fn least_loaded_breaks_ties_toward_earliest_seed() -> Result<()> {
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 5, true),
        seed("bob", AgentRole::Agent, 5, true),
    ])?;

    // Both at zero: the earlier roster entry wins the tie.
    assert_eq!(engine.assign_least_loaded(None).unwrap().id, "alice".into());
    // Now alice=1, bob=0: bob is strictly lowest.
    assert_eq!(engine.assign_least_loaded(None).unwrap().id, "bob".into());
    Ok(())
}

#[test]
fn least_loaded_ignores_skill_hint() -> Result<()> {
    let mut engine = default_engine()?;

    let with_hint = engine.assign_least_loaded(Some("billing")).unwrap();
    engine.release(&with_hint.id);
    let without_hint = engine.assign_least_loaded(None).unwrap();

    // The hint must not change the selection.
    assert_eq!(with_hint.id, without_hint.id);
    Ok(())
}

#[test]
fn round_robin_returns_none_when_everyone_is_out() -> Result<()> {
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 5, false),
        seed("bob", AgentRole::Agent, 4, false),
    ])?;

    assert!(engine.assign_round_robin().is_none());
    assert!(engine.assign_least_loaded(None).is_none());

    // Absence means no state mutation at all.
    for agent in engine.agents() {
        assert_eq!(agent.current_calls, 0);
    }
    Ok(())
}

#[test]
fn round_robin_cycles_a_static_pair_and_wraps() -> Result<()> {
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 5, true),
        seed("bob", AgentRole::Agent, 5, true),
    ])?;

    // Two calls with a two-agent eligible set: A then B, and the cursor
    // is back at the start for the third.
    assert_eq!(engine.assign_round_robin().unwrap().id, "alice".into());
    assert_eq!(engine.assign_round_robin().unwrap().id, "bob".into());
    assert_eq!(engine.assign_round_robin().unwrap().id, "alice".into());
    Ok(())
}

#[test]
fn round_robin_distributes_evenly_over_static_set() -> Result<()> {
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 10, true),
        seed("bob", AgentRole::Agent, 10, true),
        seed("carol", AgentRole::Agent, 10, true),
    ])?;

    // 7 assignments over 3 agents: each gets ⌊7/3⌋ or ⌈7/3⌉.
    for _ in 0..7 {
        assert!(engine.assign_round_robin().is_some());
    }
    for agent in engine.agents() {
        assert!(agent.current_calls == 2 || agent.current_calls == 3);
    }
    Ok(())
}

#[test]
fn round_robin_never_selects_an_ineligible_agent() -> Result<()> {
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 2, true),
        seed("bob", AgentRole::Agent, 2, true),
        seed("charlie", AgentRole::Agent, 2, false),
    ])?;

    // Drain every slot; charlie must never be picked and nobody may
    // exceed capacity.
    while let Some(agent) = engine.assign_round_robin() {
        assert_ne!(agent.id, "charlie".into());
        assert!(agent.current_calls <= agent.max_calls);
    }

    let stats = engine.stats();
    assert_eq!(stats.active_calls, 4);
    assert_eq!(stats.available_agents, 0);
    Ok(())
}

#[test]
fn release_floors_at_zero_and_ignores_unknown_ids() -> Result<()> {
    let mut engine = default_engine()?;
    let alice: AgentId = "alice".into();

    // Repeated releases on an idle agent stay at zero.
    for _ in 0..5 {
        engine.release(&alice);
    }
    assert_eq!(engine.agent(&alice).unwrap().current_calls, 0);

    // Unknown ids are tolerated silently.
    engine.release(&"ghost".into());

    // Release really undoes an assignment.
    let assigned = engine.assign_round_robin().unwrap();
    engine.release(&assigned.id);
    assert_eq!(engine.agent(&assigned.id).unwrap().current_calls, 0);
    Ok(())
}

#[test]
fn toggle_flips_availability_and_nothing_else() -> Result<()> {
    let mut engine = default_engine()?;
    let bob: AgentId = "bob".into();

    // Give Bob a call first so we can see the counter survive the toggle.
    engine.reassign(&"nobody".into(), &bob)?;
    let before = engine.agent(&bob).unwrap();
    assert!(before.is_available);
    assert_eq!(before.current_calls, 1);

    engine.toggle_availability(&bob);
    let after = engine.agent(&bob).unwrap();
    assert!(!after.is_available);
    assert_eq!(after.current_calls, 1);
    assert_eq!(after.is_active, before.is_active);

    // Toggling back restores eligibility.
    engine.toggle_availability(&bob);
    assert!(engine.agent(&bob).unwrap().is_available);

    // Unknown ids are a silent no-op.
    engine.toggle_availability(&"ghost".into());
    Ok(())
}

#[test]
fn unavailable_agents_are_skipped_until_toggled_back() -> Result<()> {
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 5, true),
        seed("bob", AgentRole::Agent, 5, true),
    ])?;

    engine.toggle_availability(&"alice".into());
    for _ in 0..3 {
        assert_eq!(engine.assign_round_robin().unwrap().id, "bob".into());
    }

    engine.toggle_availability(&"alice".into());
    let ids: Vec<String> = engine.eligible_agents().iter().map(|a| a.id.to_string()).collect();
    assert_eq!(ids, ["alice", "bob"]);
    Ok(())
}

#[test]
fn reassign_moves_one_call_between_agents() -> Result<()> {
    let mut engine = default_engine()?;
    let alice = engine.assign_round_robin().unwrap();
    assert_eq!(alice.current_calls, 1);

    let bob = engine.reassign(&alice.id, &"bob".into())?;
    assert_eq!(bob.id, "bob".into());
    assert_eq!(bob.current_calls, 1);
    assert_eq!(engine.agent(&alice.id).unwrap().current_calls, 0);
    Ok(())
}

#[test]
fn reassign_to_full_target_fails_without_mutation() -> Result<()> {
    // Diana at 8/8 — completely full.
    let mut engine = engine_with(vec![
        seed("alice", AgentRole::Agent, 5, true),
        seed("diana", AgentRole::Supervisor, 8, true),
    ])?;
    for _ in 0..8 {
        engine.reassign(&"nobody".into(), &"diana".into())?;
    }
    engine.reassign(&"nobody".into(), &"alice".into())?;

    let before: Vec<(AgentId, u32)> =
        engine.agents().into_iter().map(|a| (a.id, a.current_calls)).collect();

    let err = engine.reassign(&"alice".into(), &"diana".into()).unwrap_err();
    assert!(matches!(err, CallCenterError::TargetUnavailable(_)));
    assert!(err.to_string().contains("diana"));

    let after: Vec<(AgentId, u32)> =
        engine.agents().into_iter().map(|a| (a.id, a.current_calls)).collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn reassign_to_unavailable_or_missing_target_fails_cleanly() -> Result<()> {
    let mut engine = default_engine()?;
    engine.reassign(&"nobody".into(), &"alice".into())?;

    // Charlie is seeded unavailable.
    let err = engine.reassign(&"alice".into(), &"charlie".into()).unwrap_err();
    assert!(matches!(err, CallCenterError::TargetUnavailable(_)));

    let err = engine.reassign(&"alice".into(), &"ghost".into()).unwrap_err();
    assert!(matches!(err, CallCenterError::TargetUnavailable(_)));

    // The source kept its call both times.
    assert_eq!(engine.agent(&"alice".into()).unwrap().current_calls, 1);
    Ok(())
}

#[test]
fn reassign_from_unknown_source_still_credits_target() -> Result<()> {
    // The source side is deliberately permissive: unknown ids no-op on
    // the decrement while the target still receives the call.
    let mut engine = default_engine()?;

    let bob = engine.reassign(&"ghost".into(), &"bob".into())?;
    assert_eq!(bob.current_calls, 1);
    Ok(())
}

#[test]
fn capacity_invariant_holds_through_a_mixed_workload() -> Result<()> {
    let mut engine = default_engine()?;

    for round in 0..50 {
        match round % 5 {
            0 | 1 => {
                engine.assign_round_robin();
            }
            2 => {
                engine.assign_least_loaded(None);
            }
            3 => {
                if let Some(agent) = engine.agents().iter().max_by_key(|a| a.current_calls) {
                    engine.release(&agent.id);
                }
            }
            _ => {
                engine.toggle_availability(&"bob".into());
            }
        }

        for agent in engine.agents() {
            assert!(agent.current_calls <= agent.max_calls, "{} over capacity", agent.id);
        }
    }
    Ok(())
}

#[test]
fn stats_track_assignments_and_releases() -> Result<()> {
    let mut engine = default_engine()?;
    assert_eq!(engine.stats().active_calls, 0);

    let a = engine.assign_round_robin().unwrap();
    let b = engine.assign_round_robin().unwrap();
    assert_eq!(engine.stats().active_calls, 2);

    engine.release(&a.id);
    engine.release(&b.id);
    assert_eq!(engine.stats().active_calls, 0);
    Ok(())
}

#[test]
fn shared_engine_exposes_the_same_contract() -> Result<()> {
    let engine = SharedEngine::new(CallCenterConfig::default())?;

    let agent = engine.assign_round_robin().expect("roster has eligible agents");
    assert_eq!(engine.stats().active_calls, 1);

    engine.release(&agent.id);
    assert_eq!(engine.stats().active_calls, 0);

    let err = engine.reassign(&"alice".into(), &"charlie".into()).unwrap_err();
    assert!(matches!(err, CallCenterError::TargetUnavailable(_)));
    Ok(())
}
