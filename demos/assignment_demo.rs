//! Scripted walkthrough of the call assignment engine
//!
//! Seeds the roster (default demo team, or one loaded from a JSON config
//! file), fires a batch of test assignments the way the dashboard's "Test
//! Round Robin" button does, then demonstrates an availability toggle, a
//! release, and a reassignment.
//!
//! ```bash
//! cargo run --example assignment_demo -- --assignments 6
//! cargo run --example assignment_demo -- --strategy least-loaded --config callcenter.json
//! ```

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use callcenter_engine::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    RoundRobin,
    LeastLoaded,
}

#[derive(Parser, Debug)]
#[command(name = "assignment_demo", about = "Exercise the call assignment engine")]
struct Args {
    /// Assignment strategy to exercise
    #[arg(long, value_enum, default_value = "round-robin")]
    strategy: Strategy,

    /// Number of test assignments to fire
    #[arg(long, default_value_t = 5)]
    assignments: usize,

    /// Optional JSON configuration file with a custom roster
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CallCenterConfig::from_json_file(path)?,
        None => CallCenterConfig::default(),
    };
    let mut engine = CallCenterEngine::new(config)?;

    print_roster(&engine);

    info!("🚀 Firing {} test assignments ({:?})", args.assignments, args.strategy);
    let mut assigned: Vec<AgentId> = Vec::new();
    for n in 1..=args.assignments {
        let picked = match args.strategy {
            Strategy::RoundRobin => engine.assign_round_robin(),
            Strategy::LeastLoaded => engine.assign_least_loaded(None),
        };
        match picked {
            Some(agent) => {
                println!(
                    "  #{:<2} → {} ({}/{})",
                    n, agent.name, agent.current_calls, agent.max_calls
                );
                assigned.push(agent.id);
            }
            None => {
                println!("  #{:<2} → no available agents", n);
            }
        }
    }

    // Flip the first agent out of the rotation and back, dashboard-style.
    if let Some(first) = engine.agents().first().map(|a| a.id.clone()) {
        engine.toggle_availability(&first);
        println!("Toggled {} unavailable; eligible now: {}", first, eligible_names(&engine));
        engine.toggle_availability(&first);
    }

    // Reassign the most recent call to the first candidate in roster order.
    if let Some(holder) = assigned.last().cloned() {
        let candidates = engine.reassignment_candidates(&holder);
        if let Some(target) = candidates.first().map(|a| a.id.clone()) {
            match engine.reassign(&holder, &target) {
                Ok(agent) => {
                    println!(
                        "Reassigned a call from {} to {} ({}/{})",
                        holder, agent.name, agent.current_calls, agent.max_calls
                    );
                    // The call now belongs to the target; tear it down there.
                    *assigned.last_mut().unwrap() = target;
                }
                Err(e) => println!("Reassignment failed: {}", e),
            }
        }
    }

    // Tear everything down.
    for id in &assigned {
        engine.release(id);
    }

    let stats = engine.stats();
    println!(
        "Final stats: {} agents, {} available, {} active calls of {} capacity",
        stats.total_agents, stats.available_agents, stats.active_calls, stats.total_capacity
    );

    Ok(())
}

fn print_roster(engine: &CallCenterEngine) {
    println!("Roster:");
    for agent in engine.agents() {
        println!(
            "  {:<10} {:<12} {}  {}/{}  {}",
            agent.id,
            format!("({})", agent.role),
            if agent.is_available { "🟢" } else { "⚪" },
            agent.current_calls,
            agent.max_calls,
            agent.email
        );
    }
}

fn eligible_names(engine: &CallCenterEngine) -> String {
    let names: Vec<String> = engine.eligible_agents().iter().map(|a| a.name.clone()).collect();
    if names.is_empty() {
        "(nobody)".to_string()
    } else {
        names.join(", ")
    }
}
