//! patrol: guards patrolling a courtyard while a target wanders through it.
//!
//! ```text
//! cargo run -p patrol -- --ticks 1200 --seed 7 -v
//! cargo run -p patrol -- --config demos/patrol/scene.json
//! ```

mod logging;
mod scene;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Deserialize;

use npc_agent::{AgentStore, BehaviorState, Kinematics, step_toward};
use npc_behavior::{BehaviorConfig, StateChange};
use npc_core::{AgentId, SimConfig, SimRng, Tick, Vec2, geo};
use npc_nav::AStarPathFinder;
use npc_sim::{SimBuilder, SimObserver};

/// Target walk speed, in scene units per second.
const TARGET_SPEED: f32 = 2.0;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with `sim` and `behavior` sections; both optional.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `sim.total_ticks`.
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override `sim.seed`.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:      SimConfig,
    behavior: BehaviorConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig {
                tick_secs:             0.1,
                total_ticks:           600,
                seed:                  7,
                num_threads:           None,
                output_interval_ticks: 100,
            },
            behavior: BehaviorConfig::default(),
        }
    }
}

fn load_config(args: &Args) -> Result<DemoConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => DemoConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.sim.total_ticks = ticks;
    }
    if let Some(seed) = args.seed {
        config.sim.seed = seed;
    }
    Ok(config)
}

// ── Target ────────────────────────────────────────────────────────────────────

/// Walks between random points inside the courtyard.
struct Wanderer {
    body: Kinematics,
    goal: Vec2,
    min:  Vec2,
    max:  Vec2,
    rng:  SimRng,
}

impl Wanderer {
    fn new(min: Vec2, max: Vec2, mut rng: SimRng) -> Self {
        let start = rng.point_in(min, max);
        let goal = rng.point_in(min, max);
        Self { body: Kinematics::new(start, goal - start), goal, min, max, rng }
    }

    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn step(&mut self, dt: f32) {
        if step_toward(&mut self.body, self.goal, TARGET_SPEED, dt) <= f32::EPSILON {
            self.goal = self.rng.point_in(self.min, self.max);
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Narrator {
    transitions: usize,
    alerts:      usize,
    chases:      usize,
}

impl SimObserver for Narrator {
    fn on_transition(&mut self, tick: Tick, agent: AgentId, change: StateChange) {
        self.transitions += 1;
        if change.to == BehaviorState::Chase {
            self.chases += 1;
        }
        info!("{tick}: {agent} {} -> {}", change.from, change.to);
    }

    fn on_alert(&mut self, tick: Tick, source: AgentId, flagged: usize) {
        self.alerts += 1;
        info!("{tick}: {source} raised the alarm, {flagged} guards flagged");
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let mut counts = [0usize; 4];
        for state in &agents.states {
            counts[state.behavior as usize] += 1;
        }
        debug!(
            "{tick}: idle {} patrol {} chase {} search {}",
            counts[0], counts[1], counts[2], counts[3]
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    let scene = scene::courtyard()?;
    info!(
        "courtyard: {} nodes, {} links, {} walls, {} guards",
        scene.graph.node_count(),
        scene.graph.link_count(),
        scene.walls.len(),
        scene.agents.count
    );

    let mut rng = SimRng::new(config.sim.seed);
    let mut target = Wanderer::new(scene.min, scene.max, rng.child(1));

    let mut sim = SimBuilder::new(
        config.sim.clone(),
        scene.agents,
        scene.graph,
        AStarPathFinder,
        scene.walls,
    )
    .behavior(config.behavior)
    .target(target.position())
    .build()?;

    let mut narrator = Narrator::default();
    let t0 = Instant::now();
    while sim.clock.current_tick < sim.config.end_tick() {
        sim.step(&mut narrator)?;
        target.step(sim.clock.tick_secs);
        sim.set_target(target.position());
    }
    narrator.on_sim_end(sim.clock.current_tick);

    info!(
        "{} ticks in {:.3} s: {} transitions, {} chases, {} alerts",
        sim.clock.current_tick.0,
        t0.elapsed().as_secs_f64(),
        narrator.transitions,
        narrator.chases,
        narrator.alerts
    );

    println!("{:<12} {:<8} {:>8} {:>8} {:>10}", "Agent", "State", "x", "y", "to target");
    println!("{}", "-".repeat(50));
    for agent in sim.agents.agent_ids() {
        let body = sim.agents.body(agent);
        println!(
            "{:<12} {:<8} {:>8.2} {:>8.2} {:>10.2}",
            agent.to_string(),
            sim.agents.state(agent).behavior.to_string(),
            body.position.x,
            body.position.y,
            geo::distance(body.position, target.position()),
        );
    }

    Ok(())
}
