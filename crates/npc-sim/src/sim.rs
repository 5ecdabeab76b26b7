//! The `Sim` struct and its tick loop.

use log::debug;

use npc_agent::{AgentStore, step_toward};
use npc_behavior::{BehaviorController, Decision, Intent, TickContext};
use npc_core::{AgentId, SimClock, SimConfig, Tick, Vec2};
use npc_nav::{NavGraph, PathFinder};
use npc_perception::OcclusionOracle;

use crate::{AlertCoordinator, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<F, O>` holds all simulation state and drives the two-phase tick
/// loop:
///
/// 1. **Decide** (optionally parallel with the `parallel` feature): run
///    perception and [`BehaviorController::update`] for every agent.  Each
///    call writes only its own agent's state.
/// 2. **Apply** (sequential, ascending `AgentId` for determinism):
///    - `MoveTo { target }` → face the target, move forward without
///      overshooting.
///    - `RaiseAlert`        → flag every other agent via the
///      [`AlertCoordinator`].
///
/// Flags set in the apply phase are read by each agent's next decide phase.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<F: PathFinder, O: OcclusionOracle> {
    /// Global configuration (tick length, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock: current tick and per-tick delta.
    pub clock: SimClock,

    /// Agent state and kinematics (SoA arrays).
    pub agents: AgentStore,

    /// Static navigation graph.
    pub graph: NavGraph,

    /// Path search used by every controller update.
    pub finder: F,

    /// Line-of-sight oracle used by perception.
    pub oracle: O,

    /// Shared behavior controller.
    pub controller: BehaviorController,

    pub(crate) target: Option<Vec2>,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<F: PathFinder, O: OcclusionOracle> Sim<F, O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Current target position, if there is one in the scene.
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Move the target.  Takes effect from the next tick.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Remove the target from the scene; nothing is detected until it is set
    /// again.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<Obs: SimObserver>(&mut self, observer: &mut Obs) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<Obs: SimObserver>(&mut self, n: u64, observer: &mut Obs) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process one tick and advance the clock.
    pub fn step<Obs: SimObserver>(&mut self, observer: &mut Obs) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let decisions = self.decide(now);
        let moved = self.apply(now, decisions, observer);

        observer.on_tick_end(now, moved);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
        self.clock.advance();
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// One decision per agent, index = `AgentId`.
    fn decide(&mut self, now: Tick) -> Vec<Decision> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = TickContext::new(
            now,
            self.clock.tick_secs,
            self.target,
            &self.graph,
            &self.finder,
            &self.oracle,
        );
        let controller = &self.controller;
        let states     = &mut self.agents.states;
        let bodies     = &self.agents.kinematics;

        #[cfg(not(feature = "parallel"))]
        {
            states
                .iter_mut()
                .zip(bodies.iter())
                .enumerate()
                .map(|(i, (state, body))| controller.update(AgentId(i as u32), state, body, &ctx))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut run = move || -> Vec<Decision> {
                states
                    .into_par_iter()
                    .zip(bodies.par_iter())
                    .enumerate()
                    .map(|(i, (state, body))| controller.update(AgentId(i as u32), state, body, &ctx))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        }
    }

    /// Apply decisions in ascending `AgentId` order.  Returns the number of
    /// agents that moved.
    fn apply<Obs: SimObserver>(
        &mut self,
        now:       Tick,
        decisions: Vec<Decision>,
        observer:  &mut Obs,
    ) -> usize {
        let speed = self.controller.config().move_speed;
        let dt = self.clock.tick_secs;
        let mut moved = 0;

        for (i, decision) in decisions.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            if let Some(change) = decision.change {
                observer.on_transition(now, agent, change);
            }
            for intent in decision.intents {
                match intent {
                    Intent::MoveTo { target } => {
                        step_toward(self.agents.body_mut(agent), target, speed, dt);
                        moved += 1;
                    }
                    Intent::RaiseAlert => {
                        let flagged = AlertCoordinator::new(&mut self.agents).notify(agent);
                        debug!("{agent}: alert raised at {now}, {flagged} agents flagged");
                        observer.on_alert(now, agent, flagged);
                    }
                }
            }
        }
        moved
    }
}
