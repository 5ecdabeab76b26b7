//! The behavior controller: perception, planning, and per-state actions.

use log::{debug, trace, warn};

use npc_agent::{ActivePath, AgentState, Kinematics, PathPurpose};
use npc_core::{AgentId, NodeId, Vec2, geo};
use npc_nav::{NavError, NavGraph, NavResult};
use npc_perception::ViewCone;

use crate::{
    BehaviorConfig, BehaviorResult, BehaviorState, Decision, Intent, Observation, PathOutcome,
    StateChange, TickContext, Transition, transition,
};

/// Drives [`AgentState`]s through the transition table.
///
/// The controller itself is immutable and `Send + Sync`: all per-agent
/// memory lives in the `AgentState` handed to [`update`](Self::update), so
/// one controller serves every agent, in parallel if needed.
#[derive(Debug, Clone)]
pub struct BehaviorController {
    config: BehaviorConfig,
    cone:   ViewCone,
}

impl BehaviorController {
    pub fn new(config: BehaviorConfig) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self { cone: config.view_cone(), config })
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Can the agent at `body` see the target right now?
    pub fn perceive(&self, body: &Kinematics, ctx: &TickContext<'_>) -> bool {
        ctx.target.is_some_and(|target| {
            self.cone.can_detect(ctx.oracle, body.position, body.forward, target)
        })
    }

    /// Run one tick of behavior for `agent`.
    ///
    /// Writes only `state`.  Path search failures are handled here by the
    /// state's fallback and never surface as errors.
    pub fn update(
        &self,
        agent: AgentId,
        state: &mut AgentState,
        body:  &Kinematics,
        ctx:   &TickContext<'_>,
    ) -> Decision {
        let from = state.behavior;
        let detected = self.perceive(body, ctx);

        // Search decides on its path before the table runs; a fresh sighting
        // preempts planning.
        let path = if from == BehaviorState::Search && !detected {
            self.plan_search(agent, state, body, ctx)
        } else {
            PathOutcome::Pending
        };

        let obs = Observation {
            detected,
            alerted:          state.target_detected,
            idle_elapsed:     state.idle_timer + ctx.dt > self.config.idle_threshold_secs,
            has_patrol_route: state.has_patrol_route(),
            path,
        };

        let mut decision = Decision::default();
        match transition(from, &obs) {
            Transition::Stay => self.act(agent, state, body, ctx, &mut decision.intents),
            Transition::DebounceAlert => {
                debug!("{agent}: idle, discarding alert");
                state.target_detected = false;
            }
            Transition::ResetIdle => state.reset_idle(),
            Transition::Enter(to) => {
                self.enter(state, from, to, &mut decision.intents);
                debug!("{agent}: {from} -> {to} at {}", ctx.tick);
                decision.change = Some(StateChange { from, to });
            }
        }
        decision
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn enter(
        &self,
        state:   &mut AgentState,
        from:    BehaviorState,
        to:      BehaviorState,
        intents: &mut Vec<Intent>,
    ) {
        let finished = state.path.take();
        state.last_known_target = NodeId::INVALID;
        state.behavior = to;

        match to {
            BehaviorState::Chase => intents.push(Intent::RaiseAlert),
            BehaviorState::Search => state.target_detected = false,
            BehaviorState::Idle => state.reset_idle(),
            BehaviorState::Patrol => {
                state.reset_idle();
                if from == BehaviorState::Search {
                    state.path = finished
                        .map(|p| p.reversed())
                        .filter(|p| !p.nodes.is_empty());
                }
            }
        }
    }

    // ── Per-state actions ─────────────────────────────────────────────────

    fn act(
        &self,
        agent:   AgentId,
        state:   &mut AgentState,
        body:    &Kinematics,
        ctx:     &TickContext<'_>,
        intents: &mut Vec<Intent>,
    ) {
        match state.behavior {
            BehaviorState::Idle => state.idle_timer += ctx.dt,
            BehaviorState::Chase => {
                let target = ctx
                    .target
                    .filter(|&t| geo::distance(body.position, t) >= self.config.arrive_epsilon);
                if let Some(target) = target {
                    intents.push(Intent::MoveTo { target });
                }
            }
            BehaviorState::Patrol => self.patrol(agent, state, body, ctx, intents),
            BehaviorState::Search => {
                let next = state
                    .path
                    .as_mut()
                    .and_then(|path| self.follow(path, body.position, ctx.graph));
                if let Some(target) = next {
                    intents.push(Intent::MoveTo { target });
                }
            }
        }
    }

    fn patrol(
        &self,
        agent:   AgentId,
        state:   &mut AgentState,
        body:    &Kinematics,
        ctx:     &TickContext<'_>,
        intents: &mut Vec<Intent>,
    ) {
        if let Some(path) = state.path.as_mut() {
            if let Some(target) = self.follow(path, body.position, ctx.graph) {
                intents.push(Intent::MoveTo { target });
                return;
            }
            let leg_done = matches!(path.purpose, PathPurpose::Patrol(_) | PathPurpose::Direct(_));
            state.clear_path();
            if leg_done {
                state.advance_patrol();
            }
        }

        let Some(waypoint) = state.patrol_waypoint() else {
            return;
        };

        let mut path = match self.plan(body.position, waypoint, ctx) {
            Ok(nodes) => ActivePath::new(nodes, PathPurpose::Patrol(state.patrol_index)),
            Err(err) => {
                // Kept until arrival so the failed search is not repeated.
                warn!("{agent}: patrol leg to {waypoint} unavailable ({err}), steering straight");
                ActivePath::new(vec![waypoint], PathPurpose::Direct(state.patrol_index))
            }
        };
        if let Some(target) = self.follow(&mut path, body.position, ctx.graph) {
            intents.push(Intent::MoveTo { target });
        }
        // An already-walked leg is picked up next tick.
        state.path = Some(path);
    }

    /// Replan toward the target's nearest node when it changed and report
    /// how the search stands.
    fn plan_search(
        &self,
        agent: AgentId,
        state: &mut AgentState,
        body:  &Kinematics,
        ctx:   &TickContext<'_>,
    ) -> PathOutcome {
        // Already searching; a repeated alert adds nothing.
        state.target_detected = false;

        let goal = ctx
            .target
            .and_then(|t| ctx.graph.snap_to_node(t))
            .filter(|&g| g != state.last_known_target || state.path.is_none());
        if let Some(goal) = goal {
            match self.plan(body.position, goal, ctx) {
                Ok(nodes) => {
                    trace!("{agent}: search path to {goal}, {} nodes", nodes.len());
                    state.set_path(nodes, PathPurpose::Search);
                    state.last_known_target = goal;
                }
                Err(err) => {
                    warn!("{agent}: no search path to {goal} ({err})");
                    state.clear_path();
                    return PathOutcome::NotFound;
                }
            }
        }

        match state.path.as_mut() {
            None => PathOutcome::NotFound,
            Some(path) => match self.follow(path, body.position, ctx.graph) {
                Some(_) => PathOutcome::Following,
                None => PathOutcome::Exhausted,
            },
        }
    }

    // ── Path helpers ──────────────────────────────────────────────────────

    /// Path from the node nearest `from` to `goal`.
    fn plan(&self, from: Vec2, goal: NodeId, ctx: &TickContext<'_>) -> NavResult<Vec<NodeId>> {
        let start = ctx.graph.snap_to_node(from).ok_or(NavError::EmptyCandidateSet)?;
        ctx.finder.find_path(ctx.graph, start, goal).map(|p| p.nodes)
    }

    /// Skip waypoints already within `arrive_epsilon` of `position` and
    /// return the position of the next one.  `None` once the path is
    /// exhausted.
    fn follow(&self, path: &mut ActivePath, position: Vec2, graph: &NavGraph) -> Option<Vec2> {
        while let Some(node) = path.next_node() {
            match graph.get_position(node) {
                Ok(pos) if geo::distance(position, pos) >= self.config.arrive_epsilon => {
                    return Some(pos);
                }
                // Reached, or a node the graph does not know.
                _ => path.advance(),
            }
        }
        None
    }
}
