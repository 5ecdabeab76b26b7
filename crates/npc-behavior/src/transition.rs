//! The state transition table.
//!
//! [`transition`] maps the current state and what the agent observed this
//! tick to the next step.  It is pure: timers, paths and alerts are applied
//! by the controller according to the returned [`Transition`].
//!
//! | From   | Condition (first match wins)        | Result                       |
//! |--------|-------------------------------------|------------------------------|
//! | Idle   | target detected                     | `Enter(Chase)`               |
//! | Idle   | alert flag set                      | `DebounceAlert`              |
//! | Idle   | timer elapsed, has patrol route     | `Enter(Patrol)`              |
//! | Idle   | timer elapsed, no patrol route      | `ResetIdle`                  |
//! | Patrol | target detected                     | `Enter(Chase)`               |
//! | Patrol | alert flag set                      | `Enter(Search)`              |
//! | Chase  | target not detected                 | `Enter(Idle)`                |
//! | Search | target detected                     | `Enter(Chase)`               |
//! | Search | no path to the target               | `Enter(Idle)`                |
//! | Search | search path fully walked            | `Enter(Patrol)`              |
//! | any    | otherwise                           | `Stay`                       |

use crate::BehaviorState;

/// Result of planning toward the current search goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathOutcome {
    /// Not evaluated this tick.
    #[default]
    Pending,
    /// A path exists and has waypoints left.
    Following,
    /// The path has been walked to its end.
    Exhausted,
    /// No path could be found.
    NotFound,
}

/// Everything the transition table looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observation {
    /// The agent itself sees the target this tick.
    pub detected: bool,
    /// Another agent raised an alert since this flag was last cleared.
    pub alerted: bool,
    /// Advancing the idle timer by this tick would exceed the threshold.
    pub idle_elapsed: bool,
    pub has_patrol_route: bool,
    /// Search planning outcome; only consulted in `Search`.
    pub path: PathOutcome,
}

/// What the controller should do with the agent's state this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep the state and run its per-tick action.
    Stay,
    /// Idle only: clear the alert flag and stay Idle without advancing the
    /// idle timer.
    DebounceAlert,
    /// Idle only: the timer elapsed but there is nowhere to patrol, start
    /// the timer over.
    ResetIdle,
    /// Switch to the given state.
    Enter(BehaviorState),
}

pub fn transition(state: BehaviorState, obs: &Observation) -> Transition {
    use BehaviorState::*;

    match state {
        Idle => {
            if obs.detected {
                Transition::Enter(Chase)
            } else if obs.alerted {
                Transition::DebounceAlert
            } else if obs.idle_elapsed {
                if obs.has_patrol_route {
                    Transition::Enter(Patrol)
                } else {
                    Transition::ResetIdle
                }
            } else {
                Transition::Stay
            }
        }
        Patrol => {
            if obs.detected {
                Transition::Enter(Chase)
            } else if obs.alerted {
                Transition::Enter(Search)
            } else {
                Transition::Stay
            }
        }
        Chase => {
            if obs.detected {
                Transition::Stay
            } else {
                Transition::Enter(Idle)
            }
        }
        Search => {
            if obs.detected {
                return Transition::Enter(Chase);
            }
            match obs.path {
                PathOutcome::NotFound => Transition::Enter(Idle),
                PathOutcome::Exhausted => Transition::Enter(Patrol),
                PathOutcome::Pending | PathOutcome::Following => Transition::Stay,
            }
        }
    }
}
