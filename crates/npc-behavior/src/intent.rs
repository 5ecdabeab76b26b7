//! Agent intents: what an agent asks the world to do this tick.

use npc_core::Vec2;

use crate::BehaviorState;

/// An action requested during the decide phase and carried out during the
/// apply phase.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Face `target` and move toward it for one tick without overshooting.
    MoveTo { target: Vec2 },

    /// Tell every other agent that the target has been spotted.
    RaiseAlert,
}

/// A behavior state change that happened during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateChange {
    pub from: BehaviorState,
    pub to:   BehaviorState,
}

/// Output of one `BehaviorController::update` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decision {
    pub intents: Vec<Intent>,
    pub change:  Option<StateChange>,
}

impl Decision {
    pub fn raises_alert(&self) -> bool {
        self.intents.contains(&Intent::RaiseAlert)
    }

    /// The target of the first `MoveTo`, if any.
    pub fn move_target(&self) -> Option<Vec2> {
        self.intents.iter().find_map(|i| match *i {
            Intent::MoveTo { target } => Some(target),
            Intent::RaiseAlert => None,
        })
    }
}
