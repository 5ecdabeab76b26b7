//! Behavior tuning parameters.

use npc_perception::{LayerMask, ViewCone};

use crate::{BehaviorError, BehaviorResult};

/// Tuning shared by every agent driven by one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Maximum detection distance in scene units.
    pub view_distance: f32,

    /// Full field-of-view angle in degrees.
    pub view_angle_deg: f32,

    /// Seconds an agent stays Idle before it starts patrolling.
    pub idle_threshold_secs: f32,

    /// Movement speed in scene units per second.
    pub move_speed: f32,

    /// A waypoint counts as reached once the agent is closer than this.
    pub arrive_epsilon: f32,

    /// Layers that block line of sight.
    pub wall_layer: LayerMask,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            view_distance:       10.0,
            view_angle_deg:      90.0,
            idle_threshold_secs: 2.0,
            move_speed:          3.0,
            arrive_epsilon:      0.1,
            wall_layer:          LayerMask::layer(0),
        }
    }
}

impl BehaviorConfig {
    pub fn view_cone(&self) -> ViewCone {
        ViewCone::new(self.view_distance, self.view_angle_deg, self.wall_layer)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> BehaviorResult<()> {
        if !(self.view_distance.is_finite() && self.view_distance > 0.0) {
            return Err(BehaviorError::Config(format!(
                "view_distance must be positive, got {}",
                self.view_distance
            )));
        }
        if !(self.view_angle_deg > 0.0 && self.view_angle_deg <= 360.0) {
            return Err(BehaviorError::Config(format!(
                "view_angle_deg must be in (0, 360], got {}",
                self.view_angle_deg
            )));
        }
        if !(self.idle_threshold_secs.is_finite() && self.idle_threshold_secs >= 0.0) {
            return Err(BehaviorError::Config(format!(
                "idle_threshold_secs must be non-negative, got {}",
                self.idle_threshold_secs
            )));
        }
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(BehaviorError::Config(format!(
                "move_speed must be positive, got {}",
                self.move_speed
            )));
        }
        if !(self.arrive_epsilon.is_finite() && self.arrive_epsilon > 0.0) {
            return Err(BehaviorError::Config(format!(
                "arrive_epsilon must be positive, got {}",
                self.arrive_epsilon
            )));
        }
        Ok(())
    }
}
