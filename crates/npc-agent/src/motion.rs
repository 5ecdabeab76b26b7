//! The motion primitive.
//!
//! Transform integration belongs to the host engine.  Behavior code only
//! needs two verbs, "face this way" and "move forward", which [`Motion`]
//! exposes.  [`Kinematics`] is the in-crate implementation used by the
//! simulation loop and tests.

use npc_core::{Vec2, geo};

/// Opaque "move entity" primitive.
pub trait Motion {
    fn position(&self) -> Vec2;

    /// Unit forward vector.
    fn forward(&self) -> Vec2;

    /// Turn to face `direction`.  A zero direction leaves the facing as is.
    fn face(&mut self, direction: Vec2);

    /// Translate along the forward vector by `speed * dt`.
    fn move_forward(&mut self, speed: f32, dt: f32);
}

/// Position and facing of an agent body.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    pub position: Vec2,
    /// Always unit length.
    pub forward: Vec2,
}

impl Kinematics {
    /// A zero `forward` falls back to `+X`.
    pub fn new(position: Vec2, forward: Vec2) -> Self {
        Self { position, forward: forward.normalize_or(Vec2::X) }
    }
}

impl Default for Kinematics {
    fn default() -> Self {
        Self { position: Vec2::ZERO, forward: Vec2::X }
    }
}

impl Motion for Kinematics {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn forward(&self) -> Vec2 {
        self.forward
    }

    fn face(&mut self, direction: Vec2) {
        let dir = direction.normalize_or_zero();
        if dir != Vec2::ZERO {
            self.forward = dir;
        }
    }

    fn move_forward(&mut self, speed: f32, dt: f32) {
        self.position += self.forward * speed * dt;
    }
}

/// Face `target` and move toward it at up to `speed` for `dt` seconds.
///
/// The speed is clamped to `distance / dt` so a step never carries the body
/// past `target`.  Returns the remaining distance.
pub fn step_toward<M: Motion + ?Sized>(body: &mut M, target: Vec2, speed: f32, dt: f32) -> f32 {
    let distance = geo::distance(body.position(), target);
    if distance <= f32::EPSILON || dt <= 0.0 {
        return distance;
    }
    body.face(target - body.position());
    body.move_forward(speed.min(distance / dt), dt);
    geo::distance(body.position(), target)
}
