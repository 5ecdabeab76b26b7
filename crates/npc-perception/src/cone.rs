//! Field-of-view detection.

use npc_core::{Vec2, geo};

use crate::{LayerMask, OcclusionOracle};

/// Targets closer than this to the observer are treated as coincident.
pub const COINCIDENT_EPSILON: f32 = 1e-4;

/// Outcome of a visibility check.  Only [`Sighting::Seen`] counts as a
/// detection; the other variants say which check rejected the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sighting {
    Seen,
    OutOfRange,
    OutsideCone,
    Occluded,
}

impl Sighting {
    #[inline]
    pub fn is_seen(self) -> bool {
        self == Sighting::Seen
    }
}

/// An observer's view parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewCone {
    /// Maximum detection distance, inclusive.
    pub view_distance: f32,
    /// Full opening angle in degrees; the target must lie within half of it
    /// on either side of the forward vector.
    pub view_angle_deg: f32,
    /// Layers that block line of sight.
    pub wall_layer: LayerMask,
}

impl ViewCone {
    pub fn new(view_distance: f32, view_angle_deg: f32, wall_layer: LayerMask) -> Self {
        Self { view_distance, view_angle_deg, wall_layer }
    }

    /// Run range, cone, then occlusion checks in that order.
    ///
    /// A target at the observer's position (within [`COINCIDENT_EPSILON`]) is
    /// `Seen`: it is in range and the angle to it is undefined.
    pub fn assess<O: OcclusionOracle + ?Sized>(
        &self,
        oracle:   &O,
        observer: Vec2,
        forward:  Vec2,
        target:   Vec2,
    ) -> Sighting {
        let to_target = target - observer;
        let distance = to_target.length();
        if distance > self.view_distance {
            return Sighting::OutOfRange;
        }
        if distance < COINCIDENT_EPSILON {
            return Sighting::Seen;
        }
        match geo::angle_between_deg(forward, to_target) {
            Some(angle) if angle <= self.view_angle_deg * 0.5 => {}
            _ => return Sighting::OutsideCone,
        }
        if oracle.raycast_occluded(observer, to_target, distance, self.wall_layer) {
            return Sighting::Occluded;
        }
        Sighting::Seen
    }

    #[inline]
    pub fn can_detect<O: OcclusionOracle + ?Sized>(
        &self,
        oracle:   &O,
        observer: Vec2,
        forward:  Vec2,
        target:   Vec2,
    ) -> bool {
        self.assess(oracle, observer, forward, target).is_seen()
    }
}

/// Free-function form of [`ViewCone::can_detect`].
pub fn can_detect<O: OcclusionOracle + ?Sized>(
    oracle:         &O,
    observer:       Vec2,
    forward:        Vec2,
    target:         Vec2,
    view_distance:  f32,
    view_angle_deg: f32,
    wall_layer:     LayerMask,
) -> bool {
    ViewCone::new(view_distance, view_angle_deg, wall_layer).can_detect(oracle, observer, forward, target)
}
