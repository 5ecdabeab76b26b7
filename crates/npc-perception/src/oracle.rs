//! Ray-occlusion oracle.
//!
//! The physics engine is an external collaborator; perception only needs one
//! question answered: does anything on the given layers block the segment
//! `origin .. origin + direction * max_distance`?  [`OcclusionOracle`] is
//! that seam.  Two small implementations are provided for scenes without a
//! physics engine and for tests.

use npc_core::Vec2;

use crate::LayerMask;

/// Answers line-of-sight occlusion queries.
///
/// `Send + Sync` so perception can run on Rayon workers.
pub trait OcclusionOracle: Send + Sync {
    /// `true` if an obstacle on `layers` intersects the ray from `origin`
    /// along `direction` within `max_distance`.
    ///
    /// `direction` need not be normalized.  A zero direction never hits.
    fn raycast_occluded(
        &self,
        origin:       Vec2,
        direction:    Vec2,
        max_distance: f32,
        layers:       LayerMask,
    ) -> bool;
}

/// An oracle for an empty world: nothing ever occludes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenField;

impl OcclusionOracle for OpenField {
    fn raycast_occluded(&self, _: Vec2, _: Vec2, _: f32, _: LayerMask) -> bool {
        false
    }
}

// ── WallSet ───────────────────────────────────────────────────────────────────

/// A straight wall segment on one or more layers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
    pub layers: LayerMask,
}

impl Wall {
    pub fn new(a: Vec2, b: Vec2, layers: LayerMask) -> Self {
        Self { a, b, layers }
    }

    /// Ray parameter `t` (distance along unit `dir`) at which the ray crosses
    /// this wall, if it does.  Parallel and collinear rays do not hit.
    fn ray_hit(&self, origin: Vec2, dir: Vec2) -> Option<f32> {
        let edge = self.b - self.a;
        let denom = dir.perp_dot(edge);
        if denom.abs() <= f32::EPSILON {
            return None;
        }
        let to_a = self.a - origin;
        let t = to_a.perp_dot(edge) / denom;
        let u = to_a.perp_dot(dir) / denom;
        (t >= 0.0 && (0.0..=1.0).contains(&u)).then_some(t)
    }
}

/// Brute-force set of wall segments.  Linear in the wall count per query,
/// fine for test scenes and small levels.
#[derive(Debug, Clone, Default)]
pub struct WallSet {
    walls: Vec<Wall>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_walls(walls: Vec<Wall>) -> Self {
        Self { walls }
    }

    pub fn push(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

impl OcclusionOracle for WallSet {
    fn raycast_occluded(
        &self,
        origin:       Vec2,
        direction:    Vec2,
        max_distance: f32,
        layers:       LayerMask,
    ) -> bool {
        let dir = direction.normalize_or_zero();
        if dir == Vec2::ZERO {
            return false;
        }
        self.walls
            .iter()
            .filter(|w| w.layers.intersects(layers))
            .filter_map(|w| w.ray_hit(origin, dir))
            .any(|t| t <= max_distance)
    }
}
