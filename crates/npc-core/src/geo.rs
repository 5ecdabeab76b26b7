//! Planar geometry helpers.
//!
//! Positions and directions are `glam::Vec2` in scene units.  The helpers
//! below are the few operations the navigation and perception code needs on
//! top of `glam` and are kept free functions so every crate computes them the
//! same way.

pub use glam::Vec2;

/// Straight-line distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns `None` when either vector has zero length.
pub fn angle_between_deg(a: Vec2, b: Vec2) -> Option<f32> {
    let denom = a.length() * b.length();
    if denom <= f32::EPSILON {
        return None;
    }
    // Clamp guards acos against values a hair outside [-1, 1] from rounding.
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Unit vector pointing from `from` to `to`, or zero if they coincide.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
