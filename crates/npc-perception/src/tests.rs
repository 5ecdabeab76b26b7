//! Unit tests for npc-perception.

#[cfg(test)]
mod helpers {
    use npc_core::Vec2;
    use crate::{LayerMask, ViewCone, Wall, WallSet};

    pub const WALLS: LayerMask = LayerMask::layer(3);
    pub const GLASS: LayerMask = LayerMask::layer(4);

    pub fn cone() -> ViewCone {
        ViewCone::new(10.0, 90.0, WALLS)
    }

    /// A vertical wall at x = 5 spanning y ∈ [-1, 1], plus a glass pane at
    /// x = 3 on a layer the default cone does not filter on.
    pub fn walls() -> WallSet {
        WallSet::with_walls(vec![
            Wall::new(Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0), WALLS),
            Wall::new(Vec2::new(3.0, -1.0), Vec2::new(3.0, 1.0), GLASS),
        ])
    }
}

// ── LayerMask ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layer {
    use crate::LayerMask;

    #[test]
    fn single_layer_bits() {
        assert_eq!(LayerMask::layer(0).0, 1);
        assert_eq!(LayerMask::layer(5).0, 32);
    }

    #[test]
    fn layer_past_31_is_empty() {
        assert_eq!(LayerMask::layer(31).0, 1 << 31);
        assert_eq!(LayerMask::layer(32), LayerMask::NONE);
        assert_eq!(LayerMask::layer(u32::MAX), LayerMask::NONE);
    }

    #[test]
    fn union_and_intersects() {
        let both = LayerMask::layer(1) | LayerMask::layer(2);
        assert!(both.intersects(LayerMask::layer(2)));
        assert!(!both.intersects(LayerMask::layer(3)));
        assert!(!LayerMask::NONE.intersects(LayerMask::ALL));
    }
}

// ── Oracles ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod oracle {
    use npc_core::Vec2;
    use crate::{LayerMask, OcclusionOracle, OpenField};

    use super::helpers::{GLASS, WALLS, walls};

    #[test]
    fn open_field_never_occludes() {
        assert!(!OpenField.raycast_occluded(Vec2::ZERO, Vec2::X, 100.0, LayerMask::ALL));
    }

    #[test]
    fn wall_blocks_ray_through_it() {
        let w = walls();
        assert!(w.raycast_occluded(Vec2::ZERO, Vec2::X, 8.0, WALLS));
    }

    #[test]
    fn wall_beyond_max_distance_does_not_block() {
        let w = walls();
        assert!(!w.raycast_occluded(Vec2::ZERO, Vec2::X, 4.5, WALLS));
    }

    #[test]
    fn ray_past_wall_end_is_clear() {
        let w = walls();
        assert!(!w.raycast_occluded(Vec2::new(0.0, 2.0), Vec2::X, 8.0, WALLS));
    }

    #[test]
    fn ray_pointing_away_is_clear() {
        let w = walls();
        assert!(!w.raycast_occluded(Vec2::ZERO, -Vec2::X, 8.0, WALLS));
    }

    #[test]
    fn layer_filter_selects_walls() {
        let w = walls();
        // Only the glass pane at x = 3 is on GLASS.
        assert!(w.raycast_occluded(Vec2::ZERO, Vec2::X, 3.5, GLASS));
        assert!(!w.raycast_occluded(Vec2::ZERO, Vec2::X, 3.5, WALLS));
        assert!(!w.raycast_occluded(Vec2::ZERO, Vec2::X, 8.0, LayerMask::NONE));
    }

    #[test]
    fn unnormalized_direction_uses_distance_units() {
        let w = walls();
        assert!(w.raycast_occluded(Vec2::ZERO, Vec2::new(20.0, 0.0), 6.0, WALLS));
        assert!(!w.raycast_occluded(Vec2::ZERO, Vec2::ZERO, 6.0, WALLS));
    }
}

// ── ViewCone / can_detect ─────────────────────────────────────────────────────

#[cfg(test)]
mod cone {
    use npc_core::Vec2;
    use crate::{OpenField, Sighting, can_detect};

    use super::helpers::{WALLS, cone, walls};

    #[test]
    fn sees_target_ahead_in_range() {
        assert!(cone().can_detect(&OpenField, Vec2::ZERO, Vec2::X, Vec2::new(6.0, 1.0)));
    }

    #[test]
    fn range_is_inclusive() {
        assert!(cone().can_detect(&OpenField, Vec2::ZERO, Vec2::X, Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn beyond_view_distance_is_never_seen() {
        let target = Vec2::new(10.5, 0.0);
        assert_eq!(cone().assess(&OpenField, Vec2::ZERO, Vec2::X, target), Sighting::OutOfRange);
        // Range fails first even when a wall would also block.
        assert_eq!(cone().assess(&walls(), Vec2::ZERO, Vec2::X, target), Sighting::OutOfRange);
    }

    #[test]
    fn outside_half_angle_is_not_seen_even_up_close() {
        // 90° cone → 45° half angle; (1, 1.2) is ~50° off the +X axis.
        let target = Vec2::new(1.0, 1.2);
        assert_eq!(cone().assess(&OpenField, Vec2::ZERO, Vec2::X, target), Sighting::OutsideCone);
        // Directly behind.
        assert!(!cone().can_detect(&OpenField, Vec2::ZERO, Vec2::X, Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn edge_of_cone_is_seen() {
        // Exactly 45°, within rounding.
        let target = Vec2::new(2.0, 1.999);
        assert!(cone().can_detect(&OpenField, Vec2::ZERO, Vec2::X, target));
    }

    #[test]
    fn wall_occludes() {
        let target = Vec2::new(8.0, 0.0);
        assert_eq!(cone().assess(&walls(), Vec2::ZERO, Vec2::X, target), Sighting::Occluded);
    }

    #[test]
    fn target_in_front_of_wall_is_seen() {
        // Glass at x = 3 is not on the cone's wall layer.
        let target = Vec2::new(4.5, 0.0);
        assert!(cone().can_detect(&walls(), Vec2::ZERO, Vec2::X, target));
    }

    #[test]
    fn coincident_target_is_seen() {
        assert!(cone().can_detect(&OpenField, Vec2::ONE, Vec2::X, Vec2::ONE));
        // Rounding residue behind the observer still counts as coincident.
        let residue = Vec2::ONE - Vec2::new(5e-7, 0.0);
        assert!(cone().can_detect(&OpenField, Vec2::ONE, Vec2::X, residue));
    }

    #[test]
    fn zero_forward_sees_nothing_off_position() {
        assert!(!cone().can_detect(&OpenField, Vec2::ZERO, Vec2::ZERO, Vec2::X));
    }

    #[test]
    fn free_function_matches_cone() {
        let target = Vec2::new(3.0, -2.0);
        let via_fn = can_detect(&OpenField, Vec2::ZERO, Vec2::X, target, 10.0, 90.0, WALLS);
        assert_eq!(via_fn, cone().can_detect(&OpenField, Vec2::ZERO, Vec2::X, target));
    }
}
