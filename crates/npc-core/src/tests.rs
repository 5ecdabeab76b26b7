//! Unit tests for npc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinel_is_default() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert!(!NodeId::INVALID.is_valid());
        assert!(NodeId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec2;
    use crate::geo::{angle_between_deg, direction_to, distance};

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn right_angle() {
        let a = angle_between_deg(Vec2::X, Vec2::Y).unwrap();
        assert!((a - 90.0).abs() < 1e-4, "got {a}");
    }

    #[test]
    fn opposite_vectors_are_180() {
        let a = angle_between_deg(Vec2::X, -Vec2::X).unwrap();
        assert!((a - 180.0).abs() < 1e-3, "got {a}");
    }

    #[test]
    fn zero_vector_has_no_angle() {
        assert!(angle_between_deg(Vec2::ZERO, Vec2::X).is_none());
    }

    #[test]
    fn direction_of_coincident_points_is_zero() {
        assert_eq!(direction_to(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
        assert_eq!(direction_to(Vec2::ZERO, Vec2::new(0.0, 2.0)), Vec2::Y);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(5)), 10);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs(), 1.0);
    }


    #[test]
    fn config_end_tick_and_clock() {
        let cfg = SimConfig { total_ticks: 30, tick_secs: 0.1, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(30));
        assert_eq!(cfg.make_clock().tick_secs, 0.1);
    }

    #[test]
    fn config_rejects_bad_tick() {
        let zero = SimConfig { tick_secs: 0.0, ..SimConfig::default() };
        assert!(zero.validate().is_err());
        let nan = SimConfig { tick_secs: f32::NAN, ..SimConfig::default() };
        assert!(nan.validate().is_err());
        let threads = SimConfig { num_threads: Some(0), ..SimConfig::default() };
        assert!(threads.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, Vec2};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn point_in_stays_in_box() {
        let mut rng = SimRng::new(1);
        let (min, max) = (Vec2::new(-2.0, 1.0), Vec2::new(3.0, 4.0));
        for _ in 0..100 {
            let p = rng.point_in(min, max);
            assert!(p.x >= min.x && p.x < max.x);
            assert!(p.y >= min.y && p.y < max.y);
        }
    }

    #[test]
    fn point_in_degenerate_axis() {
        let mut rng = SimRng::new(1);
        let p = rng.point_in(Vec2::new(2.0, 0.0), Vec2::new(2.0, 1.0));
        assert_eq!(p.x, 2.0);
    }
}
