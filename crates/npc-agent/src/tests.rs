//! Unit tests for npc-agent.

#[cfg(test)]
mod state {
    use npc_core::NodeId;
    use crate::{ActivePath, AgentState, BehaviorState, PathPurpose};

    #[test]
    fn new_agent_is_idle_with_no_path() {
        let s = AgentState::new(vec![NodeId(1), NodeId(2)]);
        assert_eq!(s.behavior, BehaviorState::Idle);
        assert!(s.path.is_none());
        assert!(s.path_exhausted());
        assert!(!s.target_detected);
        assert_eq!(s.patrol_waypoint(), Some(NodeId(1)));
        assert_eq!(s.last_known_target, NodeId::INVALID);
    }

    #[test]
    fn advance_patrol_wraps() {
        let mut s = AgentState::new(vec![NodeId(4), NodeId(5), NodeId(6)]);
        s.advance_patrol();
        s.advance_patrol();
        assert_eq!(s.patrol_waypoint(), Some(NodeId(6)));
        s.advance_patrol();
        assert_eq!(s.patrol_index, 0);
    }

    #[test]
    fn advance_patrol_without_route_is_noop() {
        let mut s = AgentState::new(vec![]);
        s.advance_patrol();
        assert_eq!(s.patrol_index, 0);
        assert_eq!(s.patrol_waypoint(), None);
    }

    #[test]
    fn active_path_walks_to_exhaustion() {
        let mut p = ActivePath::new(vec![NodeId(0), NodeId(1)], PathPurpose::Patrol(0));
        assert_eq!(p.next_node(), Some(NodeId(0)));
        p.advance();
        assert_eq!(p.next_node(), Some(NodeId(1)));
        p.advance();
        assert!(p.is_exhausted());
        assert_eq!(p.next_node(), None);
        // Extra advances stay clamped.
        p.advance();
        assert_eq!(p.index, 2);
    }

    #[test]
    fn reversed_covers_consumed_part_only() {
        let mut p = ActivePath::new(vec![NodeId(0), NodeId(1), NodeId(2)], PathPurpose::Search);
        p.advance();
        p.advance();
        assert_eq!(p.consumed(), &[NodeId(0), NodeId(1)]);
        assert_eq!(p.remaining(), &[NodeId(2)]);
        let back = p.reversed();
        assert_eq!(back.nodes, vec![NodeId(1), NodeId(0)]);
        assert_eq!(back.purpose, PathPurpose::Retrace);
        assert_eq!(back.index, 0);
    }

    #[test]
    fn set_and_clear_path() {
        let mut s = AgentState::new(vec![NodeId(0)]);
        s.set_path(vec![NodeId(0)], PathPurpose::Patrol(0));
        assert!(!s.path_exhausted());
        s.clear_path();
        assert!(s.path_exhausted());
    }

    #[test]
    fn display_names() {
        assert_eq!(BehaviorState::Search.to_string(), "search");
        assert_eq!(BehaviorState::default(), BehaviorState::Idle);
    }
}

#[cfg(test)]
mod motion {
    use npc_core::Vec2;
    use crate::{Kinematics, Motion, step_toward};

    #[test]
    fn zero_forward_defaults_to_x() {
        let k = Kinematics::new(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(k.forward, Vec2::X);
    }

    #[test]
    fn forward_is_normalized() {
        let k = Kinematics::new(Vec2::ZERO, Vec2::new(0.0, 5.0));
        assert_eq!(k.forward, Vec2::Y);
    }

    #[test]
    fn face_ignores_zero_direction() {
        let mut k = Kinematics::new(Vec2::ZERO, Vec2::Y);
        k.face(Vec2::ZERO);
        assert_eq!(k.forward, Vec2::Y);
        k.face(Vec2::new(-2.0, 0.0));
        assert_eq!(k.forward, -Vec2::X);
    }

    #[test]
    fn move_forward_scales_with_dt() {
        let mut k = Kinematics::new(Vec2::ZERO, Vec2::X);
        k.move_forward(3.0, 0.5);
        assert!((k.position - Vec2::new(1.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn step_toward_never_overshoots() {
        let mut k = Kinematics::new(Vec2::ZERO, Vec2::Y);
        let left = step_toward(&mut k, Vec2::new(1.0, 0.0), 10.0, 1.0);
        assert!(left < 1e-5);
        assert!((k.position - Vec2::new(1.0, 0.0)).length() < 1e-5);
        assert_eq!(k.forward, Vec2::X);
    }

    #[test]
    fn step_toward_partial_step() {
        let mut k = Kinematics::default();
        let left = step_toward(&mut k, Vec2::new(0.0, 4.0), 1.0, 1.0);
        assert!((left - 3.0).abs() < 1e-5);
        assert_eq!(k.forward, Vec2::Y);
    }

    #[test]
    fn step_toward_at_target_is_noop() {
        let mut k = Kinematics::new(Vec2::ONE, Vec2::Y);
        let left = step_toward(&mut k, Vec2::ONE, 3.0, 0.1);
        assert_eq!(left, 0.0);
        assert_eq!(k.forward, Vec2::Y);
    }
}

#[cfg(test)]
mod builder {
    use npc_core::{AgentId, NodeId, Vec2};
    use crate::AgentStoreBuilder;

    #[test]
    fn spawn_assigns_ascending_ids() {
        let mut b = AgentStoreBuilder::with_capacity(3);
        let a = b.spawn(Vec2::ZERO, Vec2::X, vec![]);
        let c = b.spawn(Vec2::ONE, Vec2::Y, vec![NodeId(2)]);
        assert_eq!(a, AgentId(0));
        assert_eq!(c, AgentId(1));
        assert_eq!(b.len(), 2);

        let store = b.build();
        assert_eq!(store.count, 2);
        assert_eq!(store.states.len(), store.kinematics.len());
        assert_eq!(store.body(c).position, Vec2::ONE);
        assert_eq!(store.state(c).patrol_route, vec![NodeId(2)]);
    }

    #[test]
    fn empty_builder_gives_empty_store() {
        let b = AgentStoreBuilder::new();
        assert!(b.is_empty());
        let store = b.build();
        assert!(store.is_empty());
        assert_eq!(store.agent_ids().count(), 0);
    }
}

#[cfg(test)]
mod store {
    use npc_core::{AgentId, CoreError, Vec2};
    use crate::{AgentStoreBuilder, BehaviorState};

    #[test]
    fn agent_ids_ascending() {
        let mut b = AgentStoreBuilder::new();
        for i in 0..4 {
            b.spawn(Vec2::new(i as f32, 0.0), Vec2::X, vec![]);
        }
        let store = b.build();
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn get_state_out_of_range() {
        let store = AgentStoreBuilder::new().build();
        assert!(matches!(store.get_state(AgentId(0)), Err(CoreError::AgentNotFound(AgentId(0)))));
        assert!(store.get_body(AgentId(3)).is_err());
        assert!(!store.contains(AgentId(0)));
    }

    #[test]
    fn state_mut_writes_through() {
        let mut b = AgentStoreBuilder::new();
        let a = b.spawn(Vec2::ZERO, Vec2::X, vec![]);
        let mut store = b.build();
        store.state_mut(a).behavior = BehaviorState::Chase;
        store.body_mut(a).position = Vec2::ONE;
        assert_eq!(store.get_state(a).map(|s| s.behavior).ok(), Some(BehaviorState::Chase));
        assert_eq!(store.body(a).position, Vec2::ONE);
    }
}
