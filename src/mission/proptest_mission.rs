//! Property-based tests for intercept planning and meteor animation using proptest.
//!
//! These tests verify that the mission invariants hold across a wide range of
//! target orbits, configurations and tick sequences.

use std::f64::consts::{PI, TAU};

use proptest::prelude::*;

use super::{plan, Mission, MissionConfig};
use crate::orbit::OrbitalBody;
use crate::test_utils::fixtures::FAR_AWAY;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every valid plan has the configured sample count and exact endpoints.
    #[test]
    fn prop_plan_endpoints(
        angle in -TAU..TAU,
        radius in 1.0f64..50.0,
        angular_speed in 0.001f64..1.0,
        impact_time in 0.5f64..60.0,
        launch_offset in -PI..0.0,
        segments in 1usize..800,
    ) {
        let target = OrbitalBody::new(angle, radius, angular_speed).snapshot();
        let config = MissionConfig {
            impact_time,
            launch_offset_angle: launch_offset,
            launch_distance: radius * 3.0,
            control_distance: radius * 1.5,
            path_segments: segments,
            ..Default::default()
        };
        let plan = plan(&target, &config).unwrap();

        prop_assert_eq!(plan.path().len(), segments + 1);
        prop_assert_eq!(plan.path()[0], plan.launch_point());
        prop_assert_eq!(plan.path()[segments], plan.predicted_impact_point());

        let future = angle + angular_speed * impact_time;
        let p = plan.predicted_impact_point();
        prop_assert!((p.x - radius * future.cos()).abs() < 1e-9);
        prop_assert!((p.z - radius * future.sin()).abs() < 1e-9);
    }

    /// Progress never decreases and stays within [0, 1].
    #[test]
    fn prop_progress_monotone_and_clamped(
        ticks in prop::collection::vec(-1.0f64..3.0, 1..200),
        fast_forward in any::<bool>(),
    ) {
        let target = OrbitalBody::new(0.0, 25.0, 0.02).snapshot();
        let mut mission = Mission::launch(&target, MissionConfig::default()).unwrap();
        mission.set_fast_forward(fast_forward);

        let mut last = mission.state().progress;
        for dt in ticks {
            mission.advance(dt, FAR_AWAY);
            let progress = mission.state().progress;
            prop_assert!(progress >= last, "progress went back: {} -> {}", last, progress);
            prop_assert!((0.0..=1.0).contains(&progress));
            last = progress;
        }
    }

    /// Once impacted, further ticks change nothing.
    #[test]
    fn prop_idempotent_after_impact(
        angle in 0.0f64..TAU,
        ticks in prop::collection::vec(0.0f64..5.0, 1..50),
    ) {
        let target = OrbitalBody::new(angle, 25.0, 0.02).snapshot();
        let mut mission = Mission::launch(&target, MissionConfig::default()).unwrap();
        let aim = mission.plan().predicted_impact_point();
        mission.advance(15.0, aim);
        prop_assert!(mission.state().has_impacted);

        let frozen_state = mission.state();
        let frozen_pos = mission.position();
        for dt in ticks {
            prop_assert!(mission.advance(dt, aim).is_none());
        }
        prop_assert_eq!(mission.state(), frozen_state);
        prop_assert_eq!(mission.position(), frozen_pos);
    }

    /// Fast-forward never needs more ticks than normal speed to finish.
    #[test]
    fn prop_fast_forward_finishes_sooner(
        dt in 0.01f64..0.5,
        multiplier in 1.5f64..10.0,
    ) {
        let target = OrbitalBody::new(0.0, 25.0, 0.02).snapshot();
        let config = MissionConfig {
            fast_forward_multiplier: multiplier,
            ..Default::default()
        };

        let ticks_to_finish = |fast: bool| {
            let mut mission = Mission::launch(&target, config.clone()).unwrap();
            mission.set_fast_forward(fast);
            let mut ticks = 0;
            while mission.state().progress < 1.0 && ticks < 100_000 {
                mission.advance(dt, FAR_AWAY);
                ticks += 1;
            }
            ticks
        };

        let normal = ticks_to_finish(false);
        let fast = ticks_to_finish(true);
        prop_assert!(fast < normal, "fast {} vs normal {}", fast, normal);
    }
}
