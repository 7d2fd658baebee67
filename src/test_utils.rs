//! Test utilities for mission tests.
//!
//! Provides fixtures for the Earth target and helpers for driving a mission
//! tick by tick against a live orbiting body.

use bevy::math::DVec3;

use crate::mission::{Mission, MissionEvent};
use crate::orbit::OrbitalBody;

/// Fixtures for creating test targets.
pub mod fixtures {
    use super::*;
    use crate::orbit::OrbitSnapshot;
    use crate::types::{EARTH_ANGULAR_SPEED, EARTH_ORBIT_RADIUS};

    /// A target position nothing can hit.
    pub const FAR_AWAY: DVec3 = DVec3::new(1.0e6, 0.0, 0.0);

    /// Earth on its scene orbit at `angle`.
    pub fn earth_body(angle: f64) -> OrbitalBody {
        OrbitalBody::new(angle, EARTH_ORBIT_RADIUS, EARTH_ANGULAR_SPEED)
    }

    /// Snapshot of Earth at `angle`.
    pub fn earth_at(angle: f64) -> OrbitSnapshot {
        earth_body(angle).snapshot()
    }
}

/// Drive `mission` and `target` together with fixed ticks.
///
/// Returns every event the mission emitted, in order.
pub fn run_ticks(
    mission: &mut Mission,
    target: &mut OrbitalBody,
    dt: f64,
    ticks: usize,
) -> Vec<MissionEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        target.advance(dt);
        if let Some(event) = mission.advance(dt, target.position()) {
            events.push(event);
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::mission::MissionConfig;

    #[test]
    fn test_earth_fixture() {
        let earth = fixtures::earth_at(0.0);
        assert_relative_eq!(earth.radius, 25.0);
        assert!(earth.angular_speed > 0.0);
    }

    #[test]
    fn test_run_ticks_hits_live_earth() {
        let mut earth = fixtures::earth_body(0.0);
        let mut mission = Mission::launch(&earth.snapshot(), MissionConfig::default()).unwrap();

        let events = run_ticks(&mut mission, &mut earth, 0.05, 400);
        let impacts = events
            .iter()
            .filter(|e| matches!(e, MissionEvent::Impact { .. }))
            .count();
        assert_eq!(impacts, 1, "events: {events:?}");
    }
}
