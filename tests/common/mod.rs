//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use meteorfall::mission::{Mission, MissionEvent};
use meteorfall::orbit::{OrbitSnapshot, OrbitalBody};
use meteorfall::types::{EARTH_ANGULAR_SPEED, EARTH_ORBIT_RADIUS};

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

/// Feed `ticks` to the mission against a fixed target position.
///
/// Returns the events emitted, in order.
pub fn feed_ticks(mission: &mut Mission, ticks: &[f64], target: DVec3) -> Vec<MissionEvent> {
    ticks
        .iter()
        .filter_map(|&dt| mission.advance(dt, target))
        .collect()
}

/// Drive `mission` and a live `target` together with fixed ticks, stopping
/// at the first event.
///
/// Returns the event (if any) and the number of ticks taken.
pub fn fly_until_event(
    mission: &mut Mission,
    target: &mut OrbitalBody,
    dt: f64,
    max_ticks: usize,
) -> (Option<MissionEvent>, usize) {
    for tick in 1..=max_ticks {
        target.advance(dt);
        if let Some(event) = mission.advance(dt, target.position()) {
            return (Some(event), tick);
        }
    }
    (None, max_ticks)
}

/// Ticks needed for progress to reach 1 against an unreachable target.
pub fn ticks_to_arrival(mission: &mut Mission, dt: f64, max_ticks: usize) -> Option<usize> {
    for tick in 1..=max_ticks {
        mission.advance(dt, FAR_AWAY);
        if mission.state().progress >= 1.0 {
            return Some(tick);
        }
    }
    None
}
