//! Shared constants, system ordering and the simulation clock.

use std::f64::consts::TAU;

use bevy::prelude::*;

/// System sets for the per-frame simulation pipeline.
///
/// The clock must advance before orbits move, and orbits must move before
/// missions compare the projectile against the live target position.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Clock advancement.
    Time,
    /// Orbiting body motion.
    Orbits,
    /// Meteor mission ticks and collision checks.
    Missions,
    /// Transform sync and gizmo drawing.
    Visuals,
}

/// Scene constants (scene units, simulated seconds)

/// Days per year; one simulated second is one day of Earth's orbit.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Earth's orbital radius in scene units.
pub const EARTH_ORBIT_RADIUS: f64 = 25.0;

/// Earth's angular speed (one revolution per 365.25 simulated seconds).
pub const EARTH_ANGULAR_SPEED: f64 = TAU / DAYS_PER_YEAR;

/// Earth's visual radius.
pub const EARTH_SIZE: f32 = 1.3;

/// Earth's axial tilt in degrees.
pub const EARTH_AXIAL_TILT_DEG: f32 = 23.44;

/// Earth's spin rate (one rotation per simulated second).
pub const EARTH_SPIN_RATE: f64 = TAU;

/// Sun's visual radius.
pub const SUN_RADIUS: f32 = 5.0;

/// Sun's spin rate (one rotation per 25 simulated seconds).
pub const SUN_SPIN_RATE: f64 = TAU / 25.0;

/// Meteor's visual radius.
pub const METEOR_SIZE: f32 = 0.3;

/// Simulation clock resource.
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Simulated seconds since startup.
    pub current: f64,
    /// Simulated seconds per real second.
    pub scale: f64,
    /// Whether the clock is paused.
    pub paused: bool,
    /// Simulated seconds advanced during the last frame (0 while paused).
    pub delta: f64,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            current: 0.0,
            scale: 1.0,
            paused: false,
            delta: 0.0,
        }
    }
}

impl SimulationTime {
    /// Advance the clock by a real-time delta, honoring pause and scale.
    ///
    /// Returns the simulated delta that was applied.
    pub fn advance(&mut self, real_delta: f64) -> f64 {
        self.delta = if self.paused || !real_delta.is_finite() {
            0.0
        } else {
            real_delta.max(0.0) * self.scale
        };
        self.current += self.delta;
        self.delta
    }

    /// Halve the time scale, down to 1/8x.
    pub fn slower(&mut self) {
        self.scale = (self.scale * 0.5).max(0.125);
    }

    /// Double the time scale, up to 64x.
    pub fn faster(&mut self) {
        self.scale = (self.scale * 2.0).min(64.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_time_default() {
        let sim_time = SimulationTime::default();
        assert!(!sim_time.paused);
        assert_eq!(sim_time.scale, 1.0);
        assert_eq!(sim_time.current, 0.0);
    }

    #[test]
    fn test_advance_respects_scale() {
        let mut sim_time = SimulationTime {
            scale: 2.0,
            ..Default::default()
        };
        let dt = sim_time.advance(0.5);
        assert_eq!(dt, 1.0);
        assert_eq!(sim_time.current, 1.0);
    }

    #[test]
    fn test_advance_paused_is_zero() {
        let mut sim_time = SimulationTime {
            paused: true,
            ..Default::default()
        };
        assert_eq!(sim_time.advance(1.0), 0.0);
        assert_eq!(sim_time.current, 0.0);
    }

    #[test]
    fn test_advance_guards_bad_deltas() {
        let mut sim_time = SimulationTime::default();
        assert_eq!(sim_time.advance(-1.0), 0.0);
        assert_eq!(sim_time.advance(f64::NAN), 0.0);
        assert_eq!(sim_time.current, 0.0);
    }

    #[test]
    fn test_scale_limits() {
        let mut sim_time = SimulationTime::default();
        for _ in 0..10 {
            sim_time.slower();
        }
        assert_eq!(sim_time.scale, 0.125);
        for _ in 0..20 {
            sim_time.faster();
        }
        assert_eq!(sim_time.scale, 64.0);
    }

    #[test]
    fn test_earth_year() {
        // One revolution takes DAYS_PER_YEAR simulated seconds
        let revolution = EARTH_ANGULAR_SPEED * DAYS_PER_YEAR;
        assert!((revolution - TAU).abs() < 1e-12);
    }
}
