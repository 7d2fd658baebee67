//! Circular-orbit bodies.
//!
//! Bodies move on circles in the y = 0 plane around the origin. The angle is
//! measured from +X and grows towards +Z, so a body at angle θ sits at
//! `(r·cos θ, 0, r·sin θ)`. This is the live position the meteor collides
//! against; the planner only ever sees an [`OrbitSnapshot`].

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::types::{SimulationSet, SimulationTime};

/// A body on a circular orbit.
#[derive(Component, Clone, Debug)]
pub struct OrbitalBody {
    /// Current angle in radians.
    pub angle: f64,
    /// Orbit radius in scene units.
    pub radius: f64,
    /// Angular speed in radians per simulated second.
    pub angular_speed: f64,
}

/// Immutable view of an orbital body at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSnapshot {
    pub angle: f64,
    pub radius: f64,
    pub angular_speed: f64,
}

impl OrbitalBody {
    pub fn new(angle: f64, radius: f64, angular_speed: f64) -> Self {
        Self {
            angle,
            radius,
            angular_speed,
        }
    }

    /// Current 3D position.
    pub fn position(&self) -> DVec3 {
        point_on_circle(self.angle, self.radius)
    }

    /// Advance the body by `dt` simulated seconds.
    ///
    /// The angle is kept in `[0, TAU)` so long sessions don't lose precision.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.angle = self.snapshot().angle_after(dt).rem_euclid(TAU);
    }

    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot {
            angle: self.angle,
            radius: self.radius,
            angular_speed: self.angular_speed,
        }
    }
}

impl OrbitSnapshot {
    /// Angle after `dt` more seconds at constant angular speed (not wrapped).
    pub fn angle_after(&self, dt: f64) -> f64 {
        self.angle + self.angular_speed * dt
    }

    /// Position after `dt` more seconds.
    pub fn position_after(&self, dt: f64) -> DVec3 {
        point_on_circle(self.angle_after(dt), self.radius)
    }
}

/// Self-rotation of a body about its (tilted) Y axis.
#[derive(Component, Clone, Debug, Default)]
pub struct Spin {
    /// Radians per simulated second.
    pub rate: f64,
    /// Accumulated rotation angle.
    pub angle: f64,
    /// Axial tilt about Z in radians.
    pub tilt: f32,
}

impl Spin {
    pub fn new(rate: f64, tilt: f32) -> Self {
        Self {
            rate,
            angle: 0.0,
            tilt,
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.angle = (self.angle + self.rate * dt).rem_euclid(TAU);
    }

    /// Rotation to apply to the body's transform.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.tilt) * Quat::from_rotation_y(self.angle as f32)
    }
}

/// Point at `angle` on a circle of `radius` in the y = 0 plane.
pub fn point_on_circle(angle: f64, radius: f64) -> DVec3 {
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Closed ring of `segments + 1` points, first and last coinciding.
pub fn orbit_ring(radius: f64, segments: usize) -> Vec<DVec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| point_on_circle(i as f64 / segments as f64 * TAU, radius))
        .collect()
}

/// Plugin moving orbital bodies and spins by simulated time.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (advance_orbits, advance_spins).in_set(SimulationSet::Orbits),
        );
    }
}

fn advance_orbits(mut bodies: Query<&mut OrbitalBody>, sim_time: Res<SimulationTime>) {
    if sim_time.delta <= 0.0 {
        return;
    }
    for mut body in bodies.iter_mut() {
        body.advance(sim_time.delta);
    }
}

fn advance_spins(mut spins: Query<&mut Spin>, sim_time: Res<SimulationTime>) {
    if sim_time.delta <= 0.0 {
        return;
    }
    for mut spin in spins.iter_mut() {
        spin.advance(sim_time.delta);
    }
}
