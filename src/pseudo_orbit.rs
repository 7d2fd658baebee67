//! Looping pseudo-orbit for a background wanderer.
//!
//! Not physics: an inclined ellipse sampled once, with the body hopping from
//! sample to sample at a fixed fraction of a revolution per second.

use std::f64::consts::TAU;

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;

use crate::types::{SimulationSet, SimulationTime};

/// Sampled inclined ellipse with one focus at the origin.
#[derive(Component, Clone, Debug)]
pub struct PseudoOrbit {
    points: Vec<DVec3>,
    /// Revolutions completed (fractional part is the phase).
    pub t: f64,
    /// Revolutions per simulated second.
    pub speed: f64,
}

impl Default for PseudoOrbit {
    fn default() -> Self {
        Self::new(27.5, 0.3, 5.0_f64.to_radians(), 256, 0.02)
    }
}

impl PseudoOrbit {
    /// Ellipse with semi-major axis `a`, eccentricity `e`, tilted by
    /// `inclination` about X, sampled at `segments + 1` points.
    pub fn new(a: f64, e: f64, inclination: f64, segments: usize, speed: f64) -> Self {
        let segments = segments.max(3);
        let e = e.clamp(0.0, 0.99);
        let b = a * (1.0 - e * e).sqrt();
        let tilt = DQuat::from_rotation_x(inclination);

        let points = (0..=segments)
            .map(|j| {
                let theta = j as f64 / segments as f64 * TAU;
                // Shifted so the focus, not the center, sits at the origin
                tilt * DVec3::new(a * (theta.cos() - e), 0.0, b * theta.sin())
            })
            .collect();

        Self {
            points,
            t: 0.0,
            speed,
        }
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.t += dt * self.speed;
    }

    /// Index of the sample the body currently sits on.
    pub fn index(&self) -> usize {
        let phase = self.t.rem_euclid(1.0);
        ((phase * self.points.len() as f64) as usize).min(self.points.len() - 1)
    }

    pub fn position(&self) -> DVec3 {
        self.points[self.index()]
    }
}

/// Plugin advancing pseudo-orbits.
pub struct PseudoOrbitPlugin;

impl Plugin for PseudoOrbitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_pseudo_orbits.in_set(SimulationSet::Orbits));
    }
}

fn advance_pseudo_orbits(
    mut bodies: Query<(&mut PseudoOrbit, &mut Transform)>,
    sim_time: Res<SimulationTime>,
) {
    for (mut orbit, mut transform) in bodies.iter_mut() {
        orbit.advance(sim_time.delta);
        transform.translation = orbit.position().as_vec3();
    }
}
