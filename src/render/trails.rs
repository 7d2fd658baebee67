//! Line rendering using Bevy Gizmos: orbit rings, meteor paths and the
//! wanderer's pseudo-orbit.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::mission::Mission;
use crate::orbit::{orbit_ring, OrbitalBody};
use crate::pseudo_orbit::PseudoOrbit;

/// Settings for line rendering.
#[derive(Resource)]
pub struct TrailSettings {
    /// Whether to show orbit rings.
    pub show_orbits: bool,
    /// Whether to show meteor paths.
    pub show_paths: bool,
    /// Number of segments for orbit rings.
    pub ring_segments: usize,
    /// Alpha of the not-yet-flown part of a meteor path.
    pub remaining_alpha: f32,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_paths: true,
            ring_segments: 128,
            remaining_alpha: 0.35,
        }
    }
}

/// Plugin providing line visualization.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailSettings>();
    }
}

fn to_render(points: &[DVec3]) -> impl Iterator<Item = Vec3> + '_ {
    points.iter().map(|p| p.as_vec3())
}

/// Draw circular orbit rings.
pub fn draw_orbit_rings(
    mut gizmos: Gizmos,
    settings: Res<TrailSettings>,
    bodies: Query<&OrbitalBody>,
) {
    if !settings.show_orbits {
        return;
    }
    for body in bodies.iter() {
        let ring = orbit_ring(body.radius, settings.ring_segments);
        gizmos.linestrip(to_render(&ring), Color::srgba(0.27, 0.53, 1.0, 0.4));
    }
}

/// Draw the wanderer's pseudo-orbit loop.
pub fn draw_pseudo_orbits(
    mut gizmos: Gizmos,
    settings: Res<TrailSettings>,
    orbits: Query<&PseudoOrbit>,
) {
    if !settings.show_orbits {
        return;
    }
    for orbit in orbits.iter() {
        gizmos.linestrip(to_render(orbit.points()), Color::srgba(1.0, 0.4, 0.0, 0.6));
    }
}

/// Draw each meteor's flown path solid and the rest of its arc faded.
pub fn draw_meteor_paths(
    mut gizmos: Gizmos,
    settings: Res<TrailSettings>,
    missions: Query<&Mission>,
) {
    if !settings.show_paths {
        return;
    }

    let color = Color::srgb(1.0, 0.5, 0.1);
    for mission in missions.iter() {
        let current = mission.position().as_vec3();

        // Both halves meet at the meteor, not at the nearest sample
        let traveled = to_render(mission.traveled_path()).chain(std::iter::once(current));
        gizmos.linestrip(traveled, color);

        let remaining = mission.remaining_path();
        if remaining.len() > 1 {
            let ahead = std::iter::once(current).chain(to_render(&remaining[1..]));
            gizmos.linestrip(ahead, color.with_alpha(settings.remaining_alpha));
        }
    }
}
