//! Position synchronization between simulation and rendering.
//!
//! Simulation state is f64 ([`OrbitalBody`], [`Mission`]); transforms are
//! f32 and written here once per frame after the simulation has ticked.

use bevy::prelude::*;

use crate::mission::Mission;
use crate::orbit::{OrbitalBody, Spin};
use crate::render::bodies::ImpactFlash;

/// Meteor scale while its impact flash is showing.
const FLASH_SCALE: f32 = 2.0;

/// Sync orbiting body positions.
pub fn sync_orbital_transforms(mut bodies: Query<(&mut Transform, &OrbitalBody)>) {
    for (mut transform, body) in bodies.iter_mut() {
        transform.translation = body.position().as_vec3();
    }
}

/// Sync self-rotation of spinning bodies.
pub fn sync_spin_transforms(mut spins: Query<(&mut Transform, &Spin)>) {
    for (mut transform, spin) in spins.iter_mut() {
        transform.rotation = spin.rotation();
    }
}

/// Sync meteor position, tumble and impact scale.
pub fn sync_meteor_transforms(
    mut meteors: Query<(&mut Transform, &Mission, Option<&ImpactFlash>)>,
) {
    for (mut transform, mission, flash) in meteors.iter_mut() {
        transform.translation = mission.position().as_vec3();
        let r = mission.rotation().as_vec3();
        transform.rotation = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        transform.scale = if flash.is_some() {
            Vec3::splat(FLASH_SCALE)
        } else {
            Vec3::ONE
        };
    }
}
