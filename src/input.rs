//! Input handling for keyboard shortcuts.
//!
//! - `Space`: pause / resume
//! - `F`: toggle meteor fast-forward
//! - `R`: reset the meteor mission from the target's current position
//! - `[` / `]`: slow down / speed up simulated time

use bevy::prelude::*;

use crate::mission::{Mission, ResetMissions};
use crate::types::{SimulationSet, SimulationTime};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        // Before the clock ticks so a pause applies to this frame
        app.add_systems(Update, keyboard_shortcuts.before(SimulationSet::Time));
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim_time: ResMut<SimulationTime>,
    mut missions: Query<&mut Mission>,
    mut resets: MessageWriter<ResetMissions>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        sim_time.paused = !sim_time.paused;
        info!("Simulation {}", if sim_time.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::KeyF) {
        for mut mission in missions.iter_mut() {
            let enabled = mission.toggle_fast_forward();
            info!("Meteor fast-forward {}", if enabled { "on" } else { "off" });
        }
    }

    if keys.just_pressed(KeyCode::KeyR) {
        resets.write(ResetMissions);
    }

    // Time controls: [ and ] to adjust simulation speed
    if keys.just_pressed(KeyCode::BracketLeft) {
        sim_time.slower();
        info!("Time scale: {}x", sim_time.scale);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        sim_time.faster();
        info!("Time scale: {}x", sim_time.scale);
    }
}
