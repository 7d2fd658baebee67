//! Time advancement system for the vignette.
//!
//! Handles progression of simulation time based on scale and pause state.

use bevy::prelude::*;

use crate::types::{SimulationSet, SimulationTime};

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTime>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Time,
                    SimulationSet::Orbits,
                    SimulationSet::Missions,
                    SimulationSet::Visuals,
                )
                    .chain(),
            )
            .add_systems(Update, advance_time.in_set(SimulationSet::Time));
    }
}

/// Advance simulation time based on scale and pause state.
///
/// Every downstream system reads `SimulationTime::delta` so orbits and
/// missions see the same simulated step within a frame.
fn advance_time(mut sim_time: ResMut<SimulationTime>, time: Res<Time>) {
    sim_time.advance(time.delta_secs_f64());
}
