//! Rendering systems for the vignette.
//!
//! This module provides visual representation of the simulated bodies,
//! orbit and trajectory lines, and background elements.

mod background;
pub mod bodies;
mod labels;
mod sync;
mod trails;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodyVisualsPlugin;
use self::labels::LabelPlugin;
use self::sync::{sync_meteor_transforms, sync_orbital_transforms, sync_spin_transforms};
use self::trails::{draw_meteor_paths, draw_orbit_rings, draw_pseudo_orbits, TrailPlugin};
use crate::types::SimulationSet;

pub use self::background::{STARFIELD_EXTENT, STAR_COUNT};
pub use self::bodies::{Atmosphere, ImpactFlash, MeteorAssets};
pub use self::labels::{BodyLabel, LabelSettings};
pub use self::trails::TrailSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, BodyVisualsPlugin, LabelPlugin, TrailPlugin))
            // Transforms first, then lines drawn against the final positions
            .add_systems(
                Update,
                (
                    (
                        sync_orbital_transforms,
                        sync_spin_transforms,
                        sync_meteor_transforms,
                    ),
                    (draw_orbit_rings, draw_pseudo_orbits, draw_meteor_paths),
                )
                    .chain()
                    .in_set(SimulationSet::Visuals),
            );
    }
}
