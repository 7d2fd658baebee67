//! Meteorfall - Meteor Intercept Vignette
//!
//! A small solar system in which a meteor is planned onto, and flown into,
//! the Earth.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use meteorfall::camera::CameraPlugin;
use meteorfall::input::InputPlugin;
use meteorfall::mission::MissionPlugin;
use meteorfall::orbit::OrbitPlugin;
use meteorfall::pseudo_orbit::PseudoOrbitPlugin;
use meteorfall::render::RenderPlugin;
use meteorfall::scene::ScenePlugin;
use meteorfall::time::TimePlugin;
use meteorfall::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Meteorfall".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=warn,naga=warn".into(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        // Simulation first, so scene startup can write launch messages
        .add_plugins((
            TimePlugin,
            OrbitPlugin,
            PseudoOrbitPlugin,
            MissionPlugin,
            ScenePlugin,
        ))
        .add_plugins((RenderPlugin, CameraPlugin, InputPlugin, UiPlugin))
        .run();
}
