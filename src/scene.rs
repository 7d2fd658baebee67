//! Scene population: the Sun, the Earth, a background wanderer and the
//! first meteor launch.
//!
//! Only simulation components are spawned here. Meshes and materials are
//! attached by the render plugin, so the scene also runs headless.

use std::f64::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::mission::LaunchMission;
use crate::orbit::{OrbitalBody, Spin};
use crate::pseudo_orbit::PseudoOrbit;
use crate::types::{
    EARTH_ANGULAR_SPEED, EARTH_AXIAL_TILT_DEG, EARTH_ORBIT_RADIUS, EARTH_SPIN_RATE,
    SUN_SPIN_RATE,
};

/// Marker for the Sun.
#[derive(Component)]
pub struct Sun;

/// Marker for the body meteors are launched at.
#[derive(Component)]
pub struct TargetBody;

/// Scene setup options.
#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    /// Earth's starting angle; random when `None`.
    pub earth_start_angle: Option<f64>,
    /// Whether to launch a meteor at startup.
    pub launch_on_startup: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            earth_start_angle: None,
            launch_on_startup: true,
        }
    }
}

/// Plugin spawning the simulated bodies.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>()
            .add_systems(Startup, spawn_scene);
    }
}

fn spawn_scene(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    mut launches: MessageWriter<LaunchMission>,
) {
    commands.spawn((
        Sun,
        Spin::new(SUN_SPIN_RATE, 0.0),
        Transform::default(),
        Name::new("Sun"),
    ));

    let angle = settings
        .earth_start_angle
        .unwrap_or_else(|| rand::thread_rng().gen_range(0.0..TAU));
    let earth = OrbitalBody::new(angle, EARTH_ORBIT_RADIUS, EARTH_ANGULAR_SPEED);
    let start = earth.position().as_vec3();

    let earth = commands
        .spawn((
            TargetBody,
            earth,
            Spin::new(EARTH_SPIN_RATE, EARTH_AXIAL_TILT_DEG.to_radians()),
            Transform::from_translation(start),
            Name::new("Earth"),
        ))
        .id();

    let wanderer = PseudoOrbit::default();
    let wanderer_start = wanderer.position().as_vec3();
    commands.spawn((
        wanderer,
        Transform::from_translation(wanderer_start),
        Name::new("Wanderer"),
    ));

    info!("Earth placed at {:.1}° on its orbit", angle.to_degrees());

    if settings.launch_on_startup {
        launches.write(LaunchMission {
            target: earth,
            config: None,
        });
    }
}
