//! Body visuals.
//!
//! The scene and mission plugins spawn bare simulation entities; the systems
//! here give them meshes and materials as they appear, pulse the Sun's
//! corona and flash the meteor when it hits.

use bevy::prelude::*;

use crate::mission::{MeteorImpact, Mission, MissionPhase};
use crate::pseudo_orbit::PseudoOrbit;
use crate::scene::{Sun, TargetBody};
use crate::types::{EARTH_SIZE, METEOR_SIZE, SUN_RADIUS};

/// Corona shell around the Sun.
#[derive(Component)]
pub struct Corona;

/// Additive glow shell around the Earth.
#[derive(Component)]
pub struct Atmosphere;

/// Atmosphere shell radius relative to the planet.
pub const ATMOSPHERE_SCALE: f32 = 1.015;

/// Marks a meteor showing its impact flash.
#[derive(Component)]
pub struct ImpactFlash {
    normal: Handle<StandardMaterial>,
}

/// Handles shared by all meteors.
#[derive(Resource)]
pub struct MeteorAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub flash_material: Handle<StandardMaterial>,
}

/// Plugin attaching meshes to simulated bodies.
pub struct BodyVisualsPlugin;

impl Plugin for BodyVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_meteor_assets).add_systems(
            Update,
            (
                attach_sun_visuals,
                attach_target_visuals,
                attach_meteor_visuals,
                attach_wanderer_visuals,
                shimmer_corona,
                flash_on_impact,
                clear_flash_on_reset,
            ),
        );
    }
}

fn load_meteor_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(MeteorAssets {
        mesh: meshes.add(Sphere::new(METEOR_SIZE).mesh().uv(16, 16)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.27, 0.0),
            emissive: LinearRgba::rgb(0.67, 0.13, 0.0),
            ..default()
        }),
        flash_material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.27, 0.0),
            emissive: LinearRgba::rgb(4.0, 2.6, 0.0),
            ..default()
        }),
    });
}

fn attach_sun_visuals(
    mut commands: Commands,
    suns: Query<Entity, Added<Sun>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in suns.iter() {
        let color = Color::srgb(1.0, 0.85, 0.4);
        let corona = commands
            .spawn((
                Corona,
                Mesh3d(meshes.add(Sphere::new(SUN_RADIUS * 1.06).mesh().uv(64, 64))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(1.0, 0.8, 0.4, 0.12),
                    alpha_mode: AlphaMode::Add,
                    unlit: true,
                    ..default()
                })),
                Transform::default(),
            ))
            .id();

        commands
            .entity(entity)
            .insert((
                Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(64, 64))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: color,
                    emissive: color.to_linear() * 2.0,
                    unlit: true,
                    ..default()
                })),
                PointLight {
                    intensity: 2.0e7,
                    range: 500.0,
                    shadows_enabled: false,
                    ..default()
                },
            ))
            .add_child(corona);
    }
}

fn attach_target_visuals(
    mut commands: Commands,
    targets: Query<Entity, Added<TargetBody>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in targets.iter() {
        let atmosphere = commands
            .spawn((
                Atmosphere,
                Mesh3d(meshes.add(Sphere::new(EARTH_SIZE * ATMOSPHERE_SCALE).mesh().uv(64, 64))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(0.27, 0.53, 1.0, 0.25),
                    alpha_mode: AlphaMode::Add,
                    unlit: true,
                    ..default()
                })),
                Transform::default(),
            ))
            .id();

        commands
            .entity(entity)
            .insert((
                Mesh3d(meshes.add(Sphere::new(EARTH_SIZE).mesh().uv(64, 64))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.2, 0.5, 0.8),
                    perceptual_roughness: 0.8,
                    ..default()
                })),
            ))
            .add_child(atmosphere);
    }
}

fn attach_meteor_visuals(
    mut commands: Commands,
    meteors: Query<Entity, Added<Mission>>,
    assets: Res<MeteorAssets>,
) {
    for entity in meteors.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
        ));
    }
}

fn attach_wanderer_visuals(
    mut commands: Commands,
    wanderers: Query<Entity, Added<PseudoOrbit>>,
    assets: Res<MeteorAssets>,
) {
    for entity in wanderers.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
        ));
    }
}

/// Corona opacity and size pulse on wall-clock time.
fn shimmer_corona(
    time: Res<Time>,
    mut coronas: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), With<Corona>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let t = time.elapsed_secs();
    for (mut transform, material) in coronas.iter_mut() {
        transform.scale = Vec3::splat(1.0 + (t * 1.5).sin() * 0.008);
        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(0.10 + (t * 2.0).sin() * 0.02);
        }
    }
}

fn flash_on_impact(
    mut commands: Commands,
    mut impacts: MessageReader<MeteorImpact>,
    meteors: Query<&MeshMaterial3d<StandardMaterial>, With<Mission>>,
    assets: Res<MeteorAssets>,
) {
    for impact in impacts.read() {
        let Ok(material) = meteors.get(impact.meteor) else {
            continue;
        };
        commands.entity(impact.meteor).insert((
            ImpactFlash {
                normal: material.0.clone(),
            },
            MeshMaterial3d(assets.flash_material.clone()),
        ));
    }
}

/// Undo the flash once a reset puts the meteor back in flight.
fn clear_flash_on_reset(
    mut commands: Commands,
    flashed: Query<(Entity, &Mission, &ImpactFlash)>,
) {
    for (entity, mission, flash) in flashed.iter() {
        if mission.phase() == MissionPhase::Impacted {
            continue;
        }
        commands
            .entity(entity)
            .insert(MeshMaterial3d(flash.normal.clone()))
            .remove::<ImpactFlash>();
    }
}
