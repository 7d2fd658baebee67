//! Background rendering for the vignette.
//!
//! Provides the starfield and the clear color.

use bevy::prelude::*;
use rand::Rng;

/// Number of background stars.
pub const STAR_COUNT: usize = 10_000;

/// Half-width of the cube the stars are scattered in.
pub const STARFIELD_EXTENT: f32 = 1000.0;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(0x00, 0x00, 0x10)))
            .add_systems(Startup, spawn_starfield);
    }
}

/// Spawn a starfield background with randomly placed stars.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Material for stars - emissive white
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    // Small low-poly sphere shared by every star
    let star_mesh = meshes.add(Sphere::new(0.35).mesh().uv(6, 4));

    let mut rng = rand::thread_rng();

    let stars: Vec<_> = (0..STAR_COUNT)
        .map(|_| {
            let x = rng.gen_range(-STARFIELD_EXTENT..STARFIELD_EXTENT);
            let y = rng.gen_range(-STARFIELD_EXTENT..STARFIELD_EXTENT);
            let z = rng.gen_range(-STARFIELD_EXTENT..STARFIELD_EXTENT);
            let scale = rng.gen_range(0.5..1.5);
            (
                Mesh3d(star_mesh.clone()),
                MeshMaterial3d(star_material.clone()),
                Transform::from_xyz(x, y, z).with_scale(Vec3::splat(scale)),
            )
        })
        .collect();
    commands.spawn_batch(stars);

    info!("Spawned {STAR_COUNT} background stars");
}
