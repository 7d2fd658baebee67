//! Camera system for the vignette.
//!
//! A perspective camera orbiting the Sun: scroll to zoom, right-drag to
//! swing around.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

/// Closest the camera may get to the origin.
pub const MIN_DISTANCE: f32 = 15.0;

/// Furthest the camera may get from the origin.
pub const MAX_DISTANCE: f32 = 300.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of swing per pixel of drag.
pub const ORBIT_SPEED: f32 = 0.005;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking the camera's spherical coordinates around the origin.
#[derive(Resource, Clone, Debug)]
pub struct CameraRig {
    pub distance: f32,
    /// Rotation about Y; 0 looks from +Z.
    pub yaw: f32,
    /// Elevation above the orbital plane.
    pub pitch: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        // Same view as a camera at (0, 30, 100) looking at the origin
        let start = Vec3::new(0.0, 30.0, 100.0);
        Self {
            distance: start.length(),
            yaw: 0.0,
            pitch: start.y.atan2(start.z),
        }
    }
}

impl CameraRig {
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        Vec3::new(
            horizontal * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            horizontal * self.yaw.cos(),
        )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(Vec3::ZERO, Vec3::Y)
    }

    /// Logarithmic zoom; positive `scroll` moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = 1.0 - scroll * ZOOM_SPEED;
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn swing(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SPEED;
        self.pitch = (self.pitch + delta.y * ORBIT_SPEED).clamp(-1.5, 1.5);
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_orbit, apply_camera_rig).chain());
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 4000.0,
            ..default()
        }),
        rig.transform(),
        MainCamera,
    ));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut rig: ResMut<CameraRig>) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }
    rig.zoom(mouse_scroll.delta.y);
}

/// Handle right mouse button drag for swinging around the Sun.
fn camera_orbit(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut rig: ResMut<CameraRig>,
) {
    if !mouse_buttons.pressed(MouseButton::Right) || mouse_motion.delta == Vec2::ZERO {
        return;
    }
    rig.swing(mouse_motion.delta);
}

fn apply_camera_rig(rig: Res<CameraRig>, mut cameras: Query<&mut Transform, With<MainCamera>>) {
    if !rig.is_changed() {
        return;
    }
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    *transform = rig.transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye_matches_start() {
        let eye = CameraRig::default().eye();
        assert!((eye - Vec3::new(0.0, 30.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut rig = CameraRig::default();
        for _ in 0..100 {
            rig.zoom(1.0);
        }
        assert_eq!(rig.distance, MIN_DISTANCE);
        for _ in 0..100 {
            rig.zoom(-1.0);
        }
        assert_eq!(rig.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_swing_limits_pitch() {
        let mut rig = CameraRig::default();
        rig.swing(Vec2::new(0.0, 10_000.0));
        assert_eq!(rig.pitch, 1.5);
    }
}
