//! Body labels using egui for text rendering.
//!
//! Floats a name above the Sun and the Earth, following the bodies as they
//! move.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::camera::MainCamera;
use crate::scene::{Sun, TargetBody};
use crate::types::SUN_RADIUS;

/// Height of the Earth label above the planet's center.
pub const EARTH_LABEL_HEIGHT: f32 = 3.0;

/// Plugin providing body label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(Update, (attach_sun_label, attach_target_label))
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Font size in points.
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 16.0,
        }
    }
}

/// A floating name anchored above a body.
#[derive(Component, Clone, Debug)]
pub struct BodyLabel {
    pub text: String,
    /// World-space offset from the body's center.
    pub offset: Vec3,
    /// Glow drawn behind the text.
    pub glow: egui::Color32,
}

impl BodyLabel {
    /// World position the label is anchored to.
    pub fn anchor(&self, body: Vec3) -> Vec3 {
        body + self.offset
    }
}

fn attach_sun_label(mut commands: Commands, suns: Query<Entity, Added<Sun>>) {
    for entity in suns.iter() {
        commands.entity(entity).insert(BodyLabel {
            text: "Sun".into(),
            offset: Vec3::Y * (SUN_RADIUS + 2.0),
            glow: egui::Color32::from_rgba_unmultiplied(255, 200, 0, 200),
        });
    }
}

fn attach_target_label(mut commands: Commands, targets: Query<Entity, Added<TargetBody>>) {
    for entity in targets.iter() {
        commands.entity(entity).insert(BodyLabel {
            text: "Earth".into(),
            offset: Vec3::Y * EARTH_LABEL_HEIGHT,
            glow: egui::Color32::from_rgba_unmultiplied(100, 200, 255, 200),
        });
    }
}

/// Draw labels for all labelled bodies.
fn draw_body_labels(
    mut contexts: EguiContexts,
    bodies: Query<(&BodyLabel, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::background());
    let font = egui::FontId::proportional(settings.font_size);

    for (label, transform) in bodies.iter() {
        let anchor = label.anchor(transform.translation());

        // Behind the camera or off screen
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, anchor) else {
            continue;
        };
        let pos = egui::pos2(screen_pos.x, screen_pos.y);

        // Glow
        for shift in [egui::vec2(1.0, 1.0), egui::vec2(-1.0, -1.0)] {
            painter.text(
                pos + shift,
                egui::Align2::CENTER_BOTTOM,
                &label.text,
                font.clone(),
                label.glow,
            );
        }

        painter.text(
            pos,
            egui::Align2::CENTER_BOTTOM,
            &label.text,
            font.clone(),
            egui::Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_attached_to_sun_and_earth() {
        let mut app = App::new();
        app.add_systems(Update, (attach_sun_label, attach_target_label));
        let sun = app.world_mut().spawn(Sun).id();
        let earth = app.world_mut().spawn(TargetBody).id();
        let other = app.world_mut().spawn(Transform::default()).id();
        app.update();

        let world = app.world();
        assert_eq!(world.get::<BodyLabel>(sun).unwrap().text, "Sun");
        assert_eq!(world.get::<BodyLabel>(earth).unwrap().text, "Earth");
        assert!(world.get::<BodyLabel>(other).is_none());
    }

    #[test]
    fn test_earth_label_floats_above_planet() {
        let mut app = App::new();
        app.add_systems(Update, attach_target_label);
        let earth = app.world_mut().spawn(TargetBody).id();
        app.update();

        let label = app.world().get::<BodyLabel>(earth).unwrap();
        let body = Vec3::new(25.0, 0.0, 0.0);
        assert_eq!(label.anchor(body), Vec3::new(25.0, 3.0, 0.0));
    }
}
