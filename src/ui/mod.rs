//! UI module providing the egui-based mission HUD.

mod mission_status;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use mission_status::phase_label;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, mission_status::mission_status_panel);
    }
}
