//! Mission status panel for the active meteor.
//!
//! Displays:
//! - Mission phase
//! - Progress towards the predicted impact
//! - Fast-forward and clock state
//! - Keyboard hints

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::mission::{Mission, MissionPhase, MissionRegistry};
use crate::types::SimulationTime;

/// System to render the mission status panel.
pub fn mission_status_panel(
    mut contexts: EguiContexts,
    missions: Query<&Mission>,
    registry: Res<MissionRegistry>,
    sim_time: Res<SimulationTime>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("☄ Meteor")
        .collapsible(true)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .default_width(220.0)
        .show(ctx, |ui| {
            if missions.is_empty() {
                ui.label("No mission in flight");
            }

            for (i, mission) in missions.iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }
                render_mission_status(ui, mission);
            }

            ui.separator();
            ui.label(format!(
                "t = {:.1} s   {}x{}",
                sim_time.current,
                sim_time.scale,
                if sim_time.paused { "  (paused)" } else { "" }
            ));
            if registry.total_impacts > 0 {
                ui.label(format!("Impacts: {}", registry.total_impacts));
            }
            if registry.total_misses > 0 {
                ui.label(format!("Misses: {}", registry.total_misses));
            }

            ui.separator();
            ui.small("Space pause · F fast-forward · R reset · [ ] speed");
        });
}

/// Render status for a single mission.
fn render_mission_status(ui: &mut egui::Ui, mission: &Mission) {
    let state = mission.state();
    let (label, color) = phase_label(state.phase());

    ui.label(egui::RichText::new(label).color(color).strong());

    let remaining = (1.0 - state.progress) * mission.plan().impact_time();
    ui.add(
        egui::ProgressBar::new(state.progress as f32)
            .show_percentage()
            .fill(color),
    );
    if state.phase() == MissionPhase::InFlight {
        ui.label(format!("ETA {remaining:.1} s"));
    }

    if state.fast_forward {
        ui.label(
            egui::RichText::new(format!(
                "⏩ Fast-forward ×{}",
                mission.config().fast_forward_multiplier
            ))
            .color(egui::Color32::YELLOW),
        );
    }
}

/// Text and color for a mission phase.
pub fn phase_label(phase: MissionPhase) -> (&'static str, egui::Color32) {
    match phase {
        MissionPhase::InFlight => ("In flight", egui::Color32::from_rgb(255, 140, 40)),
        MissionPhase::Arrived => ("Missed", egui::Color32::from_rgb(150, 150, 150)),
        MissionPhase::Impacted => ("💥 Impact!", egui::Color32::from_rgb(255, 80, 60)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels_distinct() {
        let labels = [
            phase_label(MissionPhase::InFlight).0,
            phase_label(MissionPhase::Arrived).0,
            phase_label(MissionPhase::Impacted).0,
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }
}
