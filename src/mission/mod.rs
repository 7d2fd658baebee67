//! Meteor intercept missions.
//!
//! A mission plans a curved path from a launch point behind the target to
//! where the target will be after `impact_time` seconds, then flies a meteor
//! along it tick by tick until it comes within `impact_radius` of the
//! target's live position.
//!
//! The core ([`plan`], [`ProjectileState`], [`Mission`]) is plain data and
//! math. [`MissionPlugin`] wires it into the app: missions live as components
//! on meteor entities and target the [`OrbitalBody`] named by their
//! [`MissionTarget`].

mod config;
mod controller;
mod plan;
mod projectile;

#[cfg(test)]
mod proptest_mission;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::orbit::OrbitalBody;
use crate::types::{SimulationSet, SimulationTime};

pub use config::MissionConfig;
pub use controller::{Mission, MissionPhase, MissionState};
pub use plan::{plan, quadratic_bezier, sample_quadratic_bezier, InterceptPlan, MissionError};
pub use projectile::{MissionEvent, ProjectileState, PROGRESS_SNAP};

/// The orbital body a mission is aimed at.
#[derive(Component, Clone, Copy, Debug)]
pub struct MissionTarget(pub Entity);

/// Marks a mission planned this frame.
///
/// Inserted only when the clock moved this frame: the target snapshot then
/// already includes this frame's orbit step, so the first tick waits for the
/// next frame to keep meteor and target in step.
#[derive(Component, Debug)]
pub struct PlannedThisFrame;

/// Request to launch a new mission against `target`.
#[derive(Message, Clone, Debug)]
pub struct LaunchMission {
    /// Entity carrying the target [`OrbitalBody`].
    pub target: Entity,
    /// Overrides the [`MissionConfig`] resource when set.
    pub config: Option<MissionConfig>,
}

/// Request to replan every mission from its target's current position.
#[derive(Message, Clone, Debug, Default)]
pub struct ResetMissions;

/// Sent once per mission when the meteor hits its target.
#[derive(Message, Clone, Debug)]
pub struct MeteorImpact {
    /// The meteor entity.
    pub meteor: Entity,
    /// The body that was hit.
    pub target: Entity,
    /// Meteor position at impact.
    pub position: DVec3,
    /// Separation when the hit registered.
    pub distance: f64,
    /// Mission progress at impact.
    pub progress: f64,
    /// Simulation time of impact.
    pub time: f64,
}

/// Sent once per mission when progress completes without a hit.
#[derive(Message, Clone, Debug)]
pub struct MeteorArrived {
    pub meteor: Entity,
    pub miss_distance: f64,
}

/// Resource tracking missions for display and tests.
#[derive(Resource, Default, Debug)]
pub struct MissionRegistry {
    /// Count of launched missions.
    pub total_launched: u32,
    /// Count of impacts.
    pub total_impacts: u32,
    /// Count of missions that completed without a hit.
    pub total_misses: u32,
    /// Most recent impact, cleared on reset.
    pub last_impact: Option<MeteorImpact>,
}

/// Plugin for meteor mission management.
pub struct MissionPlugin;

impl Plugin for MissionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MissionConfig>()
            .init_resource::<MissionRegistry>()
            .add_message::<LaunchMission>()
            .add_message::<ResetMissions>()
            .add_message::<MeteorImpact>()
            .add_message::<MeteorArrived>()
            .add_systems(
                Update,
                (handle_launch_messages, handle_reset_messages, tick_missions)
                    .chain()
                    .in_set(SimulationSet::Missions),
            );
    }
}

/// Spawn a meteor entity for every launch request.
fn handle_launch_messages(
    mut commands: Commands,
    mut launches: MessageReader<LaunchMission>,
    mut registry: ResMut<MissionRegistry>,
    default_config: Res<MissionConfig>,
    bodies: Query<&OrbitalBody>,
    sim_time: Res<SimulationTime>,
) {
    for launch in launches.read() {
        let Ok(body) = bodies.get(launch.target) else {
            warn!("Cannot launch meteor: target {:?} has no orbit", launch.target);
            continue;
        };

        let config = launch
            .config
            .clone()
            .unwrap_or_else(|| default_config.clone());

        let mission = match Mission::launch(&body.snapshot(), config) {
            Ok(mission) => mission,
            Err(err) => {
                error!("Meteor mission did not start: {err}");
                continue;
            }
        };

        let start = mission.position().as_vec3();
        let impact_time = mission.plan().impact_time();
        let mut meteor = commands.spawn((
            mission,
            MissionTarget(launch.target),
            Transform::from_translation(start),
            Name::new("Meteor"),
        ));
        if sim_time.delta > 0.0 {
            meteor.insert(PlannedThisFrame);
        }
        registry.total_launched += 1;

        info!(
            "Meteor #{} launched, predicted impact in {:.1} s",
            registry.total_launched, impact_time
        );
    }
}

/// Replan every mission from its target's current angle.
fn handle_reset_messages(
    mut commands: Commands,
    mut resets: MessageReader<ResetMissions>,
    mut missions: Query<(Entity, &mut Mission, &MissionTarget)>,
    mut registry: ResMut<MissionRegistry>,
    bodies: Query<&OrbitalBody>,
    sim_time: Res<SimulationTime>,
) {
    // Several resets in one frame collapse into one
    if resets.read().count() == 0 {
        return;
    }

    for (entity, mut mission, target) in missions.iter_mut() {
        let Ok(body) = bodies.get(target.0) else {
            warn!("Cannot reset meteor: target {:?} is gone", target.0);
            continue;
        };
        match mission.reset(&body.snapshot()) {
            Ok(()) => {
                if sim_time.delta > 0.0 {
                    commands.entity(entity).insert(PlannedThisFrame);
                }
                info!("Meteor mission reset");
            }
            Err(err) => error!("Meteor mission reset failed, keeping current one: {err}"),
        }
    }
    registry.last_impact = None;
}

/// Advance every mission by the frame's simulated delta.
fn tick_missions(
    mut commands: Commands,
    mut missions: Query<(Entity, &mut Mission, &MissionTarget, Has<PlannedThisFrame>)>,
    bodies: Query<&OrbitalBody>,
    sim_time: Res<SimulationTime>,
    mut registry: ResMut<MissionRegistry>,
    mut impacts: MessageWriter<MeteorImpact>,
    mut arrivals: MessageWriter<MeteorArrived>,
) {
    for (entity, mut mission, target, just_planned) in missions.iter_mut() {
        if just_planned {
            commands.entity(entity).remove::<PlannedThisFrame>();
            continue;
        }
        if sim_time.delta <= 0.0 {
            continue;
        }
        let Ok(body) = bodies.get(target.0) else {
            continue;
        };

        match mission.advance(sim_time.delta, body.position()) {
            Some(MissionEvent::Impact {
                position,
                distance,
                progress,
                ..
            }) => {
                let impact = MeteorImpact {
                    meteor: entity,
                    target: target.0,
                    position,
                    distance,
                    progress,
                    time: sim_time.current,
                };
                registry.total_impacts += 1;
                registry.last_impact = Some(impact.clone());
                impacts.write(impact);
            }
            Some(MissionEvent::Arrived { miss_distance, .. }) => {
                registry.total_misses += 1;
                arrivals.write(MeteorArrived {
                    meteor: entity,
                    miss_distance,
                });
            }
            None => {}
        }
    }
}
