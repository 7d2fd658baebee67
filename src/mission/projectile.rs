//! Meteor animation along an intercept plan.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

use super::config::MissionConfig;
use super::plan::InterceptPlan;

/// Progress this close to 1 counts as arrived.
///
/// Tick sequences that sum to `impact_time` in floating point can land a
/// hair short of 1; snapping makes them arrive exactly.
pub const PROGRESS_SNAP: f64 = 1e-9;

/// Terminal notifications produced by [`ProjectileState::advance`].
#[derive(Clone, Debug, PartialEq)]
pub enum MissionEvent {
    /// The meteor came within the impact radius of the live target.
    Impact {
        /// Meteor position at impact.
        position: DVec3,
        /// Live target position at impact.
        target_position: DVec3,
        /// Separation when the hit registered.
        distance: f64,
        /// Mission progress when the hit registered.
        progress: f64,
    },
    /// Progress reached 1 without a hit.
    Arrived {
        position: DVec3,
        miss_distance: f64,
    },
}

/// Mutable per-mission meteor state.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileState {
    /// Normalized completion in [0, 1].
    pub progress: f64,
    /// One-way latch set on impact.
    pub has_impacted: bool,
    /// Whether progress advances at the fast-forward rate.
    pub fast_forward: bool,
    /// Interpolated position on the plan's path.
    pub position: DVec3,
    /// Accumulated tumble (Euler XYZ, radians).
    pub rotation: DVec3,
    /// Tumble applied by the last tick.
    pub rotation_delta: DVec3,
    /// Lower bounding sample index of `position`.
    pub path_index: usize,
    arrived: bool,
}

impl ProjectileState {
    /// Fresh state sitting on the launch point.
    pub fn new(plan: &InterceptPlan) -> Self {
        Self {
            progress: 0.0,
            has_impacted: false,
            fast_forward: false,
            position: plan.launch_point(),
            rotation: DVec3::ZERO,
            rotation_delta: DVec3::ZERO,
            path_index: 0,
            arrived: false,
        }
    }

    /// Whether progress has completed, with or without a hit.
    pub fn has_arrived(&self) -> bool {
        self.arrived || self.progress >= 1.0
    }

    /// Advance the meteor by `elapsed` seconds.
    ///
    /// `target_position` is the target's live position this tick. It may
    /// differ from the plan's predicted point if the target drifted.
    /// Impacted missions, empty plans, zero-length and non-finite ticks are
    /// no-ops; negative ticks are clamped to zero.
    pub fn advance(
        &mut self,
        plan: &InterceptPlan,
        config: &MissionConfig,
        elapsed: f64,
        target_position: DVec3,
    ) -> Option<MissionEvent> {
        if self.has_impacted || plan.is_empty() || !elapsed.is_finite() {
            return None;
        }
        let elapsed = elapsed.max(0.0);
        if elapsed == 0.0 {
            return None;
        }

        let multiplier = if self.fast_forward {
            config.fast_forward_multiplier
        } else {
            1.0
        };
        let rate = multiplier / plan.impact_time();

        let mut progress = (self.progress + elapsed * rate).clamp(0.0, 1.0);
        if 1.0 - progress < PROGRESS_SNAP {
            progress = 1.0;
        }
        self.progress = progress;

        let (index, position) = plan.sample_at(progress)?;
        self.path_index = index;
        self.position = position;

        self.rotation_delta = config.spin_rate * elapsed;
        self.rotation = wrap_angles(self.rotation + self.rotation_delta);

        let distance = position.distance(target_position);
        if distance < config.impact_radius {
            self.has_impacted = true;
            self.arrived = self.progress >= 1.0;
            info!(
                "Meteor impact at progress {:.3}, {:.2} units from target",
                self.progress, distance
            );
            return Some(MissionEvent::Impact {
                position,
                target_position,
                distance,
                progress: self.progress,
            });
        }

        if self.progress >= 1.0 && !self.arrived {
            self.arrived = true;
            warn!("Meteor reached the predicted point but missed by {distance:.2} units");
            return Some(MissionEvent::Arrived {
                position,
                miss_distance: distance,
            });
        }

        None
    }

    /// Samples already flown, ending at the current lower bound sample.
    pub fn traveled<'a>(&self, plan: &'a InterceptPlan) -> &'a [DVec3] {
        let path = plan.path();
        if path.is_empty() {
            return path;
        }
        &path[..=self.path_index.min(path.len() - 1)]
    }

    /// Samples still ahead, starting at the current lower bound sample.
    pub fn remaining<'a>(&self, plan: &'a InterceptPlan) -> &'a [DVec3] {
        let path = plan.path();
        &path[self.path_index.min(path.len())..]
    }
}

fn wrap_angles(v: DVec3) -> DVec3 {
    DVec3::new(v.x.rem_euclid(TAU), v.y.rem_euclid(TAU), v.z.rem_euclid(TAU))
}
