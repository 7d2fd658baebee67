//! The mission handle: one plan plus one meteor, from launch to impact or reset.

use bevy::math::DVec3;
use bevy::prelude::*;

use super::config::MissionConfig;
use super::plan::{plan, InterceptPlan, MissionError};
use super::projectile::{MissionEvent, ProjectileState};
use crate::orbit::OrbitSnapshot;

/// Where a mission stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionPhase {
    /// Meteor still travelling.
    InFlight,
    /// Progress completed without a hit.
    Arrived,
    /// Meteor hit the target.
    Impacted,
}

/// Read-only snapshot for observers (HUD, tests).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissionState {
    pub progress: f64,
    pub has_impacted: bool,
    pub fast_forward: bool,
}

impl MissionState {
    pub fn phase(&self) -> MissionPhase {
        if self.has_impacted {
            MissionPhase::Impacted
        } else if self.progress >= 1.0 {
            MissionPhase::Arrived
        } else {
            MissionPhase::InFlight
        }
    }
}

/// A running meteor mission.
///
/// Only constructible through [`Mission::launch`], so holding a `Mission`
/// means a valid plan exists.
#[derive(Component, Clone, Debug)]
pub struct Mission {
    config: MissionConfig,
    plan: InterceptPlan,
    projectile: ProjectileState,
}

impl Mission {
    /// Plan an intercept against `target` and put the meteor on its launch point.
    pub fn launch(target: &OrbitSnapshot, config: MissionConfig) -> Result<Self, MissionError> {
        let plan = plan(target, &config)?;
        let projectile = ProjectileState::new(&plan);
        debug!(
            "Mission planned: launch ({:.1}, {:.1}), impact ({:.1}, {:.1}) in {:.1} s",
            plan.launch_point().x,
            plan.launch_point().z,
            plan.predicted_impact_point().x,
            plan.predicted_impact_point().z,
            plan.impact_time()
        );
        Ok(Self {
            config,
            plan,
            projectile,
        })
    }

    /// Advance the meteor; see [`ProjectileState::advance`].
    pub fn advance(&mut self, elapsed: f64, target_position: DVec3) -> Option<MissionEvent> {
        self.projectile
            .advance(&self.plan, &self.config, elapsed, target_position)
    }

    /// Takes effect on the next [`Mission::advance`].
    pub fn set_fast_forward(&mut self, enabled: bool) {
        self.projectile.fast_forward = enabled;
    }

    /// Flip fast-forward, returning the new setting.
    pub fn toggle_fast_forward(&mut self) -> bool {
        self.projectile.fast_forward = !self.projectile.fast_forward;
        self.projectile.fast_forward
    }

    /// Discard the current plan and meteor and replan from `target`'s current state.
    ///
    /// On error the running mission is left as it was.
    pub fn reset(&mut self, target: &OrbitSnapshot) -> Result<(), MissionError> {
        let config = self.config.clone();
        self.reset_with(target, config)
    }

    /// Like [`Mission::reset`] but with a new configuration.
    pub fn reset_with(
        &mut self,
        target: &OrbitSnapshot,
        config: MissionConfig,
    ) -> Result<(), MissionError> {
        *self = Self::launch(target, config)?;
        Ok(())
    }

    pub fn state(&self) -> MissionState {
        MissionState {
            progress: self.projectile.progress,
            has_impacted: self.projectile.has_impacted,
            fast_forward: self.projectile.fast_forward,
        }
    }

    pub fn phase(&self) -> MissionPhase {
        self.state().phase()
    }

    pub fn plan(&self) -> &InterceptPlan {
        &self.plan
    }

    pub fn projectile(&self) -> &ProjectileState {
        &self.projectile
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn position(&self) -> DVec3 {
        self.projectile.position
    }

    pub fn rotation(&self) -> DVec3 {
        self.projectile.rotation
    }

    pub fn traveled_path(&self) -> &[DVec3] {
        self.projectile.traveled(&self.plan)
    }

    pub fn remaining_path(&self) -> &[DVec3] {
        self.projectile.remaining(&self.plan)
    }
}
