//! Intercept planning.
//!
//! The meteor never aims at where the target *is*; that would give a
//! tail-chase. It aims at where the target *will be* after `impact_time`
//! seconds on its circular orbit, and reaches it along one quadratic Bézier
//! arc:
//!
//! ```text
//! B(t) = (1-t)²·L + 2(1-t)t·C + t²·P
//! ```
//!
//! with `L` the launch point behind the target, `C` a control point on a
//! wider ring halfway (in angle) between launch and impact, and `P` the
//! predicted impact point.

use bevy::math::DVec3;

use super::config::{finite, positive, MissionConfig};
use crate::orbit::{point_on_circle, OrbitSnapshot};

/// Errors raised when a mission cannot start.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MissionError {
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("{name} = {value} must lie outside the target orbit (radius {orbital_radius})")]
    InsideOrbit {
        name: &'static str,
        value: f64,
        orbital_radius: f64,
    },

    #[error("path needs at least one segment, got {0}")]
    TooFewSegments(usize),
}

/// Precomputed intercept trajectory.
///
/// Immutable once built; a new plan is made on every reset.
#[derive(Clone, Debug, PartialEq)]
pub struct InterceptPlan {
    path: Vec<DVec3>,
    impact_time: f64,
    launch_point: DVec3,
    control_point: DVec3,
    predicted_impact_point: DVec3,
    future_angle: f64,
}

/// Build the intercept plan against `target`.
pub fn plan(target: &OrbitSnapshot, config: &MissionConfig) -> Result<InterceptPlan, MissionError> {
    config.validate()?;
    finite("current_angle", target.angle)?;
    positive("orbital_radius", target.radius)?;
    positive("angular_speed", target.angular_speed)?;
    outside_orbit("launch_distance", config.launch_distance, target.radius)?;
    outside_orbit("control_distance", config.control_distance, target.radius)?;

    let future_angle = target.angle_after(config.impact_time);
    let predicted_impact_point = target.position_after(config.impact_time);

    let launch_angle = target.angle + config.launch_offset_angle;
    let launch_point = point_on_circle(launch_angle, config.launch_distance);

    let control_angle = 0.5 * (launch_angle + future_angle);
    let control_point = point_on_circle(control_angle, config.control_distance);

    let path = sample_quadratic_bezier(
        launch_point,
        control_point,
        predicted_impact_point,
        config.path_segments,
    );

    Ok(InterceptPlan {
        path,
        impact_time: config.impact_time,
        launch_point,
        control_point,
        predicted_impact_point,
        future_angle,
    })
}

fn outside_orbit(name: &'static str, value: f64, orbital_radius: f64) -> Result<(), MissionError> {
    if value > orbital_radius {
        Ok(())
    } else {
        Err(MissionError::InsideOrbit {
            name,
            value,
            orbital_radius,
        })
    }
}

/// Evaluate a quadratic Bézier at `t`.
pub fn quadratic_bezier(start: DVec3, control: DVec3, end: DVec3, t: f64) -> DVec3 {
    let one_minus_t = 1.0 - t;
    start * (one_minus_t * one_minus_t) + control * (2.0 * one_minus_t * t) + end * (t * t)
}

/// Sample `segments + 1` evenly spaced points, endpoints written exactly.
pub fn sample_quadratic_bezier(
    start: DVec3,
    control: DVec3,
    end: DVec3,
    segments: usize,
) -> Vec<DVec3> {
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments + 1);
    points.push(start);
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        points.push(quadratic_bezier(start, control, end, t));
    }
    points.push(end);
    points
}

impl InterceptPlan {
    /// Sampled trajectory, launch first.
    pub fn path(&self) -> &[DVec3] {
        &self.path
    }

    pub fn impact_time(&self) -> f64 {
        self.impact_time
    }

    pub fn launch_point(&self) -> DVec3 {
        self.launch_point
    }

    pub fn control_point(&self) -> DVec3 {
        self.control_point
    }

    /// Where the target is expected to be at `impact_time`.
    pub fn predicted_impact_point(&self) -> DVec3 {
        self.predicted_impact_point
    }

    /// Target angle at `impact_time` (not wrapped).
    pub fn future_angle(&self) -> f64 {
        self.future_angle
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Lower bounding sample index and interpolated position at `progress`.
    ///
    /// Interpolates linearly between samples instead of re-evaluating the
    /// curve. Returns `None` for an empty path.
    pub fn sample_at(&self, progress: f64) -> Option<(usize, DVec3)> {
        let last = self.path.len().checked_sub(1)?;
        let f = progress.clamp(0.0, 1.0) * last as f64;
        let index = (f.floor() as usize).min(last);
        if index == last {
            return Some((last, self.path[last]));
        }
        let frac = f - index as f64;
        Some((index, self.path[index].lerp(self.path[index + 1], frac)))
    }

    #[cfg(test)]
    pub(crate) fn from_path(path: Vec<DVec3>, impact_time: f64) -> Self {
        let launch_point = path.first().copied().unwrap_or_default();
        let predicted_impact_point = path.last().copied().unwrap_or_default();
        Self {
            path,
            impact_time,
            launch_point,
            control_point: launch_point,
            predicted_impact_point,
            future_angle: 0.0,
        }
    }
}
