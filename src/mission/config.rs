//! Mission configuration.

use std::f64::consts::FRAC_PI_2;

use bevy::math::DVec3;
use bevy::prelude::*;

use super::plan::MissionError;

/// Tunable parameters of a meteor mission.
///
/// Sample density and impact radius have no physical derivation; they are
/// picked for how the vignette looks and can be overridden freely:
///
/// ```
/// use meteorfall::mission::MissionConfig;
///
/// let config = MissionConfig {
///     impact_time: 30.0,
///     ..Default::default()
/// };
/// assert_eq!(config.impact_radius, 2.5);
/// ```
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct MissionConfig {
    /// Seconds of unscaled play until the predicted arrival.
    pub impact_time: f64,
    /// Launch angle relative to the target's current angle (negative = behind).
    pub launch_offset_angle: f64,
    /// Radius of the launch ring.
    pub launch_distance: f64,
    /// Radius of the Bézier control point; sets how far the arc bulges.
    pub control_distance: f64,
    /// Distance below which the meteor counts as having hit the target.
    pub impact_radius: f64,
    /// Progress rate multiplier while fast-forward is on; must exceed 1.
    pub fast_forward_multiplier: f64,
    /// Number of curve segments; the path holds `path_segments + 1` samples.
    pub path_segments: usize,
    /// Cosmetic tumble rate of the meteor (radians/s about X, Y, Z).
    pub spin_rate: DVec3,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            impact_time: 15.0,
            launch_offset_angle: -FRAC_PI_2,
            launch_distance: 90.0,
            control_distance: 45.0,
            impact_radius: 2.5,
            fast_forward_multiplier: 4.0,
            path_segments: 400,
            spin_rate: DVec3::new(0.8, 1.2, 0.0),
        }
    }
}

impl MissionConfig {
    /// Check the parameters that don't depend on the target.
    pub fn validate(&self) -> Result<(), MissionError> {
        positive("impact_time", self.impact_time)?;
        positive("impact_radius", self.impact_radius)?;
        // Fast-forward has to actually speed the meteor up
        if !(self.fast_forward_multiplier.is_finite() && self.fast_forward_multiplier > 1.0) {
            return Err(MissionError::InvalidParameter {
                name: "fast_forward_multiplier",
                value: self.fast_forward_multiplier,
            });
        }
        finite("launch_offset_angle", self.launch_offset_angle)?;
        finite("launch_distance", self.launch_distance)?;
        finite("control_distance", self.control_distance)?;
        if !self.spin_rate.is_finite() {
            return Err(MissionError::InvalidParameter {
                name: "spin_rate",
                value: f64::NAN,
            });
        }
        if self.path_segments == 0 {
            return Err(MissionError::TooFewSegments(self.path_segments));
        }
        Ok(())
    }
}

pub(super) fn positive(name: &'static str, value: f64) -> Result<(), MissionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MissionError::InvalidParameter { name, value })
    }
}

pub(super) fn finite(name: &'static str, value: f64) -> Result<(), MissionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MissionError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MissionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_impact_time() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = MissionConfig {
                impact_time: bad,
                ..Default::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(MissionError::InvalidParameter { name: "impact_time", .. })
                ),
                "impact_time = {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_zero_segments() {
        let config = MissionConfig {
            path_segments: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(MissionError::TooFewSegments(0))));
    }

    #[test]
    fn test_rejects_bad_multiplier() {
        let config = MissionConfig {
            fast_forward_multiplier: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_multiplier_that_does_not_speed_up() {
        for bad in [0.5, 1.0, f64::INFINITY] {
            let config = MissionConfig {
                fast_forward_multiplier: bad,
                ..Default::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(MissionError::InvalidParameter {
                        name: "fast_forward_multiplier",
                        ..
                    })
                ),
                "multiplier {bad} should be rejected"
            );
        }

        let config = MissionConfig {
            fast_forward_multiplier: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
