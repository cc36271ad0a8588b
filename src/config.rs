//! Simulation configuration.
//!
//! Every field has a default, so a JSON document only needs the values it
//! changes:
//!
//! ```
//! use circlecross::SimulationConfig;
//!
//! let config = SimulationConfig::from_json_str(r#"{ "speed": 0.25, "seed": 3 }"#).unwrap();
//! assert_eq!(config.speed, 0.25);
//! assert_eq!(config.seed, Some(3));
//! assert_eq!(config.x_max, 10.0);
//! ```

use crate::error::{CrossingError, Result};
use crate::motion::{Arena, RadiusRange};
use crate::primitives::Point2;
use crate::tolerance::{Tolerance, DEFAULT_EPSILON};
use serde::{Deserialize, Serialize};

/// Tunables for the two-circle simulation and its rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Left edge of the arena and plot.
    pub x_min: f64,
    /// Right edge of the arena and plot.
    pub x_max: f64,
    /// Bottom edge of the arena and plot.
    pub y_min: f64,
    /// Top edge of the arena and plot.
    pub y_max: f64,
    /// Smallest radius before the pulse turns around.
    pub r_min: f64,
    /// Largest radius before the pulse turns around.
    pub r_max: f64,
    /// Radius change per step.
    pub radius_rate: f64,
    /// Distance a center travels per step.
    pub speed: f64,
    /// Width of the tangency and coincidence bands.
    pub tolerance: f64,
    /// Solved-point marker radius as a fraction of the shorter plot side.
    pub marker_scale: f64,
    /// Seed for the initial placement; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
            r_min: 1.0,
            r_max: 10.0,
            radius_rate: 0.1,
            speed: 0.5,
            tolerance: DEFAULT_EPSILON,
            marker_scale: 0.01,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON document, filling missing fields with defaults, and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the values describe a runnable simulation.
    ///
    /// The radius rate must stay below `r_min` so a shrinking radius that
    /// overshoots the lower limit by one step is still positive.
    pub fn validate(&self) -> Result<()> {
        let all = [
            self.x_min,
            self.x_max,
            self.y_min,
            self.y_max,
            self.r_min,
            self.r_max,
            self.radius_rate,
            self.speed,
            self.tolerance,
            self.marker_scale,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(invalid("all values must be finite"));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(invalid("arena minimum must be below its maximum"));
        }
        if self.r_min <= 0.0 || self.r_min >= self.r_max {
            return Err(invalid("radius range must satisfy 0 < r_min < r_max"));
        }
        if self.radius_rate.abs() >= self.r_min {
            return Err(invalid("|radius_rate| must be smaller than r_min"));
        }
        if self.speed < 0.0 {
            return Err(invalid("speed must be non-negative"));
        }
        if self.marker_scale <= 0.0 {
            return Err(invalid("marker_scale must be positive"));
        }
        Tolerance::new(self.tolerance)?;
        Ok(())
    }

    /// The rectangle centers bounce around in.
    pub fn arena(&self) -> Arena<f64> {
        Arena::new(
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_max),
        )
    }

    /// The range radii pulse within.
    pub fn radius_range(&self) -> RadiusRange<f64> {
        RadiusRange::new(self.r_min, self.r_max)
    }

    /// The classification tolerance.
    pub fn tolerance(&self) -> Result<Tolerance<f64>> {
        Tolerance::new(self.tolerance)
    }

    /// Radius of the dots drawn at solved points.
    pub fn marker_radius(&self) -> f64 {
        (self.x_max - self.x_min).min(self.y_max - self.y_min) * self.marker_scale
    }
}

fn invalid(msg: &str) -> CrossingError {
    CrossingError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.marker_radius(), 0.2, epsilon = 1e-12);
        assert_eq!(config.tolerance().unwrap().eps(), 1e-6);
        assert_eq!(config.arena().width(), 20.0);
        assert_eq!(config.radius_range(), RadiusRange::new(1.0, 10.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json_str(r#"{"x_min": -5.0, "x_max": 5.0}"#).unwrap();
        assert_eq!(config.x_min, -5.0);
        assert_eq!(config.y_min, -10.0);
        assert_relative_eq!(config.marker_radius(), 0.1, epsilon = 1e-12);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig {
            seed: Some(11),
            ..SimulationConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(SimulationConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = SimulationConfig::from_json_str(r#"{"sped": 1.0}"#).unwrap_err();
        assert!(matches!(err, CrossingError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimulationConfig::from_json_str("{ not json"),
            Err(CrossingError::Config(_))
        ));
    }

    #[test]
    fn test_validation_failures() {
        let cases = [
            SimulationConfig {
                x_min: 10.0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                r_min: 0.0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                r_max: 0.5,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                radius_rate: 1.5,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                speed: -1.0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                y_max: f64::NAN,
                ..SimulationConfig::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(CrossingError::InvalidConfig(_))),
                "{:?}",
                config
            );
        }

        let bad_tol = SimulationConfig {
            tolerance: 0.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            bad_tol.validate(),
            Err(CrossingError::InvalidTolerance { tolerance: 0.0 })
        );
    }
}
