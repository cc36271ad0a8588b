//! Error types for circlecross operations.

use thiserror::Error;

/// Errors that can occur while relating two circles or driving a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CrossingError {
    /// A radius was zero, negative, or not finite.
    #[error("invalid radius {radius}: must be finite and greater than zero")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A center-to-center distance was negative or not finite.
    #[error("invalid distance {distance}: must be finite and non-negative")]
    InvalidDistance {
        /// The rejected distance.
        distance: f64,
    },

    /// A tolerance was zero, negative, or not finite.
    #[error("invalid tolerance {tolerance}: must be finite and greater than zero")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// A circle center had a NaN or infinite coordinate.
    #[error("circle center has a non-finite coordinate")]
    NonFiniteCoordinate,

    /// Internal tangency was requested for two circles of equal radius.
    #[error("internal tangency is undefined for circles of equal radius")]
    EqualRadiiTangency,

    /// Crossing points were requested for concentric circles.
    #[error("crossing points are undefined for concentric circles")]
    ZeroDistance,

    /// A simulation configuration value was out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CrossingError {
    fn from(err: serde_json::Error) -> Self {
        CrossingError::Config(err.to_string())
    }
}

/// Convenience alias for results carrying a [`CrossingError`].
pub type Result<T> = std::result::Result<T, CrossingError>;

/// Widens a generic float for error payloads.
#[inline]
pub(crate) fn as_f64<F: num_traits::Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
