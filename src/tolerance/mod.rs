//! Explicit tolerance for boundary comparisons.
//!
//! Every classification in this crate takes its epsilon from a [`Tolerance`]
//! value supplied by the caller. No hidden epsilons are used.

use crate::error::{as_f64, CrossingError, Result};
use num_traits::Float;

/// Default width of the tangency and coincidence bands.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// A validated, strictly positive and finite comparison tolerance.
///
/// # Example
///
/// ```
/// use circlecross::Tolerance;
///
/// let tol: Tolerance<f64> = Tolerance::new(1e-3).unwrap();
/// assert!(tol.approx_eq(1.0, 1.0005));
/// assert!(!tol.approx_eq(1.0, 1.002));
/// assert!(Tolerance::<f64>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F> {
    eps: F,
}

impl<F: Float> Tolerance<F> {
    /// Creates a tolerance, rejecting zero, negative, and non-finite values.
    pub fn new(eps: F) -> Result<Self> {
        if eps.is_finite() && eps > F::zero() {
            Ok(Self { eps })
        } else {
            Err(CrossingError::InvalidTolerance {
                tolerance: as_f64(eps),
            })
        }
    }

    /// Returns the epsilon value.
    #[inline]
    pub fn eps(self) -> F {
        self.eps
    }

    /// Returns true if `a` and `b` differ by at most epsilon.
    #[inline]
    pub fn approx_eq(self, a: F, b: F) -> bool {
        (a - b).abs() <= self.eps
    }

    /// Returns true if `value` lies within epsilon of zero.
    #[inline]
    pub fn is_zero(self, value: F) -> bool {
        value.abs() <= self.eps
    }
}

impl<F: Float> Default for Tolerance<F> {
    fn default() -> Self {
        Self {
            eps: F::from(DEFAULT_EPSILON).unwrap(),
        }
    }
}
