//! 2D circle type.

use super::Point2;
use crate::error::{as_f64, CrossingError, Result};
use crate::relation::{relate, Intersection};
use crate::tolerance::Tolerance;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A 2D circle defined by center and radius.
///
/// A snapshot: the simulation rebuilds one per step from its mutable state.
///
/// # Example
///
/// ```
/// use circlecross::{Circle2, Point2, Relationship, Tolerance};
///
/// let a: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// let b = Circle2::new(Point2::new(2.0, 0.0), 1.0);
///
/// let hit = a.relation_to(&b, Tolerance::default()).unwrap();
/// assert_eq!(hit.relationship, Relationship::ExternallyTangent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (must be positive to be related)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius without validation.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Self {
        Self {
            center: Point2::new(cx, cy),
            radius,
        }
    }

    /// Creates a circle, rejecting non-finite centers and non-positive radii.
    pub fn try_new(center: Point2<F>, radius: F) -> Result<Self> {
        let circle = Self { center, radius };
        circle.validate()?;
        Ok(circle)
    }

    /// Checks that the center is finite and the radius finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.center.is_finite() {
            return Err(CrossingError::NonFiniteCoordinate);
        }
        if !self.radius.is_finite() || self.radius <= F::zero() {
            return Err(CrossingError::InvalidRadius {
                radius: as_f64(self.radius),
            });
        }
        Ok(())
    }

    /// Returns the signed distance from a point to the circle boundary.
    ///
    /// Negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        self.center.distance(point) - self.radius
    }

    /// Classifies this circle against `other` and solves the touching points.
    ///
    /// Shorthand for [`relate`](crate::relate)`(self, other, tol)`.
    #[inline]
    pub fn relation_to(&self, other: &Circle2<F>, tol: Tolerance<F>) -> Result<Intersection<F>> {
        relate(self, other, tol)
    }
}
