//! Relationship classification and tangency/crossing point solving for circle pairs.
//!
//! The pipeline runs in two pure stages:
//!
//! 1. [`classify`] maps the center distance and both radii to exactly one
//!    [`Relationship`], using tolerance bands around the tangency and
//!    coincidence thresholds.
//! 2. [`solve`] turns that relationship plus the circle parameters into zero,
//!    one, or two [`Point2`]s.
//!
//! [`relate`] chains both stages for two [`Circle2`] snapshots.
//!
//! # Example
//!
//! ```
//! use circlecross::{relate, Circle2, Point2, Relationship, Tolerance};
//!
//! let a = Circle2::new(Point2::new(0.0, 0.0), 2.0);
//! let b = Circle2::new(Point2::new(3.0, 0.0), 2.0);
//!
//! let hit = relate(&a, &b, Tolerance::default()).unwrap();
//! assert_eq!(hit.relationship, Relationship::Intersecting);
//! assert_eq!(hit.points.len(), 2);
//! ```

mod classify;
mod solve;

pub use classify::{classify, classify_unchecked};
pub use solve::{crossing_points, external_tangent_point, internal_tangent_point, solve};

use crate::error::{CrossingError, Result};
use crate::primitives::{Circle2, Point2};
use crate::tolerance::Tolerance;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How two circles sit relative to each other.
///
/// For valid inputs exactly one variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// Same center and same radius (within tolerance).
    Coincident,
    /// Touching from outside at one point; centers are `r0 + r1` apart.
    ExternallyTangent,
    /// One circle touches the other from inside; centers are `|r0 - r1|` apart.
    InternallyTangent,
    /// Too far apart to touch.
    Disjoint,
    /// One circle strictly inside the other without touching.
    Contained,
    /// The boundaries cross at two distinct points.
    Intersecting,
    /// No band matched. Unreachable for valid positive radii and a
    /// non-negative distance; surfaced as data so callers can log it.
    Degenerate,
}

impl Relationship {
    /// All relationships, in classification priority order.
    pub const ALL: [Relationship; 7] = [
        Relationship::Coincident,
        Relationship::ExternallyTangent,
        Relationship::InternallyTangent,
        Relationship::Disjoint,
        Relationship::Contained,
        Relationship::Intersecting,
        Relationship::Degenerate,
    ];

    /// Number of points [`solve`] yields for this relationship.
    #[inline]
    pub fn expected_point_count(self) -> usize {
        match self {
            Relationship::ExternallyTangent | Relationship::InternallyTangent => 1,
            Relationship::Intersecting => 2,
            Relationship::Coincident
            | Relationship::Disjoint
            | Relationship::Contained
            | Relationship::Degenerate => 0,
        }
    }

    /// Returns true for either tangency.
    #[inline]
    pub fn is_tangent(self) -> bool {
        matches!(
            self,
            Relationship::ExternallyTangent | Relationship::InternallyTangent
        )
    }

    /// Returns true if the relationship produces at least one point.
    #[inline]
    pub fn has_points(self) -> bool {
        self.expected_point_count() > 0
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Relationship::Coincident => "coincident",
            Relationship::ExternallyTangent => "externally tangent",
            Relationship::InternallyTangent => "internally tangent",
            Relationship::Disjoint => "disjoint",
            Relationship::Contained => "contained",
            Relationship::Intersecting => "intersecting",
            Relationship::Degenerate => "degenerate",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Zero, one, or two solved points.
///
/// For [`Relationship::Intersecting`] the order is fixed: the point reached
/// by rotating the center-to-center direction counter-clockwise comes first,
/// the clockwise one second. The order carries no further left/right meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CrossingPoints<F> {
    /// No points.
    Empty,
    /// A single tangency point.
    One(Point2<F>),
    /// Two crossing points.
    Two(Point2<F>, Point2<F>),
}

impl<F: Float> CrossingPoints<F> {
    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            CrossingPoints::Empty => 0,
            CrossingPoints::One(_) => 1,
            CrossingPoints::Two(_, _) => 2,
        }
    }

    /// Returns true if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CrossingPoints::Empty)
    }

    /// Returns the first point, if any.
    #[inline]
    pub fn first(&self) -> Option<Point2<F>> {
        match *self {
            CrossingPoints::Empty => None,
            CrossingPoints::One(p) | CrossingPoints::Two(p, _) => Some(p),
        }
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = Point2<F>> {
        let (a, b) = match *self {
            CrossingPoints::Empty => (None, None),
            CrossingPoints::One(p) => (Some(p), None),
            CrossingPoints::Two(p, q) => (Some(p), Some(q)),
        };
        a.into_iter().chain(b)
    }

    /// Collects the points into a vector.
    pub fn to_vec(&self) -> Vec<Point2<F>> {
        self.iter().collect()
    }
}

impl<F> Default for CrossingPoints<F> {
    fn default() -> Self {
        CrossingPoints::Empty
    }
}

/// The full answer for one circle pair: relationship, distance, and points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection<F> {
    /// The classified relationship.
    pub relationship: Relationship,
    /// Center-to-center distance used for the classification.
    pub distance: F,
    /// Points produced by the solver for `relationship`.
    pub points: CrossingPoints<F>,
}

/// Classifies two circles and solves their tangency or crossing points.
///
/// Both circles are validated first: centers must be finite and radii
/// finite and strictly positive.
///
/// # Errors
///
/// Returns [`CrossingError::NonFiniteCoordinate`] or
/// [`CrossingError::InvalidRadius`] for invalid circles.
pub fn relate<F: Float>(c0: &Circle2<F>, c1: &Circle2<F>, tol: Tolerance<F>) -> Result<Intersection<F>> {
    c0.validate()?;
    c1.validate()?;

    let distance = c0.center.distance(c1.center);
    if !distance.is_finite() {
        return Err(CrossingError::NonFiniteCoordinate);
    }

    let relationship = classify(distance, c0.radius, c1.radius, tol)?;
    let points = solve(
        relationship,
        c0.center,
        c0.radius,
        c1.center,
        c1.radius,
        distance,
    )?;

    Ok(Intersection {
        relationship,
        distance,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle(x: f64, y: f64, r: f64) -> Circle2<f64> {
        Circle2::new(Point2::new(x, y), r)
    }

    #[test]
    fn test_expected_point_counts() {
        let counts: Vec<usize> = Relationship::ALL
            .iter()
            .map(|r| r.expected_point_count())
            .collect();
        assert_eq!(counts, vec![0, 1, 1, 0, 0, 2, 0]);
    }

    #[test]
    fn test_tangent_helpers() {
        assert!(Relationship::ExternallyTangent.is_tangent());
        assert!(Relationship::InternallyTangent.is_tangent());
        assert!(!Relationship::Intersecting.is_tangent());
        assert!(Relationship::Intersecting.has_points());
        assert!(!Relationship::Contained.has_points());
    }

    #[test]
    fn test_display() {
        assert_eq!(Relationship::InternallyTangent.to_string(), "internally tangent");
        assert_eq!(format!("{}", Relationship::Degenerate), "degenerate");
    }

    #[test]
    fn test_crossing_points_accessors() {
        let none: CrossingPoints<f64> = CrossingPoints::default();
        assert!(none.is_empty());
        assert_eq!(none.len(), 0);
        assert_eq!(none.first(), None);
        assert!(none.to_vec().is_empty());

        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, 4.0);
        let two = CrossingPoints::Two(a, b);
        assert_eq!(two.len(), 2);
        assert_eq!(two.first(), Some(a));
        assert_eq!(two.to_vec(), vec![a, b]);
    }

    #[test]
    fn test_relate_external_tangent() {
        let hit = relate(&circle(0.0, 0.0, 1.0), &circle(2.0, 0.0, 1.0), Tolerance::default()).unwrap();
        assert_eq!(hit.relationship, Relationship::ExternallyTangent);
        assert_relative_eq!(hit.distance, 2.0);
        let p = hit.points.first().unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_relate_internal_tangent() {
        let hit = relate(&circle(0.0, 0.0, 3.0), &circle(2.0, 0.0, 1.0), Tolerance::default()).unwrap();
        assert_eq!(hit.relationship, Relationship::InternallyTangent);
        let p = hit.points.first().unwrap();
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_relate_intersecting() {
        let hit = relate(&circle(0.0, 0.0, 2.0), &circle(3.0, 0.0, 2.0), Tolerance::default()).unwrap();
        assert_eq!(hit.relationship, Relationship::Intersecting);
        let pts = hit.points.to_vec();
        assert_eq!(pts.len(), 2);
        let h = 1.75_f64.sqrt();
        assert_relative_eq!(pts[0].x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(pts[0].y, h, epsilon = 1e-12);
        assert_relative_eq!(pts[1].x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(pts[1].y, -h, epsilon = 1e-12);
    }

    #[test]
    fn test_relate_coincident_and_disjoint() {
        let hit = relate(&circle(0.0, 0.0, 1.0), &circle(0.0, 0.0, 1.0), Tolerance::default()).unwrap();
        assert_eq!(hit.relationship, Relationship::Coincident);
        assert!(hit.points.is_empty());

        let hit = relate(&circle(0.0, 0.0, 1.0), &circle(5.0, 0.0, 1.0), Tolerance::default()).unwrap();
        assert_eq!(hit.relationship, Relationship::Disjoint);
        assert!(hit.points.is_empty());
    }

    #[test]
    fn test_relate_rejects_invalid_circles() {
        let bad_radius = circle(0.0, 0.0, -1.0);
        assert_eq!(
            relate(&bad_radius, &circle(1.0, 0.0, 1.0), Tolerance::default()),
            Err(CrossingError::InvalidRadius { radius: -1.0 })
        );

        let bad_center = circle(f64::NAN, 0.0, 1.0);
        assert_eq!(
            relate(&circle(1.0, 0.0, 1.0), &bad_center, Tolerance::default()),
            Err(CrossingError::NonFiniteCoordinate)
        );
    }
}
