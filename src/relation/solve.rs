//! Tangency and crossing point construction.

use super::{CrossingPoints, Relationship};
use crate::error::{as_f64, CrossingError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the points that represent `relationship` for the given circles.
///
/// `d` must be the center distance that produced `relationship` (see
/// [`classify`](super::classify)); it is passed in rather than recomputed so
/// the solver works on exactly the value the classifier saw.
///
/// | Relationship | Points |
/// |---|---|
/// | `ExternallyTangent` | 1, see [`external_tangent_point`] |
/// | `InternallyTangent` | 1, see [`internal_tangent_point`] |
/// | `Intersecting` | 2, see [`crossing_points`] |
/// | anything else | 0 |
///
/// # Errors
///
/// Propagates [`CrossingError::EqualRadiiTangency`] and
/// [`CrossingError::ZeroDistance`] when the relationship does not match the
/// circle parameters it was paired with.
pub fn solve<F: Float>(
    relationship: Relationship,
    p0: Point2<F>,
    r0: F,
    p1: Point2<F>,
    r1: F,
    d: F,
) -> Result<CrossingPoints<F>> {
    let points = match relationship {
        Relationship::ExternallyTangent => {
            CrossingPoints::One(external_tangent_point(p0, r0, p1, r1))
        }
        Relationship::InternallyTangent => {
            CrossingPoints::One(internal_tangent_point(p0, r0, p1, r1)?)
        }
        Relationship::Intersecting => {
            let [a, b] = crossing_points(p0, r0, p1, r1, d)?;
            CrossingPoints::Two(a, b)
        }
        Relationship::Coincident
        | Relationship::Disjoint
        | Relationship::Contained
        | Relationship::Degenerate => CrossingPoints::Empty,
    };
    Ok(points)
}

/// Returns the point where two externally tangent circles touch.
///
/// Divides the segment `p0 -> p1` internally in the ratio `r0 : r1`.
///
/// # Example
///
/// ```
/// use circlecross::{external_tangent_point, Point2};
///
/// let p = external_tangent_point(Point2::new(0.0, 0.0), 1.0, Point2::new(2.0, 0.0), 1.0);
/// assert_eq!(p, Point2::new(1.0, 0.0));
/// ```
#[inline]
pub fn external_tangent_point<F: Float>(p0: Point2<F>, r0: F, p1: Point2<F>, r1: F) -> Point2<F> {
    p0.lerp(p1, r0 / (r0 + r1))
}

/// Returns the point where one circle touches the other from inside.
///
/// Divides the segment `p0 -> p1` externally with the signed ratio
/// `-r0 / (r1 - r0)`, which lands on the far side of the larger circle
/// whichever of the two it is.
///
/// # Errors
///
/// Returns [`CrossingError::EqualRadiiTangency`] if `r0 == r1`. Such a pair
/// is never classified as internally tangent: equal radii with `d` inside
/// the band classify as [`Relationship::Coincident`] first.
pub fn internal_tangent_point<F: Float>(
    p0: Point2<F>,
    r0: F,
    p1: Point2<F>,
    r1: F,
) -> Result<Point2<F>> {
    let delta = r1 - r0;
    if delta == F::zero() {
        return Err(CrossingError::EqualRadiiTangency);
    }
    Ok(p0.lerp(p1, -r0 / delta))
}

/// Returns the two points where the circle boundaries cross.
///
/// The direction from `p0` to `p1` is scaled to length `r0` and rotated by
/// `+alpha` and `-alpha` about `p0`, where `alpha` is the angle at `p0` in
/// the triangle (p0, p1, crossing point):
///
/// ```text
/// cos(alpha) = (r0^2 + d^2 - r1^2) / (2 * r0 * d)
/// ```
///
/// The counter-clockwise rotation is returned first.
///
/// Near a tangency, rounding can push `cos(alpha)` just outside `[-1, 1]`;
/// it is clamped so `sin(alpha)` never becomes NaN and both points collapse
/// onto the tangency point instead.
///
/// # Errors
///
/// Returns [`CrossingError::ZeroDistance`] if `d` is zero, where the
/// construction has no direction to rotate, and
/// [`CrossingError::InvalidRadius`] if `r0` is zero.
pub fn crossing_points<F: Float>(
    p0: Point2<F>,
    r0: F,
    p1: Point2<F>,
    r1: F,
    d: F,
) -> Result<[Point2<F>; 2]> {
    if d == F::zero() {
        return Err(CrossingError::ZeroDistance);
    }
    if r0 == F::zero() {
        return Err(CrossingError::InvalidRadius {
            radius: as_f64(r0),
        });
    }

    let v = (p1 - p0) * (r0 / d);

    let two = F::one() + F::one();
    let cos_alpha = ((r0 * r0 + d * d - r1 * r1) / (two * r0 * d))
        .max(-F::one())
        .min(F::one());
    let sin_alpha = (F::one() - cos_alpha * cos_alpha).max(F::zero()).sqrt();

    Ok([
        p0 + v.rotate_by(cos_alpha, sin_alpha),
        p0 + v.rotate_by(cos_alpha, -sin_alpha),
    ])
}
