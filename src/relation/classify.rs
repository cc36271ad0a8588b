//! Tolerance-banded classification of a circle pair.

use super::Relationship;
use crate::error::{as_f64, CrossingError, Result};
use crate::tolerance::Tolerance;
use num_traits::Float;

/// Classifies two circles from their center distance and radii.
///
/// Bands are tested in a fixed priority order. The tolerance bands around
/// coincidence and both tangencies come before the strict inequalities, so a
/// pair sitting within `eps` of touching reports a tangency rather than
/// flickering between [`Relationship::Disjoint`] and
/// [`Relationship::Intersecting`]:
///
/// 1. `|r0 - r1| <= eps` and `d <= eps`: `Coincident`
/// 2. `|d - (r0 + r1)| <= eps`: `ExternallyTangent`
/// 3. `||r0 - r1| - d| <= eps`: `InternallyTangent`
/// 4. `d > r0 + r1`: `Disjoint`
/// 5. `|r0 - r1| > d`: `Contained`
/// 6. `|r0 - r1| < d < r0 + r1`: `Intersecting`
/// 7. otherwise: `Degenerate`
///
/// The result is symmetric in `r0` and `r1`.
///
/// # Errors
///
/// Returns [`CrossingError::InvalidDistance`] if `d` is negative or not
/// finite, and [`CrossingError::InvalidRadius`] if either radius is not
/// finite and strictly positive.
///
/// # Example
///
/// ```
/// use circlecross::{classify, Relationship, Tolerance};
///
/// let tol = Tolerance::default();
/// assert_eq!(classify(2.0, 1.0, 1.0, tol).unwrap(), Relationship::ExternallyTangent);
/// assert_eq!(classify(5.0, 1.0, 1.0, tol).unwrap(), Relationship::Disjoint);
/// assert!(classify(1.0, -1.0, 1.0, tol).is_err());
/// ```
pub fn classify<F: Float>(d: F, r0: F, r1: F, tol: Tolerance<F>) -> Result<Relationship> {
    if !d.is_finite() || d < F::zero() {
        return Err(CrossingError::InvalidDistance { distance: as_f64(d) });
    }
    check_radius(r0)?;
    check_radius(r1)?;

    Ok(classify_unchecked(d, r0, r1, tol.eps()))
}

/// Classifies without validating the inputs.
///
/// Total over all floats: NaN inputs fail every comparison and fall through
/// to [`Relationship::Degenerate`].
#[inline]
pub fn classify_unchecked<F: Float>(d: F, r0: F, r1: F, eps: F) -> Relationship {
    let sum = r0 + r1;
    let diff = (r0 - r1).abs();

    if diff <= eps && d <= eps {
        Relationship::Coincident
    } else if (d - sum).abs() <= eps {
        Relationship::ExternallyTangent
    } else if (diff - d).abs() <= eps {
        Relationship::InternallyTangent
    } else if d > sum {
        Relationship::Disjoint
    } else if diff > d {
        Relationship::Contained
    } else if diff < d && d < sum {
        Relationship::Intersecting
    } else {
        Relationship::Degenerate
    }
}

#[inline]
fn check_radius<F: Float>(r: F) -> Result<()> {
    if r.is_finite() && r > F::zero() {
        Ok(())
    } else {
        Err(CrossingError::InvalidRadius { radius: as_f64(r) })
    }
}
