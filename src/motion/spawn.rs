//! Random initial placement of moving circles.

use super::{Arena, MovingCircle, RadiusRange};
use crate::primitives::{Point2, Vec2};
use rand::Rng;
use std::f64::consts::TAU;

/// Share of the half-width a spawned radius may span above the minimum.
const RADIUS_SPAN: f64 = 0.9;

/// Places a circle uniformly at random inside `arena`.
///
/// - center: uniform over the arena
/// - radius: `radii.min + u * width / 2 * 0.9` for `u` in `[0, 1)`, capped at `radii.max`
/// - velocity: `speed` along a uniformly random heading
///
/// The radius starts growing at `radius_rate`.
///
/// # Example
///
/// ```
/// use circlecross::motion::{spawn_circle, Arena, RadiusRange};
/// use circlecross::Point2;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let arena = Arena::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 10.0));
/// let radii = RadiusRange::new(1.0, 10.0);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let body = spawn_circle(&mut rng, &arena, &radii, 0.5, 0.1);
/// assert!(arena.contains_point(body.center));
/// assert!((body.velocity.magnitude() - 0.5).abs() < 1e-12);
/// ```
pub fn spawn_circle<R: Rng + ?Sized>(
    rng: &mut R,
    arena: &Arena<f64>,
    radii: &RadiusRange<f64>,
    speed: f64,
    radius_rate: f64,
) -> MovingCircle<f64> {
    let radius = (rng.gen::<f64>() * arena.width() / 2.0 * RADIUS_SPAN + radii.min).min(radii.max);
    let center = Point2::new(
        arena.min.x + rng.gen::<f64>() * arena.width(),
        arena.min.y + rng.gen::<f64>() * arena.height(),
    );
    let heading = rng.gen::<f64>() * TAU;

    MovingCircle::new(center, Vec2::from_angle(heading, speed), radius, radius_rate)
}
