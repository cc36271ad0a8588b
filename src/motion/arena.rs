//! Axis-aligned arena the circles bounce around in.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Which walls a center crossed during one move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    /// The center left `[min.x, max.x]`; the X velocity was reversed.
    pub x: bool,
    /// The center left `[min.y, max.y]`; the Y velocity was reversed.
    pub y: bool,
}

impl Bounce {
    /// Returns true if any wall was hit.
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// A 2D axis-aligned rectangle bounding circle centers.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Arena<F> {
    /// Creates a new arena from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Returns the width of the arena.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the arena.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns `true` if this arena contains the given point.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Reflects `velocity` off every wall that `position` has crossed.
    ///
    /// The position itself is left alone: a center that overshoots a wall
    /// heads back in on the next move.
    pub fn reflect(self, position: Point2<F>, velocity: Vec2<F>) -> (Vec2<F>, Bounce) {
        let mut v = velocity;
        let mut bounce = Bounce::default();

        if position.x > self.max.x || position.x < self.min.x {
            v = v.flip_x();
            bounce.x = true;
        }
        if position.y > self.max.y || position.y < self.min.y {
            v = v.flip_y();
            bounce.y = true;
        }

        (v, bounce)
    }
}
