//! Per-circle mutable state advanced by the simulation loop.

use super::{Arena, Bounce};
use crate::primitives::{Circle2, Point2, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Inclusive range a pulsing radius oscillates within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusRange<F> {
    pub min: F,
    pub max: F,
}

impl<F: Float> RadiusRange<F> {
    #[inline]
    pub fn new(min: F, max: F) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(self, r: F) -> bool {
        r >= self.min && r <= self.max
    }
}

/// What changed direction during one [`MovingCircle::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Walls the center bounced off.
    pub walls: Bounce,
    /// The radius left its range and started shrinking/growing the other way.
    pub radius_reversed: bool,
}

/// A circle that drifts at constant speed and pulses its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingCircle<F> {
    pub center: Point2<F>,
    pub velocity: Vec2<F>,
    pub radius: F,
    /// Radius change per step; the sign flips at the range limits.
    pub radius_rate: F,
}

impl<F: Float> MovingCircle<F> {
    #[inline]
    pub fn new(center: Point2<F>, velocity: Vec2<F>, radius: F, radius_rate: F) -> Self {
        Self {
            center,
            velocity,
            radius,
            radius_rate,
        }
    }

    /// The immutable circle this body currently describes.
    #[inline]
    pub fn snapshot(&self) -> Circle2<F> {
        Circle2::new(self.center, self.radius)
    }

    /// Moves one step, then reverses whatever ran out of bounds.
    ///
    /// The center moves by `velocity` and each velocity component whose
    /// coordinate now lies outside `arena` is negated. The radius grows by
    /// `radius_rate` and the rate is negated once the radius leaves `radii`.
    /// Neither position nor radius is clamped.
    pub fn advance(&mut self, arena: &Arena<F>, radii: &RadiusRange<F>) -> StepEvents {
        self.center = self.center + self.velocity;
        let (velocity, walls) = arena.reflect(self.center, self.velocity);
        self.velocity = velocity;

        self.radius = self.radius + self.radius_rate;
        let radius_reversed = !radii.contains(self.radius);
        if radius_reversed {
            self.radius_rate = -self.radius_rate;
        }

        StepEvents {
            walls,
            radius_reversed,
        }
    }
}
