//! Two-circle animation loop.
//!
//! [`Simulation`] owns both [`MovingCircle`]s. Each [`Simulation::step`]
//! evaluates the current snapshots through [`relate`], then advances the
//! bodies, so frame `n` shows the state after `n` moves.
//!
//! ```
//! use circlecross::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::with_seed(SimulationConfig::default(), 5).unwrap();
//! let frames = sim.frames(3).unwrap();
//!
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[2].step, 2);
//! assert_eq!(
//!     frames[0].intersection.points.len(),
//!     frames[0].intersection.relationship.expected_point_count()
//! );
//! ```

use crate::config::SimulationConfig;
use crate::error::{CrossingError, Result};
use crate::motion::{spawn_circle, Arena, MovingCircle, RadiusRange};
use crate::primitives::Circle2;
use crate::relation::{relate, Intersection, Relationship};
use crate::tolerance::Tolerance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One evaluated step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Zero-based step index.
    pub step: u64,
    /// The two circles as they were evaluated.
    pub circles: [Circle2<f64>; 2],
    /// Their relationship and solved points.
    pub intersection: Intersection<f64>,
}

/// Drives two moving circles and evaluates their relationship every step.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    tolerance: Tolerance<f64>,
    arena: Arena<f64>,
    radii: RadiusRange<f64>,
    bodies: [MovingCircle<f64>; 2],
    step: u64,
}

impl Simulation {
    /// Spawns two random circles, seeded from `config.seed` when set.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config, seed),
            None => Self::from_rng(config, &mut StdRng::from_entropy()),
        }
    }

    /// Spawns two random circles from a fixed seed, ignoring `config.seed`.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Spawns two random circles drawing from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let arena = config.arena();
        let radii = config.radius_range();
        let bodies = [
            spawn_circle(rng, &arena, &radii, config.speed, config.radius_rate),
            spawn_circle(rng, &arena, &radii, config.speed, config.radius_rate),
        ];
        Self::from_bodies(config, bodies)
    }

    /// Starts from explicit bodies instead of random placement.
    ///
    /// Each body must start inside the configured radius range with a
    /// pulse rate smaller than `r_min`, the same bound the config places on
    /// `radius_rate`, so its radius stays positive while it pulses.
    pub fn from_bodies(config: SimulationConfig, bodies: [MovingCircle<f64>; 2]) -> Result<Self> {
        config.validate()?;
        let radii = config.radius_range();
        for body in &bodies {
            body.snapshot().validate()?;
            if !radii.contains(body.radius) {
                return Err(CrossingError::InvalidConfig(format!(
                    "body radius {} is outside [{}, {}]",
                    body.radius, radii.min, radii.max
                )));
            }
            if !body.radius_rate.is_finite() || body.radius_rate.abs() >= radii.min {
                return Err(CrossingError::InvalidConfig(format!(
                    "body radius_rate {} must be smaller in magnitude than r_min {}",
                    body.radius_rate, radii.min
                )));
            }
        }
        let tolerance = config.tolerance()?;

        tracing::debug!(
            r0 = bodies[0].radius,
            r1 = bodies[1].radius,
            "simulation initialised"
        );

        Ok(Self {
            arena: config.arena(),
            radii,
            tolerance,
            config,
            bodies,
            step: 0,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current state of both bodies.
    pub fn bodies(&self) -> &[MovingCircle<f64>; 2] {
        &self.bodies
    }

    /// Index of the next frame [`step`](Self::step) will produce.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// Evaluates the current state, then moves both bodies.
    pub fn step(&mut self) -> Result<Frame> {
        let circles = [self.bodies[0].snapshot(), self.bodies[1].snapshot()];
        let intersection = relate(&circles[0], &circles[1], self.tolerance)?;

        if intersection.relationship == Relationship::Degenerate {
            tracing::warn!(
                step = self.step,
                distance = intersection.distance,
                r0 = circles[0].radius,
                r1 = circles[1].radius,
                "classifier matched no band"
            );
        } else {
            tracing::debug!(
                step = self.step,
                relationship = %intersection.relationship,
                points = intersection.points.len(),
                "frame evaluated"
            );
        }

        let frame = Frame {
            step: self.step,
            circles,
            intersection,
        };

        for (i, body) in self.bodies.iter_mut().enumerate() {
            let events = body.advance(&self.arena, &self.radii);
            if events.walls.any() || events.radius_reversed {
                tracing::trace!(
                    step = self.step,
                    circle = i,
                    wall_x = events.walls.x,
                    wall_y = events.walls.y,
                    radius_reversed = events.radius_reversed,
                    "direction reversed"
                );
            }
        }
        self.step += 1;

        Ok(frame)
    }

    /// Runs `n` steps and collects the frames.
    pub fn frames(&mut self, n: usize) -> Result<Vec<Frame>> {
        (0..n).map(|_| self.step()).collect()
    }
}
