//! circlecross - How two circles meet
//!
//! Classifies the relationship between two circles (disjoint, tangent,
//! crossing, contained, coincident) within an explicit tolerance and solves
//! the tangency or crossing points. Around that stateless core sits a small
//! animation driver: two circles drifting and pulsing inside a box, rendered
//! frame by frame to SVG.
//!
//! ```
//! use circlecross::{classify, solve, Point2, Relationship, Tolerance};
//!
//! let (p0, r0) = (Point2::new(0.0, 0.0), 3.0);
//! let (p1, r1) = (Point2::new(2.0, 0.0), 1.0);
//! let d = p0.distance(p1);
//!
//! let rel = classify(d, r0, r1, Tolerance::default()).unwrap();
//! assert_eq!(rel, Relationship::InternallyTangent);
//!
//! let points = solve(rel, p0, r0, p1, r1, d).unwrap();
//! assert_eq!(points.first(), Some(Point2::new(3.0, 0.0)));
//! ```

pub mod config;
pub mod error;
pub mod motion;
pub mod primitives;
pub mod relation;
pub mod render;
pub mod simulation;
pub mod tolerance;

pub use config::SimulationConfig;
pub use error::CrossingError;
pub use primitives::{Circle2, Point2, Vec2};
pub use relation::{
    classify, classify_unchecked, crossing_points, external_tangent_point,
    internal_tangent_point, relate, solve, CrossingPoints, Intersection, Relationship,
};
pub use simulation::{Frame, Simulation};
pub use tolerance::Tolerance;
