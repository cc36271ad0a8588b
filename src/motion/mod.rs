//! Motion of the two circles between evaluations.
//!
//! The relationship core never mutates anything; these types hold the state
//! that changes from step to step and hand out [`Circle2`](crate::Circle2)
//! snapshots for evaluation.

mod arena;
mod body;
mod spawn;

pub use arena::{Arena, Bounce};
pub use body::{MovingCircle, RadiusRange, StepEvents};
pub use spawn::spawn_circle;
