//! Geometry scoring.
//!
//! Converts raw seat positions and a reference point (the stage) into a
//! per-seat desirability score:
//!
//! ```text
//! score = max(0, 100 - distance / max_distance * 100) + (premium ? 1000 : 0)
//! ```
//!
//! Disabled seats and seats held by pre-locked assignments are filtered
//! out before scoring.

mod scorer;
mod types;

pub use scorer::{GeometryScorer, DISTANCE_SCORE_RANGE, PREMIUM_BONUS};
pub use types::{Point, ScoredSeat, Seat};
