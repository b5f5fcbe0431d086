//! Distance-based seat scoring.

use super::types::{Point, ScoredSeat, Seat};
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Flat bonus added to premium seats.
///
/// Exceeds the whole distance range (0–100), so any premium seat outranks
/// every non-premium seat.
pub const PREMIUM_BONUS: f64 = 1000.0;

/// Upper bound of the distance component of a score.
pub const DISTANCE_SCORE_RANGE: f64 = 100.0;

/// Scores seats against a fixed reference point.
///
/// The normalising distance is measured once per run over the available
/// seats only.
///
/// # Examples
///
/// ```
/// use u_seatlottery::geometry::{GeometryScorer, Point, Seat};
///
/// let seats = vec![Seat::new("near", 0.0, 1.0), Seat::new("far", 0.0, 4.0)];
/// let scorer = GeometryScorer::for_available(&seats, Point::new(0.0, 0.0), &Default::default());
/// let scored = scorer.score_available(&seats, &Default::default());
/// assert!((scored[0].score - 75.0).abs() < 1e-9);
/// assert!(scored[1].score.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryScorer {
    stage: Point,
    max_distance: f64,
}

impl GeometryScorer {
    /// Creates a scorer with an explicit normalising distance.
    ///
    /// A non-positive or non-finite `max_distance` is replaced by 1.
    pub fn new(stage: Point, max_distance: f64) -> Self {
        let max_distance = if max_distance.is_finite() && max_distance > 0.0 {
            max_distance
        } else {
            1.0
        };
        Self {
            stage,
            max_distance,
        }
    }

    /// Measures the maximum stage distance over seats that are neither
    /// disabled nor in `excluded`.
    pub fn for_available(seats: &[Seat], stage: Point, excluded: &HashSet<&str>) -> Self {
        let max_distance = seats
            .iter()
            .filter(|s| is_available(s, excluded))
            .map(|s| s.position.distance_to(&stage))
            .fold(0.0, f64::max);
        Self::new(stage, max_distance)
    }

    pub fn stage(&self) -> Point {
        self.stage
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Scores a single seat, regardless of its availability flags.
    pub fn score(&self, seat: &Seat) -> ScoredSeat {
        let distance = seat.position.distance_to(&self.stage);
        let proximity = (DISTANCE_SCORE_RANGE
            - (distance / self.max_distance) * DISTANCE_SCORE_RANGE)
            .max(0.0);
        let bonus = if seat.is_premium { PREMIUM_BONUS } else { 0.0 };
        ScoredSeat {
            seat: seat.clone(),
            score: proximity + bonus,
            distance_from_stage: distance,
        }
    }

    /// Scores every available seat, preserving input order.
    pub fn score_available(&self, seats: &[Seat], excluded: &HashSet<&str>) -> Vec<ScoredSeat> {
        #[cfg(feature = "parallel")]
        {
            seats
                .par_iter()
                .filter(|s| is_available(s, excluded))
                .map(|s| self.score(s))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            seats
                .iter()
                .filter(|s| is_available(s, excluded))
                .map(|s| self.score(s))
                .collect()
        }
    }
}

fn is_available(seat: &Seat, excluded: &HashSet<&str>) -> bool {
    !seat.is_disabled && !excluded.contains(seat.id.as_str())
}
