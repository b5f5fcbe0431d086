//! Post-allocation rating and score feedback.
//!
//! After every allocation pass completes, non-priority assignments get a
//! percentile-relative [`SeatQuality`]. The score updater then turns each
//! applicant's outcome into the score that feeds the next round.

mod quality;
mod score_update;
mod types;

pub use quality::{quality_histogram, rate_assignments};
pub use score_update::{
    clamp_score, compute_score_updates, summarize_updates, ScoreSummary, LOSS_BOOST, MAX_SCORE,
    MIN_SCORE,
};
pub use types::{Outcome, ScoreUpdate, SeatQuality, UpdateLabel};
