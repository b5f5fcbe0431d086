//! Seat quality and score update types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Percentile-relative quality of an assignment within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeatQuality {
    Top,
    Good,
    Normal,
    Back,
    Far,
}

impl SeatQuality {
    pub const ALL: [SeatQuality; 5] = [
        SeatQuality::Top,
        SeatQuality::Good,
        SeatQuality::Normal,
        SeatQuality::Back,
        SeatQuality::Far,
    ];

    /// Label for a percentile rank in `[0, 100]`.
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile < 15.0 {
            SeatQuality::Top
        } else if percentile < 40.0 {
            SeatQuality::Good
        } else if percentile < 60.0 {
            SeatQuality::Normal
        } else if percentile < 85.0 {
            SeatQuality::Back
        } else {
            SeatQuality::Far
        }
    }

    /// Score change applied to a seated, non-priority applicant.
    ///
    /// Better seats lower the score, worse seats raise it.
    pub fn score_delta(self) -> f64 {
        match self {
            SeatQuality::Top => -4.0,
            SeatQuality::Good => -1.5,
            SeatQuality::Normal => 0.0,
            SeatQuality::Back => 1.5,
            SeatQuality::Far => 4.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeatQuality::Top => "top",
            SeatQuality::Good => "good",
            SeatQuality::Normal => "normal",
            SeatQuality::Back => "back",
            SeatQuality::Far => "far",
        }
    }
}

impl fmt::Display for SeatQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Win/lose outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    Win,
    Lose,
}

/// What drove a score update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", tag = "kind", content = "quality"))]
pub enum UpdateLabel {
    /// Seated with a rated seat.
    Quality(SeatQuality),
    /// Seated without a rating (priority tier).
    Unrated,
    /// Not seated.
    Lose,
}

/// Next-round score for one applicant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreUpdate {
    pub application_id: String,
    pub previous_score: f64,
    /// Always within `[MIN_SCORE, MAX_SCORE]` for non-priority applicants.
    pub next_score: f64,
    pub delta: f64,
    pub label: UpdateLabel,
    pub outcome: Outcome,
}
