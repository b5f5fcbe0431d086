//! Allocation outcome types.

use crate::rating::SeatQuality;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Priority class governing allocation order.
///
/// Ordering follows processing order: `Locked < Priority < Rescue < Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tier {
    /// Tier 0: seats reserved before the run.
    Locked,
    /// Tier 1: invitation or relation holders.
    Priority,
    /// Tier 2: applicants who lost the previous round.
    Rescue,
    /// Tier 3: everyone else, ordered by hybrid selection.
    Open,
}

impl Tier {
    /// Numeric tier level (0–3).
    pub fn level(self) -> u8 {
        match self {
            Tier::Locked => 0,
            Tier::Priority => 1,
            Tier::Rescue => 2,
            Tier::Open => 3,
        }
    }
}

/// Seats granted to one applicant.
///
/// `seat_ids.len()` always equals the applicant's party size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Assignment {
    pub application_id: String,
    pub seat_ids: Vec<String>,
    pub average_score: f64,
    pub tier: Tier,
    /// Set by the quality rater; never set for [`Tier::Priority`].
    pub seat_quality: Option<SeatQuality>,
}

impl Assignment {
    pub fn new(
        application_id: impl Into<String>,
        seat_ids: Vec<String>,
        average_score: f64,
        tier: Tier,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            seat_ids,
            average_score,
            tier,
            seat_quality: None,
        }
    }

    pub fn party_size(&self) -> usize {
        self.seat_ids.len()
    }
}
