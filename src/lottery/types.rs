//! Lottery inputs and results.

use crate::allocation::{Assignment, Tier};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seats reserved for an applicant before the run (tier 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LockedAssignment {
    pub application_id: String,
    pub seat_ids: Vec<String>,
}

impl LockedAssignment {
    pub fn new<I, S>(application_id: impl Into<String>, seat_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            application_id: application_id.into(),
            seat_ids: seat_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// One allocation attempt, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AttemptRecord {
    pub application_id: String,
    pub tier: Tier,
    pub seated: bool,
}

/// Aggregate statistics of a run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LotteryStats {
    pub total_applications: usize,
    /// Seats in the input, including disabled and locked ones.
    pub total_seats: usize,
    /// Seats open to allocation after disabled and locked seats are removed.
    pub available_seats: usize,
    /// Assignments per tier, indexed by [`Tier::level`].
    pub tier_counts: [usize; 4],
    pub total_people_seated: usize,
    /// Mean of assignment average scores; 0 with no assignments.
    pub average_score: f64,
    /// Rescue-tier applicants left unseated.
    pub tier2_overflow_count: usize,
    pub unassigned_count: usize,
}

impl LotteryStats {
    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tier_counts[tier.level() as usize]
    }
}

/// Output of a lottery run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LotteryResult {
    pub assignments: Vec<Assignment>,
    /// Unseated application ids, in attempt order.
    pub unassigned: Vec<String>,
    pub stats: LotteryStats,
    /// Attempt log for tiers 1–3; locked assignments are not attempted.
    pub attempts: Vec<AttemptRecord>,
}

impl LotteryResult {
    pub fn assignment_for(&self, application_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.application_id == application_id)
    }

    pub fn is_seated(&self, application_id: &str) -> bool {
        self.assignment_for(application_id).is_some()
    }

    /// All granted seat ids, in assignment order.
    pub fn granted_seat_ids(&self) -> impl Iterator<Item = &str> {
        self.assignments
            .iter()
            .flat_map(|a| a.seat_ids.iter().map(String::as_str))
    }
}
