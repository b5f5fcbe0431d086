//! Applicant tiering.
//!
//! Every applicant without pre-locked seats lands in exactly one tier:
//!
//! - **Priority** (`is_invitation || is_relation`): shuffled, so priority
//!   guarantees an early attempt but not a better seat.
//! - **Rescue** (lost the previous round): descending past score. Runs
//!   before the open tier so nobody loses twice in a row while capacity
//!   lasts.
//! - **Open**: hybrid skill/luck ordering.

mod classifier;
mod hybrid;
mod types;

pub use classifier::{classify, TierPlan};
pub use hybrid::{normalize_skill_weight, HybridSelector, DEFAULT_SKILL_WEIGHT};
pub use types::{ApplicantMeta, Application, LastResult};
