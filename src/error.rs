//! Error and diagnostic types.
//!
//! A lottery run itself never fails; these types cover configuration
//! validation and pre-run input inspection.

use thiserror::Error;

/// Rejected [`LotteryConfig`](crate::lottery::LotteryConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("skill_weight must be in [0, 1], got {0}")]
    SkillWeightOutOfRange(f64),

    #[error("stage position must be finite, got ({x}, {y})")]
    NonFiniteStage { x: f64, y: f64 },

    #[error("solo_bonus_ratio must be finite and non-negative, got {0}")]
    SoloBonusOutOfRange(f64),
}

/// A non-fatal anomaly in lottery inputs.
///
/// The engine tolerates all of these; callers decide whether to reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputIssue {
    #[error("seat id `{0}` appears more than once")]
    DuplicateSeatId(String),

    #[error("application id `{0}` appears more than once")]
    DuplicateApplicationId(String),

    #[error("application `{0}` requests zero seats and can never be seated")]
    ZeroPartySize(String),

    #[error("locked assignment references unknown application `{0}`")]
    UnknownLockedApplication(String),

    #[error("locked assignment for `{application_id}` references unknown seat `{seat_id}`")]
    UnknownLockedSeat {
        application_id: String,
        seat_id: String,
    },

    #[error("locked assignment for `{application_id}` references disabled seat `{seat_id}`")]
    LockedSeatDisabled {
        application_id: String,
        seat_id: String,
    },

    #[error("lock for `{application_id}` holds {locked} seats for a party of {party_size}")]
    LockedPartySizeMismatch {
        application_id: String,
        party_size: usize,
        locked: usize,
    },

    #[error("seat `{0}` is locked by more than one assignment")]
    SeatLockedTwice(String),
}
