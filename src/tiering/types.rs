//! Applicant types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the applicant's previous lottery round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LastResult {
    Win,
    Lose,
}

/// Display metadata carried through for reporting; never read by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ApplicantMeta {
    pub name: Option<String>,
    pub address: Option<String>,
    pub member_id: Option<String>,
    pub tags: Vec<String>,
}

/// One lottery application.
///
/// # Examples
///
/// ```
/// use u_seatlottery::tiering::{Application, LastResult};
///
/// let app = Application::new("c-17", 2, 6.5).with_last_result(LastResult::Lose);
/// assert!(!app.is_priority());
/// assert_eq!(app.party_size, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Application {
    pub id: String,
    /// Number of people who must sit together (at least 1).
    pub party_size: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_invitation: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_relation: bool,
    /// Typical domain 1.0–10.0; higher wins more often in the open tier.
    pub past_score: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_result: Option<LastResult>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub meta: ApplicantMeta,
}

impl Application {
    pub fn new(id: impl Into<String>, party_size: usize, past_score: f64) -> Self {
        Self {
            id: id.into(),
            party_size,
            is_invitation: false,
            is_relation: false,
            past_score,
            last_result: None,
            meta: ApplicantMeta::default(),
        }
    }

    pub fn with_invitation(mut self, invitation: bool) -> Self {
        self.is_invitation = invitation;
        self
    }

    pub fn with_relation(mut self, relation: bool) -> Self {
        self.is_relation = relation;
        self
    }

    pub fn with_last_result(mut self, result: LastResult) -> Self {
        self.last_result = Some(result);
        self
    }

    pub fn with_meta(mut self, meta: ApplicantMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Invitation and relation holders both rank as priority.
    pub fn is_priority(&self) -> bool {
        self.is_invitation || self.is_relation
    }
}
