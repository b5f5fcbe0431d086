//! Lottery configuration.

use crate::allocation::DEFAULT_SOLO_BONUS_RATIO;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::tiering::DEFAULT_SKILL_WEIGHT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a lottery run.
///
/// # Defaults
///
/// ```
/// use u_seatlottery::lottery::LotteryConfig;
///
/// let config = LotteryConfig::default();
/// assert_eq!(config.skill_weight, 0.70);
/// assert_eq!(config.solo_bonus_ratio, 0.20);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_seatlottery::geometry::Point;
/// use u_seatlottery::lottery::LotteryConfig;
///
/// let config = LotteryConfig::default()
///     .with_stage(Point::new(50.0, 0.0))
///     .with_skill_weight(0.5)
///     .with_seed(2024);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LotteryConfig {
    /// Reference point seats are scored against.
    pub stage: Point,

    /// Probability that an open-tier pick is merit-based (0.0–1.0).
    ///
    /// Out-of-range values are clamped by the runner; NaN falls back to
    /// the default. [`validate`](Self::validate) reports them.
    pub skill_weight: f64,

    /// Solo adjacency bonus as a fraction of the best candidate score.
    pub solo_bonus_ratio: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            stage: Point::default(),
            skill_weight: DEFAULT_SKILL_WEIGHT,
            solo_bonus_ratio: DEFAULT_SOLO_BONUS_RATIO,
            seed: None,
        }
    }
}

impl LotteryConfig {
    /// Sets the stage reference point.
    pub fn with_stage(mut self, stage: Point) -> Self {
        self.stage = stage;
        self
    }

    /// Sets the skill weight.
    ///
    /// Stored as given; the runner clamps it through
    /// [`HybridSelector::new`](crate::tiering::HybridSelector::new).
    pub fn with_skill_weight(mut self, weight: f64) -> Self {
        self.skill_weight = weight;
        self
    }

    pub fn with_solo_bonus_ratio(mut self, ratio: f64) -> Self {
        self.solo_bonus_ratio = ratio;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset leaning on past score: 90% merit picks in the open tier.
    pub fn merit_first() -> Self {
        Self {
            skill_weight: 0.9,
            ..Self::default()
        }
    }

    /// Preset ignoring past score in the open tier.
    pub fn pure_luck() -> Self {
        Self {
            skill_weight: 0.0,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.skill_weight) {
            return Err(ConfigError::SkillWeightOutOfRange(self.skill_weight));
        }
        if !self.stage.x.is_finite() || !self.stage.y.is_finite() {
            return Err(ConfigError::NonFiniteStage {
                x: self.stage.x,
                y: self.stage.y,
            });
        }
        if !self.solo_bonus_ratio.is_finite() || self.solo_bonus_ratio < 0.0 {
            return Err(ConfigError::SoloBonusOutOfRange(self.solo_bonus_ratio));
        }
        Ok(())
    }
}
