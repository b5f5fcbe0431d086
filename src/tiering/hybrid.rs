//! Skill/luck blended ordering for the open tier.

use super::types::Application;
use crate::random::{clamp_unit, RandomSource};

/// Default probability of a merit pick.
pub const DEFAULT_SKILL_WEIGHT: f64 = 0.70;

/// Orders candidates by repeatedly picking either the best remaining
/// score (probability `skill_weight`) or a uniformly random one.
///
/// Each pick consumes one draw to choose the mode; a random pick
/// consumes a second draw for the index. The result is a full ranking.
///
/// # Examples
///
/// ```
/// use u_seatlottery::random::ReplaySource;
/// use u_seatlottery::tiering::{Application, HybridSelector};
///
/// let apps = vec![
///     Application::new("low", 1, 2.0),
///     Application::new("high", 1, 9.0),
/// ];
/// // Pure merit: every draw is below the weight.
/// let mut source = ReplaySource::new(vec![0.0]);
/// let ranked = HybridSelector::new(1.0).rank(apps.iter().collect(), &mut source);
/// assert_eq!(ranked[0].id, "high");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridSelector {
    skill_weight: f64,
}

impl Default for HybridSelector {
    fn default() -> Self {
        Self {
            skill_weight: DEFAULT_SKILL_WEIGHT,
        }
    }
}

impl HybridSelector {
    /// Creates a selector; `skill_weight` is clamped into `[0, 1]` and
    /// NaN falls back to [`DEFAULT_SKILL_WEIGHT`].
    pub fn new(skill_weight: f64) -> Self {
        Self {
            skill_weight: normalize_skill_weight(skill_weight),
        }
    }

    pub fn skill_weight(&self) -> f64 {
        self.skill_weight
    }

    /// Ranks applications by past score and chance.
    pub fn rank<'a>(
        &self,
        candidates: Vec<&'a Application>,
        source: &mut dyn RandomSource,
    ) -> Vec<&'a Application> {
        self.rank_by(candidates, |a| a.past_score, source)
    }

    /// Generic form of [`rank`](Self::rank) over any item with a score.
    ///
    /// A merit pick takes the first item with the highest score in the
    /// current remaining order.
    pub fn rank_by<T, F>(
        &self,
        mut remaining: Vec<T>,
        score: F,
        source: &mut dyn RandomSource,
    ) -> Vec<T>
    where
        F: Fn(&T) -> f64,
    {
        let mut ranked = Vec::with_capacity(remaining.len());
        while !remaining.is_empty() {
            let draw = clamp_unit(source.next_unit());
            let pick = if draw < self.skill_weight {
                best_index(&remaining, &score)
            } else {
                source.next_index(remaining.len())
            };
            ranked.push(remaining.remove(pick));
        }
        ranked
    }
}

/// Clamps a configured skill weight into `[0, 1]`.
pub fn normalize_skill_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        DEFAULT_SKILL_WEIGHT
    } else {
        weight.clamp(0.0, 1.0)
    }
}

fn best_index<T, F: Fn(&T) -> f64>(items: &[T], score: &F) -> usize {
    let mut best = 0;
    let mut best_score = score(&items[0]);
    for (i, item) in items.iter().enumerate().skip(1) {
        let s = score(item);
        if s > best_score {
            best = i;
            best_score = s;
        }
    }
    best
}
