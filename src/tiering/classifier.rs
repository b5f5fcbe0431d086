//! Priority tier classification and per-tier ordering.

use super::hybrid::HybridSelector;
use super::types::{Application, LastResult};
use crate::allocation::Tier;
use crate::random::{shuffle, RandomSource};
use std::cmp::Ordering;

/// Tier of an application that holds no pre-locked seats.
pub fn classify(application: &Application) -> Tier {
    if application.is_priority() {
        Tier::Priority
    } else if application.last_result == Some(LastResult::Lose) {
        Tier::Rescue
    } else {
        Tier::Open
    }
}

/// Applications split by tier, each list in allocation order once
/// [`ordered`](TierPlan::ordered) has run.
#[derive(Debug, Clone, Default)]
pub struct TierPlan<'a> {
    pub priority: Vec<&'a Application>,
    pub rescue: Vec<&'a Application>,
    pub open: Vec<&'a Application>,
}

impl<'a> TierPlan<'a> {
    /// Splits applications into tiers, keeping input order.
    pub fn partition<I>(applications: I) -> Self
    where
        I: IntoIterator<Item = &'a Application>,
    {
        let mut plan = Self::default();
        for app in applications {
            match classify(app) {
                Tier::Priority => plan.priority.push(app),
                Tier::Rescue => plan.rescue.push(app),
                _ => plan.open.push(app),
            }
        }
        plan
    }

    /// Applies each tier's ordering rule.
    ///
    /// - priority: Fisher–Yates shuffle
    /// - rescue: descending past score, stable
    /// - open: hybrid selection
    ///
    /// Random draws are consumed in that order.
    pub fn ordered(mut self, selector: &HybridSelector, source: &mut dyn RandomSource) -> Self {
        shuffle(&mut self.priority, source);
        self.rescue.sort_by(|a, b| {
            b.past_score
                .partial_cmp(&a.past_score)
                .unwrap_or(Ordering::Equal)
        });
        self.open = selector.rank(std::mem::take(&mut self.open), source);
        self
    }

    pub fn len(&self) -> usize {
        self.priority.len() + self.rescue.len() + self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applications in processing order, tagged with their tier.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &'a Application)> + '_ {
        self.priority
            .iter()
            .map(|&a| (Tier::Priority, a))
            .chain(self.rescue.iter().map(|&a| (Tier::Rescue, a)))
            .chain(self.open.iter().map(|&a| (Tier::Open, a)))
    }
}
