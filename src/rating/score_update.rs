//! Next-round score computation.
//!
//! Scores move against seat quality: a top seat costs 4 points, a far seat
//! earns 4, and a loss earns 6. Since a loss always gains more than any
//! win can cost, repeated losers climb toward the ceiling quickly.

use super::types::{Outcome, ScoreUpdate, UpdateLabel};
use crate::allocation::Assignment;
use crate::tiering::Application;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Lower score bound.
pub const MIN_SCORE: f64 = 1.0;

/// Upper score bound.
pub const MAX_SCORE: f64 = 10.0;

/// Score gained by an unseated, non-priority applicant.
pub const LOSS_BOOST: f64 = 6.0;

/// Clamps a score into `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Computes one [`ScoreUpdate`] per applicant appearing in the run.
///
/// Needs only the run's assignments and unassigned ids plus the original
/// applications. Updates follow application order. Ids that do not match
/// an application are skipped with a warning.
///
/// Priority applicants keep their score exactly, seated or not.
pub fn compute_score_updates(
    assignments: &[Assignment],
    unassigned: &[String],
    applications: &[Application],
) -> Vec<ScoreUpdate> {
    let seated: HashMap<&str, &Assignment> = assignments
        .iter()
        .map(|a| (a.application_id.as_str(), a))
        .collect();
    let lost: HashSet<&str> = unassigned.iter().map(String::as_str).collect();

    let known: HashSet<&str> = applications.iter().map(|a| a.id.as_str()).collect();
    for id in seated.keys().chain(lost.iter()) {
        if !known.contains(id) {
            warn!(application_id = %id, "score update skipped: no matching application");
        }
    }

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut updates = Vec::with_capacity(seated.len() + lost.len());
    for app in applications {
        if !emitted.insert(app.id.as_str()) {
            continue;
        }
        if let Some(assignment) = seated.get(app.id.as_str()) {
            updates.push(seated_update(app, assignment));
        } else if lost.contains(app.id.as_str()) {
            updates.push(lost_update(app));
        }
    }
    updates
}

fn seated_update(app: &Application, assignment: &Assignment) -> ScoreUpdate {
    if app.is_priority() {
        return unchanged(app, UpdateLabel::Unrated, Outcome::Win);
    }
    let (label, delta) = match assignment.seat_quality {
        Some(q) => (UpdateLabel::Quality(q), q.score_delta()),
        None => (UpdateLabel::Unrated, 0.0),
    };
    moved(app, delta, label, Outcome::Win)
}

fn lost_update(app: &Application) -> ScoreUpdate {
    if app.is_priority() {
        return unchanged(app, UpdateLabel::Lose, Outcome::Lose);
    }
    moved(app, LOSS_BOOST, UpdateLabel::Lose, Outcome::Lose)
}

fn moved(app: &Application, delta: f64, label: UpdateLabel, outcome: Outcome) -> ScoreUpdate {
    let next_score = clamp_score(app.past_score + delta);
    ScoreUpdate {
        application_id: app.id.clone(),
        previous_score: app.past_score,
        next_score,
        delta: next_score - app.past_score,
        label,
        outcome,
    }
}

fn unchanged(app: &Application, label: UpdateLabel, outcome: Outcome) -> ScoreUpdate {
    ScoreUpdate {
        application_id: app.id.clone(),
        previous_score: app.past_score,
        next_score: app.past_score,
        delta: 0.0,
        label,
        outcome,
    }
}

/// Aggregate view of a batch of score updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreSummary {
    pub winners: usize,
    pub losers: usize,
    /// Mean applied delta (after clamping); 0 for an empty batch.
    pub mean_delta: f64,
}

/// Summarizes score updates for reporting.
pub fn summarize_updates(updates: &[ScoreUpdate]) -> ScoreSummary {
    if updates.is_empty() {
        return ScoreSummary::default();
    }
    let winners = updates.iter().filter(|u| u.outcome == Outcome::Win).count();
    let mean_delta = updates.iter().map(|u| u.delta).sum::<f64>() / updates.len() as f64;
    ScoreSummary {
        winners,
        losers: updates.len() - winners,
        mean_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::Tier;
    use crate::rating::SeatQuality;

    fn seated(id: &str, tier: Tier, quality: Option<SeatQuality>) -> Assignment {
        let mut a = Assignment::new(id, vec![format!("s-{id}")], 50.0, tier);
        a.seat_quality = quality;
        a
    }

    #[test]
    fn test_top_seat_lowers_score() {
        let apps = vec![Application::new("a", 1, 7.0)];
        let assignments = vec![seated("a", Tier::Open, Some(SeatQuality::Top))];
        let updates = compute_score_updates(&assignments, &[], &apps);

        assert_eq!(updates.len(), 1);
        assert!((updates[0].next_score - 3.0).abs() < 1e-12);
        assert!((updates[0].delta + 4.0).abs() < 1e-12);
        assert_eq!(updates[0].label, UpdateLabel::Quality(SeatQuality::Top));
        assert_eq!(updates[0].outcome, Outcome::Win);
    }

    #[test]
    fn test_top_seat_clamps_at_floor() {
        let apps = vec![Application::new("a", 1, 2.0)];
        let assignments = vec![seated("a", Tier::Open, Some(SeatQuality::Top))];
        let updates = compute_score_updates(&assignments, &[], &apps);

        assert_eq!(updates[0].next_score, MIN_SCORE);
        assert!((updates[0].delta + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quality_deltas() {
        let cases = [
            (SeatQuality::Good, 3.5),
            (SeatQuality::Normal, 5.0),
            (SeatQuality::Back, 6.5),
            (SeatQuality::Far, 9.0),
        ];
        for (quality, expected) in cases {
            let apps = vec![Application::new("a", 1, 5.0)];
            let assignments = vec![seated("a", Tier::Rescue, Some(quality))];
            let updates = compute_score_updates(&assignments, &[], &apps);
            assert!(
                (updates[0].next_score - expected).abs() < 1e-12,
                "{quality}: got {}",
                updates[0].next_score
            );
        }
    }

    #[test]
    fn test_loss_boost_clamps_at_ceiling() {
        let apps = vec![Application::new("a", 2, 9.0)];
        let updates = compute_score_updates(&[], &["a".to_string()], &apps);

        assert_eq!(updates[0].next_score, MAX_SCORE);
        assert_eq!(updates[0].label, UpdateLabel::Lose);
        assert_eq!(updates[0].outcome, Outcome::Lose);
    }

    #[test]
    fn test_priority_score_unchanged() {
        let apps = vec![
            Application::new("won", 1, 4.2).with_invitation(true),
            Application::new("lost", 1, 8.8).with_relation(true),
        ];
        let assignments = vec![seated("won", Tier::Priority, None)];
        let updates = compute_score_updates(&assignments, &["lost".to_string()], &apps);

        assert_eq!(updates[0].next_score, 4.2);
        assert_eq!(updates[0].label, UpdateLabel::Unrated);
        assert_eq!(updates[0].outcome, Outcome::Win);

        assert_eq!(updates[1].next_score, 8.8);
        assert_eq!(updates[1].delta, 0.0);
        assert_eq!(updates[1].outcome, Outcome::Lose);
    }

    #[test]
    fn test_applicants_outside_run_are_skipped() {
        let apps = vec![
            Application::new("in", 1, 5.0),
            Application::new("absent", 1, 5.0),
        ];
        let updates = compute_score_updates(&[], &["in".to_string(), "ghost".to_string()], &apps);

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].application_id, "in");
    }

    #[test]
    fn test_summary() {
        let apps = vec![Application::new("w", 1, 5.0), Application::new("l", 1, 5.0)];
        let assignments = vec![seated("w", Tier::Open, Some(SeatQuality::Good))];
        let updates = compute_score_updates(&assignments, &["l".to_string()], &apps);
        let summary = summarize_updates(&updates);

        assert_eq!(summary.winners, 1);
        assert_eq!(summary.losers, 1);
        assert!((summary.mean_delta - 2.25).abs() < 1e-12);
        assert_eq!(summarize_updates(&[]), ScoreSummary::default());
    }
}
