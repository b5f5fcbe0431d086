//! Percentile seat-quality rating.

use super::types::SeatQuality;
use crate::allocation::{Assignment, Tier};
use std::cmp::Ordering;

/// Labels every non-priority assignment by its percentile rank.
///
/// Assignments are ranked by descending average score (stable on input
/// order); rank `i` of `n` sits at percentile `i / n * 100`. Priority
/// assignments are left unlabelled. Labels are relative to this run only.
///
/// # Examples
///
/// ```
/// use u_seatlottery::allocation::{Assignment, Tier};
/// use u_seatlottery::rating::{rate_assignments, SeatQuality};
///
/// let mut assignments = vec![
///     Assignment::new("a", vec!["s1".into()], 10.0, Tier::Open),
///     Assignment::new("b", vec!["s2".into()], 90.0, Tier::Open),
/// ];
/// rate_assignments(&mut assignments);
/// assert_eq!(assignments[1].seat_quality, Some(SeatQuality::Top));
/// assert_eq!(assignments[0].seat_quality, Some(SeatQuality::Normal));
/// ```
pub fn rate_assignments(assignments: &mut [Assignment]) {
    let mut rated: Vec<usize> = Vec::with_capacity(assignments.len());
    for (i, a) in assignments.iter_mut().enumerate() {
        if a.tier == Tier::Priority {
            a.seat_quality = None;
        } else {
            rated.push(i);
        }
    }

    rated.sort_by(|&a, &b| {
        assignments[b]
            .average_score
            .partial_cmp(&assignments[a].average_score)
            .unwrap_or(Ordering::Equal)
    });

    let n = rated.len() as f64;
    for (rank, &idx) in rated.iter().enumerate() {
        let percentile = rank as f64 / n * 100.0;
        assignments[idx].seat_quality = Some(SeatQuality::from_percentile(percentile));
    }
}

/// Number of assignments per quality label, in [`SeatQuality::ALL`] order.
pub fn quality_histogram(assignments: &[Assignment]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for q in assignments.iter().filter_map(|a| a.seat_quality) {
        let slot = SeatQuality::ALL
            .iter()
            .position(|&x| x == q)
            .unwrap_or_default();
        counts[slot] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(id: &str, score: f64) -> Assignment {
        Assignment::new(id, vec![format!("seat-{id}")], score, Tier::Open)
    }

    #[test]
    fn test_percentile_bands_over_twenty() {
        let mut assignments: Vec<Assignment> = (0..20)
            .map(|i| open(&format!("a{i}"), 100.0 - i as f64))
            .collect();
        rate_assignments(&mut assignments);

        // 20 items: ranks 0-2 top, 3-7 good, 8-11 normal, 12-16 back, 17-19 far
        assert_eq!(quality_histogram(&assignments), [3, 5, 4, 5, 3]);
        assert_eq!(assignments[0].seat_quality, Some(SeatQuality::Top));
        assert_eq!(assignments[19].seat_quality, Some(SeatQuality::Far));
    }

    #[test]
    fn test_priority_never_labelled() {
        let mut assignments = vec![
            Assignment::new("vip", vec!["s0".into()], 1000.0, Tier::Priority),
            open("a", 50.0),
        ];
        assignments[0].seat_quality = Some(SeatQuality::Far);
        rate_assignments(&mut assignments);

        assert_eq!(assignments[0].seat_quality, None);
        assert_eq!(assignments[1].seat_quality, Some(SeatQuality::Top));
    }

    #[test]
    fn test_locked_and_rescue_are_rated() {
        let mut assignments = vec![
            Assignment::new("l", vec!["s0".into()], 10.0, Tier::Locked),
            Assignment::new("r", vec!["s1".into()], 90.0, Tier::Rescue),
        ];
        rate_assignments(&mut assignments);
        assert_eq!(assignments[1].seat_quality, Some(SeatQuality::Top));
        assert_eq!(assignments[0].seat_quality, Some(SeatQuality::Normal));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut assignments: Vec<Assignment> =
            (0..4).map(|i| open(&format!("t{i}"), 50.0)).collect();
        rate_assignments(&mut assignments);

        let labels: Vec<_> = assignments.iter().map(|a| a.seat_quality).collect();
        assert_eq!(
            labels,
            vec![
                Some(SeatQuality::Top),
                Some(SeatQuality::Good),
                Some(SeatQuality::Normal),
                Some(SeatQuality::Back),
            ]
        );
    }

    #[test]
    fn test_empty_is_noop() {
        let mut assignments: Vec<Assignment> = vec![];
        rate_assignments(&mut assignments);
        assert_eq!(quality_histogram(&assignments), [0; 5]);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(SeatQuality::from_percentile(0.0), SeatQuality::Top);
        assert_eq!(SeatQuality::from_percentile(14.99), SeatQuality::Top);
        assert_eq!(SeatQuality::from_percentile(15.0), SeatQuality::Good);
        assert_eq!(SeatQuality::from_percentile(40.0), SeatQuality::Normal);
        assert_eq!(SeatQuality::from_percentile(60.0), SeatQuality::Back);
        assert_eq!(SeatQuality::from_percentile(85.0), SeatQuality::Far);
        assert_eq!(SeatQuality::from_percentile(100.0), SeatQuality::Far);
    }
}
