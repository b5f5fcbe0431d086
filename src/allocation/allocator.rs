//! Contiguous group allocation.

use super::runs::{build_runs, candidate_runs, grid_cell, BlockKey, RowKey};
use crate::geometry::ScoredSeat;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Default solo-adjacency bonus as a fraction of the best candidate score.
pub const DEFAULT_SOLO_BONUS_RATIO: f64 = 0.20;

/// Picks the best contiguous seat run for a party.
///
/// Greedy and final: the caller removes the granted seats from the pool
/// before the next attempt.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use u_seatlottery::allocation::GroupAllocator;
/// use u_seatlottery::geometry::{ScoredSeat, Seat};
///
/// let seats: Vec<ScoredSeat> = (0..4)
///     .map(|c| ScoredSeat {
///         seat: Seat::new(format!("s{c}"), 0.0, 0.0).with_grid("A", 1, c),
///         score: 10.0 * c as f64,
///         distance_from_stage: 0.0,
///     })
///     .collect();
///
/// let picked = GroupAllocator::default().allocate(2, &seats, &HashSet::new(), None);
/// assert_eq!(picked, Some(vec!["s2".to_string(), "s3".to_string()]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupAllocator {
    /// Bonus for single seats next to an already seated solo attendee,
    /// as a fraction of the maximum candidate average score.
    pub solo_bonus_ratio: f64,
}

impl Default for GroupAllocator {
    fn default() -> Self {
        Self {
            solo_bonus_ratio: DEFAULT_SOLO_BONUS_RATIO,
        }
    }
}

impl GroupAllocator {
    pub fn new(solo_bonus_ratio: f64) -> Self {
        Self { solo_bonus_ratio }
    }

    /// Returns the seat ids of the best free run of `party_size` seats.
    ///
    /// `solo_seat_ids` are seats already held by parties of one; for a
    /// single-seat request, candidates in their 8-neighbourhood (same
    /// block) receive the adjacency bonus once, however many solo
    /// neighbours they have. Returns `None` when too few seats remain or
    /// no contiguous run of that length exists.
    pub fn allocate(
        &self,
        party_size: usize,
        available: &[ScoredSeat],
        assigned: &HashSet<String>,
        solo_seat_ids: Option<&HashSet<String>>,
    ) -> Option<Vec<String>> {
        if party_size == 0 {
            return None;
        }

        let free: Vec<&ScoredSeat> = available
            .iter()
            .filter(|s| !assigned.contains(&s.seat.id))
            .collect();
        if free.len() < party_size {
            return None;
        }

        let runs = build_runs(free.iter().copied());
        let candidates = candidate_runs(&runs, party_size);
        if candidates.is_empty() {
            return None;
        }

        let mut ranked: Vec<(f64, usize)> = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (c.average_score, i))
            .collect();

        if party_size == 1 {
            if let Some(solo) = solo_seat_ids.filter(|s| !s.is_empty()) {
                let neighbours = solo_neighbourhood(available, solo);
                if !neighbours.is_empty() {
                    let max_score = ranked.iter().map(|&(s, _)| s).fold(f64::MIN, f64::max);
                    let bonus = max_score * self.solo_bonus_ratio;
                    for (score, i) in ranked.iter_mut() {
                        let (key, col) = grid_cell(&candidates[*i].seats[0].seat);
                        if neighbours.contains(&(key, col)) {
                            *score += bonus;
                        }
                    }
                }
            }
        }

        // Stable: equal scores keep run order.
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        ranked
            .first()
            .map(|&(_, i)| candidates[i].seat_ids())
    }
}

/// Grid cells in the 8-neighbourhood of every gridded solo seat.
fn solo_neighbourhood<'a>(
    seats: &'a [ScoredSeat],
    solo_seat_ids: &HashSet<String>,
) -> HashSet<(RowKey<'a>, i32)> {
    let mut cells = HashSet::new();
    for scored in seats.iter().filter(|s| solo_seat_ids.contains(&s.seat.id)) {
        let (key, col) = grid_cell(&scored.seat);
        if matches!(key.block, BlockKey::Isolated(_)) {
            continue;
        }
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (Some(row), Some(c)) = (key.row.checked_add(dr), col.checked_add(dc)) else {
                    continue;
                };
                cells.insert((
                    RowKey {
                        block: key.block,
                        row,
                    },
                    c,
                ));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Seat;

    fn row_of(block: &str, row: i32, scores: &[f64]) -> Vec<ScoredSeat> {
        scores
            .iter()
            .enumerate()
            .map(|(c, &score)| ScoredSeat {
                seat: Seat::new(format!("{block}-{row}-{c}"), 0.0, 0.0).with_grid(
                    block,
                    row,
                    c as i32,
                ),
                score,
                distance_from_stage: 0.0,
            })
            .collect()
    }

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_picks_highest_average_run() {
        let seats = row_of("A", 1, &[10.0, 20.0, 30.0, 40.0, 50.0]);
        let picked = GroupAllocator::default().allocate(3, &seats, &HashSet::new(), None);
        assert_eq!(picked, Some(ids(&["A-1-2", "A-1-3", "A-1-4"])));
    }

    #[test]
    fn test_skips_assigned_seats() {
        let seats = row_of("A", 1, &[10.0, 20.0, 30.0, 40.0, 50.0]);
        let assigned: HashSet<String> = ["A-1-3".to_string()].into_iter().collect();
        // Remaining runs: [0,1,2] and [4]
        let picked = GroupAllocator::default().allocate(2, &seats, &assigned, None);
        assert_eq!(picked, Some(ids(&["A-1-1", "A-1-2"])));
    }

    #[test]
    fn test_fails_when_too_few_seats() {
        let seats = row_of("A", 1, &[10.0, 20.0]);
        assert_eq!(
            GroupAllocator::default().allocate(3, &seats, &HashSet::new(), None),
            None
        );
    }

    #[test]
    fn test_fails_without_contiguous_run() {
        let mut seats = row_of("A", 1, &[10.0, 20.0]);
        seats.extend(row_of("B", 1, &[10.0, 20.0]));
        // Four seats free but no run of three.
        assert_eq!(
            GroupAllocator::default().allocate(3, &seats, &HashSet::new(), None),
            None
        );
    }

    #[test]
    fn test_zero_party_never_seated() {
        let seats = row_of("A", 1, &[10.0]);
        assert_eq!(
            GroupAllocator::default().allocate(0, &seats, &HashSet::new(), None),
            None
        );
    }

    #[test]
    fn test_ties_keep_run_order() {
        let mut seats = row_of("A", 1, &[50.0, 50.0]);
        seats.extend(row_of("B", 1, &[50.0, 50.0]));
        let picked = GroupAllocator::default().allocate(2, &seats, &HashSet::new(), None);
        assert_eq!(picked, Some(ids(&["A-1-0", "A-1-1"])));

        let single = GroupAllocator::default().allocate(1, &seats, &HashSet::new(), None);
        assert_eq!(single, Some(ids(&["A-1-0"])));
    }

    #[test]
    fn test_solo_bonus_pulls_single_next_to_solo() {
        // Row 1: solo sits at col 0. Row 5 has the best free seat.
        let mut seats = row_of("A", 1, &[90.0, 80.0, 70.0]);
        seats.extend(row_of("A", 5, &[0.0, 0.0, 95.0]));
        let assigned: HashSet<String> = ["A-1-0".to_string()].into_iter().collect();
        let solo = assigned.clone();

        // max = 95, bonus = 19: A-1-1 becomes 99 > 95
        let picked = GroupAllocator::default().allocate(1, &seats, &assigned, Some(&solo));
        assert_eq!(picked, Some(ids(&["A-1-1"])));

        // Without the solo hint the best raw seat wins.
        let picked = GroupAllocator::default().allocate(1, &seats, &assigned, None);
        assert_eq!(picked, Some(ids(&["A-5-2"])));
    }

    #[test]
    fn test_solo_bonus_includes_diagonals() {
        let mut seats = row_of("A", 1, &[0.0, 10.0, 0.0]);
        seats.extend(row_of("A", 2, &[0.0, 0.0, 11.0, 0.0]));
        seats.extend(row_of("A", 9, &[0.0, 0.0, 0.0, 12.0]));
        // Solo at A-1-1; A-2-2 is a diagonal neighbour.
        let assigned: HashSet<String> = ["A-1-1".to_string()].into_iter().collect();
        let picked = GroupAllocator::default().allocate(1, &seats, &assigned, Some(&assigned));
        assert_eq!(picked, Some(ids(&["A-2-2"])));
    }

    #[test]
    fn test_solo_bonus_respects_block() {
        let mut seats = row_of("A", 1, &[10.0]);
        seats.extend(row_of("B", 1, &[0.0, 11.0]));
        seats.extend(row_of("C", 3, &[12.0]));
        // B-1-1 sits on a neighbour cell of A-1-0, but in another block.
        let assigned: HashSet<String> = ["A-1-0".to_string()].into_iter().collect();
        let picked = GroupAllocator::default().allocate(1, &seats, &assigned, Some(&assigned));
        assert_eq!(picked, Some(ids(&["C-3-0"])));
    }

    #[test]
    fn test_solo_bonus_does_not_stack() {
        // Free seat A-1-1 touches two solos; A-2-0 touches one. Both get
        // the same single bonus, so the raw score decides.
        let mut seats = row_of("A", 1, &[5.0, 40.0, 5.0]);
        seats.extend(row_of("A", 2, &[41.0, 0.0]));
        let assigned: HashSet<String> = ["A-1-0".to_string(), "A-1-2".to_string()]
            .into_iter()
            .collect();
        let picked = GroupAllocator::default().allocate(1, &seats, &assigned, Some(&assigned));
        assert_eq!(picked, Some(ids(&["A-2-0"])));
    }

    #[test]
    fn test_solo_bonus_ignored_for_groups() {
        let mut seats = row_of("A", 1, &[0.0, 10.0, 10.0]);
        seats.extend(row_of("A", 4, &[11.0, 11.0]));
        let assigned: HashSet<String> = ["A-1-0".to_string()].into_iter().collect();
        let picked = GroupAllocator::default().allocate(2, &seats, &assigned, Some(&assigned));
        assert_eq!(picked, Some(ids(&["A-4-0", "A-4-1"])));
    }
}
