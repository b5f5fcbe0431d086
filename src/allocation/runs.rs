//! Contiguous run construction.
//!
//! Seats are grouped by a structured `(block, row)` key, ordered by
//! column, and split wherever the column does not advance by exactly one.

use crate::geometry::{ScoredSeat, Seat};
use std::collections::HashMap;

/// Block component of a grid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKey<'a> {
    /// A seat with grid coordinates; `None` is the unnamed default block.
    Block(Option<&'a str>),
    /// A seat without grid coordinates: a pseudo-block of its own.
    Isolated(&'a str),
}

/// Composite `(block, row)` grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey<'a> {
    pub block: BlockKey<'a>,
    pub row: i32,
}

/// Grid cell of a seat: its row key plus column.
///
/// Seats missing `row` or `col` sit at row 0 / col 0 of an isolated block.
pub fn grid_cell(seat: &Seat) -> (RowKey<'_>, i32) {
    match seat.grid() {
        Some((row, col)) => (
            RowKey {
                block: BlockKey::Block(seat.block_id.as_deref()),
                row,
            },
            col,
        ),
        None => (
            RowKey {
                block: BlockKey::Isolated(&seat.id),
                row: 0,
            },
            0,
        ),
    }
}

/// An ordered run of column-contiguous seats in one block row.
#[derive(Debug, Clone)]
pub struct SeatChunk<'a> {
    pub seats: Vec<&'a ScoredSeat>,
    pub average_score: f64,
}

impl<'a> SeatChunk<'a> {
    pub fn new(seats: Vec<&'a ScoredSeat>) -> Self {
        let average_score = if seats.is_empty() {
            0.0
        } else {
            seats.iter().map(|s| s.score).sum::<f64>() / seats.len() as f64
        };
        Self {
            seats,
            average_score,
        }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seat_ids(&self) -> Vec<String> {
        self.seats.iter().map(|s| s.seat.id.clone()).collect()
    }

    /// All sliding windows of `size` seats, left to right.
    pub fn sub_runs(&self, size: usize) -> Vec<SeatChunk<'a>> {
        if size == 0 || size > self.seats.len() {
            return Vec::new();
        }
        self.seats
            .windows(size)
            .map(|w| SeatChunk::new(w.to_vec()))
            .collect()
    }
}

/// Builds every maximal contiguous run.
///
/// Row groups appear in order of their first seat in `seats`; runs inside
/// a group are ordered by column. Column ties are broken by input order.
pub fn build_runs<'a, I>(seats: I) -> Vec<SeatChunk<'a>>
where
    I: IntoIterator<Item = &'a ScoredSeat>,
{
    let mut group_index: HashMap<RowKey<'a>, usize> = HashMap::new();
    let mut groups: Vec<Vec<(i32, &'a ScoredSeat)>> = Vec::new();

    for scored in seats {
        let (key, col) = grid_cell(&scored.seat);
        let idx = *group_index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[idx].push((col, scored));
    }

    let mut runs = Vec::new();
    for mut group in groups {
        group.sort_by_key(|&(col, _)| col);

        let mut current: Vec<&'a ScoredSeat> = Vec::new();
        let mut last_col: Option<i32> = None;
        for (col, scored) in group {
            let contiguous = last_col.is_some_and(|prev| prev.checked_add(1) == Some(col));
            if !contiguous && !current.is_empty() {
                runs.push(SeatChunk::new(std::mem::take(&mut current)));
            }
            current.push(scored);
            last_col = Some(col);
        }
        if !current.is_empty() {
            runs.push(SeatChunk::new(current));
        }
    }
    runs
}

/// Extracts every sub-run of exactly `size` seats from `runs`.
pub fn candidate_runs<'a>(runs: &[SeatChunk<'a>], size: usize) -> Vec<SeatChunk<'a>> {
    runs.iter().flat_map(|run| run.sub_runs(size)).collect()
}
