//! Run building and group allocation.
//!
//! Scored seats are grouped into maximal contiguous runs per
//! `(block, row)`; every sliding sub-run of the requested party size is a
//! candidate, and the candidate with the highest average score wins.
//! Single-seat requests get an adjacency bonus next to seated solo
//! attendees, which keeps lone attendees from being scattered between
//! groups.

mod allocator;
pub mod runs;
mod types;

pub use allocator::{GroupAllocator, DEFAULT_SOLO_BONUS_RATIO};
pub use runs::{build_runs, candidate_runs, BlockKey, RowKey, SeatChunk};
pub use types::{Assignment, Tier};
