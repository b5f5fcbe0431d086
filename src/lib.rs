//! Seat-lottery allocation engine.
//!
//! Assigns physical venue seats to lottery applicants, each applying for a
//! party of one or more people:
//!
//! - **Geometry**: scores every usable seat by distance to a stage point,
//!   with a flat bonus for premium seats.
//! - **Allocation**: seats each party on physically contiguous seats in one
//!   row of one block, preferring the best average score.
//! - **Tiering**: orders applicants into locked, priority, rescue and open
//!   tiers. The open tier mixes merit and luck through a hybrid selector.
//! - **Rating**: labels each non-priority assignment with a
//!   percentile-relative seat quality and turns outcomes into next-round
//!   scores.
//! - **Lottery**: the orchestrating runner, configuration, and input
//!   inspection.
//!
//! All randomness flows through [`random::RandomSource`], so a run is
//! reproducible given a seed or a recorded draw sequence.
//!
//! # Quick start
//!
//! ```
//! use u_seatlottery::geometry::Seat;
//! use u_seatlottery::lottery::{LotteryConfig, LotteryRunner};
//! use u_seatlottery::rating::compute_score_updates;
//! use u_seatlottery::tiering::Application;
//!
//! let seats: Vec<Seat> = (0..3)
//!     .map(|c| Seat::new(format!("A-{c}"), c as f64, 1.0).with_grid("A", 1, c))
//!     .collect();
//! let apps = vec![Application::new("p1", 2, 5.0), Application::new("p2", 2, 5.0)];
//!
//! let result = LotteryRunner::run(&seats, &apps, &LotteryConfig::default().with_seed(7));
//! assert_eq!(result.assignments.len(), 1);
//!
//! let updates = compute_score_updates(&result.assignments, &result.unassigned, &apps);
//! assert_eq!(updates.len(), 2);
//! ```

pub mod allocation;
pub mod error;
pub mod geometry;
pub mod lottery;
pub mod random;
pub mod rating;
pub mod tiering;

#[cfg(feature = "wasm")]
pub mod wasm;
