//! Lottery orchestration.
//!
//! Ties the pipeline together: geometry scoring, tier classification and
//! ordering, contiguous group allocation, and post-run quality rating.
//!
//! # Processing order
//!
//! 0. Locked assignments: seats reserved before the run
//! 1. Priority (invitation or relation): random order
//! 2. Rescue (lost last round): descending past score
//! 3. Open: hybrid merit/luck selection
//!
//! Each applicant is attempted exactly once. A party that cannot be seated
//! contiguously is left unassigned; it is never split.
//!
//! # Examples
//!
//! ```
//! use u_seatlottery::geometry::{Point, Seat};
//! use u_seatlottery::lottery::{LotteryConfig, LotteryRunner};
//! use u_seatlottery::tiering::{Application, LastResult};
//!
//! let seats: Vec<Seat> = (0..6)
//!     .map(|c| Seat::new(format!("R1-{c}"), c as f64, 2.0).with_grid("main", 1, c))
//!     .collect();
//! let apps = vec![
//!     Application::new("guest", 2, 1.0).with_invitation(true),
//!     Application::new("unlucky", 3, 4.0).with_last_result(LastResult::Lose),
//!     Application::new("fan", 2, 8.0),
//! ];
//!
//! let config = LotteryConfig::default()
//!     .with_stage(Point::new(0.0, 0.0))
//!     .with_seed(42);
//! let result = LotteryRunner::run(&seats, &apps, &config);
//!
//! assert!(result.is_seated("guest"));
//! assert!(result.is_seated("unlucky"));
//! assert_eq!(result.unassigned, vec!["fan"]);
//! ```

mod config;
mod inspect;
mod runner;
mod types;

pub use config::LotteryConfig;
pub use inspect::inspect_inputs;
pub use runner::LotteryRunner;
pub use types::{AttemptRecord, LockedAssignment, LotteryResult, LotteryStats};
