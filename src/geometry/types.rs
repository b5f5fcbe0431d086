//! Seat and position types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the seat map plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A physical seat supplied by the seat-map host.
///
/// Seats are read-only inputs. `row`/`col` are grid coordinates inside
/// `block_id`; a seat missing either coordinate forms its own
/// single-seat pseudo-block and never joins a contiguous run.
///
/// # Examples
///
/// ```
/// use u_seatlottery::geometry::Seat;
///
/// let seat = Seat::new("A-1-3", 12.0, 40.0)
///     .with_grid("A", 1, 3)
///     .with_premium(true);
/// assert_eq!(seat.row, Some(1));
/// assert!(seat.is_premium);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Seat {
    pub id: String,
    pub position: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_premium: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_disabled: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub row: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub col: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub block_id: Option<String>,
}

impl Seat {
    /// Creates an enabled, non-premium seat with no grid coordinates.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            position: Point::new(x, y),
            is_premium: false,
            is_disabled: false,
            row: None,
            col: None,
            block_id: None,
        }
    }

    /// Places the seat on the grid of `block_id`.
    pub fn with_grid(mut self, block_id: impl Into<String>, row: i32, col: i32) -> Self {
        self.block_id = Some(block_id.into());
        self.row = Some(row);
        self.col = Some(col);
        self
    }

    pub fn with_premium(mut self, premium: bool) -> Self {
        self.is_premium = premium;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Grid coordinates, if both are defined.
    pub fn grid(&self) -> Option<(i32, i32)> {
        match (self.row, self.col) {
            (Some(r), Some(c)) => Some((r, c)),
            _ => None,
        }
    }
}

/// A seat with its desirability for the current run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredSeat {
    pub seat: Seat,
    pub score: f64,
    pub distance_from_stage: f64,
}

impl ScoredSeat {
    pub fn id(&self) -> &str {
        &self.seat.id
    }
}
