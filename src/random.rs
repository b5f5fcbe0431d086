//! Injectable randomness.
//!
//! Every random decision in a lottery run (priority shuffle, hybrid
//! selection) goes through a [`RandomSource`]. Production callers use a
//! seeded [`RngSource`]; tests and audits can replay an exact draw
//! sequence with [`ReplaySource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`.
///
/// Implementations may return values outside that range; callers clamp
/// them. A draw of exactly `1.0` selects the last index in
/// [`next_index`](RandomSource::next_index).
pub trait RandomSource {
    /// Returns the next uniform draw, nominally in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform index in `[0, len)`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        let draw = clamp_unit(self.next_unit());
        ((draw * len as f64) as usize).min(len - 1)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Clamps a raw draw into `[0, 1]`; NaN maps to 0.
pub(crate) fn clamp_unit(draw: f64) -> f64 {
    if draw.is_nan() {
        0.0
    } else {
        draw.clamp(0.0, 1.0)
    }
}

/// Creates a seeded standard generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Adapts any [`rand::Rng`] to [`RandomSource`].
///
/// # Examples
///
/// ```
/// use u_seatlottery::random::{create_rng, RandomSource, RngSource};
///
/// let mut source = RngSource::new(create_rng(7));
/// let draw = source.next_unit();
/// assert!((0.0..1.0).contains(&draw));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Seeded source; `None` draws a fresh seed from the thread generator.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self::new(create_rng(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// An empty sequence always yields `0.0`.
///
/// # Examples
///
/// ```
/// use u_seatlottery::random::{RandomSource, ReplaySource};
///
/// let mut source = ReplaySource::new(vec![0.25, 0.75]);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.next_unit(), 0.75);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.draws(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> f64 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }
}

/// In-place Fisher–Yates shuffle driven by a [`RandomSource`].
///
/// Walks `i` from `len - 1` down to `1`, swapping `i` with an index drawn
/// uniformly from `[0, i]`. Consumes exactly `len - 1` draws.
pub fn shuffle<T>(slice: &mut [T], source: &mut dyn RandomSource) {
    for i in (1..slice.len()).rev() {
        let j = source.next_index(i + 1);
        slice.swap(i, j);
    }
}
