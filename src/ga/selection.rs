//! Parent selection.
//!
//! Tournament selection over a ranked population. Each draw is restricted to
//! the front `culling_rate` fraction of the ranking, so parents come from the
//! fitter part of the population.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use crate::schedule::Schedule;

/// Tournament selection with culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tournament {
    /// Number of draws per tournament.
    pub size: usize,
    /// Fraction of the ranked population that draws may hit, in `(0, 1]`.
    pub culling_rate: f64,
}

impl Tournament {
    pub fn new(size: usize, culling_rate: f64) -> Self {
        Self { size, culling_rate }
    }

    /// Selects a parent index from a population sorted best first.
    ///
    /// Draws `size` indices as `floor(u · len · culling_rate)` with `u`
    /// uniform in `[0, 1)` and returns the fittest drawn schedule. The
    /// earliest draw wins ties.
    ///
    /// # Panics
    /// Panics if `ranked` is empty.
    pub fn select<R: Rng>(&self, ranked: &[Schedule], rng: &mut R) -> usize {
        assert!(!ranked.is_empty(), "cannot select from empty population");

        let mut best = self.draw(ranked.len(), rng);
        for _ in 1..self.size.max(1) {
            let idx = self.draw(ranked.len(), rng);
            if ranked[idx].violations() < ranked[best].violations() {
                best = idx;
            }
        }
        best
    }

    fn draw<R: Rng>(&self, len: usize, rng: &mut R) -> usize {
        let u: f64 = rng.random();
        ((u * len as f64 * self.culling_rate) as usize).min(len - 1)
    }
}
