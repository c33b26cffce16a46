//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Fitness here is **maximized**, so weights are the raw fitness values.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Scored;
use crate::gene::Chromosome;
use rand::Rng;

/// Selects a chromosome with probability proportional to its fitness.
///
/// See [`roulette_index`] for the exact policy.
///
/// # Panics
/// Panics if `scored` is empty.
pub fn roulette<R: Rng>(scored: &[Scored], rng: &mut R) -> Chromosome {
    scored[roulette_index(scored, rng)].chromosome
}

/// Roulette wheel selection returning an index into `scored`.
///
/// - The first entry with infinite fitness is chosen outright.
/// - If the total weight is not a positive finite number, an index is
///   drawn uniformly.
/// - Otherwise a point is drawn in `[0, total)` and the first entry whose
///   cumulative weight exceeds it wins; the last entry absorbs
///   floating-point shortfall.
///
/// # Complexity
/// O(n) per selection
///
/// # Panics
/// Panics if `scored` is empty.
pub fn roulette_index<R: Rng>(scored: &[Scored], rng: &mut R) -> usize {
    assert!(!scored.is_empty(), "cannot select from empty population");

    let n = scored.len();
    if n == 1 {
        return 0;
    }

    if let Some(i) = scored.iter().position(|s| s.fitness == f64::INFINITY) {
        return i;
    }

    let total: f64 = scored.iter().map(|s| s.fitness).sum();
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, s) in scored.iter().enumerate() {
        cumulative += s.fitness;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
