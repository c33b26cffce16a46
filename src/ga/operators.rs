//! Bit-string variation operators.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point crossover applied with a given probability
//! - [`crossover_at`]: deterministic single-point crossover at a fixed cut
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-bit flips
//!
//! All operators take chromosomes by value and return new ones.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use crate::gene::{Chromosome, CHROMOSOME_BITS};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// With probability `rate`, a cut point is drawn uniformly from
/// `1..CHROMOSOME_BITS` and the tails after it are swapped. Otherwise the
/// parents are returned unchanged.
///
/// # Examples
///
/// ```
/// use u_exprga::ga::operators::crossover;
/// use u_exprga::gene::Chromosome;
/// use u_exprga::random::create_rng;
///
/// let a = Chromosome::from_bits(0);
/// let b = Chromosome::from_bits(u64::MAX);
/// let mut rng = create_rng(1);
/// assert_eq!(crossover(a, b, 0.0, &mut rng), (a, b));
/// ```
pub fn crossover<R: Rng>(
    parent1: Chromosome,
    parent2: Chromosome,
    rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    if rng.random::<f64>() < rate {
        let point = rng.random_range(1..CHROMOSOME_BITS);
        crossover_at(parent1, parent2, point)
    } else {
        (parent1, parent2)
    }
}

/// Swaps the tails of two parents from bit `point` onwards.
///
/// Child 1 takes bits `0..point` from `parent1` and the rest from
/// `parent2`; child 2 is the mirror image.
///
/// # Panics
/// Panics if `point > CHROMOSOME_BITS`.
pub fn crossover_at(
    parent1: Chromosome,
    parent2: Chromosome,
    point: usize,
) -> (Chromosome, Chromosome) {
    assert!(
        point <= CHROMOSOME_BITS,
        "cut point {point} beyond chromosome length"
    );
    let tail = Chromosome::tail_mask(point);
    let (a, b) = (parent1.bits(), parent2.bits());
    (
        Chromosome::from_bits((a & !tail) | (b & tail)),
        Chromosome::from_bits((b & !tail) | (a & tail)),
    )
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips every bit independently with probability `rate`.
///
/// One uniform draw is consumed per bit regardless of `rate`.
///
/// # Complexity
/// O(CHROMOSOME_BITS)
pub fn mutate<R: Rng>(chromosome: Chromosome, rate: f64, rng: &mut R) -> Chromosome {
    let mask = (0..CHROMOSOME_BITS)
        .filter(|_| rng.random::<f64>() < rate)
        .fold(0u64, |m, i| m | Chromosome::bit_mask(i));
    chromosome.flipped(mask)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn zeros() -> Chromosome {
        Chromosome::from_bits(0)
    }

    fn ones() -> Chromosome {
        Chromosome::from_bits(u64::MAX)
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_rate_zero_passes_through() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let p1 = Chromosome::random(&mut rng);
            let p2 = Chromosome::random(&mut rng);
            assert_eq!(crossover(p1, p2, 0.0, &mut rng), (p1, p2));
        }
    }

    #[test]
    fn test_crossover_at_swaps_tails() {
        let (c1, c2) = crossover_at(zeros(), ones(), 4);
        assert_eq!(c1.to_string(), format!("0000{}", "1".repeat(36)));
        assert_eq!(c2.to_string(), format!("1111{}", "0".repeat(36)));
    }

    #[test]
    fn test_crossover_at_extremes() {
        assert_eq!(crossover_at(zeros(), ones(), 0), (ones(), zeros()));
        assert_eq!(
            crossover_at(zeros(), ones(), CHROMOSOME_BITS),
            (zeros(), ones())
        );
    }

    #[test]
    fn test_crossover_cut_never_empty_segment() {
        // With rate 1 and complementary parents, each child must contain
        // both a 0 and a 1: the cut lies strictly inside the chromosome.
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let (c1, c2) = crossover(zeros(), ones(), 1.0, &mut rng);
            for c in [c1, c2] {
                assert_ne!(c, zeros());
                assert_ne!(c, ones());
            }
            assert_eq!(c1.bits() ^ c2.bits(), ones().bits());
        }
    }

    #[test]
    fn test_crossover_conserves_bits_per_position() {
        let mut rng = create_rng(9);
        for _ in 0..200 {
            let p1 = Chromosome::random(&mut rng);
            let p2 = Chromosome::random(&mut rng);
            let (c1, c2) = crossover(p1, p2, 1.0, &mut rng);
            for i in 0..CHROMOSOME_BITS {
                let mut parents = [p1.bit(i), p2.bit(i)];
                let mut children = [c1.bit(i), c2.bit(i)];
                parents.sort();
                children.sort();
                assert_eq!(parents, children, "bit {i}");
            }
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let c = Chromosome::random(&mut rng);
            assert_eq!(mutate(c, 0.0, &mut rng), c);
        }
    }

    #[test]
    fn test_mutation_rate_one_flips_all() {
        let mut rng = create_rng(42);
        let c = Chromosome::random(&mut rng);
        let m = mutate(c, 1.0, &mut rng);
        assert_eq!(m.bits(), !c.bits() & ones().bits());
    }

    #[test]
    fn test_mutation_rate_is_per_bit() {
        let mut rng = create_rng(42);
        let trials = 2000;
        let flipped: u32 = (0..trials)
            .map(|_| mutate(zeros(), 0.1, &mut rng).bits().count_ones())
            .sum();
        let rate = flipped as f64 / (trials * CHROMOSOME_BITS) as f64;
        assert!((rate - 0.1).abs() < 0.01, "observed flip rate {rate}");
    }

    #[test]
    fn test_mutation_returns_new_value() {
        let mut rng = create_rng(5);
        let original = Chromosome::random(&mut rng);
        let copy = original;
        let _ = mutate(original, 1.0, &mut rng);
        assert_eq!(original, copy);
    }
}
