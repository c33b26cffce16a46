//! Fitness evaluation.
//!
//! Fitness measures how close an expression's value is to the target.
//! **Higher is better**:
//!
//! - exact hit → `f64::INFINITY`
//! - otherwise → `1 / |target - value|`
//! - empty or unevaluable expression → [`LOW_FITNESS`]
//!
//! Fitness is always strictly positive, so a population's total fitness
//! is never zero and roulette selection stays well defined.
//!
//! # Submodules
//!
//! - [`eval`]: the arithmetic evaluator

pub mod eval;

use crate::gene::{decode, Chromosome};

/// Floor fitness for empty expressions and evaluation failures.
pub const LOW_FITNESS: f64 = 0.0001;

/// Scores a decoded expression against `target`.
///
/// # Examples
///
/// ```
/// use u_exprga::fitness::{score, LOW_FITNESS};
///
/// assert_eq!(score("5+5", 10), f64::INFINITY);
/// assert_eq!(score("5+4", 10), 1.0);
/// assert_eq!(score("8/0", 10), LOW_FITNESS);
/// assert_eq!(score("", 10), LOW_FITNESS);
/// ```
pub fn score(expr: &str, target: i64) -> f64 {
    if expr.is_empty() {
        return LOW_FITNESS;
    }
    match eval::evaluate(expr) {
        Ok(value) => fitness_of_value(value, target),
        Err(_) => LOW_FITNESS,
    }
}

/// Fitness of an already-evaluated expression value.
///
/// The target is compared as `f64`; targets beyond ±2^53 are rounded.
pub fn fitness_of_value(value: f64, target: i64) -> f64 {
    if !value.is_finite() {
        return LOW_FITNESS;
    }
    let target = target as f64;
    if value == target {
        return f64::INFINITY;
    }
    1.0 / (target - value).abs()
}

/// Decodes `chromosome` and scores it against `target`.
pub fn fitness(chromosome: &Chromosome, target: i64) -> f64 {
    score(&decode(chromosome), target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::{Gene, GENE_COUNT};

    fn chromosome(expr: &str) -> Chromosome {
        Chromosome::from_expression(expr).expect("encodable")
    }

    #[test]
    fn test_exact_match_is_infinite() {
        assert_eq!(fitness(&chromosome("5+5"), 10), f64::INFINITY);
        assert_eq!(fitness(&chromosome("9/3"), 3), f64::INFINITY);
        assert_eq!(fitness(&chromosome("2-7"), -5), f64::INFINITY);
    }

    #[test]
    fn test_near_miss() {
        assert_eq!(fitness(&chromosome("5+4"), 10), 1.0);
        assert_eq!(fitness(&chromosome("5+3"), 10), 0.5);
        assert_eq!(fitness(&chromosome("7/2"), 3), 2.0);
    }

    #[test]
    fn test_empty_expression_is_low() {
        let c = Chromosome::from_genes([Gene::new(14); GENE_COUNT]);
        assert_eq!(decode(&c), "");
        assert_eq!(fitness(&c, 10), LOW_FITNESS);
    }

    #[test]
    fn test_division_by_zero_is_low() {
        assert_eq!(fitness(&chromosome("8/0"), 10), LOW_FITNESS);
        assert_eq!(fitness(&chromosome("1+4/0"), 0), LOW_FITNESS);
    }

    #[test]
    fn test_malformed_expression_is_low() {
        assert_eq!(score("5+", 5), LOW_FITNESS);
        assert_eq!(score("abc", 5), LOW_FITNESS);
    }

    #[test]
    fn test_monotone_in_distance() {
        let target = 20;
        let mut previous = f64::INFINITY;
        for value in (0..20).rev() {
            let f = fitness_of_value(value as f64, target);
            assert!(f < previous, "fitness should fall as distance grows");
            previous = f;
        }
    }

    #[test]
    fn test_always_positive() {
        assert!(fitness_of_value(0.0, i64::MAX) > 0.0);
        assert!(fitness_of_value(1e300, 0) > 0.0);
        assert_eq!(fitness_of_value(f64::NAN, 0), LOW_FITNESS);
    }
}
