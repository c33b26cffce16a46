//! Scored individuals.

use crate::fitness;
use crate::gene::Chromosome;

/// A chromosome paired with its fitness.
///
/// Fitness is finite and strictly positive, or `f64::INFINITY` for an exact
/// solution. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored {
    pub chromosome: Chromosome,
    pub fitness: f64,
}

impl Scored {
    /// Decodes and scores `chromosome` against `target`.
    pub fn evaluate(chromosome: Chromosome, target: i64) -> Self {
        Self {
            chromosome,
            fitness: fitness::fitness(&chromosome, target),
        }
    }

    /// Whether the expression hits the target exactly.
    pub fn is_solution(&self) -> bool {
        self.fitness == f64::INFINITY
    }
}

impl From<Scored> for (Chromosome, f64) {
    fn from(s: Scored) -> Self {
        (s.chromosome, s.fitness)
    }
}
