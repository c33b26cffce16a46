//! Error types.
//!
//! Only two things in the crate can fail: building an engine from invalid
//! parameters, and evaluating a malformed or numerically degenerate
//! expression. Evaluation errors never escape the fitness layer.

use thiserror::Error;

/// Invalid engine parameters, reported by [`EngineConfig::validate`].
///
/// [`EngineConfig::validate`]: crate::ga::EngineConfig::validate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("{name} must be a probability in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("initial population has {actual} chromosomes, expected {expected}")]
    PopulationSizeMismatch { expected: usize, actual: usize },
}

/// Failure while evaluating an arithmetic expression.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,

    #[error("expression ended where a number was expected")]
    UnexpectedEnd,

    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric overflow")]
    Overflow,
}
