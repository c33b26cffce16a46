//! Engine configuration.
//!
//! [`EngineConfig`] holds the run parameters that stay fixed for the
//! lifetime of an [`Engine`](super::Engine).

use crate::error::ConfigError;

/// Configuration for the expression-search engine.
///
/// # Defaults
///
/// ```
/// use u_exprga::ga::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.target, 42);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_exprga::ga::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_target(17)
///     .with_population_size(60)
///     .with_mutation_rate(0.02)
///     .with_crossover_rate(0.8)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Value the evolved expression should evaluate to.
    pub target: i64,

    /// Number of chromosomes in every generation. Must be at least 1.
    pub population_size: usize,

    /// Per-bit flip probability (0.0–1.0), applied to every child.
    pub mutation_rate: f64,

    /// Probability (0.0–1.0) that a pair of parents is recombined.
    ///
    /// When crossover is not applied, both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Generation cap for [`Runner`](super::Runner).
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target: 42,
            population_size: 100,
            mutation_rate: 0.01,
            crossover_rate: 0.7,
            max_generations: 100,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration from the four run parameters.
    ///
    /// Values are stored as given; call [`validate`](Self::validate) (or
    /// construct an engine, which validates) to check them.
    pub fn new(
        target: i64,
        population_size: usize,
        mutation_rate: f64,
        crossover_rate: f64,
    ) -> Self {
        Self {
            target,
            population_size,
            mutation_rate,
            crossover_rate,
            ..Self::default()
        }
    }

    /// Sets the target value.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
