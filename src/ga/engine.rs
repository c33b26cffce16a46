//! The generational step.
//!
//! [`Engine`] owns the population and advances it one generation per
//! [`evolve`](Engine::evolve) call:
//! score → rank → keep the elite → (select, crossover, mutate) until full.

use super::config::EngineConfig;
use super::operators::{crossover, mutate};
use super::selection::roulette;
use super::types::Scored;
use crate::error::ConfigError;
use crate::gene::{self, Chromosome};
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use rand::Rng;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evolution engine for one run.
///
/// The random source is a type parameter so tests and callers can inject
/// any [`Rng`]; [`Engine::new`] seeds a [`StdRng`] from the config.
///
/// # Usage
///
/// ```
/// use u_exprga::ga::{Engine, EngineConfig};
///
/// let config = EngineConfig::new(10, 40, 0.01, 0.7).with_seed(42);
/// let mut engine = Engine::new(config).unwrap();
///
/// let first = engine.evolve();
/// let second = engine.evolve();
/// assert!(second.fitness >= first.fitness);
/// assert_eq!(engine.population().len(), 40);
/// println!("{}", engine.decode(&second.chromosome));
/// ```
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    config: EngineConfig,
    population: Vec<Chromosome>,
    rng: R,
    generation: usize,
}

impl Engine<StdRng> {
    /// Validates `config` and initializes a random population, seeding the
    /// RNG from [`EngineConfig::seed`].
    ///
    /// Validation covers the whole config, including `max_generations`,
    /// which only [`Runner`](super::Runner) reads; a zero cap is rejected
    /// here with [`ConfigError::ZeroGenerations`].
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    /// Validates `config` and initializes a random population from `rng`.
    ///
    /// Initial genes are drawn from the assigned codes only.
    pub fn with_rng(config: EngineConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = (0..config.population_size)
            .map(|_| Chromosome::random(&mut rng))
            .collect();
        log::debug!(
            "initialized population of {} for target {}",
            config.population_size,
            config.target
        );
        Ok(Self {
            config,
            population,
            rng,
            generation: 0,
        })
    }

    /// Starts from a caller-supplied population.
    ///
    /// The population length must equal `config.population_size`.
    pub fn with_population(
        config: EngineConfig,
        population: Vec<Chromosome>,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(ConfigError::PopulationSizeMismatch {
                expected: config.population_size,
                actual: population.len(),
            });
        }
        Ok(Self {
            config,
            population,
            rng,
            generation: 0,
        })
    }

    /// Advances one generation and returns the best individual of the
    /// population *before* replacement.
    ///
    /// 1. Score every chromosome.
    /// 2. Stable-sort by fitness, best first (ties keep population order).
    /// 3. Copy the best chromosome into the next population unchanged.
    /// 4. Fill the rest with mutated crossover children of roulette-selected
    ///    parents; when one slot remains only the first child is kept.
    pub fn evolve(&mut self) -> Scored {
        let mut scored = self.score_population();
        sort_best_first(&mut scored);
        let best = scored[0];

        let size = self.config.population_size;
        let mut next_gen = Vec::with_capacity(size);
        next_gen.push(best.chromosome);

        while next_gen.len() < size {
            let p1 = roulette(&scored, &mut self.rng);
            let p2 = roulette(&scored, &mut self.rng);
            let (c1, c2) = crossover(p1, p2, self.config.crossover_rate, &mut self.rng);
            let c1 = mutate(c1, self.config.mutation_rate, &mut self.rng);
            let c2 = mutate(c2, self.config.mutation_rate, &mut self.rng);

            next_gen.push(c1);
            if next_gen.len() < size {
                next_gen.push(c2);
            }
        }

        self.population = next_gen;
        self.generation += 1;
        log::trace!(
            "generation {} best fitness {} (mean {:.6})",
            self.generation,
            best.fitness,
            finite_mean(&scored)
        );
        best
    }
}

impl<R> Engine<R> {
    /// Scores the current population, in population order.
    ///
    /// With the `parallel` feature this runs on the rayon pool; the result
    /// is identical either way.
    pub fn score_population(&self) -> Vec<Scored> {
        let target = self.config.target;

        #[cfg(feature = "parallel")]
        let scored: Vec<Scored> = self
            .population
            .par_iter()
            .map(|&c| Scored::evaluate(c, target))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let scored: Vec<Scored> = self
            .population
            .iter()
            .map(|&c| Scored::evaluate(c, target))
            .collect();

        scored
    }

    /// Best individual of the current population, without advancing.
    ///
    /// Ties resolve to the earliest chromosome.
    pub fn best(&self) -> Scored {
        let mut scored = self.score_population();
        sort_best_first(&mut scored);
        scored[0]
    }

    /// Decodes a chromosome into its expression string.
    pub fn decode(&self, chromosome: &Chromosome) -> String {
        gene::decode(chromosome)
    }

    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of completed [`evolve`](Engine::evolve) calls.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

/// Stable sort by fitness, descending.
fn sort_best_first(scored: &mut [Scored]) {
    scored.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
}

fn finite_mean(scored: &[Scored]) -> f64 {
    let (sum, count) = scored
        .iter()
        .filter(|s| s.fitness.is_finite())
        .fold((0.0, 0usize), |(sum, n), s| (sum + s.fitness, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

// ============================================================================
// Tests
// ============================================================================
