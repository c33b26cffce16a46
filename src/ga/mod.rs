//! Genetic algorithm over expression chromosomes.
//!
//! The engine evolves a population of [`Chromosome`](crate::gene::Chromosome)s
//! toward an expression whose value equals the configured target. Fitness is
//! maximized; an exact hit scores `f64::INFINITY`.
//!
//! # Key Types
//!
//! - [`EngineConfig`]: run parameters (target, population, rates, seed)
//! - [`Engine`]: owns the population, advances one generation per call
//! - [`Runner`]: drives the engine up to the generation cap
//! - [`Scored`]: a chromosome with its fitness
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and per-bit mutation
//! - [`selection`]: roulette wheel selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*, ch. 6
//!   (single-point crossover, bit mutation)
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel reproduction)

mod config;
mod engine;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use runner::{GenerationRecord, RunResult, Runner};
pub use types::Scored;
