//! Genetic-algorithm search for arithmetic expressions.
//!
//! Given an integer target, the engine evolves 40-bit chromosomes that decode
//! to flat expressions over the digits `0`–`9` and `+ - * /`, such as
//! `"6*7"` for a target of 42.
//!
//! - **Genes** ([`gene`]): 4-bit codes, the symbol codec, chromosomes, and
//!   decoding into well-formed expressions.
//! - **Fitness** ([`fitness`]): a dedicated arithmetic evaluator and the
//!   inverse-distance score, with a positive floor for failures.
//! - **GA** ([`ga`]): roulette wheel selection, single-point crossover,
//!   per-bit mutation, single-elite generations, and the driving loop.
//!
//! # Example
//!
//! ```
//! use u_exprga::ga::{Engine, EngineConfig, Runner};
//!
//! let config = EngineConfig::new(10, 100, 0.01, 0.7).with_seed(42);
//! let mut engine = Engine::new(config).unwrap();
//! let result = Runner::run(&mut engine);
//!
//! if result.solved {
//!     println!("found {}", result.best_expression);
//! }
//! ```
//!
//! # Architecture
//!
//! The engine is a synchronous computation with no I/O. All randomness comes
//! from an explicitly passed [`rand::Rng`], so a seeded run is reproducible.
//! Fitness scoring can run on rayon with the `parallel` feature.

pub mod error;
pub mod fitness;
pub mod ga;
pub mod gene;
pub mod random;
