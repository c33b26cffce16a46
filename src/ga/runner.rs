//! The driving loop.
//!
//! [`Runner`] calls [`Engine::evolve`] up to the configured generation cap,
//! stopping early on the first exact solution or when cancelled, and
//! collects a per-generation record of the best individual.

use super::engine::Engine;
use super::types::Scored;
use crate::gene::{decode, Chromosome};
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Best individual of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// 1-based generation number.
    pub generation: usize,

    /// Decoded expression of the best chromosome.
    pub expression: String,

    pub chromosome: Chromosome,

    pub fitness: f64,
}

impl GenerationRecord {
    fn new(generation: usize, best: Scored) -> Self {
        Self {
            generation,
            expression: decode(&best.chromosome),
            chromosome: best.chromosome,
            fitness: best.fitness,
        }
    }

    pub fn is_solution(&self) -> bool {
        self.fitness == f64::INFINITY
    }
}

impl fmt::Display for GenerationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen {}: {} -> fitness={:.4}",
            self.generation, self.expression, self.fitness
        )
    }
}

/// Result of a run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best individual seen during the run.
    pub best: Scored,

    /// Decoded expression of `best`.
    pub best_expression: String,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether an exact solution was found.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// One record per executed generation.
    pub records: Vec<GenerationRecord>,

    /// Best fitness of each executed generation.
    pub fitness_history: Vec<f64>,
}

impl RunResult {
    /// Textual history: one line per generation, plus a final
    /// `Solution found: ...` line when solved.
    pub fn history_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.records.iter().map(ToString::to_string).collect();
        if self.solved {
            lines.push(format!("Solution found: {}", self.best_expression));
        }
        lines
    }
}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use u_exprga::ga::{Engine, EngineConfig, Runner};
///
/// let config = EngineConfig::new(12, 80, 0.01, 0.7)
///     .with_max_generations(50)
///     .with_seed(42);
/// let mut engine = Engine::new(config).unwrap();
/// let result = Runner::run(&mut engine);
///
/// assert!(result.generations <= 50);
/// assert_eq!(result.fitness_history.len(), result.generations);
/// for line in result.history_lines() {
///     println!("{line}");
/// }
/// ```
pub struct Runner;

impl Runner {
    /// Runs until solved or `max_generations` is reached.
    pub fn run<R: Rng>(engine: &mut Engine<R>) -> RunResult {
        Self::run_with_cancel(engine, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// before starting the next generation.
    pub fn run_with_cancel<R: Rng>(
        engine: &mut Engine<R>,
        cancel: Option<Arc<AtomicBool>>,
    ) -> RunResult {
        Self::run_observed(engine, cancel, |_| {})
    }

    /// Runs with an optional cancellation token and a per-generation
    /// observer, called with each record as soon as it is produced.
    pub fn run_observed<R, F>(
        engine: &mut Engine<R>,
        cancel: Option<Arc<AtomicBool>>,
        mut on_generation: F,
    ) -> RunResult
    where
        R: Rng,
        F: FnMut(&GenerationRecord),
    {
        let max_generations = engine.config().max_generations;
        let mut records: Vec<GenerationRecord> = Vec::new();
        let mut best: Option<Scored> = None;
        let mut solved = false;
        let mut cancelled = false;

        for gen in 0..max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    log::info!("run cancelled after {gen} generations");
                    break;
                }
            }

            let gen_best = engine.evolve();
            if best.map_or(true, |b| gen_best.fitness > b.fitness) {
                best = Some(gen_best);
            }

            let record = GenerationRecord::new(gen + 1, gen_best);
            log::debug!("{record}");
            on_generation(&record);
            records.push(record);

            if gen_best.is_solution() {
                solved = true;
                log::info!(
                    "solution {} found in generation {}",
                    decode(&gen_best.chromosome),
                    gen + 1
                );
                break;
            }
        }

        // Cancelled before the first generation: report the initial population
        let best = best.unwrap_or_else(|| engine.best());
        RunResult {
            best_expression: decode(&best.chromosome),
            best,
            generations: records.len(),
            solved,
            cancelled,
            fitness_history: records.iter().map(|r| r.fitness).collect(),
            records,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
