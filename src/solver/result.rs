//! # SolveResult
//!
//! The tagged result structure returned by [`Solver::solve`](crate::solver::Solver::solve):
//! an explicit status enumeration plus the solution payload and the telemetry
//! accumulated over the run.

use crate::candidate::Candidate;

/// Sentinel generation reported for invalid input.
pub const GENERATION_INVALID_INPUT: i32 = -1;

/// Sentinel generation reported when the budget is exhausted or the run
/// stalled.
pub const GENERATION_EXHAUSTED: i32 = -2;

/// How a solve run ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A verified solution was found.
    Solved,
    /// The Given puzzle was absent, contaminated, or could not be seeded.
    InvalidInput,
    /// The generation budget ran out without a verified solution. Not an
    /// error: the best candidate found is still reported.
    BudgetExhausted,
    /// The population collapsed and could not be reseeded.
    Stalled,
}

/// Per-generation aggregate fitness telemetry.
///
/// Read-only except for the median, which feeds the mutation-rate controller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub median: f64,
}

/// The outcome of one solve run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// How the run ended.
    pub status: SolveStatus,
    /// Sentinel generation: −1 invalid input, −2 budget exhausted or
    /// stalled, ≥ 0 the generation in which the solution was found.
    pub generation: i32,
    /// The solution candidate when solved, or the best candidate found when
    /// the budget was exhausted.
    pub solution: Option<Candidate>,
    /// Index of the solution within its generation's population.
    pub solution_index: Option<usize>,
    /// Mutation rate at the end of the run.
    pub final_mutation_rate: f64,
    /// Sigma telemetry carried through the run.
    pub final_sigma: f64,
    /// Fitness-improving mutations divided by total mutations attempted.
    pub mutation_success_ratio: f64,
    /// Number of full-population reseeds performed after a collapse.
    pub reseed_count: u32,
    /// Aggregate fitness statistics, one entry per generation.
    pub fitness_history: Vec<GenerationStats>,
    /// The full fitness distribution of every generation, for variance
    /// inspection.
    pub fitness_distributions: Vec<Vec<f64>>,
}

impl SolveResult {
    /// Returns `true` if a verified solution was found.
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}
