//! # Evolutionary Loop / Controller
//!
//! Orchestrates the generations of the evolutionary search: fitness
//! evaluation, solution detection, selection + crossover + mutation to
//! produce offspring, elitist + tournament replacement, adaptive
//! mutation-rate adjustment, and termination or reseed-on-collapse handling.
//!
//! The solve operation is single-threaded and synchronous; a host that needs
//! a responsive interface must run the whole call on its own worker and
//! consume the progress callback through a channel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gensudoku::grid::Grid;
//! use gensudoku::rng::RandomNumberGenerator;
//! use gensudoku::solver::Solver;
//!
//! let puzzle = Grid::parse(
//!     "530070000\
//!      600195000\
//!      098000060\
//!      800060003\
//!      400803001\
//!      700020006\
//!      060000280\
//!      000419005\
//!      000080079",
//! ).unwrap();
//!
//! let mut solver = Solver::new();
//! solver.load(puzzle);
//! let mut rng = RandomNumberGenerator::new();
//! let result = solver.solve(&mut rng, None);
//! println!("status: {:?}", result.status);
//! ```

pub mod options;
pub mod result;

pub use options::{SolverOptions, SolverOptionsBuilder};
pub use result::{
    GenerationStats, SolveResult, SolveStatus, GENERATION_EXHAUSTED, GENERATION_INVALID_INPUT,
};

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::candidate::{Candidate, FITNESS_EPSILON};
use crate::error::Result;
use crate::grid::Grid;
use crate::operators::{mutate, CycleCrossover, Tournament};
use crate::population::{sort_by_fitness_descending, Population};
use crate::rng::RandomNumberGenerator;

/// Per-generation progress callback: generation number, current best
/// candidate, cumulative individuals produced, and best fitness.
///
/// The callback executes on the solver's own execution context and must not
/// block.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(usize, &Candidate, usize, f64);

/// The hybrid Sudoku solver.
///
/// Holds the Given puzzle and the evolution configuration. The Given is not
/// validated until [`Solver::solve`] is called.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    options: SolverOptions,
    given: Option<Grid>,
}

impl Solver {
    /// Creates a solver with default options and no puzzle loaded.
    pub fn new() -> Self {
        Self {
            options: SolverOptions::default(),
            given: None,
        }
    }

    /// Creates a solver with the specified options.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Configuration` if the options are inconsistent.
    pub fn with_options(options: SolverOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            given: None,
        })
    }

    /// Stores the fixed puzzle. Validation happens in [`Solver::solve`].
    pub fn load(&mut self, grid: Grid) {
        self.given = Some(grid);
    }

    /// Returns the configured options.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Runs the evolutionary search until a verified solution is found or
    /// the generation budget is exhausted.
    ///
    /// An absent or contaminated Given puzzle, or a puzzle whose population
    /// cannot be seeded, ends the run immediately with
    /// [`SolveStatus::InvalidInput`] and no population work performed.
    pub fn solve(
        &self,
        rng: &mut RandomNumberGenerator,
        mut on_progress: Option<ProgressCallback<'_>>,
    ) -> SolveResult {
        let population_size = self.options.population_size();
        let elite_count = self.options.elite_count();
        let mut mutation_rate = self.options.initial_mutation_rate();
        let sigma = 1.0;

        let mut improving_mutations = 0usize;
        let mut total_mutations = 0usize;
        let mut reseed_count = 0u32;
        let mut fitness_history: Vec<GenerationStats> = Vec::new();
        let mut fitness_distributions: Vec<Vec<f64>> = Vec::new();

        let given = match self.given {
            Some(grid) if grid.no_duplicates() => grid,
            _ => return invalid_input_result(mutation_rate, sigma),
        };

        let mut population = Population::new();
        if let Err(error) = population.seed(population_size, &given, rng) {
            warn!(%error, "population seeding failed");
            return invalid_input_result(mutation_rate, sigma);
        }

        let tournament = Tournament::default();
        let crossover = CycleCrossover::new();

        for generation in 0..self.options.max_generations() {
            population.update_fitness();
            let fitness_values: Vec<f64> = population
                .candidates
                .iter()
                .filter_map(|candidate| candidate.fitness)
                .collect();
            fitness_distributions.push(fitness_values.clone());

            let mut max_fitness = 0.0f64;
            let mut median_fitness = 0.0f64;
            let mut has_stats = false;
            let mut solution: Option<(usize, Candidate)> = None;

            if !fitness_values.is_empty() {
                has_stats = true;
                max_fitness = fitness_values.iter().copied().fold(f64::MIN, f64::max);
                let min_fitness = fitness_values.iter().copied().fold(f64::MAX, f64::min);
                let mean_fitness =
                    fitness_values.iter().sum::<f64>() / fitness_values.len() as f64;
                median_fitness = median(&fitness_values);
                fitness_history.push(GenerationStats {
                    generation,
                    max: max_fitness,
                    min: min_fitness,
                    mean: mean_fitness,
                    median: median_fitness,
                });

                if (max_fitness - 1.0).abs() < FITNESS_EPSILON {
                    // A fitness of 1.0 is only trusted after an independent
                    // full-grid verification.
                    solution = population
                        .candidates
                        .iter()
                        .enumerate()
                        .find(|(_, candidate)| {
                            candidate.is_solved_fitness()
                                && candidate.grid.is_complete()
                                && candidate.grid.no_duplicates()
                        })
                        .map(|(index, candidate)| (index, candidate.clone()));
                }
            }

            population.sort_descending();
            if let Some(callback) = on_progress.as_mut() {
                if let Some(best) = population.candidates.first() {
                    callback(
                        generation,
                        best,
                        (generation + 1) * population_size,
                        max_fitness,
                    );
                }
            }

            if let Some((index, candidate)) = solution {
                info!(generation, "solution found");
                return SolveResult {
                    status: SolveStatus::Solved,
                    generation: generation as i32,
                    solution: Some(candidate),
                    solution_index: Some(index),
                    final_mutation_rate: mutation_rate,
                    final_sigma: sigma,
                    mutation_success_ratio: success_ratio(improving_mutations, total_mutations),
                    reseed_count,
                    fitness_history,
                    fitness_distributions,
                };
            }

            // Produce offspring until reaching population size.
            let mut offspring: Vec<Candidate> = Vec::with_capacity(population_size);
            while offspring.len() < population_size {
                let parent1 = tournament.compete(&population.candidates, rng);
                let parent2 = tournament.compete(&population.candidates, rng);
                let (Some(parent1), Some(parent2)) = (parent1, parent2) else {
                    break;
                };

                let (mut child1, mut child2) = crossover.crossover(parent1, parent2);

                develop_child(
                    &mut child1,
                    mutation_rate,
                    &given,
                    rng,
                    &mut total_mutations,
                    &mut improving_mutations,
                );
                offspring.push(child1);
                if offspring.len() >= population_size {
                    break;
                }

                develop_child(
                    &mut child2,
                    mutation_rate,
                    &given,
                    rng,
                    &mut total_mutations,
                    &mut improving_mutations,
                );
                offspring.push(child2);
            }

            // Elitist + tournament replacement over the merged pool.
            let mut combined = population.candidates.clone();
            combined.extend(offspring);
            combined.retain(|candidate| candidate.fitness.is_some());
            sort_by_fitness_descending(&mut combined);

            let mut next: Vec<Candidate> = Vec::with_capacity(population_size);
            let elite_take = elite_count.min(combined.len());
            next.extend(combined[..elite_take].iter().cloned());

            let mut survivor_pool: Vec<Candidate> = combined[elite_take..].to_vec();
            let remaining = population_size.saturating_sub(next.len());
            for _ in 0..remaining {
                if survivor_pool.len() < 2 {
                    if let Some(last) = survivor_pool.pop() {
                        next.push(last);
                    }
                    break;
                }
                let (first, second) = rng.two_distinct(survivor_pool.len());
                let winner = if survivor_pool[first].fitness_or_neg_inf()
                    >= survivor_pool[second].fitness_or_neg_inf()
                {
                    first
                } else {
                    second
                };
                next.push(survivor_pool.swap_remove(winner));
            }

            // Top up from the merged pool if the tournament drained early.
            let mut filler_index = 0usize;
            while next.len() < population_size && !combined.is_empty() {
                let source = &combined[filler_index % combined.len()];
                let mut filler = Candidate::new(source.grid);
                filler.update_fitness();
                next.push(filler);
                filler_index += 1;
                if filler_index > 2 * population_size {
                    break;
                }
            }

            if next.is_empty() {
                warn!(generation, "population collapsed, attempting reseed");
                reseed_count += 1;
                if let Err(error) = population.seed(population_size, &given, rng) {
                    warn!(%error, "reseed failed, run stalled");
                    return SolveResult {
                        status: SolveStatus::Stalled,
                        generation: GENERATION_EXHAUSTED,
                        solution: None,
                        solution_index: None,
                        final_mutation_rate: mutation_rate,
                        final_sigma: sigma,
                        mutation_success_ratio: success_ratio(
                            improving_mutations,
                            total_mutations,
                        ),
                        reseed_count,
                        fitness_history,
                        fitness_distributions,
                    };
                }
            } else {
                population.candidates = next;
            }

            // Adapt the mutation rate: the acceptable median band narrows
            // toward the maximum as the maximum approaches 1.0.
            if has_stats && max_fitness > 0.0 {
                let amplitude_reduction = 1.0 - max_fitness;
                let upper = max_fitness
                    * (1.0 - (1.0 - self.options.median_upper_ratio()) * amplitude_reduction);
                let lower = max_fitness
                    * (1.0 - (1.0 - self.options.median_lower_ratio()) * amplitude_reduction);

                if median_fitness > upper {
                    mutation_rate += self.options.mutation_rate_step();
                } else if median_fitness < lower {
                    mutation_rate -= self.options.mutation_rate_step();
                }
                mutation_rate = mutation_rate
                    .clamp(self.options.min_mutation_rate(), self.options.max_mutation_rate());
            }

            debug!(
                generation,
                max = max_fitness,
                median = median_fitness,
                mutation_rate,
                "generation complete"
            );
        }

        // Budget exhausted: report the best candidate found.
        population.sort_descending();
        let best = population.candidates.first().cloned();
        SolveResult {
            status: SolveStatus::BudgetExhausted,
            generation: GENERATION_EXHAUSTED,
            solution: best,
            solution_index: None,
            final_mutation_rate: mutation_rate,
            final_sigma: sigma,
            mutation_success_ratio: success_ratio(improving_mutations, total_mutations),
            reseed_count,
            fitness_history,
            fitness_distributions,
        }
    }
}

/// Evaluates a fresh child, applies mutation, and tracks whether the
/// mutation improved its fitness.
fn develop_child(
    child: &mut Candidate,
    mutation_rate: f64,
    given: &Grid,
    rng: &mut RandomNumberGenerator,
    total_mutations: &mut usize,
    improving_mutations: &mut usize,
) {
    child.update_fitness();
    let old_fitness = child.fitness.unwrap_or(-1.0);
    if mutate(child, mutation_rate, given, rng) {
        *total_mutations += 1;
        child.update_fitness();
        if child.fitness.unwrap_or(-1.0) > old_fitness {
            *improving_mutations += 1;
        }
    }
}

fn success_ratio(improving: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        improving as f64 / total as f64
    }
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    if n == 0 {
        0.0
    } else if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

fn invalid_input_result(mutation_rate: f64, sigma: f64) -> SolveResult {
    SolveResult {
        status: SolveStatus::InvalidInput,
        generation: GENERATION_INVALID_INPUT,
        solution: None,
        solution_index: None,
        final_mutation_rate: mutation_rate,
        final_sigma: sigma,
        mutation_success_ratio: 0.0,
        reseed_count: 0,
        fitness_history: Vec::new(),
        fitness_distributions: Vec::new(),
    }
}
