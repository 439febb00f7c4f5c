//! # Population & Seeder
//!
//! Builds the initial population of candidate grids from the Given puzzle.
//! For every cell the seeder computes the list of legal values (the digits
//! not excluded by the Given's row, column, and block constraints, with no
//! further deduction), then fills each row of each candidate by sampling
//! blanks from those lists until the row is a permutation of 1–9.
//!
//! Rows that cannot be satisfied by sampling within the attempt budget go
//! through an ordered list of repair strategies; if every strategy fails the
//! whole seeding fails and the puzzle is treated as unsolvable by this method
//! for the current attempt.

use std::cmp::Ordering;

use tracing::warn;

use crate::candidate::Candidate;
use crate::error::{Result, SolverError};
use crate::grid::{Grid, GRID_SIZE};
use crate::rng::RandomNumberGenerator;

/// Sampling attempts per row before the repair strategies take over.
const MAX_ROW_SAMPLE_ATTEMPTS: usize = 500_000;

/// Per-cell legal-value lists derived from the Given puzzle.
type CellDomains = [[Vec<u8>; GRID_SIZE]; GRID_SIZE];

/// The set of Candidates alive in one generation.
///
/// The collection is rebuilt wholesale each generation by the loop
/// controller; no candidate is shared between generations by reference.
#[derive(Debug, Clone, Default)]
pub struct Population {
    /// The candidates of the current generation.
    pub candidates: Vec<Candidate>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Seeds `size` candidates whose non-given rows are permutations of 1–9
    /// consistent with the Given's per-cell legal values. Every seeded
    /// candidate has its fitness computed immediately.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Seeding` if some row cannot be made a valid
    /// permutation within the attempt budget, even after every repair
    /// strategy.
    pub fn seed(
        &mut self,
        size: usize,
        given: &Grid,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let domains = legal_values(given);

        let mut candidates = Vec::with_capacity(size);
        for _ in 0..size {
            let mut grid = *given;
            for row in 0..GRID_SIZE {
                grid.set_row(row, seed_row(given, &domains, row, rng)?);
            }
            let mut candidate = Candidate::new(grid);
            candidate.update_fitness();
            candidates.push(candidate);
        }

        self.candidates = candidates;
        Ok(())
    }

    /// Recomputes the fitness of every candidate.
    pub fn update_fitness(&mut self) {
        for candidate in &mut self.candidates {
            candidate.update_fitness();
        }
    }

    /// Sorts candidates by fitness, descending. Candidates without a computed
    /// fitness are dropped.
    pub fn sort_descending(&mut self) {
        self.candidates.retain(|candidate| candidate.fitness.is_some());
        sort_by_fitness_descending(&mut self.candidates);
    }
}

/// Sorts a candidate list by fitness, descending.
pub(crate) fn sort_by_fitness_descending(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.fitness_or_neg_inf()
            .partial_cmp(&a.fitness_or_neg_inf())
            .unwrap_or(Ordering::Equal)
    });
}

/// Returns `true` if the row holds each digit 1–9 exactly once.
pub(crate) fn is_row_permutation(values: &[u8; GRID_SIZE]) -> bool {
    let mut seen = [false; 10];
    for &value in values {
        if value == 0 || seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }
    true
}

/// Computes the per-cell legal-value lists of the Given puzzle: for a blank
/// cell, the digits not already present in its row, column, or block; for a
/// given cell, just its value.
fn legal_values(given: &Grid) -> CellDomains {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let fixed = given.get(row, col);
            if fixed != 0 {
                vec![fixed]
            } else {
                (1..=9u8)
                    .filter(|&digit| {
                        !given.is_row_duplicate(row, digit)
                            && !given.is_column_duplicate(col, digit)
                            && !given.is_block_duplicate(row, col, digit)
                    })
                    .collect()
            }
        })
    })
}

/// Ordered row-repair strategies, tried in sequence once the sampling budget
/// is exhausted. Each has a clear precondition (a row the sampler could not
/// satisfy) and outcome (a candidate row that may or may not be a valid
/// permutation).
#[derive(Debug, Clone, Copy)]
enum RowRepair {
    /// Assigns the digits missing from the Given row to the blank positions
    /// in random order.
    MissingDigits,
    /// Recomputes the available digits excluding the row's fixed digits and
    /// assigns them to the blanks left to right.
    AvailableExcludingFixed,
}

impl RowRepair {
    fn repair(
        self,
        given: &Grid,
        row: usize,
        rng: &mut RandomNumberGenerator,
    ) -> [u8; GRID_SIZE] {
        let given_row = given.row(row);
        let mut values = given_row;

        let fixed: Vec<u8> = given_row.iter().copied().filter(|&v| v != 0).collect();
        let mut missing: Vec<u8> = (1..=9u8).filter(|digit| !fixed.contains(digit)).collect();
        rng.shuffle(&mut missing);

        let mut blanks: Vec<usize> = (0..GRID_SIZE).filter(|&col| given_row[col] == 0).collect();
        if matches!(self, RowRepair::MissingDigits) {
            rng.shuffle(&mut blanks);
        }

        let mut next = 0;
        for col in blanks {
            values[col] = if next < missing.len() {
                next += 1;
                missing[next - 1]
            } else {
                0
            };
        }
        values
    }
}

/// Samples one row: given cells keep their value, blanks draw uniformly from
/// their legal-value list (an empty list yields 0).
fn sample_row(
    given: &Grid,
    domains: &CellDomains,
    row: usize,
    rng: &mut RandomNumberGenerator,
) -> [u8; GRID_SIZE] {
    let mut values = [0u8; GRID_SIZE];
    for (col, value) in values.iter_mut().enumerate() {
        let fixed = given.get(row, col);
        *value = if fixed != 0 {
            fixed
        } else {
            match rng.choose(&domains[row][col]) {
                Some(&digit) => digit,
                None => 0,
            }
        };
    }
    values
}

/// Builds one valid row for a candidate: bounded resampling first, then the
/// repair strategies in order.
fn seed_row(
    given: &Grid,
    domains: &CellDomains,
    row: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<[u8; GRID_SIZE]> {
    for _ in 0..MAX_ROW_SAMPLE_ATTEMPTS {
        let values = sample_row(given, domains, row, rng);
        if is_row_permutation(&values) {
            return Ok(values);
        }
    }

    for strategy in [RowRepair::MissingDigits, RowRepair::AvailableExcludingFixed] {
        let values = strategy.repair(given, row, rng);
        if is_row_permutation(&values) {
            warn!(row, ?strategy, "row repaired after exhausting sampling budget");
            return Ok(values);
        }
    }

    Err(SolverError::Seeding(format!(
        "Row {} cannot be made a permutation of 1-9",
        row
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{easy_puzzle, solved_grid};

    #[test]
    fn test_seed_produces_row_permutations() {
        let given = easy_puzzle();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut population = Population::new();
        population.seed(20, &given, &mut rng).unwrap();

        assert_eq!(population.len(), 20);
        for candidate in &population.candidates {
            for row in 0..GRID_SIZE {
                assert!(is_row_permutation(&candidate.grid.row(row)));
            }
        }
    }

    #[test]
    fn test_seed_preserves_given_cells() {
        let given = easy_puzzle();
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut population = Population::new();
        population.seed(10, &given, &mut rng).unwrap();

        for candidate in &population.candidates {
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let fixed = given.get(row, col);
                    if fixed != 0 {
                        assert_eq!(candidate.grid.get(row, col), fixed);
                    }
                }
            }
        }
    }

    #[test]
    fn test_seed_computes_fitness_immediately() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut population = Population::new();
        population.seed(5, &easy_puzzle(), &mut rng).unwrap();

        for candidate in &population.candidates {
            let fitness = candidate.fitness.expect("fitness must be set by seeding");
            assert!((0.0..=1.0).contains(&fitness));
        }
    }

    #[test]
    fn test_seed_of_complete_grid_reproduces_it() {
        let solution = solved_grid();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut population = Population::new();
        population.seed(3, &solution, &mut rng).unwrap();

        for candidate in &population.candidates {
            assert_eq!(candidate.grid, solution);
            assert_eq!(candidate.fitness, Some(1.0));
        }
    }

    #[test]
    fn test_seed_is_deterministic_per_seed() {
        let given = easy_puzzle();
        let mut population1 = Population::new();
        let mut population2 = Population::new();
        population1
            .seed(5, &given, &mut RandomNumberGenerator::from_seed(99))
            .unwrap();
        population2
            .seed(5, &given, &mut RandomNumberGenerator::from_seed(99))
            .unwrap();

        for (a, b) in population1.candidates.iter().zip(&population2.candidates) {
            assert_eq!(a.grid, b.grid);
        }
    }

    #[test]
    fn test_missing_digits_repair_yields_permutation() {
        let mut given = Grid::empty();
        given.set(0, 0, 5);
        given.set(0, 4, 1);
        let mut rng = RandomNumberGenerator::from_seed(11);

        let repaired = RowRepair::MissingDigits.repair(&given, 0, &mut rng);
        assert!(is_row_permutation(&repaired));
        assert_eq!(repaired[0], 5);
        assert_eq!(repaired[4], 1);
    }

    #[test]
    fn test_available_excluding_fixed_repair_yields_permutation() {
        let mut given = Grid::empty();
        given.set(2, 3, 9);
        let mut rng = RandomNumberGenerator::from_seed(11);

        let repaired = RowRepair::AvailableExcludingFixed.repair(&given, 2, &mut rng);
        assert!(is_row_permutation(&repaired));
        assert_eq!(repaired[3], 9);
    }

    #[test]
    fn test_seed_fails_when_row_cannot_be_permutation() {
        // Two fixed 5s in one row: no sampling or repair can produce nine
        // distinct digits.
        let mut given = Grid::empty();
        given.set(0, 0, 5);
        given.set(0, 8, 5);
        let mut rng = RandomNumberGenerator::from_seed(13);

        let result = Population::new().seed(1, &given, &mut rng);
        assert!(matches!(result, Err(SolverError::Seeding(_))));
    }

    #[test]
    fn test_sort_descending_orders_by_fitness() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut population = Population::new();
        population.seed(10, &easy_puzzle(), &mut rng).unwrap();
        population.sort_descending();

        let fitnesses: Vec<f64> = population
            .candidates
            .iter()
            .map(Candidate::fitness_or_neg_inf)
            .collect();
        for pair in fitnesses.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }
}
