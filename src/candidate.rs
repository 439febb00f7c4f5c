//! # Candidate
//!
//! One full trial grid plus its fitness score. Candidates are produced by the
//! population seeder and by the genetic operators; every row of a candidate is
//! a permutation of 1–9 by construction, so fitness only has to measure
//! column and block uniqueness.

use crate::grid::{Grid, BLOCK_SIZE, GRID_SIZE};

/// Tolerance used when comparing fitness values against the solved sentinel.
pub const FITNESS_EPSILON: f64 = 1e-9;

/// A candidate solution: a fully-populated grid and its optional fitness.
///
/// Fitness is `None` until [`Candidate::update_fitness`] is called, and must
/// be recomputed whenever the grid mutates.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The working grid. Rows are permutations of 1–9.
    pub grid: Grid,
    /// Normalized fitness in `[0, 1]`; exactly `1.0` only for a valid solution.
    pub fitness: Option<f64>,
}

impl Candidate {
    /// Creates a candidate with unset fitness.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            fitness: None,
        }
    }

    /// Recomputes the fitness of this candidate.
    ///
    /// For each of the 9 columns, the number of digits appearing exactly once
    /// among non-zero cells is summed and normalized by 81; the same
    /// computation runs over the 9 blocks. Fitness is the product of the two
    /// scores, except that two raw scores of 1.0 (within [`FITNESS_EPSILON`])
    /// snap to exactly 1.0, the canonical solved sentinel.
    pub fn update_fitness(&mut self) {
        let mut column_sum = 0usize;
        for col in 0..GRID_SIZE {
            let mut counts = [0usize; 10];
            for row in 0..GRID_SIZE {
                counts[self.grid.get(row, col) as usize] += 1;
            }
            column_sum += counts[1..].iter().filter(|&&count| count == 1).count();
        }
        let column_score = column_sum as f64 / 81.0;

        let mut block_sum = 0usize;
        for block_row in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
            for block_col in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
                let mut counts = [0usize; 10];
                for r in block_row..block_row + BLOCK_SIZE {
                    for c in block_col..block_col + BLOCK_SIZE {
                        counts[self.grid.get(r, c) as usize] += 1;
                    }
                }
                block_sum += counts[1..].iter().filter(|&&count| count == 1).count();
            }
        }
        let block_score = block_sum as f64 / 81.0;

        let fitness = if (column_score - 1.0).abs() < FITNESS_EPSILON
            && (block_score - 1.0).abs() < FITNESS_EPSILON
        {
            1.0
        } else {
            column_score * block_score
        };
        self.fitness = Some(fitness);
    }

    /// Returns the fitness, treating an unset fitness as negative infinity.
    pub fn fitness_or_neg_inf(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    /// Returns `true` if the fitness equals the solved sentinel within
    /// [`FITNESS_EPSILON`].
    pub fn is_solved_fitness(&self) -> bool {
        matches!(self.fitness, Some(f) if (f - 1.0).abs() < FITNESS_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::test_support::solved_grid;

    #[test]
    fn test_solved_grid_is_valid() {
        let grid = solved_grid();
        assert!(grid.no_duplicates());
        assert!(grid.is_complete());
    }

    #[test]
    fn test_fitness_of_solution_is_exactly_one() {
        let mut candidate = Candidate::new(solved_grid());
        assert!(candidate.fitness.is_none());
        candidate.update_fitness();
        assert_eq!(candidate.fitness, Some(1.0));
        assert!(candidate.is_solved_fitness());
    }

    #[test]
    fn test_fitness_below_one_with_column_conflict() {
        let mut grid = solved_grid();
        // Swapping two values within a row keeps the row a permutation but
        // introduces column and block conflicts.
        let a = grid.get(0, 0);
        let b = grid.get(0, 1);
        grid.set(0, 0, b);
        grid.set(0, 1, a);

        let mut candidate = Candidate::new(grid);
        candidate.update_fitness();
        let fitness = candidate.fitness.unwrap();
        assert!(fitness < 1.0);
        assert!(fitness > 0.0);
        assert!(!candidate.is_solved_fitness());
    }

    #[test]
    fn test_fitness_is_normalized() {
        let mut candidate = Candidate::new(Grid::empty());
        candidate.update_fitness();
        assert_eq!(candidate.fitness, Some(0.0));
    }

    #[test]
    fn test_unset_fitness_orders_last() {
        let candidate = Candidate::new(Grid::empty());
        assert_eq!(candidate.fitness_or_neg_inf(), f64::NEG_INFINITY);
    }
}
