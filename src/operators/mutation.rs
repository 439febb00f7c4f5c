//! # Bounded Local Swap Mutation
//!
//! With probability equal to the current mutation rate, the operator picks a
//! random row and swaps the candidate's values at two randomly chosen mutable
//! columns (positions the Given puzzle left blank). Rows with fewer than two
//! mutable columns are skipped and another row is tried, up to a fixed
//! attempt bound; running out of attempts silently does nothing.
//!
//! Swapping within a row keeps the row a permutation of 1–9, so the
//! candidate invariant is preserved, and fixed Given cells are never touched.

use crate::candidate::Candidate;
use crate::grid::{Grid, GRID_SIZE};
use crate::rng::RandomNumberGenerator;

/// Attempts to find a row with at least two mutable columns.
const MAX_MUTATION_ATTEMPTS: usize = 50;

/// Mutates `candidate` in place with probability `mutation_rate`.
///
/// Returns `true` if a swap was performed; the caller uses this to track
/// mutation-driven fitness improvement. The candidate's fitness is left
/// untouched and must be recomputed by the caller after a successful swap.
pub fn mutate(
    candidate: &mut Candidate,
    mutation_rate: f64,
    given: &Grid,
    rng: &mut RandomNumberGenerator,
) -> bool {
    if !rng.chance(mutation_rate) {
        return false;
    }

    for _ in 0..MAX_MUTATION_ATTEMPTS {
        let row = rng.index(GRID_SIZE);
        let mutable_columns: Vec<usize> = (0..GRID_SIZE)
            .filter(|&col| given.get(row, col) == 0)
            .collect();

        if mutable_columns.len() < 2 {
            continue;
        }

        let (first, second) = rng.two_distinct(mutable_columns.len());
        let from_column = mutable_columns[first];
        let to_column = mutable_columns[second];

        let tmp = candidate.grid.get(row, to_column);
        candidate
            .grid
            .set(row, to_column, candidate.grid.get(row, from_column));
        candidate.grid.set(row, from_column, tmp);
        return true;
    }

    false
}
