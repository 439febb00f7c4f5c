//! # Row-wise Cycle Crossover
//!
//! Cycle crossover (CX) operates independently per row between two parents
//! and produces two children. For a row pair, cycles are built by following
//! the permutation mapping from parent 1 to parent 2; even-numbered cycles
//! copy each parent's values straight into its own child, odd-numbered cycles
//! swap the assignment. Because every position receives a value from one of
//! the two parent rows and each cycle is self-contained, permutation validity
//! of every row is preserved.

use crate::candidate::Candidate;
use crate::grid::GRID_SIZE;

/// The row-wise cycle crossover operator.
///
/// Crossover always executes once two parents are selected; there is no
/// probability gate.
#[derive(Debug, Clone, Default)]
pub struct CycleCrossover;

impl CycleCrossover {
    /// Creates the operator.
    pub fn new() -> Self {
        Self
    }

    /// Crosses two parents row by row, returning two children with unset
    /// fitness.
    pub fn crossover(&self, parent1: &Candidate, parent2: &Candidate) -> (Candidate, Candidate) {
        let mut child1 = Candidate::new(parent1.grid);
        let mut child2 = Candidate::new(parent2.grid);

        for row in 0..GRID_SIZE {
            let (row1, row2) = cx_rows(&parent1.grid.row(row), &parent2.grid.row(row));
            child1.grid.set_row(row, row1);
            child2.grid.set_row(row, row2);
        }

        (child1, child2)
    }
}

/// Crosses a single row pair.
///
/// Starting from each unvisited index, the cycle repeatedly jumps to the
/// index where parent 2 holds the value parent 1 has at the current index,
/// until it returns to a visited index or the value is absent from parent 2.
fn cx_rows(row1: &[u8; GRID_SIZE], row2: &[u8; GRID_SIZE]) -> ([u8; GRID_SIZE], [u8; GRID_SIZE]) {
    let mut child1 = [0u8; GRID_SIZE];
    let mut child2 = [0u8; GRID_SIZE];
    let mut visited = [false; GRID_SIZE];
    let mut cycle_number = 0usize;

    for start in 0..GRID_SIZE {
        if visited[start] {
            continue;
        }

        let mut cycle = Vec::new();
        let mut current = start;
        while !visited[current] {
            cycle.push(current);
            visited[current] = true;
            let value = row1[current];
            match row2.iter().position(|&v| v == value) {
                Some(next) => current = next,
                None => break,
            }
        }

        for &index in &cycle {
            if cycle_number % 2 == 0 {
                child1[index] = row1[index];
                child2[index] = row2[index];
            } else {
                child1[index] = row2[index];
                child2[index] = row1[index];
            }
        }
        cycle_number += 1;
    }

    (child1, child2)
}
