//! # Constraint Propagator
//!
//! A deterministic fixed-point solver that applies logical deduction rules to
//! a partially-filled grid until no rule fires in a full pass. The rules are
//! the standard naked single, naked pair, hidden single, and X-wing
//! eliminations over the 27 lines (9 rows, 9 columns, 9 blocks).
//!
//! The propagator never fails: in the worst case it returns the grid
//! unchanged. It does not guarantee a full solution; remaining blanks are
//! handed to the evolutionary solver.
//!
//! ## Example
//!
//! ```rust
//! use gensudoku::grid::Grid;
//! use gensudoku::propagator::preprocess;
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
//! let (result, cells_filled) = preprocess(&puzzle);
//! assert_eq!(cells_filled, puzzle.blank_count() - result.blank_count());
//! ```

pub mod digit_set;

pub use digit_set::DigitSet;

use std::collections::HashSet;

use crate::grid::{Grid, BLOCK_SIZE, GRID_SIZE};

type Cell = (usize, usize);

const UNIT_COUNT: usize = 27;

/// Returns the cells of one of the 27 lines: units 0–8 are rows, 9–17 are
/// columns, 18–26 are blocks.
fn unit_cells(unit: usize) -> [Cell; GRID_SIZE] {
    let mut cells = [(0, 0); GRID_SIZE];
    if unit < 9 {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = (unit, col);
        }
    } else if unit < 18 {
        for (row, cell) in cells.iter_mut().enumerate() {
            *cell = (row, unit - 9);
        }
    } else {
        let block = unit - 18;
        let row_start = (block / BLOCK_SIZE) * BLOCK_SIZE;
        let col_start = (block % BLOCK_SIZE) * BLOCK_SIZE;
        for (offset, cell) in cells.iter_mut().enumerate() {
            *cell = (
                row_start + offset / BLOCK_SIZE,
                col_start + offset % BLOCK_SIZE,
            );
        }
    }
    cells
}

/// Runs the constraint propagator to a fixed point.
///
/// Returns the resulting grid and the number of cells filled relative to the
/// input.
pub fn preprocess(grid: &Grid) -> (Grid, usize) {
    Propagator::new(*grid).run()
}

/// State machine over a mutable grid and its domain map.
///
/// The domain map is created from the grid at construction time and discarded
/// when [`Propagator::run`] returns; it is never shared or persisted.
pub struct Propagator {
    grid: Grid,
    domains: [[DigitSet; GRID_SIZE]; GRID_SIZE],
    resolved_pairs: HashSet<(usize, [Cell; 2])>,
}

impl Propagator {
    /// Builds the initial domain map: for every blank cell, the digits not
    /// already present in its row, column, or block; for filled cells, the
    /// empty set.
    pub fn new(grid: Grid) -> Self {
        let mut domains = [[DigitSet::EMPTY; GRID_SIZE]; GRID_SIZE];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if grid.get(row, col) != 0 {
                    continue;
                }
                let mut domain = DigitSet::FULL;
                for digit in 1..=9u8 {
                    if grid.is_row_duplicate(row, digit)
                        || grid.is_column_duplicate(col, digit)
                        || grid.is_block_duplicate(row, col, digit)
                    {
                        domain.remove(digit);
                    }
                }
                domains[row][col] = domain;
            }
        }
        Self {
            grid,
            domains,
            resolved_pairs: HashSet::new(),
        }
    }

    /// Iterates all rules until no rule fires in a full pass, then returns
    /// the grid and the count of cells filled.
    pub fn run(mut self) -> (Grid, usize) {
        let initial_blanks = self.grid.blank_count();
        loop {
            let mut changed = false;
            changed |= self.naked_singles();
            changed |= self.naked_pairs();
            changed |= self.hidden_singles();
            changed |= self.x_wing();
            if !changed {
                break;
            }
        }
        let cells_filled = initial_blanks - self.grid.blank_count();
        (self.grid, cells_filled)
    }

    /// Places a digit and propagates: the value is removed from the domains
    /// of all peer cells in the same row, column, and block.
    fn place(&mut self, row: usize, col: usize, digit: u8) {
        self.grid.set(row, col, digit);
        self.domains[row][col] = DigitSet::EMPTY;

        for c in 0..GRID_SIZE {
            self.domains[row][c].remove(digit);
        }
        for r in 0..GRID_SIZE {
            self.domains[r][col].remove(digit);
        }
        let row_start = (row / BLOCK_SIZE) * BLOCK_SIZE;
        let col_start = (col / BLOCK_SIZE) * BLOCK_SIZE;
        for r in row_start..row_start + BLOCK_SIZE {
            for c in col_start..col_start + BLOCK_SIZE {
                self.domains[r][c].remove(digit);
            }
        }
    }

    /// Places every cell whose domain has exactly one candidate.
    fn naked_singles(&mut self) -> bool {
        let mut changed = false;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.grid.get(row, col) != 0 {
                    continue;
                }
                if let Some(digit) = self.domains[row][col].sole_digit() {
                    self.place(row, col, digit);
                    changed = true;
                }
            }
        }
        changed
    }

    /// For each line, finds two blank cells sharing a domain of size exactly
    /// two; if no other size-two domain in the line also holds that pair, the
    /// two values are eliminated from every other cell's domain in the line.
    /// Each resolved pair is cached so it is not reprocessed.
    fn naked_pairs(&mut self) -> bool {
        let mut changed = false;
        for unit in 0..UNIT_COUNT {
            let cells = unit_cells(unit);

            // Group the unit's size-two domains, preserving scan order.
            let mut pairs: Vec<(DigitSet, Vec<Cell>)> = Vec::new();
            for &(row, col) in &cells {
                if self.grid.get(row, col) != 0 {
                    continue;
                }
                let domain = self.domains[row][col];
                if domain.len() != 2 {
                    continue;
                }
                match pairs.iter_mut().find(|(key, _)| *key == domain) {
                    Some((_, members)) => members.push((row, col)),
                    None => pairs.push((domain, vec![(row, col)])),
                }
            }

            for (pair, members) in pairs {
                if members.len() != 2 {
                    continue;
                }
                let key = (unit, [members[0], members[1]]);
                if self.resolved_pairs.contains(&key) {
                    continue;
                }
                // A third size-two domain holding the same pair means this is
                // not a clean naked pair.
                let conflicted = cells.iter().any(|&(row, col)| {
                    !members.contains(&(row, col))
                        && self.grid.get(row, col) == 0
                        && self.domains[row][col].len() == 2
                        && self.domains[row][col].contains_all(pair)
                });
                if conflicted {
                    continue;
                }
                self.resolved_pairs.insert(key);
                for &(row, col) in &cells {
                    if members.contains(&(row, col)) {
                        continue;
                    }
                    if self.domains[row][col].remove_all(pair) {
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    /// For each line and digit, if exactly one blank cell in the line has the
    /// digit in its domain, places it there.
    fn hidden_singles(&mut self) -> bool {
        let mut changed = false;
        for unit in 0..UNIT_COUNT {
            let cells = unit_cells(unit);
            for digit in 1..=9u8 {
                let mut count = 0;
                let mut last_position = None;
                for &(row, col) in &cells {
                    if self.grid.get(row, col) == 0 && self.domains[row][col].contains(digit) {
                        count += 1;
                        last_position = Some((row, col));
                    }
                }
                if count == 1 {
                    if let Some((row, col)) = last_position {
                        self.place(row, col, digit);
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    /// For each digit, finds two rows where the digit is a candidate in
    /// exactly the same two columns and eliminates it from those columns in
    /// all other rows, then runs the symmetric check over columns.
    fn x_wing(&mut self) -> bool {
        let mut changed = false;

        for digit in 1..=9u8 {
            let mut row_pairs: Vec<((usize, usize), Vec<usize>)> = Vec::new();
            for row in 0..GRID_SIZE {
                let cols: Vec<usize> = (0..GRID_SIZE)
                    .filter(|&col| {
                        self.grid.get(row, col) == 0 && self.domains[row][col].contains(digit)
                    })
                    .collect();
                if cols.len() == 2 {
                    let key = (cols[0], cols[1]);
                    match row_pairs.iter_mut().find(|(k, _)| *k == key) {
                        Some((_, rows)) => rows.push(row),
                        None => row_pairs.push((key, vec![row])),
                    }
                }
            }
            for ((col1, col2), rows) in row_pairs {
                if rows.len() != 2 {
                    continue;
                }
                for row in 0..GRID_SIZE {
                    if rows.contains(&row) {
                        continue;
                    }
                    for col in [col1, col2] {
                        if self.grid.get(row, col) == 0 && self.domains[row][col].remove(digit) {
                            changed = true;
                        }
                    }
                }
            }
        }

        for digit in 1..=9u8 {
            let mut col_pairs: Vec<((usize, usize), Vec<usize>)> = Vec::new();
            for col in 0..GRID_SIZE {
                let rows: Vec<usize> = (0..GRID_SIZE)
                    .filter(|&row| {
                        self.grid.get(row, col) == 0 && self.domains[row][col].contains(digit)
                    })
                    .collect();
                if rows.len() == 2 {
                    let key = (rows[0], rows[1]);
                    match col_pairs.iter_mut().find(|(k, _)| *k == key) {
                        Some((_, cols)) => cols.push(col),
                        None => col_pairs.push((key, vec![col])),
                    }
                }
            }
            for ((row1, row2), cols) in col_pairs {
                if cols.len() != 2 {
                    continue;
                }
                for col in 0..GRID_SIZE {
                    if cols.contains(&col) {
                        continue;
                    }
                    for row in [row1, row2] {
                        if self.grid.get(row, col) == 0 && self.domains[row][col].remove(digit) {
                            changed = true;
                        }
                    }
                }
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{easy_puzzle, solved_grid};

    #[test]
    fn test_complete_grid_is_left_unchanged() {
        let grid = solved_grid();
        let (result, cells_filled) = preprocess(&grid);
        assert_eq!(result, grid);
        assert_eq!(cells_filled, 0);
    }

    #[test]
    fn test_single_blank_per_row_is_solved_by_naked_singles() {
        let solution = solved_grid();
        let mut puzzle = solution;
        for i in 0..GRID_SIZE {
            puzzle.set(i, i, 0);
        }

        let (result, cells_filled) = preprocess(&puzzle);
        assert_eq!(cells_filled, 9);
        assert_eq!(result, solution);
    }

    #[test]
    fn test_propagator_is_idempotent() {
        let (first, _) = preprocess(&easy_puzzle());
        let (second, cells_filled) = preprocess(&first);
        assert_eq!(second, first);
        assert_eq!(cells_filled, 0);
    }

    #[test]
    fn test_easy_puzzle_solves_completely() {
        let (result, cells_filled) = preprocess(&easy_puzzle());
        assert_eq!(cells_filled, 51);
        assert!(result.is_complete());
        assert!(result.no_duplicates());
        assert_eq!(result.get(0, 2), 4);
        assert_eq!(result.get(8, 0), 3);
    }

    #[test]
    fn test_initial_domains_exclude_peers() {
        let propagator = Propagator::new(easy_puzzle());
        // Cell (0, 2) sees 5, 3 and 7 in its row and 6, 9 and 8 in its
        // block.
        let domain = propagator.domains[0][2];
        assert!(!domain.contains(5));
        assert!(!domain.contains(3));
        assert!(!domain.contains(9));
        assert!(!domain.contains(6));
        assert!(!domain.contains(7));
    }

    #[test]
    fn test_hidden_single_places_lone_candidate() {
        let mut propagator = Propagator::new(Grid::empty());
        // Digit 9 can only live at (0, 0) within row 0.
        for col in 1..GRID_SIZE {
            propagator.domains[0][col].remove(9);
        }

        assert!(propagator.hidden_singles());
        assert_eq!(propagator.grid.get(0, 0), 9);
        // Placement propagated to peers.
        assert!(!propagator.domains[5][0].contains(9));
        assert!(!propagator.domains[1][1].contains(9));
    }

    #[test]
    fn test_naked_pair_eliminates_from_line() {
        let mut propagator = Propagator::new(Grid::empty());
        let pair: DigitSet = [1u8, 2].into_iter().collect();
        propagator.domains[0][0] = pair;
        propagator.domains[0][1] = pair;

        assert!(propagator.naked_pairs());
        // Eliminated from the rest of row 0 and the rest of block 0.
        assert!(!propagator.domains[0][5].contains(1));
        assert!(!propagator.domains[0][5].contains(2));
        assert!(!propagator.domains[1][0].contains(1));
        assert!(!propagator.domains[2][2].contains(2));
        // The pair cells themselves keep their candidates.
        assert!(propagator.domains[0][0].contains(1));
        assert!(propagator.domains[0][1].contains(2));
        // Cells outside the shared lines are untouched.
        assert!(propagator.domains[4][0].contains(1));
    }

    #[test]
    fn test_naked_pair_skips_when_third_cell_holds_pair() {
        let mut propagator = Propagator::new(Grid::empty());
        let pair: DigitSet = [1u8, 2].into_iter().collect();
        propagator.domains[0][0] = pair;
        propagator.domains[0][1] = pair;
        propagator.domains[0][2] = pair;

        // Three identical size-two domains never form a clean pair, in the
        // row or in the shared block. Nothing may be eliminated.
        assert!(!propagator.naked_pairs());
        assert!(propagator.domains[0][5].contains(1));
        assert!(propagator.domains[0][5].contains(2));
        assert!(propagator.domains[1][0].contains(1));
    }

    #[test]
    fn test_x_wing_eliminates_from_covered_columns() {
        let mut propagator = Propagator::new(Grid::empty());
        // Digit 5 appears in rows 1 and 7 only at columns 2 and 6.
        for row in [1, 7] {
            for col in 0..GRID_SIZE {
                if col != 2 && col != 6 {
                    propagator.domains[row][col].remove(5);
                }
            }
        }

        assert!(propagator.x_wing());
        assert!(!propagator.domains[0][2].contains(5));
        assert!(!propagator.domains[4][6].contains(5));
        // The defining cells keep the candidate.
        assert!(propagator.domains[1][2].contains(5));
        assert!(propagator.domains[7][6].contains(5));
        // Other columns are untouched.
        assert!(propagator.domains[0][0].contains(5));
    }
}
