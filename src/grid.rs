//! # Grid
//!
//! A 9×9 Sudoku grid plus the duplicate-detection queries used to validate a
//! Given puzzle before solving and to verify a claimed solution. Cells hold
//! digits 0–9 where 0 means blank.
//!
//! ## Example
//!
//! ```rust
//! use gensudoku::grid::Grid;
//!
//! let grid = Grid::parse(
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
//! assert!(grid.no_duplicates());
//! assert_eq!(grid.blank_count(), 51);
//! ```

use std::fmt;

use crate::error::{Result, SolverError};

/// Side length of the grid.
pub const GRID_SIZE: usize = 9;

/// Side length of a 3×3 block.
pub const BLOCK_SIZE: usize = 3;

/// A fixed 9×9 array of digits in `[0, 9]`, 0 meaning "unknown/blank".
///
/// The same type serves two roles: the immutable *Given* puzzle (the input
/// constraints) and the fully-populated working grid owned by a
/// [`Candidate`](crate::candidate::Candidate). All queries are pure; the grid
/// is only mutated through [`Grid::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an all-blank grid.
    pub fn empty() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a grid from a 9×9 array of digits.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidPuzzle` if any cell is outside `0..=9`.
    pub fn from_values(values: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        for (row, row_values) in values.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                if value > 9 {
                    return Err(SolverError::InvalidPuzzle(format!(
                        "Cell ({}, {}) holds {}, expected a digit in 0..=9",
                        row, col, value
                    )));
                }
            }
        }
        Ok(Self { cells: values })
    }

    /// Parses a grid from its common text form: 81 cell characters where
    /// digits are clues and `0`, `.` or `-` mean blank. Whitespace and line
    /// breaks are ignored, as are decoration lines starting with `[`.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidPuzzle` if the text does not contain
    /// exactly 81 cell characters.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        let mut count = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.starts_with('[') {
                continue;
            }
            for ch in line.chars() {
                let digit = match ch {
                    '0'..='9' => ch as u8 - b'0',
                    '.' | '-' => 0,
                    c if c.is_whitespace() => continue,
                    _ => continue,
                };
                if count >= GRID_SIZE * GRID_SIZE {
                    return Err(SolverError::InvalidPuzzle(
                        "More than 81 cells in puzzle text".to_string(),
                    ));
                }
                cells[count / GRID_SIZE][count % GRID_SIZE] = digit;
                count += 1;
            }
        }

        if count != GRID_SIZE * GRID_SIZE {
            return Err(SolverError::InvalidPuzzle(format!(
                "Expected 81 cells in puzzle text, found {}",
                count
            )));
        }

        Ok(Self { cells })
    }

    /// Returns the digit at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Sets the digit at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row][col] = value;
    }

    /// Returns one row of the grid.
    pub fn row(&self, row: usize) -> [u8; GRID_SIZE] {
        self.cells[row]
    }

    /// Replaces one row of the grid.
    pub fn set_row(&mut self, row: usize, values: [u8; GRID_SIZE]) {
        self.cells[row] = values;
    }

    /// Returns `true` if `value` already appears somewhere in `row`.
    pub fn is_row_duplicate(&self, row: usize, value: u8) -> bool {
        self.cells[row].contains(&value)
    }

    /// Returns `true` if `value` already appears somewhere in `col`.
    pub fn is_column_duplicate(&self, col: usize, value: u8) -> bool {
        (0..GRID_SIZE).any(|row| self.cells[row][col] == value)
    }

    /// Returns `true` if `value` already appears in the 3×3 block containing
    /// `(row, col)`.
    pub fn is_block_duplicate(&self, row: usize, col: usize, value: u8) -> bool {
        let row_start = (row / BLOCK_SIZE) * BLOCK_SIZE;
        let col_start = (col / BLOCK_SIZE) * BLOCK_SIZE;
        (row_start..row_start + BLOCK_SIZE).any(|r| {
            (col_start..col_start + BLOCK_SIZE).any(|c| self.cells[r][c] == value)
        })
    }

    /// Returns `false` if any non-zero cell has an equal non-zero value
    /// sharing its row, column, or 3×3 block.
    ///
    /// Used both to validate the Given puzzle before solving and to verify a
    /// claimed full solution.
    pub fn no_duplicates(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row][col];
                if value == 0 {
                    continue;
                }
                for c in 0..GRID_SIZE {
                    if c != col && self.cells[row][c] == value {
                        return false;
                    }
                }
                for r in 0..GRID_SIZE {
                    if r != row && self.cells[r][col] == value {
                        return false;
                    }
                }
                let row_start = (row / BLOCK_SIZE) * BLOCK_SIZE;
                let col_start = (col / BLOCK_SIZE) * BLOCK_SIZE;
                for r in row_start..row_start + BLOCK_SIZE {
                    for c in col_start..col_start + BLOCK_SIZE {
                        if (r != row || c != col) && self.cells[r][c] == value {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Returns the number of blank cells.
    pub fn blank_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&value| value == 0)
            .count()
    }

    /// Returns `true` if no cell is blank.
    pub fn is_complete(&self) -> bool {
        self.blank_count() == 0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, row_values) in self.cells.iter().enumerate() {
            if row > 0 && row % BLOCK_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in row_values.iter().enumerate() {
                if col > 0 && col % BLOCK_SIZE == 0 {
                    write!(f, "| ")?;
                }
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        let mut grid = Grid::empty();
        grid.set(0, 0, 5);
        grid.set(0, 4, 7);
        grid.set(4, 0, 4);
        grid.set(1, 1, 6);
        grid
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let mut values = [[0u8; 9]; 9];
        values[3][3] = 10;
        assert!(matches!(
            Grid::from_values(values),
            Err(SolverError::InvalidPuzzle(_))
        ));
    }

    #[test]
    fn test_parse_round_trips_with_dots_and_dashes() {
        let grid = Grid::parse(
            "53..7....\n6..195...\n.98....6.\n8...6...3\n4..8.3..1\n7...2...6\n.6....28.\n...419..5\n....8..79",
        )
        .unwrap();
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(0, 2), 0);
        assert_eq!(grid.get(8, 8), 9);

        let dashed = Grid::parse(
            "53--7----6--195----98----6-8---6---34--8-3--17---2---6-6----28----419--5----8--79",
        )
        .unwrap();
        assert_eq!(grid, dashed);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert!(Grid::parse("123").is_err());
    }

    #[test]
    fn test_row_duplicate_query() {
        let grid = sample_grid();
        assert!(grid.is_row_duplicate(0, 5));
        assert!(grid.is_row_duplicate(0, 7));
        assert!(!grid.is_row_duplicate(0, 6));
    }

    #[test]
    fn test_column_duplicate_query() {
        let grid = sample_grid();
        assert!(grid.is_column_duplicate(0, 5));
        assert!(grid.is_column_duplicate(0, 4));
        assert!(!grid.is_column_duplicate(0, 9));
    }

    #[test]
    fn test_block_duplicate_query() {
        let grid = sample_grid();
        assert!(grid.is_block_duplicate(2, 2, 5));
        assert!(grid.is_block_duplicate(0, 1, 6));
        assert!(!grid.is_block_duplicate(3, 3, 5));
    }

    #[test]
    fn test_no_duplicates_accepts_clean_grid() {
        assert!(sample_grid().no_duplicates());
        assert!(Grid::empty().no_duplicates());
    }

    #[test]
    fn test_no_duplicates_detects_row_conflict() {
        let mut grid = Grid::empty();
        grid.set(2, 1, 8);
        grid.set(2, 7, 8);
        assert!(!grid.no_duplicates());
    }

    #[test]
    fn test_no_duplicates_detects_column_conflict() {
        let mut grid = Grid::empty();
        grid.set(1, 4, 3);
        grid.set(8, 4, 3);
        assert!(!grid.no_duplicates());
    }

    #[test]
    fn test_no_duplicates_detects_block_conflict() {
        let mut grid = Grid::empty();
        grid.set(3, 3, 2);
        grid.set(5, 5, 2);
        assert!(!grid.no_duplicates());
    }

    #[test]
    fn test_blank_count_and_completeness() {
        let mut grid = sample_grid();
        assert_eq!(grid.blank_count(), 77);
        assert!(!grid.is_complete());

        for row in 0..9 {
            for col in 0..9 {
                if grid.get(row, col) == 0 {
                    grid.set(row, col, 1);
                }
            }
        }
        assert!(grid.is_complete());
    }
}
