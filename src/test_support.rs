//! Shared fixtures for unit tests.

use crate::grid::Grid;

/// A valid solved grid built from the cyclic row construction.
pub(crate) fn solved_grid() -> Grid {
    let mut values = [[0u8; 9]; 9];
    let shifts = [0, 3, 6, 1, 4, 7, 2, 5, 8];
    for (row, &shift) in shifts.iter().enumerate() {
        for col in 0..9 {
            values[row][col] = ((col + shift) % 9) as u8 + 1;
        }
    }
    Grid::from_values(values).unwrap()
}

/// The easy puzzle from the Wikipedia Sudoku article. Solvable by the
/// propagator's single/pair rules alone.
pub(crate) fn easy_puzzle() -> Grid {
    Grid::parse(
        "530070000\
         600195000\
         098000060\
         800060003\
         400803001\
         700020006\
         060000280\
         000419005\
         000080079",
    )
    .unwrap()
}
