use gensudoku::{grid::Grid, propagator};

fn easy_puzzle() -> Grid {
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

fn hard_puzzle() -> Grid {
    Grid::parse(
        "100007090\
         030020008\
         009600500\
         005300900\
         010080002\
         600004000\
         300000010\
         040000007\
         007000300",
    )
    .unwrap()
}

#[test]
fn test_preprocess_leaves_complete_grid_alone() {
    let (reduced, cells_filled) = propagator::preprocess(&easy_grid_solution());
    assert_eq!(cells_filled, 0);
    assert_eq!(reduced, easy_grid_solution());
}

#[test]
fn test_preprocess_solves_easy_puzzle() {
    let puzzle = easy_puzzle();
    let (reduced, cells_filled) = propagator::preprocess(&puzzle);

    assert_eq!(cells_filled, puzzle.blank_count());
    assert!(reduced.is_complete());
    assert!(reduced.no_duplicates());
    assert_eq!(reduced, easy_grid_solution());
}

#[test]
fn test_preprocess_makes_sound_partial_progress() {
    let puzzle = hard_puzzle();
    let (reduced, cells_filled) = propagator::preprocess(&puzzle);

    assert!(reduced.no_duplicates());
    assert_eq!(puzzle.blank_count() - reduced.blank_count(), cells_filled);
    // Every filled deduction keeps the original clues intact.
    for row in 0..9 {
        for col in 0..9 {
            let clue = puzzle.get(row, col);
            if clue != 0 {
                assert_eq!(reduced.get(row, col), clue);
            }
        }
    }
}

fn easy_grid_solution() -> Grid {
    Grid::parse(
        "534678912\
         672195348\
         198342567\
         859761423\
         426853791\
         713924856\
         961537284\
         287419635\
         345286179",
    )
    .unwrap()
}
