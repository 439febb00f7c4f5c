pub mod candidate;
pub mod error;
pub mod grid;
pub mod operators;
pub mod population;
pub mod propagator;
pub mod rng;
pub mod solver;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{Result, SolverError};
pub use grid::Grid;
pub use population::Population;
pub use solver::{SolveResult, SolveStatus, Solver, SolverOptions};
