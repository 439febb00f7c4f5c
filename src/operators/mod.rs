//! # Genetic Operators
//!
//! The stochastic operators driving the evolutionary search: tournament
//! selection, row-wise cycle crossover, and the bounded local swap mutation.

pub mod crossover;
pub mod mutation;
pub mod tournament;

pub use crossover::CycleCrossover;
pub use mutation::mutate;
pub use tournament::Tournament;
