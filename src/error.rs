//! # Error Types
//!
//! This module defines custom error types for the solver library. It provides
//! specific error variants for the failure scenarios that may occur while
//! loading a puzzle, seeding a population, or running the evolutionary loop.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use gensudoku::error::{SolverError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the solver library.
///
/// This enum provides specific error variants for different failure scenarios
/// that may occur while preparing or running a solve.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a puzzle grid is malformed or contaminated.
    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),

    /// Error that occurs when the population seeder cannot build a valid
    /// row permutation within its attempt budget.
    #[error("Seeding error: {0}")]
    Seeding(String),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `SolverError`.
///
/// ## Examples
///
/// ```rust
/// use gensudoku::error::{SolverError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SolverError>;
