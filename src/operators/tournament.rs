//! # Tournament Selection
//!
//! Tournament selection works by randomly sampling a small group of
//! candidates (the tournament size) and returning the best one from that
//! group. Smaller tournaments lean toward exploration, larger ones toward
//! exploitation.

use crate::candidate::Candidate;
use crate::error::{Result, SolverError};
use crate::rng::RandomNumberGenerator;

/// A selection strategy that picks candidates through tournament selection.
///
/// # Examples
///
/// ```
/// use gensudoku::candidate::Candidate;
/// use gensudoku::grid::Grid;
/// use gensudoku::operators::Tournament;
/// use gensudoku::rng::RandomNumberGenerator;
///
/// let mut pool = vec![Candidate::new(Grid::empty()), Candidate::new(Grid::empty())];
/// pool[0].fitness = Some(0.4);
/// pool[1].fitness = Some(0.9);
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let winner = Tournament::default().compete(&pool, &mut rng);
/// assert!(winner.is_some());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Tournament {
    tournament_size: usize,
}

impl Tournament {
    /// Creates a tournament of the given size. The size is clamped to the
    /// pool size at competition time.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SolverError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    /// Samples `tournament_size` distinct candidates uniformly without
    /// replacement and returns the one with the highest fitness.
    ///
    /// An unset fitness is treated as negative infinity; ties keep the
    /// first-encountered maximum. Returns `None` on an empty pool.
    pub fn compete<'a>(
        &self,
        pool: &'a [Candidate],
        rng: &mut RandomNumberGenerator,
    ) -> Option<&'a Candidate> {
        if pool.is_empty() {
            return None;
        }

        let size = self.tournament_size.min(pool.len());
        let participants = rng.sample_indices(pool.len(), size);

        let mut best = &pool[participants[0]];
        let mut best_fitness = best.fitness_or_neg_inf();
        for &index in &participants[1..] {
            let participant = &pool[index];
            let fitness = participant.fitness_or_neg_inf();
            if fitness > best_fitness {
                best_fitness = fitness;
                best = participant;
            }
        }
        Some(best)
    }
}

impl Default for Tournament {
    fn default() -> Self {
        // Safe to unwrap because the default size is valid
        Self::new(2).unwrap()
    }
}
