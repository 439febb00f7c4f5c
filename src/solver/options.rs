//! # SolverOptions
//!
//! The `SolverOptions` struct represents the configuration of the
//! evolutionary loop: population size, elite fraction, generation budget,
//! and the adaptive mutation-rate controller parameters.
//!
//! ## Example
//!
//! ```rust
//! use gensudoku::solver::SolverOptions;
//!
//! let options = SolverOptions::builder()
//!     .population_size(200)
//!     .max_generations(500)
//!     .initial_mutation_rate(0.1)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{Result, SolverError};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SolverOptions {
    population_size: usize,
    elite_fraction: f64,
    max_generations: usize,
    initial_mutation_rate: f64,
    min_mutation_rate: f64,
    max_mutation_rate: f64,
    mutation_rate_step: f64,
    /// Upper edge of the acceptable median-fitness band, as a ratio of the
    /// generation's maximum fitness.
    median_upper_ratio: f64,
    /// Lower edge of the acceptable median-fitness band.
    median_lower_ratio: f64,
}

impl SolverOptions {
    /// Returns a builder for creating a `SolverOptions` instance.
    pub fn builder() -> SolverOptionsBuilder {
        SolverOptionsBuilder::default()
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn initial_mutation_rate(&self) -> f64 {
        self.initial_mutation_rate
    }

    pub fn min_mutation_rate(&self) -> f64 {
        self.min_mutation_rate
    }

    pub fn max_mutation_rate(&self) -> f64 {
        self.max_mutation_rate
    }

    pub fn mutation_rate_step(&self) -> f64 {
        self.mutation_rate_step
    }

    pub fn median_upper_ratio(&self) -> f64 {
        self.median_upper_ratio
    }

    pub fn median_lower_ratio(&self) -> f64 {
        self.median_lower_ratio
    }

    pub fn elite_fraction(&self) -> f64 {
        self.elite_fraction
    }

    /// The number of candidates carried unconditionally into the next
    /// generation. The count is forced even (by decrementing) whenever the
    /// non-elite remainder would be nonzero.
    pub fn elite_count(&self) -> usize {
        let mut count = (self.elite_fraction * self.population_size as f64) as usize;
        if count % 2 != 0 && self.population_size > count {
            count = count.saturating_sub(1);
        }
        count
    }

    /// Checks the options for consistency.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Configuration` describing the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SolverError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.max_generations == 0 {
            return Err(SolverError::Configuration(
                "Generation budget cannot be zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(SolverError::Configuration(format!(
                "Elite fraction must be within [0, 1], got {}",
                self.elite_fraction
            )));
        }
        for (name, rate) in [
            ("initial mutation rate", self.initial_mutation_rate),
            ("minimum mutation rate", self.min_mutation_rate),
            ("maximum mutation rate", self.max_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(SolverError::Configuration(format!(
                    "The {} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }
        if self.min_mutation_rate > self.max_mutation_rate {
            return Err(SolverError::Configuration(
                "Minimum mutation rate exceeds the maximum".to_string(),
            ));
        }
        if self.mutation_rate_step < 0.0 {
            return Err(SolverError::Configuration(
                "Mutation rate step cannot be negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.median_upper_ratio)
            || !(0.0..=1.0).contains(&self.median_lower_ratio)
        {
            return Err(SolverError::Configuration(
                "Median-fitness band ratios must be within [0, 1]".to_string(),
            ));
        }
        if self.median_lower_ratio > self.median_upper_ratio {
            return Err(SolverError::Configuration(
                "Median-fitness lower ratio exceeds the upper ratio".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_fraction: 0.05,
            max_generations: 1000,
            initial_mutation_rate: 0.06,
            min_mutation_rate: 0.01,
            max_mutation_rate: 0.3,
            mutation_rate_step: 0.005,
            median_upper_ratio: 0.9,
            median_lower_ratio: 0.7,
        }
    }
}

/// Builder for `SolverOptions`.
///
/// Provides a fluent interface for constructing `SolverOptions` instances;
/// unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct SolverOptionsBuilder {
    population_size: Option<usize>,
    elite_fraction: Option<f64>,
    max_generations: Option<usize>,
    initial_mutation_rate: Option<f64>,
    min_mutation_rate: Option<f64>,
    max_mutation_rate: Option<f64>,
    mutation_rate_step: Option<f64>,
    median_upper_ratio: Option<f64>,
    median_lower_ratio: Option<f64>,
}

impl SolverOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the elite fraction.
    pub fn elite_fraction(mut self, value: f64) -> Self {
        self.elite_fraction = Some(value);
        self
    }

    /// Sets the generation budget.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the initial mutation rate.
    pub fn initial_mutation_rate(mut self, value: f64) -> Self {
        self.initial_mutation_rate = Some(value);
        self
    }

    /// Sets the minimum mutation rate.
    pub fn min_mutation_rate(mut self, value: f64) -> Self {
        self.min_mutation_rate = Some(value);
        self
    }

    /// Sets the maximum mutation rate.
    pub fn max_mutation_rate(mut self, value: f64) -> Self {
        self.max_mutation_rate = Some(value);
        self
    }

    /// Sets the mutation rate adjustment step.
    pub fn mutation_rate_step(mut self, value: f64) -> Self {
        self.mutation_rate_step = Some(value);
        self
    }

    /// Sets the upper edge ratio of the acceptable median-fitness band.
    pub fn median_upper_ratio(mut self, value: f64) -> Self {
        self.median_upper_ratio = Some(value);
        self
    }

    /// Sets the lower edge ratio of the acceptable median-fitness band.
    pub fn median_lower_ratio(mut self, value: f64) -> Self {
        self.median_lower_ratio = Some(value);
        self
    }

    /// Builds the `SolverOptions` instance.
    pub fn build(self) -> SolverOptions {
        let defaults = SolverOptions::default();
        SolverOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            elite_fraction: self.elite_fraction.unwrap_or(defaults.elite_fraction),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            initial_mutation_rate: self
                .initial_mutation_rate
                .unwrap_or(defaults.initial_mutation_rate),
            min_mutation_rate: self.min_mutation_rate.unwrap_or(defaults.min_mutation_rate),
            max_mutation_rate: self.max_mutation_rate.unwrap_or(defaults.max_mutation_rate),
            mutation_rate_step: self
                .mutation_rate_step
                .unwrap_or(defaults.mutation_rate_step),
            median_upper_ratio: self
                .median_upper_ratio
                .unwrap_or(defaults.median_upper_ratio),
            median_lower_ratio: self
                .median_lower_ratio
                .unwrap_or(defaults.median_lower_ratio),
        }
    }
}
