//! Run configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the evolutionary
//! loop, with the reference defaults.

use crate::pairing::Pairing;
use std::ops::Range;
use thiserror::Error;

/// Invalid configuration or input data, reported before the loop starts.
///
/// The generational loop itself cannot fail: degenerate selection is
/// recovered locally as an empty generation, never as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mutation_interval must be at least 1")]
    MutationIntervalZero,

    #[error("mutation_scale must be finite, got {0}")]
    NonFiniteMutationScale(f64),

    #[error("coefficient_range must be finite and non-empty, got {start}..{end}")]
    InvalidCoefficientRange { start: f64, end: f64 },

    #[error("data point {index} is not finite: ({x}, {y})")]
    NonFiniteDataPoint { index: usize, x: f64, y: f64 },
}

/// Configuration for an evolutionary run.
///
/// # Defaults
///
/// ```
/// use evo_linfit::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 10);
/// assert_eq!(config.top_k, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evo_linfit::{EvolutionConfig, Pairing};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(50)
///     .with_pairing(Pairing::Adjacent)
///     .with_mutation_scale(0.5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of randomly seeded specimens in generation zero.
    ///
    /// Sizes below 4 select fewer than two breeding parents and collapse
    /// to an empty population after one generation; that degenerate state
    /// is tolerated, not rejected.
    pub population_size: usize,

    /// Number of generational transitions to run.
    pub generations: usize,

    /// Every `mutation_interval`-th pairing has its first child mutated.
    ///
    /// An interval of 1 mutates the first child of every pair; the second
    /// child of a pair is never mutated.
    pub mutation_interval: usize,

    /// Factor applied to both coefficients of a mutated child.
    pub mutation_scale: f64,

    /// Uniform sampling range for seeded coefficients.
    pub coefficient_range: Range<f64>,

    /// How ranked breeding parents are paired for crossover.
    ///
    /// [`Pairing::Circular`] (the default) conserves population size;
    /// [`Pairing::Adjacent`] is the shrinking variant.
    pub pairing: Pairing,

    /// Number of best specimens reported after the final generation.
    pub top_k: usize,

    /// Whether to evaluate specimens in parallel using rayon.
    ///
    /// Ranking is identical either way: evaluation never touches shared
    /// state and the sort runs after all evaluations have completed.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 10,
            mutation_interval: 5,
            mutation_scale: 0.2,
            coefficient_range: 1.0..11.0,
            pairing: Pairing::default(),
            top_k: 5,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation interval (floors at 1).
    pub fn with_mutation_interval(mut self, interval: usize) -> Self {
        self.mutation_interval = interval.max(1);
        self
    }

    /// Sets the mutation scale factor.
    pub fn with_mutation_scale(mut self, scale: f64) -> Self {
        self.mutation_scale = scale;
        self
    }

    /// Sets the coefficient sampling range.
    pub fn with_coefficient_range(mut self, range: Range<f64>) -> Self {
        self.coefficient_range = range;
        self
    }

    /// Sets the pairing policy.
    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// Sets how many top specimens to report.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mutation_interval == 0 {
            return Err(ConfigError::MutationIntervalZero);
        }
        if !self.mutation_scale.is_finite() {
            return Err(ConfigError::NonFiniteMutationScale(self.mutation_scale));
        }
        let range = &self.coefficient_range;
        if !range.start.is_finite() || !range.end.is_finite() || range.start >= range.end {
            return Err(ConfigError::InvalidCoefficientRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(())
    }
}
