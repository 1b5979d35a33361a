//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] orchestrates the complete run: validation →
//! random seeding → fixed-count generational loop → final ranking.

use crate::config::{ConfigError, EvolutionConfig};
use crate::population::Population;
use crate::types::{DataPoint, Objective, Specimen};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best `top_k` specimens of the final generation, best first.
    ///
    /// Empty when the population collapsed before the final ranking.
    pub top: Vec<Specimen>,

    /// Number of generational transitions executed. Lower than the
    /// configured count only when the population collapsed mid-run.
    pub generations: usize,

    /// Best fitness after seeding and after each generation.
    ///
    /// Holds `generations + 1` entries while the population stays
    /// non-empty; recording stops at the collapse otherwise.
    pub fitness_history: Vec<f64>,
}

impl EvolutionResult {
    /// The single best specimen, if any survived to the final ranking.
    pub fn best(&self) -> Option<&Specimen> {
        self.top.first()
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use evo_linfit::{DataPoint, EvolutionConfig, EvolutionRunner, LeastSquares};
///
/// let dataset = [DataPoint::new(4.0, 6.0), DataPoint::new(5.0, 8.0)];
/// let config = EvolutionConfig::default().with_seed(42);
/// let result = EvolutionRunner::run(&LeastSquares, &dataset, &config)?;
/// println!("best: {:?}", result.best());
/// # Ok::<(), evo_linfit::ConfigError>(())
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the full evolution and reports the ranked top specimens.
    ///
    /// The configuration and dataset are validated before seeding;
    /// nothing fails once the loop has started. A population that
    /// collapses mid-run (degenerate selection) ends the run early and
    /// yields an empty result list.
    pub fn run<O: Objective>(
        objective: &O,
        dataset: &[DataPoint],
        config: &EvolutionConfig,
    ) -> Result<EvolutionResult, ConfigError> {
        config.validate()?;
        check_dataset(dataset)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population = Population::seed(config, &mut rng);
        let mut ranked = population.sort_by_fitness(objective, dataset, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        if let Some(best) = ranked.first() {
            fitness_history.push(best.fitness);
        }

        let mut executed = 0;
        for generation in 1..=config.generations {
            population = population.reproduce(objective, dataset, config.parallel);
            executed = generation;
            ranked = population.sort_by_fitness(objective, dataset, config.parallel);
            match ranked.first() {
                Some(best) => {
                    fitness_history.push(best.fitness);
                    log::debug!(
                        "generation {generation}: best fitness {:.6}, {} members",
                        best.fitness,
                        population.len()
                    );
                }
                None => {
                    log::warn!("generation {generation}: population collapsed, ending run early");
                    break;
                }
            }
        }

        let top = ranked.into_iter().take(config.top_k).collect();
        Ok(EvolutionResult {
            top,
            generations: executed,
            fitness_history,
        })
    }
}

/// Rejects non-finite observations before the loop starts.
fn check_dataset(dataset: &[DataPoint]) -> Result<(), ConfigError> {
    for (index, point) in dataset.iter().enumerate() {
        if !point.is_finite() {
            return Err(ConfigError::NonFiniteDataPoint {
                index,
                x: point.x,
                y: point.y,
            });
        }
    }
    Ok(())
}
