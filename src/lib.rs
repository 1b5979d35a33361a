//! Evolutionary fitting of two-coefficient linear models.
//!
//! Fits `y = c1·x + c0` to a fixed set of observations with a genetic
//! search instead of a closed-form or gradient-based solver: truncation
//! selection keeps the best half of every generation, ranked neighbors
//! recombine by swapping slopes, and a deterministic scaling mutation
//! perturbs a configurable fraction of the offspring.
//!
//! # Core Types
//!
//! - [`DataPoint`]: one `(x, y)` observation
//! - [`Specimen`]: a candidate coefficient pair with its error score
//! - [`Objective`]: the pluggable scoring contract; [`LeastSquares`] is
//!   the provided sum-of-squared-residuals implementation
//! - [`Population`]: one generation plus the parameters producing the next
//! - [`EvolutionConfig`], [`EvolutionRunner`], [`EvolutionResult`]:
//!   parameters, loop execution, and the ranked report
//!
//! # Examples
//!
//! ```
//! use evo_linfit::{DataPoint, EvolutionConfig, EvolutionRunner, LeastSquares};
//!
//! // y = 2x − 2, exactly
//! let dataset = [
//!     DataPoint::new(4.0, 6.0),
//!     DataPoint::new(5.0, 8.0),
//!     DataPoint::new(6.0, 10.0),
//! ];
//!
//! let config = EvolutionConfig::default().with_seed(42);
//! let result = EvolutionRunner::run(&LeastSquares, &dataset, &config)?;
//!
//! for specimen in &result.top {
//!     println!("{specimen}");
//! }
//! # Ok::<(), evo_linfit::ConfigError>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod pairing;
mod population;
mod runner;
mod types;

pub use config::{ConfigError, EvolutionConfig};
pub use pairing::Pairing;
pub use population::{crossover, Population};
pub use runner::{EvolutionResult, EvolutionRunner};
pub use types::{DataPoint, LeastSquares, Objective, Specimen};
