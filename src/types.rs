//! Core value types and the objective seam.
//!
//! [`DataPoint`] and [`Specimen`] are plain value types. [`Objective`] is
//! the pluggable scoring contract; [`LeastSquares`] is the provided
//! sum-of-squared-residuals implementation.

use rand::Rng;
use std::fmt;
use std::ops::Range;

/// One observation `(x, y)` in the training set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A candidate line `y = c1·x + c0` with its accumulated error score.
///
/// Coefficients are fixed at construction. `fitness` starts at
/// `f64::INFINITY` (unevaluated) and is fully recomputed by every call to
/// [`evaluate`](Specimen::evaluate) — scores never carry over between
/// scoring passes. Lower fitness is better (minimization).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Specimen {
    /// Intercept.
    pub c0: f64,
    /// Slope.
    pub c1: f64,
    /// Sum of per-observation errors; meaningless until evaluated.
    pub fitness: f64,
}

impl Specimen {
    /// Creates an unevaluated specimen.
    pub fn new(c0: f64, c1: f64) -> Self {
        Self {
            c0,
            c1,
            fitness: f64::INFINITY,
        }
    }

    /// Creates a specimen with both coefficients drawn uniformly from `range`.
    pub fn random<R: Rng>(rng: &mut R, range: &Range<f64>) -> Self {
        Self::new(
            rng.random_range(range.clone()),
            rng.random_range(range.clone()),
        )
    }

    /// Scores this specimen against the full dataset.
    ///
    /// Replaces `fitness` with the sum of `objective.error` over every
    /// observation. Calling it again recomputes the same value from the
    /// same coefficients; nothing accumulates across calls.
    pub fn evaluate<O: Objective>(&mut self, objective: &O, dataset: &[DataPoint]) {
        self.fitness = dataset
            .iter()
            .map(|p| objective.error(objective.predict(self.c0, self.c1, p.x), p.y))
            .sum();
    }
}

impl fmt::Display for Specimen {
    /// One result line in the reference consumer's format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "c0: {} c1: {} fitness: {}",
            self.c0, self.c1, self.fitness
        )
    }
}

/// Scoring contract for candidate lines.
///
/// The engine treats this as a black box: any `predict`/`error` pair
/// works, as long as the per-observation error is non-negative and grows
/// with worse fit. Errors accumulate additively, so a specimen's fitness
/// is a plain reduction over the dataset — independent per observation
/// and per specimen.
///
/// # Thread Safety
///
/// `Objective` must be `Send + Sync` because evaluation may fan out
/// across a rayon pool.
pub trait Objective: Send + Sync {
    /// Predicted `y` for the coefficient pair at `x`.
    fn predict(&self, c0: f64, c1: f64, x: f64) -> f64;

    /// Per-observation error contribution.
    ///
    /// The default is the squared residual `(observed − predicted)²`.
    fn error(&self, predicted: f64, observed: f64) -> f64 {
        let residual = observed - predicted;
        residual * residual
    }
}

/// Ordinary least-squares objective over the line `y = c1·x + c0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

impl Objective for LeastSquares {
    fn predict(&self, c0: f64, c1: f64, x: f64) -> f64 {
        x * c1 + c0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn line_data() -> Vec<DataPoint> {
        vec![
            DataPoint::new(4.0, 6.0),
            DataPoint::new(5.0, 8.0),
            DataPoint::new(6.0, 10.0),
        ]
    }

    #[test]
    fn test_exact_fit_has_zero_fitness() {
        // y = 2x − 2 passes through every point
        let mut s = Specimen::new(-2.0, 2.0);
        s.evaluate(&LeastSquares, &line_data());
        assert_eq!(s.fitness, 0.0);
    }

    #[test]
    fn test_off_line_fit_is_positive() {
        // shifted up by 2: residual −2 at every point, 3 · 4 = 12
        let mut s = Specimen::new(0.0, 2.0);
        s.evaluate(&LeastSquares, &line_data());
        assert!((s.fitness - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_is_reentrant() {
        let mut s = Specimen::new(1.0, 1.0);
        s.evaluate(&LeastSquares, &line_data());
        let first = s.fitness;
        s.evaluate(&LeastSquares, &line_data());
        assert_eq!(s.fitness, first);
    }

    #[test]
    fn test_unevaluated_specimen_ranks_worst() {
        assert_eq!(Specimen::new(1.0, 1.0).fitness, f64::INFINITY);
    }

    #[test]
    fn test_empty_dataset_scores_zero() {
        let mut s = Specimen::new(3.0, 4.0);
        s.evaluate(&LeastSquares, &[]);
        assert_eq!(s.fitness, 0.0);
    }

    #[test]
    fn test_random_respects_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let s = Specimen::random(&mut rng, &(1.0..11.0));
            assert!(s.c0 >= 1.0 && s.c0 < 11.0);
            assert!(s.c1 >= 1.0 && s.c1 < 11.0);
        }
    }

    #[test]
    fn test_display_line_format() {
        let s = Specimen {
            c0: 1.5,
            c1: 2.0,
            fitness: 0.25,
        };
        assert_eq!(s.to_string(), "c0: 1.5 c1: 2 fitness: 0.25");
    }

    #[test]
    fn test_custom_objective_error() {
        // absolute error instead of the squared default
        struct Absolute;
        impl Objective for Absolute {
            fn predict(&self, c0: f64, c1: f64, x: f64) -> f64 {
                x * c1 + c0
            }
            fn error(&self, predicted: f64, observed: f64) -> f64 {
                (observed - predicted).abs()
            }
        }

        let mut s = Specimen::new(0.0, 2.0);
        s.evaluate(&Absolute, &line_data());
        assert!((s.fitness - 6.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_fitness_is_non_negative(
            c0 in -100.0..100.0f64,
            c1 in -100.0..100.0f64,
            points in proptest::collection::vec((-50.0..50.0f64, -50.0..50.0f64), 0..20),
        ) {
            let dataset: Vec<DataPoint> =
                points.into_iter().map(|(x, y)| DataPoint::new(x, y)).collect();
            let mut s = Specimen::new(c0, c1);
            s.evaluate(&LeastSquares, &dataset);
            prop_assert!(s.fitness >= 0.0);
        }
    }
}
