//! Population state and the generational transition.
//!
//! A [`Population`] is immutable once constructed. [`reproduce`] ranks
//! the current members, truncation-selects the best half, pairs the
//! parents per the configured [`Pairing`] policy, and returns the
//! children as a new `Population` carrying the same evolution parameters.
//!
//! [`reproduce`]: Population::reproduce

use crate::config::EvolutionConfig;
use crate::pairing::Pairing;
use crate::types::{DataPoint, Objective, Specimen};
use rand::Rng;
use rayon::prelude::*;

/// One generation of candidate solutions plus the evolution parameters
/// that produce the next.
#[derive(Debug, Clone)]
pub struct Population {
    mutation_interval: usize,
    mutation_scale: f64,
    pairing: Pairing,
    members: Vec<Specimen>,
}

impl Population {
    /// Builds a population from explicit members and parameters.
    ///
    /// # Panics
    /// Panics if `mutation_interval` is 0 (the mutation schedule is a
    /// modulo over pair indices).
    pub fn new(
        mutation_interval: usize,
        mutation_scale: f64,
        pairing: Pairing,
        members: Vec<Specimen>,
    ) -> Self {
        assert!(mutation_interval >= 1, "mutation_interval must be at least 1");
        Self {
            mutation_interval,
            mutation_scale,
            pairing,
            members,
        }
    }

    /// Seeds generation zero with uniformly random specimens.
    pub fn seed<R: Rng>(config: &EvolutionConfig, rng: &mut R) -> Self {
        let members = (0..config.population_size)
            .map(|_| Specimen::random(rng, &config.coefficient_range))
            .collect();
        Self::new(
            config.mutation_interval,
            config.mutation_scale,
            config.pairing,
            members,
        )
    }

    pub fn members(&self) -> &[Specimen] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Scores every member against `dataset` and returns them ranked
    /// best-first.
    ///
    /// Fitness is recomputed from scratch on every call; the population
    /// itself is left untouched. The sort is stable, so equal-fitness
    /// members keep their insertion order — that is the documented
    /// tie-break. With `parallel` set, evaluation fans out over rayon and
    /// the sort runs after the join, so the ranking is identical to the
    /// sequential one.
    pub fn sort_by_fitness<O: Objective>(
        &self,
        objective: &O,
        dataset: &[DataPoint],
        parallel: bool,
    ) -> Vec<Specimen> {
        let mut scored = self.members.clone();
        if parallel {
            scored
                .par_iter_mut()
                .for_each(|s| s.evaluate(objective, dataset));
        } else {
            for s in scored.iter_mut() {
                s.evaluate(objective, dataset);
            }
        }
        scored.sort_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }

    /// Produces the next generation.
    ///
    /// The best `⌊n/2⌋` ranked members become breeding parents; each pair
    /// contributes two children via [`crossover`], and the first child of
    /// every `mutation_interval`-th pair is mutated. The second child of
    /// a pair is never mutated.
    ///
    /// With fewer than two parents there are no valid pairs and the next
    /// generation is empty; callers tolerate that rather than receiving
    /// an error.
    pub fn reproduce<O: Objective>(
        &self,
        objective: &O,
        dataset: &[DataPoint],
        parallel: bool,
    ) -> Population {
        let ranked = self.sort_by_fitness(objective, dataset, parallel);
        let selected = &ranked[..ranked.len() / 2];

        let mut children = Vec::with_capacity(2 * selected.len());
        for (k, (i, j)) in self.pairing.pairs(selected.len()).into_iter().enumerate() {
            let (mut first, second) = crossover(&selected[i], &selected[j]);
            if k % self.mutation_interval == 0 {
                first = self.mutate(&first);
            }
            children.push(first);
            children.push(second);
        }

        Population {
            mutation_interval: self.mutation_interval,
            mutation_scale: self.mutation_scale,
            pairing: self.pairing,
            members: children,
        }
    }

    /// Deterministic mutation: both coefficients scaled by `mutation_scale`.
    fn mutate(&self, s: &Specimen) -> Specimen {
        Specimen::new(self.mutation_scale * s.c0, self.mutation_scale * s.c1)
    }
}

/// Recombines two parents by swapping slopes.
///
/// The children redistribute the parents' coefficients — `(a.c0, b.c1)`
/// and `(b.c0, a.c1)` — and start unevaluated.
pub fn crossover(a: &Specimen, b: &Specimen) -> (Specimen, Specimen) {
    (Specimen::new(a.c0, b.c1), Specimen::new(b.c0, a.c1))
}
