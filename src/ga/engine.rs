//! One generation step.

use rand::Rng;

use super::config::EvolutionConfig;
use super::operators::{mutate, single_point_crossover};
use super::population::Population;
use super::selection::Tournament;

/// Produces successive generations from a population.
#[derive(Debug, Clone)]
pub struct EvolutionEngine<'a> {
    config: &'a EvolutionConfig,
    tournament: Tournament,
}

impl<'a> EvolutionEngine<'a> {
    pub fn new(config: &'a EvolutionConfig) -> Self {
        Self {
            config,
            tournament: Tournament::new(config.tournament_size, config.culling_rate),
        }
    }

    /// Breeds the next generation from `population`.
    ///
    /// 1. Ranks `population` by fitness (in place).
    /// 2. Selects parent pairs by tournament and appends both children of
    ///    their crossover until the new population holds at least as many
    ///    schedules as the old one. An odd size overshoots by one.
    /// 3. Mutates every child, then restores its date order.
    ///
    /// The returned schedules are not evaluated yet.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn evolve<R: Rng>(&self, population: &mut Population, rng: &mut R) -> Population {
        population.sort_by_fitness();
        let ranked = population.schedules();
        let size = ranked.len();

        let mut next = Population::with_capacity(size + 1);
        while next.len() < size {
            let p1 = &ranked[self.tournament.select(ranked, rng)];
            let p2 = &ranked[self.tournament.select(ranked, rng)];

            let (c1, c2) = if self.recombine(rng) {
                single_point_crossover(p1, p2, rng)
            } else {
                (p1.clone(), p2.clone())
            };
            next.push(c1);
            next.push(c2);
        }

        for child in next.schedules_mut() {
            mutate(child, self.config.mutation_rate, rng);
            child.sort_by_date();
        }

        next
    }

    fn recombine<R: Rng>(&self, rng: &mut R) -> bool {
        !self.config.gate_crossover || rng.random::<f64>() < self.config.crossover_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSet;
    use chrono::NaiveDate;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn setup(size: usize, seed: u64) -> (Population, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let start = NaiveDate::from_ymd_opt(2019, 4, 18).unwrap();
        let data = Arc::new(DataSet::sample(start, &mut rng).unwrap());
        let pop = Population::random(size, &data, &mut rng);
        (pop, rng)
    }

    #[test]
    fn test_even_population_keeps_size() {
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_colony_size(5)
            .with_tournament_size(3);
        let (mut pop, mut rng) = setup(20, 42);

        let next = EvolutionEngine::new(&config).evolve(&mut pop, &mut rng);
        assert_eq!(next.len(), 20);
    }

    #[test]
    fn test_odd_population_overshoots_by_one() {
        let config = EvolutionConfig::default()
            .with_population_size(7)
            .with_colony_size(7)
            .with_tournament_size(2);
        let (mut pop, mut rng) = setup(7, 1);

        let next = EvolutionEngine::new(&config).evolve(&mut pop, &mut rng);
        assert_eq!(next.len(), 8);
    }

    #[test]
    fn test_children_are_date_sorted_and_unevaluated() {
        let config = EvolutionConfig::default()
            .with_population_size(16)
            .with_colony_size(4)
            .with_tournament_size(4)
            .with_mutation_rate(0.3);
        let (mut pop, mut rng) = setup(16, 7);

        let next = EvolutionEngine::new(&config).evolve(&mut pop, &mut rng);
        for child in next.schedules() {
            assert!(child.is_sorted_by_date());
            assert!(!child.is_evaluated());
            assert_eq!(child.len(), 12);
        }
    }

    #[test]
    fn test_input_population_is_ranked() {
        let config = EvolutionConfig::default()
            .with_population_size(12)
            .with_colony_size(4)
            .with_tournament_size(2);
        let (mut pop, mut rng) = setup(12, 9);

        EvolutionEngine::new(&config).evolve(&mut pop, &mut rng);
        for pair in pop.schedules().windows(2) {
            assert!(pair[0].violations() <= pair[1].violations());
        }
    }

    #[test]
    fn test_gated_crossover_at_zero_copies_parents() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_colony_size(5)
            .with_tournament_size(2)
            .with_mutation_rate(0.0)
            .with_gate_crossover(true)
            .with_crossover_rate(0.0);
        let (mut pop, mut rng) = setup(10, 11);

        let next = EvolutionEngine::new(&config).evolve(&mut pop, &mut rng);
        for child in next.schedules() {
            assert!(pop
                .schedules()
                .iter()
                .any(|parent| parent.matches() == child.matches()));
        }
    }
}
