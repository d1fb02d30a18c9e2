//! Search orchestration.
//!
//! [`FixtureRunner`] drives a complete search:
//! parallel colony bootstrap → merge → evolve → rank → repeat until the best
//! schedule reaches the fitness threshold or the generation cap.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::config::EvolutionConfig;
use super::engine::EvolutionEngine;
use super::population::Population;
use crate::data::DataSet;
use crate::error::Error;
use crate::report;
use crate::schedule::{Schedule, ViolationReport};

/// Fitness summary of one ranked generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation number; 0 is the bootstrapped population.
    pub generation: usize,
    pub best_fitness: f64,
    pub best_violations: u32,
    pub worst_fitness: f64,
    pub worst_violations: u32,
}

impl GenerationStats {
    fn of(generation: usize, ranked: &Population) -> Option<Self> {
        let best = ranked.best()?;
        let worst = ranked.worst()?;
        Some(Self {
            generation,
            best_fitness: best.fitness(),
            best_violations: best.violations(),
            worst_fitness: worst.fitness(),
            worst_violations: worst.violations(),
        })
    }
}

/// Result of a search.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The fittest schedule of the final generation.
    pub best: Schedule,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Violation breakdown of `best`.
    pub violations: ViolationReport,

    /// Number of generations evolved after the bootstrap.
    pub generations: usize,

    /// Whether `best` reached the fitness threshold.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Statistics for the bootstrap population and every generation after it.
    pub history: Vec<GenerationStats>,
}

/// Executes the fixture search.
///
/// # Usage
///
/// ```no_run
/// use std::sync::Arc;
/// use chrono::Local;
/// use fixture_ga::data::DataSet;
/// use fixture_ga::ga::{EvolutionConfig, FixtureRunner};
///
/// let data = Arc::new(DataSet::sample(Local::now().date_naive(), &mut rand::rng())?);
/// let config = EvolutionConfig::default().with_seed(42);
/// let result = FixtureRunner::run(data, &config)?;
/// println!("best fitness: {:.5}", result.best_fitness);
/// # Ok::<(), fixture_ga::Error>(())
/// ```
pub struct FixtureRunner;

impl FixtureRunner {
    /// Runs the search.
    pub fn run(data: Arc<DataSet>, config: &EvolutionConfig) -> Result<RunResult, Error> {
        Self::run_with_cancel(data, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search stops
    /// before the next generation and returns the best schedule found so far.
    pub fn run_with_cancel(
        data: Arc<DataSet>,
        config: &EvolutionConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult, Error> {
        config.validate()?;

        let mut population = Self::bootstrap(&data, config);
        population.sort_by_fitness();

        let mut rng = loop_rng(config.seed);
        let engine = EvolutionEngine::new(config);

        let mut history = Vec::new();
        record(&mut history, 0, &population);

        let mut generation = 0;
        let mut cancelled = false;

        while best_fitness(&population) < config.fitness_threshold
            && generation < config.max_generations
        {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population = engine.evolve(&mut population, &mut rng);
            population.sort_by_fitness();
            generation += 1;
            record(&mut history, generation, &population);
        }

        let best = population
            .into_schedules()
            .into_iter()
            .next()
            .expect("validated population is never empty");
        let best_fitness = best.fitness();

        Ok(RunResult {
            violations: best.report(),
            converged: best_fitness >= config.fitness_threshold,
            best_fitness,
            best,
            generations: generation,
            cancelled,
            history,
        })
    }

    /// Builds the initial population of `config.population_size` schedules.
    ///
    /// The index range is halved recursively until each part is at most
    /// `config.colony_size` long; each part is built as an independent colony
    /// with its own random generator, and sibling colonies are concatenated
    /// once both are done. With `config.parallel` the halves run on the rayon
    /// thread pool.
    pub fn bootstrap(data: &Arc<DataSet>, config: &EvolutionConfig) -> Population {
        let colony_size = config.colony_size.max(1);
        let population = build_colonies(data, 0..config.population_size, colony_size, config);
        tracing::info!(
            size = population.len(),
            colony_size,
            "bootstrapped population"
        );
        population
    }
}

fn build_colonies(
    data: &Arc<DataSet>,
    range: Range<usize>,
    colony_size: usize,
    config: &EvolutionConfig,
) -> Population {
    if range.len() <= colony_size {
        let mut rng = colony_rng(config.seed, range.start);
        tracing::debug!(start = range.start, size = range.len(), "building colony");
        return Population::random(range.len(), data, &mut rng);
    }

    let mid = range.start + range.len() / 2;
    let (left, right) = (range.start..mid, mid..range.end);
    let (first, second) = join(
        config.parallel,
        || build_colonies(data, left, colony_size, config),
        || build_colonies(data, right, colony_size, config),
    );
    Population::merge(first, second)
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(_parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// Independent generator for the colony starting at `offset`.
fn colony_rng(seed: Option<u64>, offset: usize) -> SmallRng {
    match seed {
        Some(seed) => {
            SmallRng::seed_from_u64(seed ^ (offset as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Generator for the generational loop, on a stream no colony uses.
fn loop_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed ^ 0xD1B5_4A32_D192_ED03),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Logs a ranked generation and appends its statistics to `history`.
fn record(history: &mut Vec<GenerationStats>, generation: usize, ranked: &Population) {
    if let Some(stats) = GenerationStats::of(generation, ranked) {
        tracing::info!("{}", report::generation_summary(&stats));
        history.push(stats);
    }
    if let Some(best) = ranked.best() {
        tracing::debug!("best schedule:\n{}", report::schedule_table(best));
    }
}

fn best_fitness(ranked: &Population) -> f64 {
    ranked.best().map_or(0.0, Schedule::fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{RainTable, Team, Venue};
    use crate::error::ConfigError;
    use chrono::NaiveDate;

    fn sample_data(seed: u64) -> Arc<DataSet> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let start = NaiveDate::from_ymd_opt(2019, 4, 18).unwrap();
        Arc::new(DataSet::sample(start, &mut rng).unwrap())
    }

    /// Two teams and five dry days: a perfect schedule exists and is easy to find.
    fn two_team_data() -> Arc<DataSet> {
        let venues = vec![Venue::new("North"), Venue::new("South")];
        let teams = vec![
            Team::new("Northerners", venues[0].clone()),
            Team::new("Southerners", venues[1].clone()),
        ];
        let dates: Vec<NaiveDate> = NaiveDate::from_ymd_opt(2020, 6, 1)
            .unwrap()
            .iter_days()
            .take(5)
            .collect();
        let rain = RainTable::uniform(&dates, &venues, 0);
        Arc::new(DataSet::new(teams, venues, dates, rain).unwrap())
    }

    #[test]
    fn test_bootstrap_exact_size() {
        let data = sample_data(1);
        for (population, colony) in [(2, 1), (10, 3), (17, 4), (64, 8), (33, 33), (100, 7)] {
            let config = EvolutionConfig::default()
                .with_population_size(population)
                .with_colony_size(colony)
                .with_tournament_size(1)
                .with_seed(5);
            let pop = FixtureRunner::bootstrap(&data, &config);
            assert_eq!(pop.len(), population, "population {population}, colony {colony}");
            assert!(pop.schedules().iter().all(|s| s.len() == 12));
        }
    }

    #[test]
    fn test_seeded_bootstrap_is_reproducible_across_modes() {
        let data = sample_data(2);
        let config = EvolutionConfig::default()
            .with_population_size(40)
            .with_colony_size(6)
            .with_seed(99);

        let parallel = FixtureRunner::bootstrap(&data, &config);
        let sequential = FixtureRunner::bootstrap(&data, &config.clone().with_parallel(false));

        for (a, b) in parallel.schedules().iter().zip(sequential.schedules()) {
            assert_eq!(a.matches(), b.matches());
        }
    }

    #[test]
    fn test_colonies_use_distinct_generators() {
        let data = sample_data(3);
        let config = EvolutionConfig::default()
            .with_population_size(4)
            .with_colony_size(1)
            .with_tournament_size(1)
            .with_seed(17);

        let pop = FixtureRunner::bootstrap(&data, &config);
        let first = pop.schedules()[0].matches();
        assert!(pop.schedules()[1..].iter().any(|s| s.matches() != first));
    }

    #[test]
    fn test_loop_stream_differs_from_colony_streams() {
        use rand::RngCore;

        let draws = |mut rng: SmallRng| -> Vec<u64> { (0..8).map(|_| rng.next_u64()).collect() };
        let main = draws(loop_rng(Some(42)));
        for offset in [0, 1, 25, 50] {
            assert_ne!(main, draws(colony_rng(Some(42), offset)), "offset {offset}");
        }
        assert_eq!(main, draws(loop_rng(Some(42))));
    }

    #[test]
    fn test_bootstrap_generation_is_recorded() {
        let data = sample_data(8);
        let config = EvolutionConfig::default()
            .with_population_size(12)
            .with_colony_size(4)
            .with_seed(8);
        let mut pop = FixtureRunner::bootstrap(&data, &config);
        pop.sort_by_fitness();

        let mut history = Vec::new();
        record(&mut history, 0, &pop);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].generation, 0);
        assert_eq!(history[0].best_violations, pop.best().unwrap().violations());
        assert_eq!(history[0].worst_violations, pop.worst().unwrap().violations());

        record(&mut history, 1, &Population::default());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_converges_on_two_teams() {
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_colony_size(5)
            .with_tournament_size(3)
            .with_max_generations(500)
            .with_seed(42);

        let result = FixtureRunner::run(two_team_data(), &config).unwrap();
        assert!(result.converged);
        assert!(result.best_fitness >= 0.5);
        assert!(result.violations.total() <= 1);
        assert!(!result.cancelled);
        assert_eq!(result.history.len(), result.generations + 1);
    }

    #[test]
    fn test_generation_cap_terminates() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_colony_size(5)
            .with_tournament_size(2)
            .with_fitness_threshold(1.0)
            .with_max_generations(3)
            .with_parallel(false)
            .with_seed(7);

        let result = FixtureRunner::run(sample_data(4), &config).unwrap();
        assert!(result.generations <= 3);
        if !result.converged {
            assert_eq!(result.generations, 3);
        }
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.best_fitness >= stats.worst_fitness);
            assert!(stats.best_violations <= stats.worst_violations);
        }
    }

    #[test]
    fn test_cancellation_before_first_generation() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_colony_size(5)
            .with_tournament_size(2)
            .with_fitness_threshold(1.0)
            .with_seed(3);
        let cancel = Arc::new(AtomicBool::new(true));

        let result = FixtureRunner::run_with_cancel(sample_data(5), &config, Some(cancel)).unwrap();
        if !result.converged {
            assert!(result.cancelled);
            assert_eq!(result.generations, 0);
        }
        assert_eq!(result.best.len(), 12);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EvolutionConfig::default().with_colony_size(0);
        let err = FixtureRunner::run(sample_data(6), &config).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ColonySize { .. })));
    }
}
