//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds every tunable of a run and is passed explicitly
//! to the engine and the runner.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the fixture search.
///
/// # Defaults
///
/// ```
/// use fixture_ga::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.colony_size, 25);
/// assert_eq!(config.fitness_threshold, 0.5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use fixture_ga::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_colony_size(50)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.02);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Loading
///
/// Configurations deserialize from JSON. Keys that are absent keep their
/// default value.
///
/// ```
/// use fixture_ga::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::from_json(r#"{ "population_size": 40 }"#).unwrap();
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.tournament_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of schedules in the population.
    pub population_size: usize,

    /// Largest population slice built by a single bootstrap task.
    ///
    /// The initial population is split in halves until each part fits.
    pub colony_size: usize,

    /// Number of schedules drawn per tournament.
    pub tournament_size: usize,

    /// Per-gene probability of replacement during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// Only consulted when [`gate_crossover`](Self::gate_crossover) is set.
    pub crossover_rate: f64,

    /// Whether crossover is applied with probability `crossover_rate`.
    ///
    /// When `false` every selected pair is recombined.
    pub gate_crossover: bool,

    /// Fraction of the ranked population tournaments draw from (0.0 exclusive–1.0).
    ///
    /// Lower values restrict parents to the fittest schedules.
    pub culling_rate: f64,

    /// Fitness at which the search stops.
    ///
    /// `0.5` stops once the best schedule has at most one violation.
    pub fitness_threshold: f64,

    /// Maximum number of generations before giving up.
    pub max_generations: usize,

    /// Whether bootstrap colonies are built on the rayon thread pool.
    pub parallel: bool,

    /// Random seed.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            colony_size: 25,
            tournament_size: 10,
            mutation_rate: 0.015,
            crossover_rate: 0.5,
            gate_crossover: false,
            culling_rate: 0.5,
            fitness_threshold: 0.5,
            max_generations: 10_000,
            parallel: true,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the colony size.
    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables crossover gating.
    pub fn with_gate_crossover(mut self, gate: bool) -> Self {
        self.gate_crossover = gate;
        self
    }

    /// Sets the culling rate.
    pub fn with_culling_rate(mut self, rate: f64) -> Self {
        self.culling_rate = rate.clamp(f64::MIN_POSITIVE, 1.0);
        self
    }

    /// Sets the fitness threshold.
    pub fn with_fitness_threshold(mut self, threshold: f64) -> Self {
        self.fitness_threshold = threshold;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables the parallel bootstrap.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reads a configuration file, falling back to the defaults when it is
    /// missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using default configuration");
                Self::default()
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationSize(self.population_size));
        }
        if self.colony_size == 0 || self.colony_size > self.population_size {
            return Err(ConfigError::ColonySize {
                colony: self.colony_size,
                population: self.population_size,
            });
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                tournament: self.tournament_size,
                population: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::CrossoverRate(self.crossover_rate));
        }
        if !(self.culling_rate > 0.0 && self.culling_rate <= 1.0) {
            return Err(ConfigError::CullingRate(self.culling_rate));
        }
        if !(self.fitness_threshold > 0.0 && self.fitness_threshold <= 1.0) {
            return Err(ConfigError::FitnessThreshold(self.fitness_threshold));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::MaxGenerations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.colony_size, 25);
        assert_eq!(config.tournament_size, 10);
        assert!((config.mutation_rate - 0.015).abs() < 1e-10);
        assert!((config.crossover_rate - 0.5).abs() < 1e-10);
        assert!(!config.gate_crossover);
        assert!((config.culling_rate - 0.5).abs() < 1e-10);
        assert!((config.fitness_threshold - 0.5).abs() < 1e-10);
        assert_eq!(config.max_generations, 10_000);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(200)
            .with_colony_size(40)
            .with_tournament_size(4)
            .with_mutation_rate(0.05)
            .with_crossover_rate(0.8)
            .with_gate_crossover(true)
            .with_culling_rate(0.25)
            .with_fitness_threshold(1.0)
            .with_max_generations(50)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.colony_size, 40);
        assert_eq!(config.tournament_size, 4);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!(config.gate_crossover);
        assert!((config.culling_rate - 0.25).abs() < 1e-10);
        assert!((config.fitness_threshold - 1.0).abs() < 1e-10);
        assert_eq!(config.max_generations, 50);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_rates() {
        let config = EvolutionConfig::default()
            .with_mutation_rate(2.0)
            .with_crossover_rate(-0.5)
            .with_culling_rate(0.0);

        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!(config.culling_rate > 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = EvolutionConfig::default()
            .with_population_size(1)
            .with_colony_size(1)
            .with_tournament_size(1);
        assert!(matches!(config.validate(), Err(ConfigError::PopulationSize(1))));
    }

    #[test]
    fn test_validate_colony_size() {
        let config = EvolutionConfig::default().with_colony_size(0);
        assert!(matches!(config.validate(), Err(ConfigError::ColonySize { .. })));

        let config = EvolutionConfig::default().with_colony_size(101);
        assert!(matches!(config.validate(), Err(ConfigError::ColonySize { .. })));
    }

    #[test]
    fn test_validate_tournament_size() {
        let config = EvolutionConfig::default().with_tournament_size(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TournamentSize { .. })
        ));

        let config = EvolutionConfig::default().with_tournament_size(101);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TournamentSize { .. })
        ));
    }

    #[test]
    fn test_validate_raw_fields() {
        let config = EvolutionConfig {
            culling_rate: 0.0,
            ..EvolutionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::CullingRate(_))));

        let config = EvolutionConfig {
            mutation_rate: f64::NAN,
            ..EvolutionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::MutationRate(_))));

        let config = EvolutionConfig::default().with_fitness_threshold(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FitnessThreshold(_))
        ));

        let config = EvolutionConfig::default().with_max_generations(0);
        assert!(matches!(config.validate(), Err(ConfigError::MaxGenerations)));
    }

    #[test]
    fn test_json_partial_keys_keep_defaults() {
        let config = EvolutionConfig::from_json(
            r#"{ "population_size": 8, "colony_size": 2, "mutation_rate": 0.05, "seed": 7 }"#,
        )
        .unwrap();
        assert_eq!(config.population_size, 8);
        assert_eq!(config.colony_size, 2);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tournament_size, 10);
        assert_eq!(config.max_generations, 10_000);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EvolutionConfig::default().with_seed(3).with_gate_crossover(true);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EvolutionConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_malformed() {
        let err = EvolutionConfig::from_json(r#"{ "population_size": "many" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EvolutionConfig::load_or_default("does/not/exist/scheduling.json");
        assert_eq!(config, EvolutionConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("fixture-ga-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "tournament_size": 3, "culling_rate": 0.75 }"#).unwrap();

        let config = EvolutionConfig::load_or_default(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.tournament_size, 3);
        assert!((config.culling_rate - 0.75).abs() < 1e-10);
    }
}
