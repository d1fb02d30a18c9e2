//! Error types.
//!
//! Setup problems (a malformed data set or invalid tunables) are reported
//! before any colony is built. Once a run starts, evaluation and the genetic
//! operators are total and do not fail.

use thiserror::Error;

/// A data set that violates a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSetError {
    /// Opponent sampling needs at least two teams.
    #[error("at least 2 teams are required, got {0}")]
    TooFewTeams(usize),

    #[error("team `{0}` appears more than once")]
    DuplicateTeam(String),

    #[error("expected one venue per team: {teams} teams but {venues} venues")]
    VenueCountMismatch { teams: usize, venues: usize },

    #[error("home venue `{venue}` of team `{team}` is not in the venue list")]
    MissingHomeVenue { team: String, venue: String },

    #[error("venue `{0}` is the home of more than one team")]
    SharedHomeVenue(String),

    /// The candidate date pool must hold at least `N² + 1` days.
    #[error("at least {required} candidate dates are required, got {actual}")]
    TooFewDates { required: usize, actual: usize },

    #[error("rain probability {probability} for `{venue}` on {date} is outside 0..100")]
    RainOutOfRange {
        date: chrono::NaiveDate,
        venue: String,
        probability: u8,
    },
}

/// An invalid or unreadable evolution configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationSize(usize),

    #[error("colony_size must be in 1..={population}, got {colony}")]
    ColonySize { colony: usize, population: usize },

    #[error("tournament_size must be in 1..={population}, got {tournament}")]
    TournamentSize { tournament: usize, population: usize },

    #[error("mutation_rate must be in [0, 1], got {0}")]
    MutationRate(f64),

    #[error("crossover_rate must be in [0, 1], got {0}")]
    CrossoverRate(f64),

    #[error("culling_rate must be in (0, 1], got {0}")]
    CullingRate(f64),

    #[error("fitness_threshold must be in (0, 1], got {0}")]
    FitnessThreshold(f64),

    #[error("max_generations must be at least 1")]
    MaxGenerations,

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Crate-level error returned by the run entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DataSet(#[from] DataSetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = DataSetError::DuplicateTeam("IndiaTeam".into());
        assert_eq!(err.to_string(), "team `IndiaTeam` appears more than once");

        let err = ConfigError::ColonySize {
            colony: 0,
            population: 10,
        };
        assert_eq!(err.to_string(), "colony_size must be in 1..=10, got 0");
    }

    #[test]
    fn test_wrapping_is_transparent() {
        let err: Error = DataSetError::TooFewTeams(1).into();
        assert_eq!(err.to_string(), "at least 2 teams are required, got 1");
        assert!(matches!(err, Error::DataSet(DataSetError::TooFewTeams(1))));
    }
}
