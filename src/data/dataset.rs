//! The static input of a scheduling run.
//!
//! A [`DataSet`] is validated once by its constructor and has no mutators
//! afterwards. Runs share it behind an `Arc`, so every colony reads the same
//! frozen teams, dates and rain table without locking.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rand::Rng;

use super::types::{Team, Venue};
use crate::error::DataSetError;

/// Rain probability (percent, `0..100`) per date and venue.
///
/// Pairs that were never inserted read as a probability of 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RainTable {
    by_date: HashMap<NaiveDate, HashMap<Venue, u8>>,
}

impl RainTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the same probability for every date and venue.
    pub fn uniform(dates: &[NaiveDate], venues: &[Venue], probability: u8) -> Self {
        let mut table = Self::new();
        for &date in dates {
            for venue in venues {
                table.insert(date, venue.clone(), probability);
            }
        }
        table
    }

    /// Sets the probability for one date and venue, replacing any previous value.
    pub fn insert(&mut self, date: NaiveDate, venue: Venue, probability: u8) {
        self.by_date.entry(date).or_default().insert(venue, probability);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_probability(mut self, date: NaiveDate, venue: Venue, probability: u8) -> Self {
        self.insert(date, venue, probability);
        self
    }

    /// Probability of rain at `venue` on `date`.
    pub fn probability(&self, date: NaiveDate, venue: &Venue) -> u8 {
        self.by_date
            .get(&date)
            .and_then(|venues| venues.get(venue))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates over every stored `(date, venue, probability)` entry.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Venue, u8)> + '_ {
        self.by_date
            .iter()
            .flat_map(|(&date, venues)| venues.iter().map(move |(v, &p)| (date, v, p)))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.by_date.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Teams, venues, candidate dates and the rain table for one season.
///
/// # Invariants
///
/// - at least two teams, all distinct;
/// - exactly one venue per team, and every venue is the home of exactly one team;
/// - at least `N² + 1` candidate dates;
/// - every rain probability is below 100.
#[derive(Debug)]
pub struct DataSet {
    teams: Vec<Team>,
    venues: Vec<Venue>,
    dates: Vec<NaiveDate>,
    rain: RainTable,
}

impl DataSet {
    /// Builds a data set, checking every structural invariant.
    pub fn new(
        teams: Vec<Team>,
        venues: Vec<Venue>,
        dates: Vec<NaiveDate>,
        rain: RainTable,
    ) -> Result<Self, DataSetError> {
        let n = teams.len();
        if n < 2 {
            return Err(DataSetError::TooFewTeams(n));
        }

        let mut seen = HashSet::with_capacity(n);
        for team in &teams {
            if !seen.insert(team) {
                return Err(DataSetError::DuplicateTeam(team.name().to_string()));
            }
        }

        if venues.len() != n {
            return Err(DataSetError::VenueCountMismatch {
                teams: n,
                venues: venues.len(),
            });
        }

        let known: HashSet<&Venue> = venues.iter().collect();
        let mut homes = HashSet::with_capacity(n);
        for team in &teams {
            if !known.contains(team.home()) {
                return Err(DataSetError::MissingHomeVenue {
                    team: team.name().to_string(),
                    venue: team.home().name().to_string(),
                });
            }
            if !homes.insert(team.home()) {
                return Err(DataSetError::SharedHomeVenue(team.home().name().to_string()));
            }
        }

        let required = Self::required_dates(n);
        if dates.len() < required {
            return Err(DataSetError::TooFewDates {
                required,
                actual: dates.len(),
            });
        }

        if let Some((date, venue, probability)) = rain.iter().find(|&(_, _, p)| p >= 100) {
            return Err(DataSetError::RainOutOfRange {
                date,
                venue: venue.name().to_string(),
                probability,
            });
        }

        Ok(Self {
            teams,
            venues,
            dates,
            rain,
        })
    }

    /// Builds a data set for `teams` with `N² + 1` consecutive days starting at
    /// `start` and a rain probability drawn uniformly from `0..100` for every
    /// date and home venue.
    pub fn generate<R: Rng>(
        teams: Vec<Team>,
        start: NaiveDate,
        rng: &mut R,
    ) -> Result<Self, DataSetError> {
        let venues: Vec<Venue> = teams.iter().map(|t| t.home().clone()).collect();
        let dates: Vec<NaiveDate> = start
            .iter_days()
            .take(Self::required_dates(teams.len()))
            .collect();

        let mut rain = RainTable::new();
        for &date in &dates {
            for venue in &venues {
                rain.insert(date, venue.clone(), rng.random_range(0..100));
            }
        }

        Self::new(teams, venues, dates, rain)
    }

    /// The four-team demo league used by the command-line driver.
    pub fn sample<R: Rng>(start: NaiveDate, rng: &mut R) -> Result<Self, DataSetError> {
        let teams = [
            ("EnglandTeam", "England"),
            ("IndiaTeam", "India"),
            ("SouthAfricaTeam", "SouthAfrica"),
            ("BangladeshTeam", "Bangladesh"),
        ]
        .into_iter()
        .map(|(team, venue)| Team::new(team, Venue::new(venue)))
        .collect();

        Self::generate(teams, start, rng)
    }

    /// Minimum number of candidate dates for `team_count` teams.
    pub fn required_dates(team_count: usize) -> usize {
        team_count * team_count + 1
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn rain(&self) -> &RainTable {
        &self.rain
    }

    /// Number of teams (`N`).
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of fixtures in a full double round robin, `N·(N−1)`.
    pub fn fixture_count(&self) -> usize {
        let n = self.team_count();
        n * (n - 1)
    }
}
