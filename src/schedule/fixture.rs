//! A single fixture.

use std::fmt;

use chrono::NaiveDate;

use crate::data::{Team, Venue};

/// Date format used when printing fixtures (`MM/DD/YYYY`).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Width that team names are padded to in the fixture table.
const TEAM_COLUMN_WIDTH: usize = 30;

/// One match: `home` hosts `away` at `venue` on `date`.
///
/// Randomly generated fixtures are always played at the home team's venue
/// (see [`Match::hosted`]). [`Match::new`] accepts any venue so hand-written
/// schedules can express venue imbalance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    date: NaiveDate,
    home: Team,
    away: Team,
    venue: Venue,
}

impl Match {
    /// Creates a fixture at an explicit venue.
    pub fn new(date: NaiveDate, home: Team, away: Team, venue: Venue) -> Self {
        Self {
            date,
            home,
            away,
            venue,
        }
    }

    /// Creates a fixture at the home team's venue.
    pub fn hosted(date: NaiveDate, home: Team, away: Team) -> Self {
        let venue = home.home().clone();
        Self::new(date, home, away, venue)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// Returns `true` if both fixtures have the same ordered (home, away) pair.
    pub fn same_pairing(&self, other: &Match) -> bool {
        self.home == other.home && self.away == other.away
    }

    /// Returns `true` if any team plays in both fixtures.
    pub fn shares_team(&self, other: &Match) -> bool {
        self.away == other.away
            || self.away == other.home
            || self.home == other.home
            || self.home == other.away
    }
}

impl fmt::Display for Match {
    /// Formats as one tab-separated table row: date, home, away, venue.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t|\t{:<width$}\t|\t{:<width$}\t|\t{}",
            self.date.format(DATE_FORMAT),
            self.home.name(),
            self.away.name(),
            self.venue,
            width = TEAM_COLUMN_WIDTH
        )
    }
}
