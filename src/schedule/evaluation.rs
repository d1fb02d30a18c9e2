//! Constraint evaluation.
//!
//! Counts violations in seven fixed categories. The pairwise scans for
//! same-day and consecutive-day collisions stop at the first fixture with a
//! different date, so the input must be sorted ascending by date.

use std::collections::HashMap;

use crate::data::{DataSet, Team, Venue};

use super::fixture::Match;

/// Rain probability (percent) above which a fixture counts as rained out.
pub const RAIN_THRESHOLD: u8 = 70;

/// Violation counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViolationReport {
    /// Fixtures played where rain is likely.
    pub weather: u32,
    /// Extra fixtures sharing a date with an earlier one.
    pub same_day: u32,
    /// Fixtures the day after an earlier fixture of the same team.
    pub consecutive_day: u32,
    /// Repeats of an ordered (home, away) pairing.
    pub duplicate_fixture: u32,
    /// Teams not playing exactly `2·(N−1)` fixtures.
    pub appearances: u32,
    /// Venues not hosting exactly `N−1` fixtures.
    pub venue_hosting: u32,
    /// Teams not at home exactly `N−1` times.
    pub home_balance: u32,
}

impl ViolationReport {
    /// Sum over all categories.
    pub fn total(&self) -> u32 {
        self.weather
            + self.same_day
            + self.consecutive_day
            + self.duplicate_fixture
            + self.appearances
            + self.venue_hosting
            + self.home_balance
    }

    /// Fitness for this report, `1 / (1 + total)`.
    pub fn fitness(&self) -> f64 {
        fitness_from_violations(self.total())
    }
}

/// Maps a violation count to a fitness in `(0, 1]`.
pub fn fitness_from_violations(violations: u32) -> f64 {
    1.0 / (1.0 + f64::from(violations))
}

/// Evaluates a date-sorted fixture list against `data`.
pub fn evaluate(matches: &[Match], data: &DataSet) -> ViolationReport {
    debug_assert!(
        matches.windows(2).all(|w| w[0].date() <= w[1].date()),
        "fixtures must be sorted by date before evaluation"
    );

    let mut report = ViolationReport::default();

    let mut appearances: HashMap<&Team, usize> = data.teams().iter().map(|t| (t, 0)).collect();
    let mut home_games: HashMap<&Team, usize> = appearances.clone();
    let mut hosted: HashMap<&Venue, usize> = data.venues().iter().map(|v| (v, 0)).collect();

    for (i, fixture) in matches.iter().enumerate() {
        if data.rain().probability(fixture.date(), fixture.venue()) > RAIN_THRESHOLD {
            report.weather += 1;
        }

        *appearances.entry(fixture.home()).or_default() += 1;
        *appearances.entry(fixture.away()).or_default() += 1;
        *home_games.entry(fixture.home()).or_default() += 1;
        *hosted.entry(fixture.venue()).or_default() += 1;

        let later = &matches[i + 1..];

        report.same_day += later
            .iter()
            .take_while(|m| m.date() == fixture.date())
            .count() as u32;

        if let Some(next_day) = fixture.date().succ_opt() {
            report.consecutive_day += later
                .iter()
                .take_while(|m| m.date() == next_day)
                .filter(|m| fixture.shares_team(m))
                .count() as u32;
        }

        report.duplicate_fixture +=
            later.iter().filter(|m| fixture.same_pairing(m)).count() as u32;
    }

    let n = data.team_count();
    report.appearances = appearances.values().filter(|&&c| c != 2 * (n - 1)).count() as u32;
    report.venue_hosting = hosted.values().filter(|&&c| c != n - 1).count() as u32;
    report.home_balance = home_games.values().filter(|&&c| c != n - 1).count() as u32;

    report
}
