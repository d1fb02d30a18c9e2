//! The candidate solution.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use super::evaluation::{self, ViolationReport};
use super::fixture::Match;
use crate::data::DataSet;

/// One candidate season: an ordered list of fixtures plus cached evaluation.
///
/// # Date ordering
///
/// The evaluator's collision scans assume fixtures are sorted ascending by
/// date. [`Schedule::random`] and [`Schedule::from_matches`] sort on
/// construction. The genetic operators write genes by index and leave the
/// result unsorted; callers restore the order with
/// [`sort_by_date`](Schedule::sort_by_date) before evaluating, as the
/// evolution engine does.
///
/// # Caching
///
/// [`evaluate`](Schedule::evaluate) stores the violation breakdown. Every
/// operation that changes a fixture discards it, so [`fitness`](Schedule::fitness)
/// and [`violations`](Schedule::violations) never report a stale value.
#[derive(Clone)]
pub struct Schedule {
    data: Arc<DataSet>,
    matches: Vec<Match>,
    report: Option<ViolationReport>,
}

impl Schedule {
    /// Creates a random schedule of `N·(N−1)` fixtures.
    ///
    /// Each fixture picks a uniformly random home team, an opponent
    /// rejection-sampled until it differs from the home team, and a uniformly
    /// random candidate date, and is played at the home team's venue.
    pub fn random<R: Rng>(data: Arc<DataSet>, rng: &mut R) -> Self {
        let teams = data.teams();
        let dates = data.dates();
        let n = teams.len();

        let mut matches = Vec::with_capacity(data.fixture_count());
        for _ in 0..data.fixture_count() {
            let home = &teams[rng.random_range(0..n)];
            let away = loop {
                let candidate = &teams[rng.random_range(0..n)];
                if candidate != home {
                    break candidate;
                }
            };
            let date = dates[rng.random_range(0..dates.len())];
            matches.push(Match::hosted(date, home.clone(), away.clone()));
        }

        Self::from_matches(data, matches)
    }

    /// Creates a schedule from explicit fixtures, sorting them by date.
    pub fn from_matches(data: Arc<DataSet>, matches: Vec<Match>) -> Self {
        let mut schedule = Self::from_genes(data, matches);
        schedule.sort_by_date();
        schedule
    }

    /// Creates a schedule keeping the fixture order as given.
    pub(crate) fn from_genes(data: Arc<DataSet>, matches: Vec<Match>) -> Self {
        Self {
            data,
            matches,
            report: None,
        }
    }

    pub fn data(&self) -> &Arc<DataSet> {
        &self.data
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Number of fixtures.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Replaces the fixture at `index`. The schedule may no longer be sorted.
    pub(crate) fn set_gene(&mut self, index: usize, fixture: Match) {
        self.matches[index] = fixture;
        self.report = None;
    }

    /// Stable sort of the fixtures by date.
    pub fn sort_by_date(&mut self) {
        if !self.is_sorted_by_date() {
            self.matches.sort_by_key(Match::date);
            self.report = None;
        }
    }

    pub fn is_sorted_by_date(&self) -> bool {
        self.matches.windows(2).all(|w| w[0].date() <= w[1].date())
    }

    /// Recomputes and caches the violation breakdown, returning the fitness.
    pub fn evaluate(&mut self) -> f64 {
        let report = evaluation::evaluate(&self.matches, &self.data);
        self.report = Some(report);
        report.fitness()
    }

    /// Violation breakdown, from the cache when it is current.
    pub fn report(&self) -> ViolationReport {
        self.report
            .unwrap_or_else(|| evaluation::evaluate(&self.matches, &self.data))
    }

    /// Total violation count.
    pub fn violations(&self) -> u32 {
        self.report().total()
    }

    /// `1 / (1 + violations)`, in `(0, 1]`.
    pub fn fitness(&self) -> f64 {
        self.report().fitness()
    }

    /// Returns `true` if a current evaluation is cached.
    pub fn is_evaluated(&self) -> bool {
        self.report.is_some()
    }
}

impl fmt::Debug for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schedule")
            .field("matches", &self.matches)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}
