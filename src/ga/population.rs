//! Populations of candidate schedules.

use std::sync::Arc;

use rand::Rng;

use crate::data::DataSet;
use crate::schedule::Schedule;

/// An exclusively owned collection of schedules.
#[derive(Debug, Clone, Default)]
pub struct Population {
    schedules: Vec<Schedule>,
}

impl Population {
    /// Creates an empty population with room for `capacity` schedules.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            schedules: Vec::with_capacity(capacity),
        }
    }

    /// Creates a population of `size` random schedules.
    pub fn random<R: Rng>(size: usize, data: &Arc<DataSet>, rng: &mut R) -> Self {
        let schedules = (0..size)
            .map(|_| Schedule::random(Arc::clone(data), rng))
            .collect();
        Self { schedules }
    }

    /// Concatenates two colonies, `first` then `second`.
    pub fn merge(first: Population, second: Population) -> Self {
        let mut schedules = first.schedules;
        schedules.extend(second.schedules);
        Self { schedules }
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Adds a schedule.
    pub fn push(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn schedules_mut(&mut self) -> &mut [Schedule] {
        &mut self.schedules
    }

    pub fn into_schedules(self) -> Vec<Schedule> {
        self.schedules
    }

    /// Recomputes the cached evaluation of every schedule.
    pub fn evaluate(&mut self) {
        for schedule in &mut self.schedules {
            schedule.evaluate();
        }
    }

    /// Evaluates every schedule and sorts by fitness, best first.
    ///
    /// Schedules of equal fitness keep their relative order. The key is the
    /// integer violation count, which ranks exactly like fitness.
    pub fn sort_by_fitness(&mut self) -> &mut Self {
        self.evaluate();
        self.schedules.sort_by_key(Schedule::violations);
        self
    }

    /// The schedule with the highest fitness; the earliest one on ties.
    pub fn fittest(&self) -> Option<&Schedule> {
        self.schedules.iter().min_by_key(|s| s.violations())
    }

    /// First schedule; the fittest after [`sort_by_fitness`](Self::sort_by_fitness).
    pub fn best(&self) -> Option<&Schedule> {
        self.schedules.first()
    }

    /// Last schedule; the least fit after [`sort_by_fitness`](Self::sort_by_fitness).
    pub fn worst(&self) -> Option<&Schedule> {
        self.schedules.last()
    }
}

impl From<Vec<Schedule>> for Population {
    fn from(schedules: Vec<Schedule>) -> Self {
        Self { schedules }
    }
}
