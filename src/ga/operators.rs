//! Genetic operators on schedules.
//!
//! Both operators write genes by index. Their results are generally no
//! longer sorted by date; call [`Schedule::sort_by_date`] before evaluating.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: one random cut point, two complementary children
//!
//! # Mutation
//!
//! - [`mutate`]: per-gene replacement from a freshly generated donor schedule

use std::sync::Arc;

use rand::Rng;

use crate::schedule::Schedule;

/// Single-point crossover with a random cut `c` in `0..len`.
///
/// See [`crossover_at`] for the gene layout.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &Schedule,
    parent2: &Schedule,
    rng: &mut R,
) -> (Schedule, Schedule) {
    assert!(!parent1.is_empty(), "parents must not be empty");
    let point = rng.random_range(0..parent1.len());
    crossover_at(parent1, parent2, point)
}

/// Single-point crossover at a fixed cut `point`.
///
/// The first child takes genes `0..=point` from `parent2` and the rest from
/// `parent1`; the second child is the complement.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover_at(parent1: &Schedule, parent2: &Schedule, point: usize) -> (Schedule, Schedule) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let (p1, p2) = (parent1.matches(), parent2.matches());
    let mut first = Vec::with_capacity(n);
    let mut second = Vec::with_capacity(n);
    for i in 0..n {
        if i <= point {
            first.push(p2[i].clone());
            second.push(p1[i].clone());
        } else {
            first.push(p1[i].clone());
            second.push(p2[i].clone());
        }
    }

    let data = parent1.data();
    (
        Schedule::from_genes(Arc::clone(data), first),
        Schedule::from_genes(Arc::clone(data), second),
    )
}

/// Replaces each gene with probability `rate` by the gene at the same index
/// of a new random schedule.
///
/// The donor is generated once, the first time a gene is picked. Returns the
/// number of replaced genes.
pub fn mutate<R: Rng>(schedule: &mut Schedule, rate: f64, rng: &mut R) -> usize {
    let mut donor: Option<Schedule> = None;
    let mut replaced = 0;

    for i in 0..schedule.len() {
        if rng.random::<f64>() < rate {
            let donor =
                donor.get_or_insert_with(|| Schedule::random(Arc::clone(schedule.data()), rng));
            schedule.set_gene(i, donor.matches()[i].clone());
            replaced += 1;
        }
    }

    replaced
}
