//! Candidate schedules and their evaluation.
//!
//! A [`Schedule`] is the chromosome of the genetic algorithm: one gene per
//! [`Match`]. Its fitness is `1 / (1 + violations)`, where violations are
//! counted by the evaluator in [`evaluation`] across seven categories:
//!
//! 1. fixtures where rain is likely (probability above 70%)
//! 2. several fixtures on the same day
//! 3. a team playing on two consecutive days
//! 4. repeated (home, away) pairings
//! 5. teams not playing `2·(N−1)` fixtures
//! 6. venues not hosting `N−1` fixtures
//! 7. teams not at home `N−1` times

mod chromosome;
pub mod evaluation;
mod fixture;

pub use chromosome::Schedule;
pub use evaluation::{fitness_from_violations, ViolationReport, RAIN_THRESHOLD};
pub use fixture::{Match, DATE_FORMAT};
