//! Double round-robin fixture scheduling with a genetic algorithm.
//!
//! Every team hosts every other team exactly once at its home venue. A
//! candidate [`Schedule`](schedule::Schedule) assigns each of those fixtures a
//! date; the search evolves a population of candidates until one violates
//! few enough constraints:
//!
//! - no match at a venue whose rain probability exceeds 70 %
//! - no team playing twice on one day or on two consecutive days
//! - every ordered pairing played once, every team appearing `2(n-1)` times
//! - every venue hosting `n-1` matches, all of them home games of its team
//!
//! # Modules
//!
//! - [`data`]: Teams, venues, candidate dates and the rain table
//! - [`schedule`]: Matches, schedules and constraint evaluation
//! - [`ga`]: Population, operators, evolution engine and the search runner
//! - [`report`]: Plain-text rendering of schedules and progress
//! - [`error`]: Validation and configuration errors

pub mod data;
pub mod error;
pub mod ga;
pub mod report;
pub mod schedule;

pub use error::Error;
