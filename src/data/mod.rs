//! Static season data: teams, venues, candidate dates and rain forecasts.
//!
//! # Key Types
//!
//! - [`Venue`], [`Team`]: immutable value types with structural equality
//! - [`RainTable`]: rain probability per (date, venue)
//! - [`DataSet`]: the validated, read-only input shared by every colony

mod dataset;
mod types;

pub use dataset::{DataSet, RainTable};
pub use types::{Team, Venue};
