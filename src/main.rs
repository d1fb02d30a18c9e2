//! Command-line driver.
//!
//! Schedules the four-team demo league starting today and prints the best
//! schedule found.
//!
//! ```text
//! fixture-ga [config.json]
//! ```
//!
//! Without a path, or when the file cannot be read, the default
//! configuration is used. Log verbosity follows `RUST_LOG` (default `info`).

use std::sync::Arc;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use fixture_ga::data::DataSet;
use fixture_ga::ga::{EvolutionConfig, FixtureRunner};
use fixture_ga::report;

fn main() -> Result<(), fixture_ga::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_thread_ids(true)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EvolutionConfig::load_or_default(path),
        None => EvolutionConfig::default(),
    };
    tracing::info!(?config, "starting search");

    let data = Arc::new(DataSet::sample(Local::now().date_naive(), &mut rand::rng())?);
    tracing::info!(
        teams = data.team_count(),
        fixtures = data.fixture_count(),
        dates = data.dates().len(),
        "generated demo league"
    );

    let result = FixtureRunner::run(data, &config)?;
    println!("{}", report::run_summary(&result));

    Ok(())
}
