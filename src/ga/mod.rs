//! Genetic algorithm over fixture schedules.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Algorithm parameters (sizes, rates, thresholds), loadable from JSON
//! - [`Population`]: Ranked collection of candidate schedules
//! - [`Tournament`]: Tournament selection with culling
//! - [`EvolutionEngine`]: Breeds one generation from the previous one
//! - [`FixtureRunner`]: Bootstraps colonies in parallel and runs the generational loop
//! - [`RunResult`]: Best schedule found with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and donor-based mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Cantú-Paz (2000), *Efficient and Accurate Parallel Genetic Algorithms*

mod config;
mod engine;
pub mod operators;
mod population;
mod runner;
mod selection;

pub use config::EvolutionConfig;
pub use engine::EvolutionEngine;
pub use population::Population;
pub use runner::{FixtureRunner, GenerationStats, RunResult};
pub use selection::Tournament;
