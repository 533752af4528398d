//! Headless simulator for Monte Carlo analysis.
//!
//! Plays many seeded games through the same `CoreGame` the live runner uses
//! and reports how deep parties get, how often they wipe, and where the
//! ticks go.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
