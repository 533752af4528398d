//! Crawl simulator CLI.
//!
//! Run Monte Carlo simulations of the self-playing party.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100 runs x 20000 ticks
//!   cargo run --bin simulate -- -n 10 -t 5000   # 10 short runs
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use idle_crawler::config::log_filter;
use idle_crawler::error::Result;
use idle_crawler::simulator::{run_simulation, SimConfig};
use std::env;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
            "warn",
        ))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(config) = SimConfig::parse_args(&args) else {
        print_help();
        return Ok(());
    };

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║                 IDLE CRAWLER SIMULATOR                        ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Ticks per Run:  {}", config.ticks_per_run);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if config.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json()?)?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn print_help() {
    println!("Idle Crawler Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Ticks per run (default: 20,000)");
    println!("    --endurance         20 runs of 200,000 ticks");
    println!("    -v, --verbose       Print every run");
    println!("    -q, --quiet         Only print the report");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
}
