//! Live runner configuration.
//!
//! Precedence is CLI flags, then environment, then defaults.

use crate::core::constants::TICK_RATE_MS;
use std::env;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown flag `{0}` (try --help)")]
    UnknownFlag(String),

    #[error("flag `{0}` expects a value")]
    MissingValue(String),

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidNumber { flag: String, value: String },

    #[error("tick rate must be greater than zero")]
    ZeroTickRate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Milliseconds between ticks
    pub tick_rate_ms: u64,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many ticks; run forever when absent
    pub max_ticks: Option<u64>,
    /// Print a JSON snapshot line per tick to stdout
    pub json_snapshots: bool,
    pub show_help: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: TICK_RATE_MS,
            seed: None,
            max_ticks: None,
            json_snapshots: false,
            show_help: false,
        }
    }
}

pub const USAGE: &str = "\
Usage: idle-crawler [OPTIONS]

Options:
  --tick-ms N   Milliseconds between ticks (default 800, env CRAWL_TICK_MS)
  --seed N      Seed the RNG for a reproducible run (env CRAWL_SEED)
  --ticks N     Stop after N ticks (env CRAWL_MAX_TICKS)
  --json        Print one JSON snapshot per tick to stdout
  --help        Show this message

Diagnostics go to stderr; set RUST_LOG=debug for more detail.";

/// Diagnostic filter for the binaries. `rust_log` (the `RUST_LOG` value)
/// wins when it parses; otherwise `default` applies.
pub fn log_filter(rust_log: Option<&str>, default: &str) -> EnvFilter {
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

impl CrawlConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CRAWL_TICK_MS` - Tick interval in milliseconds (default: 800)
    /// - `CRAWL_SEED` - RNG seed
    /// - `CRAWL_MAX_TICKS` - Tick limit
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CRAWL_TICK_MS").filter(|ms| *ms > 0) {
            config.tick_rate_ms = ms;
        }
        if let Some(seed) = read_env::<u64>("CRAWL_SEED") {
            config.seed = Some(seed);
        }
        if let Some(ticks) = read_env::<u64>("CRAWL_MAX_TICKS") {
            config.max_ticks = Some(ticks);
        }

        config
    }

    /// Applies command-line flags on top of `self`. `args` excludes the
    /// program name.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self, ConfigError> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--tick-ms" => {
                    let ms = parse_value(arg, iter.next())?;
                    if ms == 0 {
                        return Err(ConfigError::ZeroTickRate);
                    }
                    self.tick_rate_ms = ms;
                }
                "--seed" => self.seed = Some(parse_value(arg, iter.next())?),
                "--ticks" => self.max_ticks = Some(parse_value(arg, iter.next())?),
                "--json" => self.json_snapshots = true,
                "-h" | "--help" => self.show_help = true,
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }
        Ok(self)
    }
}

fn parse_value(flag: &str, value: Option<&String>) -> Result<u64, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
