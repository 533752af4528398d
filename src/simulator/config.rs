//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Ticks per run
    pub ticks_per_run: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// Also write the report as JSON
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            ticks_per_run: 20_000,
            verbosity: 1,
            json: false,
        }
    }
}

impl SimConfig {
    /// A handful of short seeded runs.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            ticks_per_run: 2_000,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Long runs for looking at depth progression.
    pub fn endurance() -> Self {
        Self {
            num_runs: 20,
            ticks_per_run: 200_000,
            ..Default::default()
        }
    }

    /// Parses simulator flags. `args[0]` is the program name. Unparsable
    /// numbers fall back to defaults; returns `None` when help was requested.
    pub fn parse_args(args: &[String]) -> Option<Self> {
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-n" | "--runs" => {
                    if i + 1 < args.len() {
                        config.num_runs = args[i + 1].parse().unwrap_or(100);
                        i += 1;
                    }
                }
                "-s" | "--seed" => {
                    if i + 1 < args.len() {
                        config.seed = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "-t" | "--ticks" => {
                    if i + 1 < args.len() {
                        config.ticks_per_run = args[i + 1].parse().unwrap_or(20_000);
                        i += 1;
                    }
                }
                "-v" | "--verbose" => config.verbosity = 2,
                "-q" | "--quiet" => config.verbosity = 0,
                "--json" => config.json = true,
                "--endurance" => {
                    let endurance = Self::endurance();
                    config.num_runs = endurance.num_runs;
                    config.ticks_per_run = endurance.ticks_per_run;
                }
                "-h" | "--help" => return None,
                _ => {}
            }
            i += 1;
        }

        Some(config)
    }
}
