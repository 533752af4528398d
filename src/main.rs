//! Live runner: ticks the simulation on a fixed cadence and prints the log.

use idle_crawler::character::Hero;
use idle_crawler::combat::CombatState;
use idle_crawler::config::{log_filter, CrawlConfig, USAGE};
use idle_crawler::core::{CoreGame, GameLoop, GameState, PhaseKind, SoundEffect, TickResult};
use idle_crawler::dungeon::Coordinate;
use idle_crawler::error::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// One line of `--json` output.
#[derive(Serialize)]
struct Snapshot<'a> {
    tick: u64,
    phase: PhaseKind,
    phase_changed: bool,
    level: u32,
    theme: &'static str,
    position: Coordinate,
    party: &'a [Hero],
    combat: Option<&'a CombatState>,
    sound: Option<SoundEffect>,
}

impl<'a> Snapshot<'a> {
    fn new(state: &'a GameState, result: &TickResult) -> Self {
        Self {
            tick: state.tick_count,
            phase: state.phase_kind(),
            phase_changed: result.phase_changed(),
            level: state.map.level,
            theme: state.map.theme.name,
            position: state.position,
            party: &state.party,
            combat: state.combat(),
            sound: result.sound,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
            "info",
        ))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = CrawlConfig::from_env().apply_args(&args)?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    tracing::info!(
        tick_ms = config.tick_rate_ms,
        seed = ?config.seed,
        "starting crawl"
    );

    let mut game = CoreGame::with_default_party(&mut rng);
    let mut stdout = std::io::stdout().lock();
    let mut last_logged = 0;
    let interval = Duration::from_millis(config.tick_rate_ms);

    let mut ticks = 0u64;
    while config.max_ticks.map_or(true, |max| ticks < max) {
        let result = game.tick(&mut rng);
        ticks += 1;
        let state = game.state();

        if config.json_snapshots {
            serde_json::to_writer(&mut stdout, &Snapshot::new(state, &result))?;
            writeln!(stdout)?;
        } else {
            for entry in state.log.entries().filter(|e| e.id >= last_logged) {
                writeln!(
                    stdout,
                    "[{}] {:<6} {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.kind.label(),
                    entry.message
                )?;
            }
        }
        last_logged = state.log.total_written();
        stdout.flush()?;

        thread::sleep(interval);
    }

    Ok(())
}
