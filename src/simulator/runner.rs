//! Main simulation runner using CoreGame for real game mechanics.
//!
//! Statistics are tracked externally from `TickResult` events, so the
//! simulator never duplicates game logic.

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::game_loop::{CoreGame, GameLoop};
use crate::core::game_state::PhaseKind;
use crate::core::tick::{TickEvent, TickResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Statistics for one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub max_level: u32,
    pub bosses_defeated: u64,
    pub party_wipes: u64,
    pub encounters_won: u64,
    pub ambushes: u64,
    pub items_equipped: u64,
    pub total_ticks: u64,
    /// Ticks spent in each phase, indexed like [`PhaseKind::ALL`]
    pub phase_ticks: [u64; 4],
    /// Observed hp/mp outside `[0, max]` after a tick
    pub clamp_violations: u64,
}

impl RunStats {
    fn new() -> Self {
        Self {
            max_level: 1,
            ..Default::default()
        }
    }

    /// Accumulate one tick's result.
    fn process_tick(&mut self, result: &TickResult) {
        self.total_ticks += 1;
        self.phase_ticks[phase_index(result.phase_before)] += 1;

        for event in &result.events {
            match event {
                TickEvent::Victory { boss } => {
                    self.encounters_won += 1;
                    if *boss {
                        self.bosses_defeated += 1;
                    }
                }
                TickEvent::PartyWiped => self.party_wipes += 1,
                TickEvent::Ambush { .. } => self.ambushes += 1,
                TickEvent::LootEquipped { .. } => self.items_equipped += 1,
                TickEvent::LevelEntered { level, .. } => {
                    self.max_level = self.max_level.max(*level);
                }
                _ => {}
            }
        }
    }
}

pub fn phase_index(kind: PhaseKind) -> usize {
    PhaseKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default()
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config.ticks_per_run, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Bosses {}, Wipes {}, Wins {}, Items {}",
                run_idx + 1,
                config.num_runs,
                stats.max_level,
                stats.bosses_defeated,
                stats.party_wipes,
                stats.encounters_won,
                stats.items_equipped
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.ticks_per_run)
}

/// Plays `ticks` ticks of a fresh six-hero game.
pub fn simulate_single_run(ticks: u64, rng: &mut ChaCha8Rng) -> RunStats {
    let mut game = CoreGame::with_default_party(rng);
    let mut stats = RunStats::new();

    for _ in 0..ticks {
        let result = game.tick(rng);
        stats.process_tick(&result);

        let state = game.state();
        let heroes_ok = state.party.iter().all(|h| h.stats.within_bounds());
        let enemies_ok = state
            .combat()
            .map(|c| c.enemies.iter().all(|e| e.stats.within_bounds()))
            .unwrap_or(true);
        if !(heroes_ok && enemies_ok) {
            stats.clamp_violations += 1;
        }
    }

    tracing::debug!(
        level = stats.max_level,
        bosses = stats.bosses_defeated,
        wipes = stats.party_wipes,
        "run finished"
    );
    stats
}
