//! The per-tick state machine.
//!
//! [`game_tick`] runs exactly one phase-dependent step and returns a
//! [`TickResult`] describing what happened, so a host can pick sounds and
//! music without reaching into the simulation.

use crate::combat::logic::{resolve_combat_round, RoundOutcome, RoundReport};
use crate::combat::{generate_enemies, CombatState};
use crate::core::constants::*;
use crate::core::game_log::LogKind;
use crate::core::game_state::{ActionIntent, EntityId, GamePhase, GameState, PhaseKind};
use crate::dungeon::logic::{choose_next_step, reveal};
use crate::dungeon::{generate_map, Coordinate, TileType};
use crate::items::{auto_equip_if_better, generate_item};
use rand::Rng;
use serde::Serialize;

/// Sound categories, at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoundEffect {
    Attack,
    Hit,
    Heal,
    Skill,
    Victory,
}

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TickEvent {
    Moved { to: Coordinate },
    /// No passable neighbour; the party stays put.
    DeadEnd,
    Ambush { enemies: usize },
    BossEncounter { name: String },
    CombatRound { round: u32, message: Option<String> },
    PartyWiped,
    Victory { boss: bool },
    /// Victory pause continues.
    Lingering,
    LootEquipped { hero: String, item: String },
    LevelEntered { level: u32, theme: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickResult {
    pub phase_before: PhaseKind,
    pub phase_after: PhaseKind,
    pub sound: Option<SoundEffect>,
    pub events: Vec<TickEvent>,
}

impl TickResult {
    fn new(phase_before: PhaseKind) -> Self {
        Self {
            phase_before,
            phase_after: phase_before,
            sound: None,
            events: Vec::new(),
        }
    }

    /// Ambience signal: true when the tick moved to a different phase.
    pub fn phase_changed(&self) -> bool {
        self.phase_before != self.phase_after
    }
}

/// Advances the simulation by one step.
pub fn game_tick(state: &mut GameState, rng: &mut impl Rng) -> TickResult {
    let mut result = TickResult::new(state.phase_kind());
    state.tick_count += 1;
    state.annotations.clear();

    let phase = std::mem::replace(&mut state.phase, GamePhase::Exploring);
    state.phase = match phase {
        GamePhase::Exploring => explore_tick(state, &mut result, rng),
        GamePhase::Combat(combat) => combat_tick(state, combat, &mut result, rng),
        GamePhase::CombatVictory(combat) => victory_tick(state, combat, &mut result, rng),
        GamePhase::MapTransition => transition_tick(state, &mut result, rng),
    };

    result.phase_after = state.phase_kind();
    if result.phase_changed() {
        tracing::debug!(
            tick = state.tick_count,
            from = result.phase_before.name(),
            to = result.phase_after.name(),
            "phase changed"
        );
    }
    result
}

fn explore_tick(state: &mut GameState, result: &mut TickResult, rng: &mut impl Rng) -> GamePhase {
    let Some(next) = choose_next_step(&state.map, state.position, rng) else {
        result.events.push(TickEvent::DeadEnd);
        return GamePhase::Exploring;
    };

    reveal(&mut state.map, next);
    for hero in &mut state.party {
        hero.stats.restore_mp(EXPLORE_MP_REGEN);
    }
    state.position = next;
    result.events.push(TickEvent::Moved { to: next });
    tracing::trace!(x = next.x, y = next.y, "party moved");

    let Some((tile_type, has_enemy)) = state.map.tile(next).map(|t| (t.tile_type, t.has_enemy))
    else {
        return GamePhase::Exploring;
    };
    let (level, theme) = (state.map.level, state.map.theme);

    if tile_type == TileType::Boss {
        let enemies = generate_enemies(1, level, theme, true, rng);
        let name = enemies
            .first()
            .map(|e| e.name.clone())
            .unwrap_or_default();
        state
            .log
            .push(format!("Warning: {} blocks the way!", name), LogKind::Danger);
        result.events.push(TickEvent::BossEncounter { name });
        return GamePhase::Combat(CombatState::new(enemies));
    }

    if has_enemy {
        if let Some(tile) = state.map.tile_mut(next) {
            tile.has_enemy = false;
        }
        let count = rng.gen_range(1..=MAX_AMBUSH_ENEMIES);
        let enemies = generate_enemies(count, level, theme, false, rng);
        state.log.push("Ambush! Enemies appear.", LogKind::Combat);
        result.events.push(TickEvent::Ambush { enemies: count });
        return GamePhase::Combat(CombatState::new(enemies));
    }

    GamePhase::Exploring
}

fn combat_tick(
    state: &mut GameState,
    mut combat: CombatState,
    result: &mut TickResult,
    rng: &mut impl Rng,
) -> GamePhase {
    let report = resolve_combat_round(&mut state.party, &mut combat, &mut state.annotations, rng);
    for line in &report.highlights {
        state.log.push(line.clone(), LogKind::Skill);
    }
    result.sound = round_sound(&report);

    match report.outcome {
        RoundOutcome::PartyWiped => {
            state
                .log
                .push("The party has fallen! Retreating to recover...", LogKind::Danger);
            for hero in &mut state.party {
                hero.stats.set_fraction(WIPE_RECOVERY_FRACTION);
            }
            state.position = state.map.start_pos;
            result.events.push(TickEvent::PartyWiped);
            GamePhase::Exploring
        }
        RoundOutcome::Victory { boss } => {
            if boss {
                state.log.push("The boss has been defeated!", LogKind::Danger);
            } else {
                state.log.push("Victory!", LogKind::Loot);
            }
            combat.last_log = Some("Victory!".to_string());
            result.sound = Some(SoundEffect::Victory);
            result.events.push(TickEvent::Victory { boss });
            GamePhase::CombatVictory(combat)
        }
        RoundOutcome::Continue => {
            combat.round += 1;
            if report.narrative.is_some() {
                combat.last_log = report.narrative.clone();
            }
            result.events.push(TickEvent::CombatRound {
                round: combat.round,
                message: report.narrative,
            });
            GamePhase::Combat(combat)
        }
    }
}

/// Skill > Heal > Hit > Attack.
fn round_sound(report: &RoundReport) -> Option<SoundEffect> {
    if report.skill_cast {
        Some(SoundEffect::Skill)
    } else if report.healed {
        Some(SoundEffect::Heal)
    } else if report.hero_hit {
        Some(SoundEffect::Hit)
    } else if report.hero_attacked {
        Some(SoundEffect::Attack)
    } else {
        None
    }
}

fn victory_tick(
    state: &mut GameState,
    combat: CombatState,
    result: &mut TickResult,
    rng: &mut impl Rng,
) -> GamePhase {
    if rng.gen::<f64>() >= VICTORY_RESOLVE_CHANCE {
        result.events.push(TickEvent::Lingering);
        return GamePhase::CombatVictory(combat);
    }

    let boss = combat.has_boss();
    let item_level = state.map.level + if boss { BOSS_LOOT_LEVEL_BONUS } else { 0 };

    for hero in &mut state.party {
        let hp_gain = (hero.stats.max_hp - hero.stats.hp) * VICTORY_RECOVERY_FRACTION;
        let mp_gain = (hero.stats.max_mp - hero.stats.mp) * VICTORY_RECOVERY_FRACTION;
        hero.stats.heal(hp_gain);
        hero.stats.restore_mp(mp_gain);
        state
            .annotations
            .set_action(EntityId::Hero(hero.id), ActionIntent::Heal);

        if !boss && rng.gen::<f64>() >= VICTORY_LOOT_CHANCE {
            continue;
        }
        let item = generate_item(item_level, None, rng);
        let item_name = item.name.clone();
        let label = format!("{} [{}] {}", item.name, item.rarity.name(), item.stats.summary());
        if auto_equip_if_better(hero, item) {
            state
                .log
                .push(format!("{} equipped {}", hero.name, label.trim_end()), LogKind::Loot);
            result.events.push(TickEvent::LootEquipped {
                hero: hero.name.clone(),
                item: item_name,
            });
        }
    }

    if boss {
        GamePhase::MapTransition
    } else {
        GamePhase::Exploring
    }
}

fn transition_tick(state: &mut GameState, result: &mut TickResult, rng: &mut impl Rng) -> GamePhase {
    state.log.push("Heading to the next region...", LogKind::Info);

    let next_level = state.map.level + 1;
    let map = generate_map(next_level, Some(state.map.theme.name), rng);
    state.position = map.start_pos;
    state.map = map;
    for hero in &mut state.party {
        hero.stats.restore_full();
    }

    let theme = state.map.theme.name;
    state
        .log
        .push(format!("Entered level {}: {}", next_level, theme), LogKind::Info);
    result.events.push(TickEvent::LevelEntered {
        level: next_level,
        theme,
    });
    GamePhase::Exploring
}
