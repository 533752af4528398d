use crate::character::{create_hero, Hero, HeroClass};
use crate::combat::types::CombatState;
use crate::core::game_log::{GameLog, LogKind};
use crate::dungeon::{generate_map, Coordinate, GameMap};
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

/// Global simulation mode. Encounter data lives only in the two phases that
/// need it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", content = "combat")]
pub enum GamePhase {
    Exploring,
    Combat(CombatState),
    /// Enemies stay in the roster so their defeat can still be drawn.
    CombatVictory(CombatState),
    MapTransition,
}

/// Data-less view of [`GamePhase`], for comparisons and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseKind {
    Exploring,
    Combat,
    CombatVictory,
    MapTransition,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 4] = [
        PhaseKind::Exploring,
        PhaseKind::Combat,
        PhaseKind::CombatVictory,
        PhaseKind::MapTransition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PhaseKind::Exploring => "Exploring",
            PhaseKind::Combat => "Combat",
            PhaseKind::CombatVictory => "CombatVictory",
            PhaseKind::MapTransition => "MapTransition",
        }
    }
}

impl GamePhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            GamePhase::Exploring => PhaseKind::Exploring,
            GamePhase::Combat(_) => PhaseKind::Combat,
            GamePhase::CombatVictory(_) => PhaseKind::CombatVictory,
            GamePhase::MapTransition => PhaseKind::MapTransition,
        }
    }

    pub fn combat(&self) -> Option<&CombatState> {
        match self {
            GamePhase::Combat(c) | GamePhase::CombatVictory(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityId {
    Hero(u32),
    Enemy(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionIntent {
    Attack,
    Skill,
    Heal,
    Hit,
}

/// Presentation hints for one entity during the current tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub entity: EntityId,
    pub action: Option<ActionIntent>,
    pub damage_taken: Option<u32>,
    pub skill_name: Option<&'static str>,
}

/// Per-tick visual intents keyed by entity. Rebuilt every tick, never read
/// by the simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Annotations {
    entries: Vec<Annotation>,
}

impl Annotations {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, entity: EntityId) -> Option<&Annotation> {
        self.entries.iter().find(|a| a.entity == entity)
    }

    fn entry(&mut self, entity: EntityId) -> &mut Annotation {
        if let Some(pos) = self.entries.iter().position(|a| a.entity == entity) {
            return &mut self.entries[pos];
        }
        self.entries.push(Annotation {
            entity,
            action: None,
            damage_taken: None,
            skill_name: None,
        });
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn set_action(&mut self, entity: EntityId, action: ActionIntent) {
        self.entry(entity).action = Some(action);
    }

    pub fn set_skill(&mut self, entity: EntityId, action: ActionIntent, skill: &'static str) {
        let entry = self.entry(entity);
        entry.action = Some(action);
        entry.skill_name = Some(skill);
    }

    /// Records damage received. Also marks the entity as hit.
    pub fn record_hit(&mut self, entity: EntityId, damage: u32) {
        let entry = self.entry(entity);
        entry.action = Some(ActionIntent::Hit);
        entry.damage_taken = Some(damage);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The single owned simulation context: party, map, position, phase and log.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub party: Vec<Hero>,
    pub map: GameMap,
    pub position: Coordinate,
    pub phase: GamePhase,
    pub log: GameLog,
    pub annotations: Annotations,
    pub tick_count: u64,
}

impl GameState {
    /// Builds the party (ids from 1) and the level 1 map, then logs startup.
    pub fn new(classes: &[HeroClass], rng: &mut impl Rng) -> Self {
        let party = classes
            .iter()
            .enumerate()
            .map(|(i, &class)| create_hero(i as u32 + 1, class))
            .collect();
        let map = generate_map(1, None, rng);
        let position = map.start_pos;

        let mut log = GameLog::new();
        log.push("System ready. The party assembles...", LogKind::Info);
        log.push(format!("Entering region: {}", map.theme.name), LogKind::Info);

        Self {
            party,
            map,
            position,
            phase: GamePhase::Exploring,
            log,
            annotations: Annotations::default(),
            tick_count: 0,
        }
    }

    /// One hero of each of the six classes.
    pub fn with_default_party(rng: &mut impl Rng) -> Self {
        Self::new(&HeroClass::ALL, rng)
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn combat(&self) -> Option<&CombatState> {
        self.phase.combat()
    }
}
