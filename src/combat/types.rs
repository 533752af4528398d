use crate::character::Stats;
use serde::Serialize;
use uuid::Uuid;

/// Cosmetic classification of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnemyKind {
    Beast,
    Undead,
    Demon,
    Construct,
    Humanoid,
}

/// An enemy created for one encounter and discarded when it ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enemy {
    pub id: Uuid,
    pub name: String,
    pub is_boss: bool,
    pub kind: EnemyKind,
    pub stats: Stats,
    /// Computed at creation, not consumed by loot
    pub reward_score: f64,
    /// Colour rotation in degrees, presentation only
    pub hue_shift: u16,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}

/// Live roster and narrative for the current encounter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatState {
    pub enemies: Vec<Enemy>,
    pub round: u32,
    pub last_log: Option<String>,
}

impl CombatState {
    pub fn new(enemies: Vec<Enemy>) -> Self {
        Self {
            enemies,
            round: 1,
            last_log: None,
        }
    }

    pub fn living_enemy_indices(&self) -> Vec<usize> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn all_defeated(&self) -> bool {
        self.enemies.iter().all(|e| !e.is_alive())
    }

    pub fn has_boss(&self) -> bool {
        self.enemies.iter().any(|e| e.is_boss)
    }
}
