// Tick and timing
pub const TICK_RATE_MS: u64 = 800;

// Map generation
pub const MAP_SIZE: usize = 25;
pub const MAP_START: (usize, usize) = (1, 1);
pub const DORMANT_ENEMY_CHANCE: f64 = 0.08;

// Exploration
pub const EXPLORE_MP_REGEN: f64 = 2.0;
pub const MAX_AMBUSH_ENEMIES: usize = 3;

// Combat: hero turn
pub const MAX_ACTORS_PER_SIDE: usize = 2;
pub const SKILL_ATTEMPT_CHANCE: f64 = 0.3;
pub const SKILL_DEF_FACTOR: f64 = 0.1;
pub const BASIC_DEF_FACTOR: f64 = 0.2;
pub const BASIC_ROLL_MIN: f64 = 0.8;
pub const BASIC_ROLL_SPREAD: f64 = 0.4;

// Combat: enemy turn
pub const ENEMY_ATTACK_CHANCE: f64 = 0.4;

// Combat outcomes
pub const WIPE_RECOVERY_FRACTION: f64 = 0.5;
pub const VICTORY_RESOLVE_CHANCE: f64 = 0.5;
pub const VICTORY_RECOVERY_FRACTION: f64 = 0.3;
pub const VICTORY_LOOT_CHANCE: f64 = 0.7;
pub const BOSS_LOOT_LEVEL_BONUS: u32 = 2;

// Enemy scaling: (boss, trash)
pub const ENEMY_BASE_HP: f64 = 100.0;
pub const ENEMY_HP_PER_LEVEL: f64 = 25.0;
pub const ENEMY_BASE_ATK: f64 = 15.0;
pub const ENEMY_ATK_PER_LEVEL: f64 = 3.0;
pub const ENEMY_BASE_DEF: f64 = 2.0;
pub const ENEMY_BASE_SPD: f64 = 5.0;
pub const BOSS_HP_MULT: f64 = 20.0;
pub const TRASH_HP_MULT: f64 = 5.0;
pub const BOSS_STAT_MULT: f64 = 3.5;
pub const TRASH_STAT_MULT: f64 = 1.3;
pub const BOSS_SPD_MULT: f64 = 1.2;
pub const TRASH_SPD_MULT: f64 = 0.8;
pub const BOSS_NAME_MARKER: &str = "[Boss]";

// Item rarity thresholds: a roll strictly above the threshold reaches the tier
pub const MYTHIC_THRESHOLD: f64 = 0.98;
pub const LEGENDARY_THRESHOLD: f64 = 0.9;
pub const EPIC_THRESHOLD: f64 = 0.75;
pub const RARE_THRESHOLD: f64 = 0.5;

// Item stat allocation
pub const HEAD_HP_FACTOR: u32 = 5;
pub const HEAD_MP_FACTOR: u32 = 3;
pub const HEAD_MP_CHANCE: f64 = 0.3;
pub const ACCESSORY_SPD_CHANCE: f64 = 0.5;
pub const ACCESSORY_ATK_CHANCE: f64 = 0.5;
pub const ACCESSORY_DEF_CHANCE: f64 = 0.5;
pub const ACCESSORY_MP_CHANCE: f64 = 0.2;

// Rolling game log
pub const MAX_LOG_ENTRIES: usize = 50;
