//! Heroes: class table, stats and equipment-derived recalculation.

pub mod classes;
pub mod derived_stats;
pub mod types;

pub use classes::{create_hero, default_party};
pub use derived_stats::{apply_recalculation, recalculate_stats};
pub use types::{Hero, HeroClass, Skill, SkillKind, Stats};
