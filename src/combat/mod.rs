//! Encounters: enemy roster, enemy factory, and round resolution.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::generate_enemies;
pub use logic::{resolve_combat_round, RoundOutcome, RoundReport};
pub use types::{CombatState, Enemy, EnemyKind};
