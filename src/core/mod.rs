//! Core game state, the tick state machine and the game loop.

pub mod constants;
pub mod game_log;
pub mod game_loop;
pub mod game_state;
pub mod tick;

pub use game_log::{GameLog, LogEntry, LogKind};
pub use game_loop::{CoreGame, GameLoop};
pub use game_state::{
    ActionIntent, Annotation, Annotations, EntityId, GamePhase, GameState, PhaseKind,
};
pub use tick::{game_tick, SoundEffect, TickEvent, TickResult};
