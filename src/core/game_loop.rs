//! Shared game loop trait for the live runner and the simulator.
//!
//! Both hosts drive the same [`CoreGame`] through [`GameLoop`]; only the
//! tick source differs (a fixed-rate timer versus a tight loop).

use crate::character::HeroClass;
use crate::core::game_state::GameState;
use crate::core::tick::{game_tick, TickResult};
use rand::Rng;

/// Core game loop trait, implemented by the game engine.
pub trait GameLoop {
    /// Execute one game tick. Returns what happened.
    fn tick(&mut self, rng: &mut impl Rng) -> TickResult;

    /// Get current game state (read-only).
    fn state(&self) -> &GameState;
}

/// Owns the simulation context. The only writer of party, map and phase.
pub struct CoreGame {
    state: GameState,
}

impl CoreGame {
    /// Seeds the party from `classes` and generates the first map.
    pub fn new(classes: &[HeroClass], rng: &mut impl Rng) -> Self {
        Self {
            state: GameState::new(classes, rng),
        }
    }

    /// The six fixed archetypes.
    pub fn with_default_party(rng: &mut impl Rng) -> Self {
        Self::new(&HeroClass::ALL, rng)
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl GameLoop for CoreGame {
    fn tick(&mut self, rng: &mut impl Rng) -> TickResult {
        game_tick(&mut self.state, rng)
    }

    fn state(&self) -> &GameState {
        &self.state
    }
}
