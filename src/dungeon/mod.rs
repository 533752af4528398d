//! Maze system: types, themes, generation and exploration.

pub mod generation;
pub mod logic;
pub mod themes;
pub mod types;

pub use generation::generate_map;
pub use themes::{MapTheme, THEMES};
pub use types::{Coordinate, GameMap, MapTile, TileType};
