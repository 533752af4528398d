//! Idle Crawler - a self-playing dungeon crawler simulation.
//!
//! A party of six heroes walks a procedurally carved maze, fights whatever
//! it stumbles into, equips the loot it finds and descends level after
//! level. Everything is driven by [`core::game_tick`] with an injected RNG.

pub mod character;
pub mod combat;
pub mod config;
pub mod core;
pub mod dungeon;
pub mod error;
pub mod items;
pub mod simulator;
pub mod utils;
