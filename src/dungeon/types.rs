//! Maze data structures.
//!
//! A [`GameMap`] is a fixed-size grid of [`MapTile`]s owned exclusively by the
//! simulation. It is replaced wholesale on every level transition.

use super::themes::MapTheme;
use serde::Serialize;

/// Grid position. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate.
    pub fn manhattan(&self, other: Coordinate) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbours in (up, down, left, right) order, skipping any
    /// that would underflow. Upper bounds are the caller's concern.
    pub fn orthogonal(&self) -> Vec<Coordinate> {
        let mut out = Vec::with_capacity(4);
        if self.y > 0 {
            out.push(Coordinate::new(self.x, self.y - 1));
        }
        out.push(Coordinate::new(self.x, self.y + 1));
        if self.x > 0 {
            out.push(Coordinate::new(self.x - 1, self.y));
        }
        out.push(Coordinate::new(self.x + 1, self.y));
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TileType {
    Wall,
    Floor,
    Start,
    Boss,
}

impl TileType {
    pub fn is_passable(&self) -> bool {
        !matches!(self, TileType::Wall)
    }
}

/// A single cell of the maze
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapTile {
    pub position: Coordinate,
    pub tile_type: TileType,
    /// Seen at least once
    pub explored: bool,
    /// Currently rendered
    pub visible: bool,
    /// Dormant ambush that has not fired yet
    pub has_enemy: bool,
}

impl MapTile {
    pub fn wall(position: Coordinate) -> Self {
        Self {
            position,
            tile_type: TileType::Wall,
            explored: false,
            visible: false,
            has_enemy: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameMap {
    /// Row-major grid indexed `[y][x]`
    pub tiles: Vec<Vec<MapTile>>,
    pub width: usize,
    pub height: usize,
    pub theme: &'static MapTheme,
    /// Depth counter, starts at 1
    pub level: u32,
    pub start_pos: Coordinate,
    pub boss_pos: Coordinate,
}

impl GameMap {
    /// Creates an all-wall grid. Carving is done by the generator.
    pub fn filled(width: usize, height: usize, theme: &'static MapTheme, level: u32) -> Self {
        let tiles = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| MapTile::wall(Coordinate::new(x, y)))
                    .collect()
            })
            .collect();

        Self {
            tiles,
            width,
            height,
            theme,
            level,
            start_pos: Coordinate::new(0, 0),
            boss_pos: Coordinate::new(0, 0),
        }
    }

    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn tile(&self, pos: Coordinate) -> Option<&MapTile> {
        self.tiles.get(pos.y).and_then(|row| row.get(pos.x))
    }

    pub fn tile_mut(&mut self, pos: Coordinate) -> Option<&mut MapTile> {
        self.tiles.get_mut(pos.y).and_then(|row| row.get_mut(pos.x))
    }

    pub fn is_passable(&self, pos: Coordinate) -> bool {
        self.tile(pos)
            .map(|t| t.tile_type.is_passable())
            .unwrap_or(false)
    }

    /// Iterates every tile in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = &MapTile> {
        self.tiles.iter().flat_map(|row| row.iter())
    }

    /// Number of non-wall tiles
    pub fn passable_count(&self) -> usize {
        self.iter_tiles()
            .filter(|t| t.tile_type.is_passable())
            .count()
    }

    /// Number of tiles still holding a dormant ambush
    pub fn dormant_enemy_count(&self) -> usize {
        self.iter_tiles().filter(|t| t.has_enemy).count()
    }

    pub fn explored_count(&self) -> usize {
        self.iter_tiles().filter(|t| t.explored).count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::themes::THEMES;
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Coordinate::new(1, 1);
        let b = Coordinate::new(4, 6);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn test_orthogonal_at_origin_skips_underflow() {
        let n = Coordinate::new(0, 0).orthogonal();
        assert_eq!(n, vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]);
    }

    #[test]
    fn test_orthogonal_order_is_up_down_left_right() {
        let n = Coordinate::new(3, 3).orthogonal();
        assert_eq!(
            n,
            vec![
                Coordinate::new(3, 2),
                Coordinate::new(3, 4),
                Coordinate::new(2, 3),
                Coordinate::new(4, 3),
            ]
        );
    }

    #[test]
    fn test_filled_map_is_all_wall() {
        let map = GameMap::filled(5, 4, &THEMES[0], 1);
        assert_eq!(map.tiles.len(), 4);
        assert!(map.tiles.iter().all(|row| row.len() == 5));
        assert_eq!(map.passable_count(), 0);
        assert_eq!(map.dormant_enemy_count(), 0);
    }

    #[test]
    fn test_tile_lookup_out_of_bounds() {
        let map = GameMap::filled(5, 5, &THEMES[0], 1);
        assert!(map.tile(Coordinate::new(5, 0)).is_none());
        assert!(map.tile(Coordinate::new(0, 5)).is_none());
        assert!(!map.in_bounds(Coordinate::new(5, 5)));
        assert!(!map.is_passable(Coordinate::new(9, 9)));
    }

    #[test]
    fn test_tile_positions_match_indices() {
        let map = GameMap::filled(6, 6, &THEMES[0], 1);
        for (y, row) in map.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                assert_eq!(tile.position, Coordinate::new(x, y));
            }
        }
    }
}
