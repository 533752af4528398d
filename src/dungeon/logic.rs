//! Auto-exploration: where the party steps next.

use super::types::{Coordinate, GameMap};
use rand::seq::SliceRandom;
use rand::Rng;

/// In-bounds, non-wall orthogonal neighbours of `pos` in (up, down, left,
/// right) order.
pub fn passable_neighbors(map: &GameMap, pos: Coordinate) -> Vec<Coordinate> {
    pos.orthogonal()
        .into_iter()
        .filter(|n| map.in_bounds(*n) && map.is_passable(*n))
        .collect()
}

/// Picks the next step from `pos`. Unexplored neighbours are preferred; once
/// everything around is explored any neighbour may be chosen. Returns `None`
/// at a dead end with no passable neighbour.
pub fn choose_next_step(map: &GameMap, pos: Coordinate, rng: &mut impl Rng) -> Option<Coordinate> {
    let neighbors = passable_neighbors(map, pos);
    if neighbors.is_empty() {
        return None;
    }

    let unexplored: Vec<Coordinate> = neighbors
        .iter()
        .copied()
        .filter(|n| map.tile(*n).map(|t| !t.explored).unwrap_or(false))
        .collect();

    let pool = if unexplored.is_empty() {
        &neighbors
    } else {
        &unexplored
    };
    pool.choose(rng).copied()
}

/// Marks a tile as explored and visible.
pub fn reveal(map: &mut GameMap, pos: Coordinate) {
    if let Some(tile) = map.tile_mut(pos) {
        tile.explored = true;
        tile.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::super::themes::THEMES;
    use super::super::types::TileType;
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// A 5x5 map with a plus-shaped corridor around (2, 2)
    fn plus_map() -> GameMap {
        let mut map = GameMap::filled(5, 5, &THEMES[0], 1);
        for pos in [(2, 2), (2, 1), (2, 3), (1, 2), (3, 2)] {
            map.tile_mut(Coordinate::new(pos.0, pos.1)).unwrap().tile_type = TileType::Floor;
        }
        map
    }

    #[test]
    fn test_passable_neighbors_excludes_walls() {
        let map = plus_map();
        let n = passable_neighbors(&map, Coordinate::new(2, 2));
        assert_eq!(n.len(), 4);
        let n = passable_neighbors(&map, Coordinate::new(2, 1));
        assert_eq!(n, vec![Coordinate::new(2, 2)]);
    }

    #[test]
    fn test_passable_neighbors_at_grid_edge() {
        let mut map = GameMap::filled(3, 3, &THEMES[0], 1);
        map.tile_mut(Coordinate::new(0, 0)).unwrap().tile_type = TileType::Floor;
        map.tile_mut(Coordinate::new(1, 0)).unwrap().tile_type = TileType::Floor;
        let n = passable_neighbors(&map, Coordinate::new(0, 0));
        assert_eq!(n, vec![Coordinate::new(1, 0)]);
    }

    #[test]
    fn test_dead_end_returns_none() {
        let map = GameMap::filled(5, 5, &THEMES[0], 1);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_next_step(&map, Coordinate::new(2, 2), &mut rng), None);
    }

    #[test]
    fn test_prefers_unexplored_neighbor() {
        let mut map = plus_map();
        for pos in [(2, 1), (2, 3), (1, 2)] {
            reveal(&mut map, Coordinate::new(pos.0, pos.1));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..20 {
            let next = choose_next_step(&map, Coordinate::new(2, 2), &mut rng);
            assert_eq!(next, Some(Coordinate::new(3, 2)));
        }
    }

    #[test]
    fn test_falls_back_to_any_neighbor_when_all_explored() {
        let mut map = plus_map();
        for pos in [(2, 1), (2, 3), (1, 2), (3, 2)] {
            reveal(&mut map, Coordinate::new(pos.0, pos.1));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let neighbors = passable_neighbors(&map, Coordinate::new(2, 2));
        for _ in 0..20 {
            let next = choose_next_step(&map, Coordinate::new(2, 2), &mut rng).unwrap();
            assert!(neighbors.contains(&next));
        }
    }

    #[test]
    fn test_reveal_sets_flags() {
        let mut map = plus_map();
        let pos = Coordinate::new(2, 1);
        reveal(&mut map, pos);
        let tile = map.tile(pos).unwrap();
        assert!(tile.explored && tile.visible);
    }
}
