//! Maze generation using randomized depth-first search.

use super::themes::{MapTheme, THEMES};
use super::types::{Coordinate, GameMap, TileType};
use crate::core::constants::{DORMANT_ENEMY_CHANCE, MAP_SIZE, MAP_START};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates a complete level: theme, carved maze, boss tile and dormant
/// ambushes. The grid is always `MAP_SIZE` x `MAP_SIZE`.
///
/// `excluded_theme` prevents two consecutive levels from sharing a theme. It
/// is ignored if excluding it would leave no theme to pick.
pub fn generate_map(level: u32, excluded_theme: Option<&str>, rng: &mut impl Rng) -> GameMap {
    let theme = pick_theme(excluded_theme, rng);
    let mut map = GameMap::filled(MAP_SIZE, MAP_SIZE, theme, level);

    let start = Coordinate::new(MAP_START.0, MAP_START.1);
    map.start_pos = start;
    if let Some(tile) = map.tile_mut(start) {
        tile.tile_type = TileType::Start;
        tile.explored = true;
        tile.visible = true;
    }

    let boss = carve_maze(&mut map, start, rng);
    map.boss_pos = boss;
    if boss != start {
        if let Some(tile) = map.tile_mut(boss) {
            tile.tile_type = TileType::Boss;
        }
    }

    place_dormant_enemies(&mut map, rng);

    tracing::debug!(
        level,
        theme = map.theme.name,
        boss_x = boss.x,
        boss_y = boss.y,
        ambushes = map.dormant_enemy_count(),
        "generated map"
    );

    map
}

/// Picks a theme uniformly, skipping `excluded` when another choice exists.
pub fn pick_theme(excluded: Option<&str>, rng: &mut impl Rng) -> &'static MapTheme {
    let pool: Vec<&'static MapTheme> = THEMES
        .iter()
        .filter(|t| excluded != Some(t.name))
        .collect();

    let pool = if pool.is_empty() {
        THEMES.iter().collect()
    } else {
        pool
    };

    // THEMES is a non-empty static so the pool is never empty here
    pool.choose(rng).copied().unwrap_or(&THEMES[0])
}

/// Carves corridors with a 2-cell step recursive backtracker and returns the
/// visited cell furthest (Manhattan) from `start`. Ties keep the cell that
/// reached the maximum first.
fn carve_maze(map: &mut GameMap, start: Coordinate, rng: &mut impl Rng) -> Coordinate {
    let mut visited = vec![vec![false; map.width]; map.height];
    let mut stack: Vec<Coordinate> = vec![start];
    visited[start.y][start.x] = true;

    let mut furthest = start;
    let mut max_dist = 0;

    while let Some(&current) = stack.last() {
        let dist = current.manhattan(start);
        if dist > max_dist {
            max_dist = dist;
            furthest = current;
        }

        let neighbors = unvisited_neighbors(map, current, &visited);

        match neighbors.choose(rng) {
            Some(&next) => {
                visited[next.y][next.x] = true;
                let between = Coordinate::new((current.x + next.x) / 2, (current.y + next.y) / 2);
                for pos in [next, between] {
                    if let Some(tile) = map.tile_mut(pos) {
                        tile.tile_type = TileType::Floor;
                    }
                }
                stack.push(next);
            }
            None => {
                // Backtrack
                stack.pop();
            }
        }
    }

    furthest
}

/// Cells two steps away that are strictly inside the border and not yet
/// visited, in (+x, -x, +y, -y) order.
fn unvisited_neighbors(
    map: &GameMap,
    current: Coordinate,
    visited: &[Vec<bool>],
) -> Vec<Coordinate> {
    const STEPS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

    STEPS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = current.x as isize + dx;
            let ny = current.y as isize + dy;
            let inside = nx > 0
                && ny > 0
                && nx < map.width as isize - 1
                && ny < map.height as isize - 1;
            if !inside {
                return None;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if visited[ny][nx] {
                None
            } else {
                Some(Coordinate::new(nx, ny))
            }
        })
        .collect()
}

/// Flags plain floor tiles (never start or boss) with a dormant ambush.
fn place_dormant_enemies(map: &mut GameMap, rng: &mut impl Rng) {
    for row in map.tiles.iter_mut() {
        for tile in row.iter_mut() {
            if tile.tile_type == TileType::Floor && rng.gen::<f64>() < DORMANT_ENEMY_CHANCE {
                tile.has_enemy = true;
            }
        }
    }
}
