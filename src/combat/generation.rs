use super::types::{Enemy, EnemyKind};
use crate::character::Stats;
use crate::core::constants::*;
use crate::dungeon::themes::{enemy_kind_for, MapTheme};
use crate::utils::random_uuid;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates `count` enemies scaled to `level`, named from the theme's pools.
pub fn generate_enemies(
    count: usize,
    level: u32,
    theme: &MapTheme,
    is_boss: bool,
    rng: &mut impl Rng,
) -> Vec<Enemy> {
    (0..count)
        .map(|_| generate_enemy(level, theme, is_boss, rng))
        .collect()
}

fn generate_enemy(level: u32, theme: &MapTheme, is_boss: bool, rng: &mut impl Rng) -> Enemy {
    let (name, kind) = if is_boss {
        let boss = theme.boss_names.choose(rng).copied().unwrap_or("Warden");
        (format!("{} {}", BOSS_NAME_MARKER, boss), EnemyKind::Demon)
    } else {
        let prefix = theme.enemy_prefixes.choose(rng).copied().unwrap_or("Wild");
        let base = theme.enemy_bases.choose(rng).copied().unwrap_or("Beast");
        (format!("{} {}", prefix, base), enemy_kind_for(base))
    };

    let (hp_mult, stat_mult, spd_mult) = multipliers(is_boss);
    let level = level as f64;
    let hp = (ENEMY_BASE_HP + level * ENEMY_HP_PER_LEVEL) * hp_mult;

    let stats = Stats {
        hp,
        max_hp: hp,
        mp: 0.0,
        max_mp: 0.0,
        atk: (ENEMY_BASE_ATK + level * ENEMY_ATK_PER_LEVEL) * stat_mult,
        def: (ENEMY_BASE_DEF + level) * stat_mult,
        spd: (ENEMY_BASE_SPD + level) * spd_mult,
    };

    let hue_shift = rng.gen_range(0..360);
    let id = random_uuid(rng);

    Enemy {
        id,
        name,
        is_boss,
        kind,
        stats,
        reward_score: level * 10.0 * stat_mult,
        hue_shift,
    }
}

/// (hp, stat, spd) multipliers.
pub fn multipliers(is_boss: bool) -> (f64, f64, f64) {
    if is_boss {
        (BOSS_HP_MULT, BOSS_STAT_MULT, BOSS_SPD_MULT)
    } else {
        (TRASH_HP_MULT, TRASH_STAT_MULT, TRASH_SPD_MULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::THEMES;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_count_is_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for n in 1..=3 {
            assert_eq!(generate_enemies(n, 1, &THEMES[0], false, &mut rng).len(), n);
        }
        assert!(generate_enemies(0, 1, &THEMES[0], false, &mut rng).is_empty());
    }

    #[test]
    fn test_trash_stats_level_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let e = &generate_enemies(1, 1, &THEMES[0], false, &mut rng)[0];
        assert!(!e.is_boss);
        assert_eq!(e.stats.max_hp, 625.0);
        assert_eq!(e.stats.hp, e.stats.max_hp);
        assert!((e.stats.atk - 23.4).abs() < 1e-9);
        assert!((e.stats.def - 3.9).abs() < 1e-9);
        assert!((e.stats.spd - 4.8).abs() < 1e-9);
        assert_eq!(e.stats.mp, 0.0);
        assert!((e.reward_score - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_boss_stats_and_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(33);
        let theme = &THEMES[1];
        let e = &generate_enemies(1, 2, theme, true, &mut rng)[0];
        assert!(e.is_boss);
        assert_eq!(e.kind, EnemyKind::Demon);
        assert!(e.name.starts_with("[Boss] "));
        assert!(theme.boss_names.iter().any(|b| e.name.ends_with(b)));
        assert_eq!(e.stats.max_hp, 3000.0);
        assert!((e.stats.atk - 73.5).abs() < 1e-9);
        assert!((e.stats.def - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_trash_name_and_kind_from_theme() {
        let mut rng = ChaCha8Rng::seed_from_u64(34);
        let theme = &THEMES[3];
        for e in generate_enemies(3, 4, theme, false, &mut rng) {
            let base = theme
                .enemy_bases
                .iter()
                .find(|b| e.name.ends_with(*b))
                .copied();
            assert!(base.is_some(), "{} not built from theme pools", e.name);
            assert_eq!(e.kind, enemy_kind_for(base.unwrap_or_default()));
        }
    }

    #[test]
    fn test_hue_shift_in_range_and_ids_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(35);
        let enemies = generate_enemies(50, 3, &THEMES[2], false, &mut rng);
        assert!(enemies.iter().all(|e| e.hue_shift < 360));
        let mut ids: Vec<_> = enemies.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
