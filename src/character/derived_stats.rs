use super::types::{Hero, Stats};

/// Rebuilds effective stats as base stats plus every equipped item's bonuses.
///
/// Current hp and mp keep their share of the old maximum, floored. When the
/// old maximum was zero the resource starts full instead.
pub fn recalculate_stats(hero: &Hero) -> Stats {
    let bonuses = hero.equipment.total_bonuses();
    let base = &hero.base_stats;
    let old = &hero.stats;

    let max_hp = base.max_hp + bonuses.hp as f64;
    let max_mp = base.max_mp + bonuses.mp as f64;

    Stats {
        hp: preserve_share(old.hp, old.max_hp, max_hp),
        max_hp,
        mp: preserve_share(old.mp, old.max_mp, max_mp),
        max_mp,
        atk: base.atk + bonuses.atk as f64,
        def: base.def + bonuses.def as f64,
        spd: base.spd + bonuses.spd as f64,
    }
}

/// Applies [`recalculate_stats`] in place.
pub fn apply_recalculation(hero: &mut Hero) {
    hero.stats = recalculate_stats(hero);
}

fn preserve_share(current: f64, old_max: f64, new_max: f64) -> f64 {
    if old_max <= 0.0 {
        return new_max;
    }
    // Multiply first so an unchanged max maps an integral value to itself.
    (new_max * current / old_max).floor().clamp(0.0, new_max)
}
