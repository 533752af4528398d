//! One round of party-versus-roster combat.
//!
//! A round is a hero turn (one or two living heroes act) followed by an
//! enemy turn (one or two living enemies may strike), then a check for wipe
//! or victory. Phase changes are left to the caller.

use super::types::CombatState;
use crate::character::{Hero, Skill, SkillKind};
use crate::core::constants::*;
use crate::core::game_state::{ActionIntent, Annotations, EntityId};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every hero is down.
    PartyWiped,
    /// Every enemy is down.
    Victory { boss: bool },
    Continue,
}

/// What happened during a round, for sound selection and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub skill_cast: bool,
    pub healed: bool,
    pub hero_attacked: bool,
    pub hero_hit: bool,
    /// Narrative line for the last hero action
    pub narrative: Option<String>,
    /// Finisher casts worth surfacing in the game log
    pub highlights: Vec<String>,
}

impl RoundReport {
    fn new() -> Self {
        Self {
            outcome: RoundOutcome::Continue,
            skill_cast: false,
            healed: false,
            hero_attacked: false,
            hero_hit: false,
            narrative: None,
            highlights: Vec::new(),
        }
    }
}

/// Damage from a skill: `max(1, floor(atk * power - def * 0.1))`.
pub fn skill_damage(atk: f64, power: f64, target_def: f64) -> f64 {
    (atk * power - target_def * SKILL_DEF_FACTOR).floor().max(1.0)
}

/// Damage from a basic attack, `roll` in [0, 1):
/// `max(1, floor(atk * (0.8 + roll * 0.4) - def * 0.2))`.
pub fn basic_damage(atk: f64, roll: f64, target_def: f64) -> f64 {
    (atk * (BASIC_ROLL_MIN + roll * BASIC_ROLL_SPREAD) - target_def * BASIC_DEF_FACTOR)
        .floor()
        .max(1.0)
}

/// Picks 1..=2 distinct indices from `living`, returned in ascending order.
fn pick_actors(living: &[usize], rng: &mut impl Rng) -> Vec<usize> {
    if living.is_empty() {
        return Vec::new();
    }
    let wanted = rng.gen_range(1..=MAX_ACTORS_PER_SIDE).min(living.len());
    let mut chosen: Vec<usize> = living.choose_multiple(rng, wanted).copied().collect();
    chosen.sort_unstable();
    chosen
}

/// Resolves one round in place.
pub fn resolve_combat_round(
    party: &mut [Hero],
    combat: &mut CombatState,
    annotations: &mut Annotations,
    rng: &mut impl Rng,
) -> RoundReport {
    let mut report = RoundReport::new();

    let living_heroes: Vec<usize> = living_indices(party);
    for idx in pick_actors(&living_heroes, rng) {
        hero_action(&mut party[idx], combat, annotations, &mut report, rng);
    }

    enemy_turn(party, combat, annotations, &mut report, rng);

    report.outcome = if party.iter().all(|h| !h.is_alive()) {
        RoundOutcome::PartyWiped
    } else if combat.all_defeated() {
        RoundOutcome::Victory {
            boss: combat.has_boss(),
        }
    } else {
        RoundOutcome::Continue
    };

    tracing::trace!(round = combat.round, outcome = ?report.outcome, "combat round resolved");
    report
}

fn living_indices(party: &[Hero]) -> Vec<usize> {
    party
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_alive())
        .map(|(i, _)| i)
        .collect()
}

fn hero_action(
    hero: &mut Hero,
    combat: &mut CombatState,
    annotations: &mut Annotations,
    report: &mut RoundReport,
    rng: &mut impl Rng,
) {
    let living = combat.living_enemy_indices();
    if living.is_empty() {
        return;
    }

    if rng.gen::<f64>() < SKILL_ATTEMPT_CHANCE {
        if let Some(skill) = hero.skills.choose(rng).cloned() {
            if hero.stats.mp >= skill.cost {
                cast_skill(hero, &skill, &living, combat, annotations, report, rng);
                return;
            }
        }
    }

    let Some(&target_idx) = living.choose(rng) else {
        return;
    };
    let target = &mut combat.enemies[target_idx];
    let dmg = basic_damage(hero.stats.atk, rng.gen::<f64>(), target.stats.def);
    target.stats.take_damage(dmg);

    annotations.record_hit(EntityId::Enemy(target.id), dmg as u32);
    annotations.set_action(EntityId::Hero(hero.id), ActionIntent::Attack);
    report.hero_attacked = true;
    report.narrative = Some(format!("{} attacks {} for {} damage!", hero.name, target.name, dmg));
}

fn cast_skill(
    hero: &mut Hero,
    skill: &Skill,
    living: &[usize],
    combat: &mut CombatState,
    annotations: &mut Annotations,
    report: &mut RoundReport,
    rng: &mut impl Rng,
) {
    hero.stats.mp = (hero.stats.mp - skill.cost).max(0.0);
    let hero_id = EntityId::Hero(hero.id);

    match skill.kind {
        SkillKind::Heal => {
            let amount = (hero.stats.atk * skill.power).floor();
            hero.stats.heal(amount);
            annotations.set_skill(hero_id, ActionIntent::Heal, skill.name);
            report.healed = true;
            report.narrative = Some(format!(
                "{} casts {} and recovers {} HP!",
                hero.name, skill.name, amount
            ));
        }
        SkillKind::Damage | SkillKind::Aoe => {
            let targets: Vec<usize> = if skill.kind == SkillKind::Aoe {
                living.to_vec()
            } else {
                living.choose(rng).copied().into_iter().collect()
            };
            for idx in targets {
                let enemy = &mut combat.enemies[idx];
                let dmg = skill_damage(hero.stats.atk, skill.power, enemy.stats.def);
                enemy.stats.take_damage(dmg);
                annotations.record_hit(EntityId::Enemy(enemy.id), dmg as u32);
            }
            annotations.set_skill(hero_id, ActionIntent::Skill, skill.name);
            report.skill_cast = true;
            let verb = if skill.kind == SkillKind::Aoe {
                "sweeps the field"
            } else {
                "lands a heavy blow"
            };
            report.narrative = Some(format!("{} uses {} and {}!", hero.name, skill.name, verb));
        }
    }

    if is_finisher(hero, skill) {
        report
            .highlights
            .push(format!("{} unleashes {}!", hero.name, skill.name));
    }
}

/// A kit's finisher is its most expensive skill.
fn is_finisher(hero: &Hero, skill: &Skill) -> bool {
    let top = hero.skills.iter().map(|s| s.cost).fold(0.0, f64::max);
    skill.cost > 0.0 && skill.cost >= top
}

fn enemy_turn(
    party: &mut [Hero],
    combat: &mut CombatState,
    annotations: &mut Annotations,
    report: &mut RoundReport,
    rng: &mut impl Rng,
) {
    let living_enemies = combat.living_enemy_indices();
    for idx in pick_actors(&living_enemies, rng) {
        if rng.gen::<f64>() >= ENEMY_ATTACK_CHANCE {
            continue;
        }
        let living_heroes = living_indices(party);
        let Some(&hero_idx) = living_heroes.choose(rng) else {
            return;
        };

        let enemy = &combat.enemies[idx];
        let hero = &mut party[hero_idx];
        let dmg = basic_damage(enemy.stats.atk, rng.gen::<f64>(), hero.stats.def);
        hero.stats.take_damage(dmg);

        annotations.set_action(EntityId::Enemy(enemy.id), ActionIntent::Attack);
        annotations.record_hit(EntityId::Hero(hero.id), dmg as u32);
        report.hero_hit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{create_hero, default_party, HeroClass, Stats};
    use crate::combat::types::{Enemy, EnemyKind};
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uuid::Uuid;

    fn enemy(id: u128, hp: f64, atk: f64, def: f64, is_boss: bool) -> Enemy {
        Enemy {
            id: Uuid::from_u128(id),
            name: "Test Foe".to_string(),
            is_boss,
            kind: EnemyKind::Beast,
            stats: Stats::new(hp, 0.0, atk, def, 5.0),
            reward_score: 0.0,
            hue_shift: 0,
        }
    }

    fn fight_to_end(party: &mut [Hero], combat: &mut CombatState, rng: &mut impl Rng) -> RoundOutcome {
        for _ in 0..100 {
            let mut notes = Annotations::default();
            let report = resolve_combat_round(party, combat, &mut notes, rng);
            if report.outcome != RoundOutcome::Continue {
                return report.outcome;
            }
        }
        RoundOutcome::Continue
    }

    #[test]
    fn test_damage_formulas() {
        assert_eq!(skill_damage(35.0, 1.6, 3.9), 55.0);
        assert_eq!(skill_damage(1.0, 0.1, 100.0), 1.0);
        assert_eq!(basic_damage(30.0, 0.0, 5.0), 23.0);
        assert_eq!(basic_damage(30.0, 0.999, 0.0), 35.0);
        assert_eq!(basic_damage(1.0, 0.5, 50.0), 1.0);
    }

    #[test]
    fn test_degenerate_rng_hero_casts_first_skill() {
        // Zero rolls: skill attempt succeeds, first skill, first target
        let mut party = vec![create_hero(1, HeroClass::Elementalist)];
        let mut combat = CombatState::new(vec![enemy(1, 1000.0, 10.0, 10.0, false)]);
        let mut notes = Annotations::default();
        let report =
            resolve_combat_round(&mut party, &mut combat, &mut notes, &mut StepRng::new(0, 0));

        assert!(report.skill_cast);
        assert_eq!(party[0].stats.mp, 180.0); // Fireball costs 20
        assert_eq!(combat.enemies[0].stats.hp, 945.0); // floor(56 - 1)
        assert_eq!(
            notes.get(EntityId::Hero(1)).and_then(|n| n.skill_name),
            Some("Fireball")
        );
        // The enemy struck back for floor(8 - 1)
        assert!(report.hero_hit);
        assert_eq!(party[0].stats.hp, 93.0);
        assert_eq!(report.outcome, RoundOutcome::Continue);
        assert!(report.highlights.is_empty());
    }

    #[test]
    fn test_finisher_is_most_expensive_skill() {
        let priest = create_hero(1, HeroClass::Priest);
        assert_eq!(priest.skills[1].name, "Prayer of Healing");
        assert!(is_finisher(&priest, &priest.skills[1]));
        assert!(!is_finisher(&priest, &priest.skills[2]));

        for class in HeroClass::ALL {
            let hero = create_hero(1, class);
            let finishers = hero.skills.iter().filter(|s| is_finisher(&hero, s)).count();
            assert_eq!(finishers, 1, "{:?}", class);
        }
    }

    #[test]
    fn test_unaffordable_skill_falls_back_to_basic_attack() {
        let mut party = vec![create_hero(1, HeroClass::Priest)];
        party[0].stats.mp = 0.0;
        let mut combat = CombatState::new(vec![enemy(1, 1000.0, 1.0, 0.0, false)]);
        let mut notes = Annotations::default();
        let report =
            resolve_combat_round(&mut party, &mut combat, &mut notes, &mut StepRng::new(0, 0));
        assert!(!report.skill_cast);
        assert!(report.hero_attacked);
        assert_eq!(combat.enemies[0].stats.hp, 992.0); // floor(10 * 0.8)
    }

    #[test]
    fn test_victory_detected() {
        let mut party = default_party();
        let mut combat = CombatState::new(vec![enemy(1, 1.0, 1.0, 0.0, false)]);
        let mut rng = ChaCha8Rng::seed_from_u64(51);
        let outcome = fight_to_end(&mut party, &mut combat, &mut rng);
        assert_eq!(outcome, RoundOutcome::Victory { boss: false });
        assert!(combat.all_defeated());
        assert_eq!(combat.enemies.len(), 1, "defeated enemies stay in roster");
    }

    #[test]
    fn test_boss_victory_flagged() {
        let mut party = default_party();
        let mut combat = CombatState::new(vec![enemy(1, 1.0, 1.0, 0.0, true)]);
        let mut rng = ChaCha8Rng::seed_from_u64(52);
        let outcome = fight_to_end(&mut party, &mut combat, &mut rng);
        assert_eq!(outcome, RoundOutcome::Victory { boss: true });
    }

    #[test]
    fn test_wipe_detected() {
        let mut party = vec![create_hero(1, HeroClass::Priest)];
        party[0].stats.hp = 1.0;
        party[0].stats.mp = 0.0;
        let mut combat = CombatState::new(vec![enemy(1, 1.0e9, 1.0e6, 1.0e6, false)]);
        let mut notes = Annotations::default();
        let report =
            resolve_combat_round(&mut party, &mut combat, &mut notes, &mut StepRng::new(0, 0));
        assert_eq!(report.outcome, RoundOutcome::PartyWiped);
        assert_eq!(party[0].stats.hp, 0.0);
    }

    #[test]
    fn test_at_most_two_heroes_act() {
        let mut rng = ChaCha8Rng::seed_from_u64(53);
        for _ in 0..100 {
            let mut party = default_party();
            let mut combat = CombatState::new(vec![enemy(1, 1.0e9, 0.0, 0.0, false)]);
            let mut notes = Annotations::default();
            resolve_combat_round(&mut party, &mut combat, &mut notes, &mut rng);
            let actors = party
                .iter()
                .filter_map(|h| notes.get(EntityId::Hero(h.id)))
                .filter(|n| {
                    matches!(
                        n.action,
                        Some(ActionIntent::Attack | ActionIntent::Skill | ActionIntent::Heal)
                    )
                })
                .count();
            assert!(actors <= 2, "{} heroes acted", actors);
        }
    }

    #[test]
    fn test_dead_heroes_never_act_or_get_targeted() {
        let mut rng = ChaCha8Rng::seed_from_u64(54);
        for _ in 0..100 {
            let mut party = default_party();
            for hero in party.iter_mut().skip(1) {
                hero.stats.hp = 0.0;
            }
            let mut combat = CombatState::new(vec![enemy(1, 1.0e9, 5.0, 0.0, false)]);
            let mut notes = Annotations::default();
            resolve_combat_round(&mut party, &mut combat, &mut notes, &mut rng);
            for hero in party.iter().skip(1) {
                assert!(notes.get(EntityId::Hero(hero.id)).is_none());
                assert_eq!(hero.stats.hp, 0.0);
            }
        }
    }

    #[test]
    fn test_stats_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(55);
        let mut party = default_party();
        let mut combat = CombatState::new(vec![
            enemy(1, 5000.0, 60.0, 10.0, false),
            enemy(2, 5000.0, 60.0, 10.0, false),
        ]);
        for _ in 0..200 {
            let mut notes = Annotations::default();
            let report = resolve_combat_round(&mut party, &mut combat, &mut notes, &mut rng);
            for h in &party {
                assert!(h.stats.within_bounds(), "{:?}", h.stats);
            }
            for e in &combat.enemies {
                assert!(e.stats.within_bounds(), "{:?}", e.stats);
            }
            if report.outcome != RoundOutcome::Continue {
                break;
            }
        }
    }
}
