use super::types::{Hero, HeroClass, Skill, SkillKind, Stats};
use crate::items::Equipment;

/// Raw (hp, mp, atk, def, spd) profile for a class.
pub fn class_profile(class: HeroClass) -> (f64, f64, f64, f64, f64) {
    match class {
        HeroClass::Paladin => (200.0, 100.0, 15.0, 20.0, 8.0),
        HeroClass::Berserker => (180.0, 60.0, 25.0, 10.0, 12.0),
        HeroClass::Assassin => (120.0, 80.0, 30.0, 5.0, 20.0),
        HeroClass::Elementalist => (100.0, 200.0, 35.0, 5.0, 10.0),
        HeroClass::Priest => (140.0, 180.0, 10.0, 10.0, 10.0),
        HeroClass::Ranger => (150.0, 100.0, 22.0, 8.0, 15.0),
    }
}

const fn skill(
    name: &'static str,
    cost: f64,
    kind: SkillKind,
    power: f64,
    description: &'static str,
) -> Skill {
    Skill {
        name,
        cost,
        kind,
        power,
        description,
    }
}

/// Three fixed skills per class. The most expensive one is the finisher.
pub fn class_skills(class: HeroClass) -> Vec<Skill> {
    use SkillKind::*;

    match class {
        HeroClass::Paladin => vec![
            skill("Holy Strike", 20.0, Damage, 1.5, "Smites one foe with radiant force."),
            skill("Light Shield", 30.0, Heal, 0.5, "Mends the caster's wounds."),
            skill("Judgment", 45.0, Damage, 2.2, "A crushing verdict on a single foe."),
        ],
        HeroClass::Berserker => vec![
            skill("Cleave", 25.0, Aoe, 0.8, "A wide swing that hits every foe."),
            skill("Bloodthirst", 0.0, Damage, 1.2, "A reckless, free strike."),
            skill("Earthshatter", 50.0, Damage, 2.5, "Splits the ground beneath one foe."),
        ],
        HeroClass::Assassin => vec![
            skill("Backstab", 15.0, Damage, 1.8, "Strikes a foe from the shadows."),
            skill("Fan of Knives", 35.0, Aoe, 0.6, "Blades fly at every foe."),
            skill("Deathblow", 60.0, Damage, 3.5, "An execution aimed at one foe."),
        ],
        HeroClass::Elementalist => vec![
            skill("Fireball", 20.0, Damage, 1.6, "Hurls a ball of flame."),
            skill("Blizzard", 50.0, Aoe, 1.0, "Ice storms over every foe."),
            skill("Thunderstorm", 80.0, Damage, 3.0, "Calls lightning onto one foe."),
        ],
        HeroClass::Priest => vec![
            skill("Flash Heal", 20.0, Heal, 1.5, "A quick burst of healing."),
            skill("Prayer of Healing", 50.0, Heal, 0.8, "A slow, steady prayer."),
            skill("Holy Fire", 30.0, Damage, 1.5, "Burns one foe with sacred flame."),
        ],
        HeroClass::Ranger => vec![
            skill("Double Shot", 25.0, Damage, 1.4, "Two arrows at one foe."),
            skill("Volley", 40.0, Aoe, 0.7, "Rains arrows over every foe."),
            skill("Snipe", 55.0, Damage, 2.8, "A carefully aimed killing shot."),
        ],
    }
}

/// Creates a hero at full hp/mp with empty equipment.
pub fn create_hero(id: u32, class: HeroClass) -> Hero {
    let (hp, mp, atk, def, spd) = class_profile(class);
    let base_stats = Stats::new(hp, mp, atk, def, spd);

    Hero {
        id,
        name: class.name().to_string(),
        class,
        base_stats,
        stats: base_stats,
        skills: class_skills(class),
        equipment: Equipment::new(),
    }
}

/// One hero of each class, ids starting at 1.
pub fn default_party() -> Vec<Hero> {
    HeroClass::ALL
        .iter()
        .enumerate()
        .map(|(i, &class)| create_hero(i as u32 + 1, class))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::EquipmentSlot;

    #[test]
    fn test_every_class_has_three_skills() {
        for class in HeroClass::ALL {
            let skills = class_skills(class);
            assert_eq!(skills.len(), 3, "{:?} should have three skills", class);
            assert!(skills.iter().all(|s| s.power > 0.0));
        }
    }

    #[test]
    fn test_every_kit_can_deal_damage() {
        for class in HeroClass::ALL {
            let skills = class_skills(class);
            assert!(
                skills.iter().any(|s| s.kind != SkillKind::Heal),
                "{:?} has no damaging skill",
                class
            );
        }
    }

    #[test]
    fn test_priest_opens_with_a_heal() {
        let skills = class_skills(HeroClass::Priest);
        assert_eq!(skills[0].name, "Flash Heal");
        assert_eq!(skills[0].kind, SkillKind::Heal);
    }

    #[test]
    fn test_create_hero_starts_full_and_naked() {
        let hero = create_hero(7, HeroClass::Elementalist);
        assert_eq!(hero.id, 7);
        assert_eq!(hero.stats, hero.base_stats);
        assert_eq!(hero.stats.hp, 100.0);
        assert_eq!(hero.stats.max_mp, 200.0);
        assert_eq!(hero.stats.atk, 35.0);
        for slot in EquipmentSlot::ALL {
            assert!(hero.equipment.get(slot).is_none());
        }
    }

    #[test]
    fn test_profiles_are_distinct() {
        let profiles: Vec<_> = HeroClass::ALL.iter().map(|&c| class_profile(c)).collect();
        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_party_has_every_class_once() {
        let party = default_party();
        assert_eq!(party.len(), 6);
        for class in HeroClass::ALL {
            assert_eq!(party.iter().filter(|h| h.class == class).count(), 1);
        }
        let ids: Vec<u32> = party.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
