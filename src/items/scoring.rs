use super::types::Item;
use crate::character::{apply_recalculation, Hero, HeroClass};

/// Class affinity multiplier for an item. Applies when the item touches the
/// stat axis the class leans on.
pub fn class_weight(class: HeroClass, item: &Item) -> f64 {
    let stats = &item.stats;
    match class {
        HeroClass::Paladin if stats.def > 0 => 1.2,
        HeroClass::Berserker if stats.atk > 0 => 1.2,
        HeroClass::Assassin if stats.spd > 0 => 1.3,
        HeroClass::Elementalist | HeroClass::Priest if stats.mp > 0 => 1.3,
        _ => 1.0,
    }
}

pub fn weighted_score(class: HeroClass, item: &Item) -> f64 {
    item.score * class_weight(class, item)
}

/// Outcome of comparing a candidate against the equipped item.
#[derive(Debug, Clone, PartialEq)]
pub enum EquipDecision {
    /// Candidate should go in; `previous` is what it displaces.
    Replace { previous: Option<Item> },
    Keep,
}

impl EquipDecision {
    pub fn is_replace(&self) -> bool {
        matches!(self, EquipDecision::Replace { .. })
    }
}

/// Decides whether `item` should replace what `hero` has in that slot. Both
/// sides are scored with the hero's class weight; an empty slot scores zero.
/// Only a strictly higher score wins.
pub fn try_auto_equip(hero: &Hero, item: &Item) -> EquipDecision {
    let current = hero.equipment.get(item.slot);
    let new_score = weighted_score(hero.class, item);
    let current_score = current
        .map(|c| weighted_score(hero.class, c))
        .unwrap_or(0.0);

    if new_score > current_score {
        EquipDecision::Replace {
            previous: current.cloned(),
        }
    } else {
        EquipDecision::Keep
    }
}

/// Equips `item` if it wins [`try_auto_equip`], then recalculates stats.
/// Returns whether the item was equipped.
pub fn auto_equip_if_better(hero: &mut Hero, item: Item) -> bool {
    if !try_auto_equip(hero, &item).is_replace() {
        return false;
    }
    hero.equipment.set(item.slot, Some(item));
    apply_recalculation(hero);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::create_hero;
    use crate::items::{EquipmentSlot, Rarity, StatBonuses};
    use uuid::Uuid;

    fn item(slot: EquipmentSlot, stats: StatBonuses) -> Item {
        Item::new(Uuid::nil(), "Test".to_string(), slot, Rarity::Common, stats)
    }

    fn atk(n: u32) -> StatBonuses {
        StatBonuses {
            atk: n,
            ..StatBonuses::default()
        }
    }

    #[test]
    fn test_class_weights() {
        let def_item = item(
            EquipmentSlot::Body,
            StatBonuses {
                def: 5,
                ..StatBonuses::default()
            },
        );
        let mp_item = item(
            EquipmentSlot::Head,
            StatBonuses {
                hp: 10,
                mp: 5,
                ..StatBonuses::default()
            },
        );
        assert_eq!(class_weight(HeroClass::Paladin, &def_item), 1.2);
        assert_eq!(class_weight(HeroClass::Berserker, &def_item), 1.0);
        assert_eq!(class_weight(HeroClass::Priest, &mp_item), 1.3);
        assert_eq!(class_weight(HeroClass::Elementalist, &mp_item), 1.3);
        assert_eq!(class_weight(HeroClass::Ranger, &mp_item), 1.0);
    }

    #[test]
    fn test_empty_slot_accepts_scoring_item() {
        let hero = create_hero(1, HeroClass::Ranger);
        let decision = try_auto_equip(&hero, &item(EquipmentSlot::Weapon, atk(3)));
        assert_eq!(decision, EquipDecision::Replace { previous: None });
    }

    #[test]
    fn test_zero_score_item_never_equipped() {
        let hero = create_hero(1, HeroClass::Ranger);
        let junk = item(EquipmentSlot::Hands, StatBonuses::default());
        assert_eq!(try_auto_equip(&hero, &junk), EquipDecision::Keep);
    }

    #[test]
    fn test_tie_keeps_incumbent() {
        let mut hero = create_hero(1, HeroClass::Assassin);
        hero.equipment
            .set(EquipmentSlot::Weapon, Some(item(EquipmentSlot::Weapon, atk(10))));
        let same = item(EquipmentSlot::Weapon, atk(10));
        assert_eq!(try_auto_equip(&hero, &same), EquipDecision::Keep);
    }

    #[test]
    fn test_replace_reports_previous() {
        let mut hero = create_hero(1, HeroClass::Assassin);
        let old = item(EquipmentSlot::Weapon, atk(4));
        hero.equipment.set(EquipmentSlot::Weapon, Some(old.clone()));
        let decision = try_auto_equip(&hero, &item(EquipmentSlot::Weapon, atk(5)));
        assert_eq!(decision, EquipDecision::Replace { previous: Some(old) });
    }

    #[test]
    fn test_try_auto_equip_does_not_mutate() {
        let hero = create_hero(1, HeroClass::Paladin);
        let before = hero.clone();
        let _ = try_auto_equip(&hero, &item(EquipmentSlot::Weapon, atk(30)));
        assert_eq!(hero, before);
    }

    #[test]
    fn test_auto_equip_if_better_applies_stats() {
        let mut hero = create_hero(1, HeroClass::Berserker);
        assert!(auto_equip_if_better(&mut hero, item(EquipmentSlot::Weapon, atk(8))));
        assert_eq!(hero.stats.atk, 33.0);
        assert!(!auto_equip_if_better(&mut hero, item(EquipmentSlot::Weapon, atk(2))));
        assert_eq!(hero.stats.atk, 33.0);
    }

    #[test]
    fn test_weight_applies_to_incumbent_too() {
        // Equipped 5 def counts as 6.0 for a paladin
        let mut hero = create_hero(1, HeroClass::Paladin);
        let def_item = item(
            EquipmentSlot::Feet,
            StatBonuses {
                def: 5,
                ..StatBonuses::default()
            },
        );
        hero.equipment.set(EquipmentSlot::Feet, Some(def_item));
        let spd = |n| {
            item(
                EquipmentSlot::Feet,
                StatBonuses {
                    spd: n,
                    ..StatBonuses::default()
                },
            )
        };
        assert_eq!(try_auto_equip(&hero, &spd(5)), EquipDecision::Keep);
        assert!(try_auto_equip(&hero, &spd(7)).is_replace());
    }
}
