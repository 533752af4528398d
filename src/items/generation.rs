use super::names::generate_item_name;
use super::types::{EquipmentSlot, Item, Rarity, StatBonuses};
use crate::core::constants::*;
use crate::utils::random_uuid;
use rand::Rng;

/// Generates an item scaled to `level`. The slot is `forced_slot` if given,
/// otherwise uniform over the five slots.
pub fn generate_item(level: u32, forced_slot: Option<EquipmentSlot>, rng: &mut impl Rng) -> Item {
    let slot = forced_slot.unwrap_or_else(|| roll_random_slot(rng));
    let name = generate_item_name(slot, level, rng);
    let rarity = roll_rarity(rng.gen::<f64>());
    let points = stat_points(level, rarity);
    let stats = allocate_stats(slot, points, rng);
    let id = random_uuid(rng);

    Item::new(id, name, slot, rarity, stats)
}

pub fn roll_random_slot(rng: &mut impl Rng) -> EquipmentSlot {
    EquipmentSlot::ALL[rng.gen_range(0..EquipmentSlot::ALL.len())]
}

/// Maps a uniform roll in [0, 1) to a rarity tier. A roll must be strictly
/// above a threshold to reach that tier.
pub fn roll_rarity(roll: f64) -> Rarity {
    if roll > MYTHIC_THRESHOLD {
        Rarity::Mythic
    } else if roll > LEGENDARY_THRESHOLD {
        Rarity::Legendary
    } else if roll > EPIC_THRESHOLD {
        Rarity::Epic
    } else if roll > RARE_THRESHOLD {
        Rarity::Rare
    } else {
        Rarity::Common
    }
}

/// Level-scaled stat budget: `floor((level * 2 + 5) * multiplier)`.
pub fn stat_points(level: u32, rarity: Rarity) -> u32 {
    ((level as f64 * 2.0 + 5.0) * rarity.multiplier()).floor() as u32
}

/// Distributes `points` according to the slot. Hands and feet roll each stat
/// independently and may end up with no bonuses at all.
fn allocate_stats(slot: EquipmentSlot, points: u32, rng: &mut impl Rng) -> StatBonuses {
    let mut stats = StatBonuses::default();

    match slot {
        EquipmentSlot::Weapon => stats.atk = points,
        EquipmentSlot::Body => stats.def = points,
        EquipmentSlot::Head => {
            stats.hp = points * HEAD_HP_FACTOR;
            if rng.gen::<f64>() < HEAD_MP_CHANCE {
                stats.mp = points * HEAD_MP_FACTOR;
            }
        }
        EquipmentSlot::Hands | EquipmentSlot::Feet => {
            if rng.gen::<f64>() < ACCESSORY_SPD_CHANCE {
                stats.spd = points / 2;
            }
            if rng.gen::<f64>() < ACCESSORY_ATK_CHANCE {
                stats.atk = points / 3;
            }
            if rng.gen::<f64>() < ACCESSORY_DEF_CHANCE {
                stats.def = points / 3;
            }
            if rng.gen::<f64>() < ACCESSORY_MP_CHANCE {
                stats.mp = points * 2;
            }
        }
    }

    stats
}
