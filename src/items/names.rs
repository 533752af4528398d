use super::types::EquipmentSlot;
use rand::seq::SliceRandom;
use rand::Rng;

pub const ITEM_PREFIXES: [&str; 15] = [
    "Rusty", "Plain", "Fine", "Reinforced", "Enchanted", "Ancient", "Cyber", "Holy", "Cursed",
    "Cosmic", "Dragonbone", "Void", "Titan", "Crystal", "Steam",
];

pub fn get_base_names(slot: EquipmentSlot) -> &'static [&'static str] {
    match slot {
        EquipmentSlot::Weapon => &[
            "Longsword", "War Axe", "Dagger", "Staff", "Wand", "Longbow", "Warhammer", "Blade",
            "Scepter", "Ray Gun", "Lightsaber", "Greatsword", "Crossbow", "Spirit Orb",
        ],
        EquipmentSlot::Head => &[
            "Helmet", "Cap", "Hood", "Visor", "Crown", "Mask", "Turban", "War Helm", "Halo",
            "Horns", "Goggles", "Oni Mask",
        ],
        EquipmentSlot::Body => &[
            "Armor", "Robe", "Vest", "Plate", "Coat", "Battle Suit", "Cloak", "Chainmail",
            "Shell", "Carapace", "Power Armor", "Ninja Garb", "Runed Cloth",
        ],
        EquipmentSlot::Hands => &[
            "Gloves", "Gauntlets", "Bracers", "Knuckles", "Finger Guards", "Claws", "Vambraces",
            "Wraps", "Touch", "Iron Fist", "Mech Arm", "Dragon Claw",
        ],
        EquipmentSlot::Feet => &[
            "Boots", "Greaves", "Sandals", "Slippers", "Treads", "Striders", "High Boots",
            "Iron Shoes", "Paws", "Horseshoes", "Jet Boots", "Cloud Steps",
        ],
    }
}

/// Rolls a display name. Deeper levels unlock later prefixes: the prefix
/// index is capped at `level % 10`.
pub fn generate_item_name(slot: EquipmentSlot, level: u32, rng: &mut impl Rng) -> String {
    let cap = (level % 10) as usize;
    let prefix_idx = rng.gen_range(0..ITEM_PREFIXES.len()).min(cap);
    let prefix = ITEM_PREFIXES[prefix_idx];
    let base = get_base_names(slot).choose(rng).copied().unwrap_or("Trinket");
    format!("{} {}", prefix, base)
}
