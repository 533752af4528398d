use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EquipmentSlot {
    Weapon,
    Head,
    Body,
    Hands,
    Feet,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 5] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Head,
        EquipmentSlot::Body,
        EquipmentSlot::Hands,
        EquipmentSlot::Feet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Head => "Head",
            EquipmentSlot::Body => "Body",
            EquipmentSlot::Hands => "Hands",
            EquipmentSlot::Feet => "Feet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Mythic = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// Multiplier applied to the level-scaled stat budget.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 3.0,
            Rarity::Mythic => 5.0,
        }
    }
}

/// Partial stat bundle granted by an item. A zero field means the item does
/// not touch that stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatBonuses {
    pub hp: u32,
    pub mp: u32,
    pub atk: u32,
    pub def: u32,
    pub spd: u32,
}

impl StatBonuses {
    /// Comparison score: hp is discounted tenfold, mp is not counted.
    pub fn score(&self) -> f64 {
        self.hp as f64 / 10.0 + self.atk as f64 + self.def as f64 + self.spd as f64
    }

    pub fn is_empty(&self) -> bool {
        *self == StatBonuses::default()
    }

    /// Short summary such as "+12 ATK +3 DEF"
    pub fn summary(&self) -> String {
        [
            ("HP", self.hp),
            ("MP", self.mp),
            ("ATK", self.atk),
            ("DEF", self.def),
            ("SPD", self.spd),
        ]
        .iter()
        .filter(|(_, v)| *v > 0)
        .map(|(label, v)| format!("+{} {}", v, label))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl std::ops::Add for StatBonuses {
    type Output = StatBonuses;

    fn add(self, rhs: StatBonuses) -> StatBonuses {
        StatBonuses {
            hp: self.hp + rhs.hp,
            mp: self.mp + rhs.mp,
            atk: self.atk + rhs.atk,
            def: self.def + rhs.def,
            spd: self.spd + rhs.spd,
        }
    }
}

/// An immutable piece of gear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    pub stats: StatBonuses,
    /// Weighted sum of `stats`, used only to compare items
    pub score: f64,
}

impl Item {
    pub fn new(id: Uuid, name: String, slot: EquipmentSlot, rarity: Rarity, stats: StatBonuses) -> Self {
        Self {
            id,
            name,
            slot,
            rarity,
            score: stats.score(),
            stats,
        }
    }
}
