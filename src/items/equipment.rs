use super::types::{EquipmentSlot, Item, StatBonuses};
use serde::Serialize;

/// A hero's five equipment slots, each holding at most one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub head: Option<Item>,
    pub body: Option<Item>,
    pub hands: Option<Item>,
    pub feet: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Head => self.head.as_ref(),
            EquipmentSlot::Body => self.body.as_ref(),
            EquipmentSlot::Hands => self.hands.as_ref(),
            EquipmentSlot::Feet => self.feet.as_ref(),
        }
    }

    /// Puts `item` into `slot` and returns whatever was there before.
    pub fn set(&mut self, slot: EquipmentSlot, item: Option<Item>) -> Option<Item> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Head => &mut self.head,
            EquipmentSlot::Body => &mut self.body,
            EquipmentSlot::Hands => &mut self.hands,
            EquipmentSlot::Feet => &mut self.feet,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.head, &self.body, &self.hands, &self.feet]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    /// Sum of every equipped item's bonuses
    pub fn total_bonuses(&self) -> StatBonuses {
        self.iter_equipped()
            .fold(StatBonuses::default(), |acc, item| acc + item.stats)
    }
}
