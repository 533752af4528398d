use crate::items::Equipment;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeroClass {
    Paladin,
    Berserker,
    Assassin,
    Elementalist,
    Priest,
    Ranger,
}

impl HeroClass {
    pub const ALL: [HeroClass; 6] = [
        HeroClass::Paladin,
        HeroClass::Berserker,
        HeroClass::Assassin,
        HeroClass::Elementalist,
        HeroClass::Priest,
        HeroClass::Ranger,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Paladin => "Paladin",
            HeroClass::Berserker => "Berserker",
            HeroClass::Assassin => "Assassin",
            HeroClass::Elementalist => "Elementalist",
            HeroClass::Priest => "Priest",
            HeroClass::Ranger => "Ranger",
        }
    }
}

/// Combat stats shared by heroes and enemies. Values are kept as `f64` so
/// percentage math stays exact until the final floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub hp: f64,
    pub max_hp: f64,
    pub mp: f64,
    pub max_mp: f64,
    pub atk: f64,
    pub def: f64,
    pub spd: f64,
}

impl Stats {
    /// Full-resource stats from a raw profile.
    pub fn new(hp: f64, mp: f64, atk: f64, def: f64, spd: f64) -> Self {
        Self {
            hp,
            max_hp: hp,
            mp,
            max_mp: mp,
            atk,
            def,
            spd,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Subtracts `amount` from hp, saturating at zero.
    pub fn take_damage(&mut self, amount: f64) {
        self.hp = (self.hp - amount).max(0.0);
    }

    pub fn heal(&mut self, amount: f64) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn restore_mp(&mut self, amount: f64) {
        self.mp = (self.mp + amount).min(self.max_mp);
    }

    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }

    /// Sets hp and mp to `fraction` of their maxima.
    pub fn set_fraction(&mut self, fraction: f64) {
        self.hp = self.max_hp * fraction;
        self.mp = self.max_mp * fraction;
    }

    pub fn within_bounds(&self) -> bool {
        (0.0..=self.max_hp).contains(&self.hp) && (0.0..=self.max_mp).contains(&self.mp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillKind {
    Damage,
    Heal,
    Aoe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub cost: f64,
    pub kind: SkillKind,
    pub power: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub class: HeroClass,
    /// Class floor, never modified after creation
    pub base_stats: Stats,
    pub stats: Stats,
    pub skills: Vec<Skill>,
    pub equipment: Equipment,
}

impl Hero {
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}
