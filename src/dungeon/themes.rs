//! Static region catalog: palettes and enemy name pools per theme.

use crate::combat::types::EnemyKind;
use serde::Serialize;

/// Flavor, palette and enemy name pools for one region.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MapTheme {
    pub name: &'static str,
    pub wall_color: &'static str,
    pub floor_color: &'static str,
    /// Background gradient for the battle scene
    pub bg_gradient: &'static str,
    /// Adjectives for trash enemies
    pub enemy_prefixes: &'static [&'static str],
    /// Nouns for trash enemies, also the key into the enemy kind table
    pub enemy_bases: &'static [&'static str],
    pub boss_names: &'static [&'static str],
}

pub static THEMES: [MapTheme; 22] = [
    MapTheme {
        name: "Rotting Marsh",
        wall_color: "#2c3e23",
        floor_color: "#1a2316",
        bg_gradient: "#1a2316,#2c3e23,#000000",
        enemy_prefixes: &["Venomous", "Muddy", "Rotten", "Mutated", "Shaggy", "Reeking"],
        enemy_bases: &["Giant Rat", "Ooze", "Gnat Swarm", "Crocodile", "Hydra"],
        boss_names: &["King of the Marsh", "Source of All Plagues"],
    },
    MapTheme {
        name: "Scorched Inferno",
        wall_color: "#451212",
        floor_color: "#290808",
        bg_gradient: "#290808,#7f1d1d,#450a0a",
        enemy_prefixes: &["Burning", "Molten", "Obsidian", "Raging", "Ashen", "Hellborn"],
        enemy_bases: &["Imp", "Fire Elemental", "Hellhound", "Flame Fiend", "Red Whelp"],
        boss_names: &["Avatar of the Firelord", "Lord of Cinders"],
    },
    MapTheme {
        name: "Permafrost Plains",
        wall_color: "#1e293b",
        floor_color: "#0f172a",
        bg_gradient: "#0f172a,#1e3a8a,#cbd5e1",
        enemy_prefixes: &["Frigid", "Frosted", "Avalanche", "Crystal", "Pale", "Dormant"],
        enemy_bases: &["Snow Wolf", "Frost Giant", "Yeti", "Ice Wraith", "Polar Bear"],
        boss_names: &["Winter Empress", "Absolute Zero"],
    },
    MapTheme {
        name: "Cyber Ruins",
        wall_color: "#2e1065",
        floor_color: "#170a2b",
        bg_gradient: "#020617,#4c1d95,#c026d3",
        enemy_prefixes: &["Mechanical", "Laser", "Holographic", "Rogue", "Quantum", "Synthetic"],
        enemy_bases: &["Drone", "Sentry", "Cyborg", "Turret", "Mech Spider"],
        boss_names: &["Skynet Core", "Berserk Unit Zero"],
    },
    MapTheme {
        name: "Void Dimension",
        wall_color: "#310b45",
        floor_color: "#0f0214",
        bg_gradient: "#000000,#581c87,#000000",
        enemy_prefixes: &["Void", "Shadow", "Twisted", "Faceless", "Nightmare", "Chaos"],
        enemy_bases: &["Walker", "Devourer", "Beholder", "Tentacle Horror", "Phantom"],
        boss_names: &["Void Sovereign", "God of a Thousand Eyes"],
    },
    MapTheme {
        name: "Lost Temple",
        wall_color: "#78350f",
        floor_color: "#451a03",
        bg_gradient: "#451a03,#b45309,#292524",
        enemy_prefixes: &["Ancient", "Cursed", "Pharaoh's", "Dusty", "Golden", "Undying"],
        enemy_bases: &["Mummy", "Scarab", "Gargoyle", "Priest", "Anubis Guard"],
        boss_names: &["Undying Pharaoh", "Reaper of the Sands"],
    },
    MapTheme {
        name: "Abyssal Trench",
        wall_color: "#172554",
        floor_color: "#020617",
        bg_gradient: "#020617,#1e3a8a,#172554",
        enemy_prefixes: &["Deep", "Tidal", "Coral", "Charged", "Armored", "Toxic"],
        enemy_bases: &["Naga", "Giant Crab", "Anglerfish", "Sea Serpent", "Frenzied Shark"],
        boss_names: &["Leviathan", "Tyrant of the Deep"],
    },
    MapTheme {
        name: "Necropolis",
        wall_color: "#3f3f46",
        floor_color: "#18181b",
        bg_gradient: "#000000,#52525b,#18181b",
        enemy_prefixes: &["Skeletal", "Ghostly", "Decayed", "Vengeful", "Bone", "Vampiric"],
        enemy_bases: &["Soldier", "Archer", "Mage", "Knight", "Bat"],
        boss_names: &["Lich King", "Death Knight"],
    },
    MapTheme {
        name: "Sky Citadel",
        wall_color: "#e2e8f0",
        floor_color: "#bae6fd",
        bg_gradient: "#bae6fd,#e0f2fe,#ffffff",
        enemy_prefixes: &["Holy", "Stormy", "Cloudborne", "Winged", "Thundering", "Radiant"],
        enemy_bases: &["Griffin", "Harpy", "Pegasus", "Cloud Spirit", "Watcher"],
        boss_names: &["Storm Monarch", "Lord of the Sky"],
    },
    MapTheme {
        name: "Steam Fortress",
        wall_color: "#78350f",
        floor_color: "#271c19",
        bg_gradient: "#271c19,#b45309,#d97706",
        enemy_prefixes: &["Steam", "Clockwork", "Brass", "Geared", "Overcharged", "Ironclad"],
        enemy_bases: &["Robot", "Mech", "Engineer", "Gunner", "Patrol Bot"],
        boss_names: &["Steam Colossus", "Gear Overlord"],
    },
    MapTheme {
        name: "Glimmerwood",
        wall_color: "#064e3b",
        floor_color: "#022c22",
        bg_gradient: "#022c22,#059669,#d8b4fe",
        enemy_prefixes: &["Psychedelic", "Glowing", "Elder", "Psionic", "Emerald", "Moonlit"],
        enemy_bases: &["Treant", "Unicorn", "Fairy", "Flower Fiend", "Faerie Dragon"],
        boss_names: &["Elder Tree", "Avatar of the Moon"],
    },
    MapTheme {
        name: "Dragon's Lair",
        wall_color: "#7f1d1d",
        floor_color: "#450a0a",
        bg_gradient: "#450a0a,#dc2626,#fbbf24",
        enemy_prefixes: &["Blazing", "Blackscale", "Greedy", "Firebreathing", "Elder", "Frenzied"],
        enemy_bases: &["Wyrmling", "Dragonkin", "Kobold", "Wyvern", "Salamander"],
        boss_names: &["World-Ender Dragon", "Red Dragon Queen"],
    },
    MapTheme {
        name: "Crystal Mines",
        wall_color: "#4c1d95",
        floor_color: "#2e1065",
        bg_gradient: "#2e1065,#7c3aed,#22d3ee",
        enemy_prefixes: &["Crystallized", "Shining", "Prismatic", "Resonant", "Amethyst", "Hardened"],
        enemy_bases: &["Crystal Golem", "Miner", "Rock Eater", "Crystal Scorpion", "Geode"],
        boss_names: &["Crystal Queen", "Diamond Golem"],
    },
    MapTheme {
        name: "Ghost Fleet",
        wall_color: "#064e3b",
        floor_color: "#0f172a",
        bg_gradient: "#020617,#115e59,#0f172a",
        enemy_prefixes: &["Drowned", "Spectral", "Barnacled", "Sunken", "Accursed", "Rotting"],
        enemy_bases: &["Pirate", "Sailor", "Captain", "Revenant", "Skeleton Parrot"],
        boss_names: &["King of the Drowned", "Ghost Captain"],
    },
    MapTheme {
        name: "Fungal Wilds",
        wall_color: "#4a044e",
        floor_color: "#2e1065",
        bg_gradient: "#2e1065,#a21caf,#4ade80",
        enemy_prefixes: &["Spore", "Hallucinogenic", "Parasitic", "Bloated", "Poisonous", "Fluorescent"],
        enemy_bases: &["Mushroom Man", "Fungal Brute", "Spore Bat", "Slime", "Infected"],
        boss_names: &["Myconid Lord", "Heart of Rot"],
    },
    MapTheme {
        name: "Starship",
        wall_color: "#e5e5e5",
        floor_color: "#171717",
        bg_gradient: "#000000,#262626,#0ea5e9",
        enemy_prefixes: &["Alien", "Laser", "Plasma", "Mutant", "Interstellar", "Cyber"],
        enemy_bases: &["Xenomorph", "Space Marine", "Android", "Marauder", "Bio-Construct"],
        boss_names: &["Xeno Queen", "Star Warlord"],
    },
    MapTheme {
        name: "Bamboo Grove",
        wall_color: "#14532d",
        floor_color: "#365314",
        bg_gradient: "#14532d,#4ade80,#fef9c3",
        enemy_prefixes: &["Kung Fu", "Hermit", "Verdant", "Wild", "Spirited", "Drunken"],
        enemy_bases: &["Pandaren", "Tiger", "Golden Monkey", "Ninja", "Bamboo Spirit"],
        boss_names: &["Drunken Master", "Guardian of the Grove"],
    },
    MapTheme {
        name: "Vampire Manor",
        wall_color: "#450a0a",
        floor_color: "#000000",
        bg_gradient: "#000000,#991b1b,#450a0a",
        enemy_prefixes: &["Bloodthirsty", "Pallid", "Noble", "Nocturnal", "Crimson", "Eternal"],
        enemy_bases: &["Vampire", "Thrall", "Werewolf", "Giant Bat", "Stone Gargoyle"],
        boss_names: &["Count Dracula", "Blood Queen"],
    },
    MapTheme {
        name: "Barren Wasteland",
        wall_color: "#78350f",
        floor_color: "#451a03",
        bg_gradient: "#451a03,#d97706,#a16207",
        enemy_prefixes: &["Irradiated", "Mutant", "Feral", "Scavenger", "Rusty", "Dust"],
        enemy_bases: &["Raider", "Rad Scorpion", "Super Mutant", "Sandworm", "Thug"],
        boss_names: &["Wasteland Warlord", "Radiation Behemoth"],
    },
    MapTheme {
        name: "Shadow Labyrinth",
        wall_color: "#18181b",
        floor_color: "#09090b",
        bg_gradient: "#000000,#27272a,#52525b",
        enemy_prefixes: &["Formless", "Pitch-Black", "Despairing", "Dread", "Phantasmal", "Silent"],
        enemy_bases: &["Shade", "Assassin", "Nightmare", "Darkling", "Reaper"],
        boss_names: &["Avatar of Shadow", "Lord of Darkness"],
    },
    MapTheme {
        name: "Candy Kingdom",
        wall_color: "#fbcfe8",
        floor_color: "#fdf2f8",
        bg_gradient: "#fdf2f8,#f472b6,#fde047",
        enemy_prefixes: &["Sweet", "Sticky", "Crunchy", "Grumpy", "Chocolate", "Gingerbread"],
        enemy_bases: &["Gingerbread Man", "Gummy Beast", "Candy Unicorn", "Marshmallow", "Cookie Trooper"],
        boss_names: &["Candy King", "Duke of Chocolate"],
    },
    MapTheme {
        name: "Titan Ruins",
        wall_color: "#1e3a8a",
        floor_color: "#172554",
        bg_gradient: "#172554,#1d4ed8,#93c5fd",
        enemy_prefixes: &["Arcane", "Titanic", "Runic", "Warding", "Charged", "Primordial"],
        enemy_bases: &["Construct", "Guardian", "Golem", "Energy Orb", "Mana Wyrm"],
        boss_names: &["Titan Guardian", "Astral Magus"],
    },
];

/// Base name to enemy classification. Names missing from the table fall back
/// to [`EnemyKind::Beast`].
static ENEMY_KINDS: &[(&str, EnemyKind)] = &[
    ("Giant Rat", EnemyKind::Beast),
    ("Ooze", EnemyKind::Beast),
    ("Gnat Swarm", EnemyKind::Beast),
    ("Crocodile", EnemyKind::Beast),
    ("Hydra", EnemyKind::Beast),
    ("Imp", EnemyKind::Demon),
    ("Fire Elemental", EnemyKind::Demon),
    ("Hellhound", EnemyKind::Beast),
    ("Flame Fiend", EnemyKind::Demon),
    ("Red Whelp", EnemyKind::Beast),
    ("Snow Wolf", EnemyKind::Beast),
    ("Frost Giant", EnemyKind::Humanoid),
    ("Yeti", EnemyKind::Beast),
    ("Ice Wraith", EnemyKind::Undead),
    ("Polar Bear", EnemyKind::Beast),
    ("Drone", EnemyKind::Construct),
    ("Sentry", EnemyKind::Construct),
    ("Cyborg", EnemyKind::Humanoid),
    ("Turret", EnemyKind::Construct),
    ("Mech Spider", EnemyKind::Construct),
    ("Walker", EnemyKind::Humanoid),
    ("Devourer", EnemyKind::Demon),
    ("Beholder", EnemyKind::Demon),
    ("Tentacle Horror", EnemyKind::Beast),
    ("Phantom", EnemyKind::Undead),
    ("Mummy", EnemyKind::Undead),
    ("Scarab", EnemyKind::Beast),
    ("Gargoyle", EnemyKind::Construct),
    ("Priest", EnemyKind::Humanoid),
    ("Anubis Guard", EnemyKind::Humanoid),
    ("Naga", EnemyKind::Humanoid),
    ("Giant Crab", EnemyKind::Beast),
    ("Anglerfish", EnemyKind::Beast),
    ("Sea Serpent", EnemyKind::Beast),
    ("Frenzied Shark", EnemyKind::Beast),
    ("Soldier", EnemyKind::Undead),
    ("Archer", EnemyKind::Undead),
    ("Mage", EnemyKind::Undead),
    ("Knight", EnemyKind::Undead),
    ("Bat", EnemyKind::Beast),
    ("Griffin", EnemyKind::Beast),
    ("Harpy", EnemyKind::Demon),
    ("Pegasus", EnemyKind::Beast),
    ("Cloud Spirit", EnemyKind::Demon),
    ("Watcher", EnemyKind::Humanoid),
    ("Robot", EnemyKind::Construct),
    ("Mech", EnemyKind::Construct),
    ("Engineer", EnemyKind::Humanoid),
    ("Gunner", EnemyKind::Humanoid),
    ("Patrol Bot", EnemyKind::Construct),
    ("Treant", EnemyKind::Beast),
    ("Unicorn", EnemyKind::Beast),
    ("Fairy", EnemyKind::Humanoid),
    ("Flower Fiend", EnemyKind::Demon),
    ("Faerie Dragon", EnemyKind::Beast),
    ("Wyrmling", EnemyKind::Beast),
    ("Dragonkin", EnemyKind::Humanoid),
    ("Kobold", EnemyKind::Demon),
    ("Wyvern", EnemyKind::Beast),
    ("Salamander", EnemyKind::Beast),
    ("Crystal Golem", EnemyKind::Construct),
    ("Miner", EnemyKind::Humanoid),
    ("Rock Eater", EnemyKind::Beast),
    ("Crystal Scorpion", EnemyKind::Beast),
    ("Geode", EnemyKind::Construct),
    ("Pirate", EnemyKind::Undead),
    ("Sailor", EnemyKind::Undead),
    ("Captain", EnemyKind::Undead),
    ("Revenant", EnemyKind::Undead),
    ("Skeleton Parrot", EnemyKind::Undead),
    ("Mushroom Man", EnemyKind::Beast),
    ("Fungal Brute", EnemyKind::Beast),
    ("Spore Bat", EnemyKind::Beast),
    ("Slime", EnemyKind::Beast),
    ("Infected", EnemyKind::Undead),
    ("Xenomorph", EnemyKind::Demon),
    ("Space Marine", EnemyKind::Humanoid),
    ("Marauder", EnemyKind::Humanoid),
    ("Android", EnemyKind::Construct),
    ("Bio-Construct", EnemyKind::Construct),
    ("Pandaren", EnemyKind::Humanoid),
    ("Tiger", EnemyKind::Beast),
    ("Golden Monkey", EnemyKind::Beast),
    ("Ninja", EnemyKind::Humanoid),
    ("Bamboo Spirit", EnemyKind::Demon),
    ("Vampire", EnemyKind::Humanoid),
    ("Thrall", EnemyKind::Humanoid),
    ("Werewolf", EnemyKind::Beast),
    ("Giant Bat", EnemyKind::Beast),
    ("Stone Gargoyle", EnemyKind::Construct),
    ("Raider", EnemyKind::Humanoid),
    ("Rad Scorpion", EnemyKind::Beast),
    ("Super Mutant", EnemyKind::Humanoid),
    ("Sandworm", EnemyKind::Beast),
    ("Thug", EnemyKind::Humanoid),
    ("Shade", EnemyKind::Demon),
    ("Assassin", EnemyKind::Humanoid),
    ("Nightmare", EnemyKind::Demon),
    ("Darkling", EnemyKind::Undead),
    ("Reaper", EnemyKind::Undead),
    ("Gingerbread Man", EnemyKind::Construct),
    ("Gummy Beast", EnemyKind::Beast),
    ("Marshmallow", EnemyKind::Demon),
    ("Candy Unicorn", EnemyKind::Beast),
    ("Cookie Trooper", EnemyKind::Construct),
    ("Construct", EnemyKind::Construct),
    ("Guardian", EnemyKind::Construct),
    ("Golem", EnemyKind::Construct),
    ("Energy Orb", EnemyKind::Construct),
    ("Mana Wyrm", EnemyKind::Beast),
];

/// Looks up the classification for an enemy base name.
pub fn enemy_kind_for(base_name: &str) -> EnemyKind {
    ENEMY_KINDS
        .iter()
        .find(|(name, _)| *name == base_name)
        .map(|(_, kind)| *kind)
        .unwrap_or(EnemyKind::Beast)
}
