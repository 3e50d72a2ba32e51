//! Shared fixtures for unit tests: the first twenty-five dex entries plus a
//! handful of moves, including a duplicated move name.

use crate::store::MemoryStore;
use schema::{BaseStats, Creature, MoveCategory, MoveRecord};

type Entry = (u32, &'static str, &'static str, [u8; 6], Option<&'static str>);

const DEX: [Entry; 25] = [
    (1, "Bulbasaur", "Grass/Poison", [45, 49, 49, 65, 65, 45], Some("Ivysaur")),
    (2, "Ivysaur", "Grass/Poison", [60, 62, 63, 80, 80, 60], Some("Venusaur")),
    (3, "Venusaur", "Grass/Poison", [80, 82, 83, 100, 100, 80], None),
    (4, "Charmander", "Fire", [39, 52, 43, 60, 50, 65], Some("Charmeleon")),
    (5, "Charmeleon", "Fire", [58, 64, 58, 80, 65, 80], Some("Charizard")),
    (6, "Charizard", "Fire/Flying", [78, 84, 78, 109, 85, 100], None),
    (7, "Squirtle", "Water", [44, 48, 65, 50, 64, 43], Some("Wartortle")),
    (8, "Wartortle", "Water", [59, 63, 80, 65, 80, 58], Some("Blastoise")),
    (9, "Blastoise", "Water", [79, 83, 100, 85, 105, 78], None),
    (10, "Caterpie", "Bug", [45, 30, 35, 20, 20, 45], Some("Metapod")),
    (11, "Metapod", "Bug", [50, 20, 55, 25, 25, 30], Some("Butterfree")),
    (12, "Butterfree", "Bug/Flying", [60, 45, 50, 90, 80, 70], None),
    (13, "Weedle", "Bug/Poison", [40, 35, 30, 20, 20, 50], Some("Kakuna")),
    (14, "Kakuna", "Bug/Poison", [45, 25, 50, 25, 25, 35], Some("Beedrill")),
    (15, "Beedrill", "Bug/Poison", [65, 90, 40, 45, 80, 75], None),
    (16, "Pidgey", "Normal/Flying", [40, 45, 40, 35, 35, 56], Some("Pidgeotto")),
    (17, "Pidgeotto", "Normal/Flying", [63, 60, 55, 50, 50, 71], Some("Pidgeot")),
    (18, "Pidgeot", "Normal/Flying", [83, 80, 75, 70, 70, 101], None),
    (19, "Rattata", "Normal", [30, 56, 35, 25, 35, 72], Some("Raticate")),
    (20, "Raticate", "Normal", [55, 81, 60, 50, 70, 97], None),
    (21, "Spearow", "Normal/Flying", [40, 60, 30, 31, 31, 70], Some("Fearow")),
    (22, "Fearow", "Normal/Flying", [65, 90, 65, 61, 61, 100], None),
    (23, "Ekans", "Poison", [35, 60, 44, 40, 54, 55], Some("Arbok")),
    (24, "Arbok", "Poison", [60, 85, 69, 65, 79, 80], None),
    (25, "Pikachu", "Electric", [35, 55, 40, 50, 50, 90], Some("Raichu")),
];

fn stats([hp, attack, defense, sp_attack, sp_defense, speed]: [u8; 6]) -> BaseStats {
    BaseStats {
        hp,
        attack,
        defense,
        sp_attack,
        sp_defense,
        speed,
    }
}

/// A creature with flat placeholder stats, for tests that only care about
/// identity and typing.
pub fn creature(id: u32, name: &str, type_label: &str) -> Creature {
    let base_stats = stats([50; 6]);
    Creature {
        id,
        name: name.to_string(),
        type_label: type_label.to_string(),
        total: base_stats.sum(),
        base_stats,
        evolution: None,
    }
}

pub fn move_record(
    name: &str,
    type_label: &str,
    category: MoveCategory,
    power: Option<u16>,
    accuracy: Option<u8>,
    pp: u8,
) -> MoveRecord {
    MoveRecord {
        name: name.to_string(),
        type_label: type_label.to_string(),
        category,
        power,
        accuracy,
        pp,
    }
}

pub fn sample_creatures() -> Vec<Creature> {
    DEX.iter()
        .map(|&(id, name, type_label, raw_stats, evolution)| {
            let base_stats = stats(raw_stats);
            Creature {
                id,
                name: name.to_string(),
                type_label: type_label.to_string(),
                total: base_stats.sum(),
                base_stats,
                evolution: evolution.map(str::to_string),
            }
        })
        .collect()
}

pub fn sample_moves() -> Vec<MoveRecord> {
    use MoveCategory::*;
    vec![
        move_record("Tackle", "Normal", Physical, Some(40), Some(100), 35),
        move_record("Ember", "Fire", Special, Some(40), Some(100), 25),
        move_record("Flamethrower", "Fire", Special, Some(90), Some(100), 15),
        move_record("Growl", "Normal", Status, None, Some(100), 40),
        move_record("Swords Dance", "Normal", Status, None, None, 20),
        move_record("Thunder Shock", "Electric", Special, Some(40), Some(100), 30),
        move_record("Fly", "Flying", Physical, Some(90), Some(95), 15),
        move_record("Flying Press", "Fighting/Flying", Physical, Some(100), Some(95), 10),
        move_record("Tackle", "Normal", Physical, Some(35), Some(95), 35),
    ]
}

pub fn sample_store() -> MemoryStore {
    MemoryStore::new(sample_creatures(), sample_moves())
}
