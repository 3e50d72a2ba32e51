use crate::pokemon_types::{PokemonType, TypeLabel};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumString;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    /// Sum of the six stats. The stored `total` column is normally equal to this.
    pub fn sum(&self) -> u16 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
        .iter()
        .map(|&stat| u16::from(stat))
        .sum()
    }
}

/// One row of the `creatures` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    /// Raw label, e.g. `"Fire/Flying"`. See [`Creature::types`].
    pub type_label: String,
    pub total: u16,
    pub base_stats: BaseStats,
    /// `None` when the creature does not evolve.
    pub evolution: Option<String>,
}

impl Creature {
    pub fn types(&self) -> TypeLabel<'_> {
        TypeLabel::parse(&self.type_label)
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types().has_type(pokemon_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
    /// Anything the dataset stores that is not one of the three above.
    #[strum(default)]
    Other(String),
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
            MoveCategory::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// One row of the `moves` table. Names are not unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,
    pub type_label: String,
    pub category: MoveCategory,
    pub power: Option<u16>, // None for status moves
    pub accuracy: Option<u8>, // None for moves that never miss
    pub pp: u8,
}

impl MoveRecord {
    pub fn types(&self) -> TypeLabel<'_> {
        TypeLabel::parse(&self.type_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    fn charizard() -> Creature {
        Creature {
            id: 6,
            name: "Charizard".to_string(),
            type_label: "Fire/Flying".to_string(),
            total: 534,
            base_stats: BaseStats {
                hp: 78,
                attack: 84,
                defense: 78,
                sp_attack: 109,
                sp_defense: 85,
                speed: 100,
            },
            evolution: None,
        }
    }

    #[test]
    fn test_stat_sum_matches_total() {
        let creature = charizard();
        assert_eq!(creature.base_stats.sum(), creature.total);
    }

    #[test]
    fn test_creature_types() {
        let creature = charizard();
        assert!(creature.has_type(PokemonType::Fire));
        assert!(creature.has_type(PokemonType::Flying));
        assert!(!creature.has_type(PokemonType::Dragon));
        assert_eq!(creature.types(), TypeLabel::Dual("Fire", "Flying"));
    }

    #[rstest]
    #[case("Physical", MoveCategory::Physical)]
    #[case("special", MoveCategory::Special)]
    #[case("STATUS", MoveCategory::Status)]
    #[case("Z-Move", MoveCategory::Other("Z-Move".to_string()))]
    fn test_parse_move_category(#[case] raw: &str, #[case] expected: MoveCategory) {
        assert_eq!(MoveCategory::from_str(raw), Ok(expected.clone()));
        assert!(!expected.to_string().is_empty());
    }
}
