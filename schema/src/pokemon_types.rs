use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumString};

/// Separator between the two halves of a dual type label, e.g. `"Fire/Flying"`.
pub const TYPE_DELIMITER: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Case-insensitive lookup of a single type name. Surrounding whitespace
    /// is ignored; anything unrecognized yields `None`.
    pub fn lookup(name: &str) -> Option<PokemonType> {
        PokemonType::from_str(name.trim()).ok()
    }
}

/// A type label as stored on a record: nothing, one type name, or two names
/// joined by [`TYPE_DELIMITER`].
///
/// Names are kept as borrowed text rather than [`PokemonType`] because
/// unrecognized names are legal in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLabel<'a> {
    Empty,
    Single(&'a str),
    Dual(&'a str, &'a str),
}

impl<'a> TypeLabel<'a> {
    /// Splits on the first delimiter only, so `"A/B/C"` becomes `Dual("A", "B/C")`.
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return TypeLabel::Empty;
        }

        match trimmed.split_once(TYPE_DELIMITER) {
            Some((first, second)) => TypeLabel::Dual(first.trim(), second.trim()),
            None => TypeLabel::Single(trimmed),
        }
    }

    pub fn names(&self) -> Vec<&'a str> {
        match *self {
            TypeLabel::Empty => Vec::new(),
            TypeLabel::Single(name) => vec![name],
            TypeLabel::Dual(first, second) => vec![first, second],
        }
    }

    /// Recognized constituent types, in label order. Unknown names are skipped.
    pub fn types(&self) -> Vec<PokemonType> {
        self.names()
            .into_iter()
            .filter_map(PokemonType::lookup)
            .collect()
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types().contains(&pokemon_type)
    }

    pub fn is_dual(&self) -> bool {
        matches!(self, TypeLabel::Dual(..))
    }
}

impl fmt::Display for TypeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeLabel::Empty => Ok(()),
            TypeLabel::Single(name) => write!(f, "{}", name),
            TypeLabel::Dual(first, second) => write!(f, "{} / {}", first, second),
        }
    }
}
