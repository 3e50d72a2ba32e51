//! Theme colors for type labels.
//!
//! Resolution is pure: the caller gets a [`ColorDescriptor`] and decides how
//! to paint it. Unknown type names are not errors; they take [`NEUTRAL`].

use schema::{PokemonType, TypeLabel};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Default window background. Used for empty labels and unknown type names.
pub const NEUTRAL: Rgb = Rgb::from_hex(0x2C3E50);

pub fn type_color(pokemon_type: PokemonType) -> Rgb {
    use PokemonType::*;

    let hex = match pokemon_type {
        Normal => 0xA8A878,
        Fighting => 0xC03028,
        Flying => 0xA890F0,
        Poison => 0xA040A0,
        Ground => 0xE0C068,
        Rock => 0xB8A038,
        Bug => 0xA8B820,
        Ghost => 0x705898,
        Steel => 0xB8B8D0,
        Fire => 0xF08030,
        Water => 0x6890F0,
        Grass => 0x78C850,
        Electric => 0xF8D030,
        Psychic => 0xF85888,
        Ice => 0x98D8D8,
        Dragon => 0x7038F8,
        Dark => 0x705848,
        Fairy => 0xEE99AC,
    };
    Rgb::from_hex(hex)
}

/// Color for one type name, falling back to [`NEUTRAL`].
pub fn color_for_name(name: &str) -> Rgb {
    PokemonType::lookup(name).map_or(NEUTRAL, type_color)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorDescriptor {
    Solid(Rgb),
    /// Two-stop linear gradient, first type to second.
    Gradient {
        stop0: Rgb,
        stop1: Rgb,
    },
}

impl ColorDescriptor {
    pub const fn neutral() -> Self {
        ColorDescriptor::Solid(NEUTRAL)
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, ColorDescriptor::Gradient { .. })
    }
}

impl Default for ColorDescriptor {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for ColorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorDescriptor::Solid(color) => write!(f, "{}", color),
            ColorDescriptor::Gradient { stop0, stop1 } => {
                write!(f, "linear-gradient({}, {})", stop0, stop1)
            }
        }
    }
}

/// Maps a type label to a solid color, or to a gradient for dual types.
/// An empty label resets to the neutral background.
pub fn resolve_color(label: &str) -> ColorDescriptor {
    match TypeLabel::parse(label) {
        TypeLabel::Empty => ColorDescriptor::neutral(),
        TypeLabel::Single(name) => ColorDescriptor::Solid(color_for_name(name)),
        TypeLabel::Dual(first, second) => ColorDescriptor::Gradient {
            stop0: color_for_name(first),
            stop1: color_for_name(second),
        },
    }
}
