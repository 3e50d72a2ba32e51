// Pokedex Schema - Shared type definitions
// This crate contains the record and type definitions shared between the
// lookup engine and whatever presentation layer renders its results.

// Re-export the main types
pub use pokemon_types::*;
pub use records::*;

pub mod pokemon_types;
pub mod records;
