//! Pokedex Lookup Engine
//!
//! Search, type filtering, previous/next browsing and type theming over a
//! read-only Pokedex database. Rendering is left to the caller: every
//! operation returns plain data.

// --- MODULE DECLARATIONS ---
pub mod colors;
pub mod config;
pub mod display;
pub mod errors;
pub mod navigation;
pub mod query;
pub mod session;
pub mod store;
pub mod type_filter;

#[cfg(test)]
mod test_support;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, Creature, MoveCategory, MoveRecord, PokemonType, TypeLabel, TYPE_DELIMITER,
};

// --- From this crate's modules (`src/`) ---
pub use colors::{resolve_color, ColorDescriptor, Rgb, NEUTRAL};
pub use config::DexConfig;
pub use display::{CreatureCard, MoveCard};
pub use errors::{StoreError, StoreResult};
pub use navigation::{NavigationCursor, StepOutcome};
pub use query::{SearchOutcome, SearchTerm};
pub use session::{DexSession, FilterResults, View};
pub use store::{MemoryStore, RecordStore, SqliteStore};
pub use type_filter::{Domain, FilterOutcome, TypeSelection};
