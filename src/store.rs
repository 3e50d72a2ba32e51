//! Read-only access to the creature and move tables.
//!
//! [`RecordStore`] is the seam between the lookup engine and storage. The
//! production backend is [`SqliteStore`]; [`MemoryStore`] holds records in
//! memory with the same matching rules.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::StoreResult;
use crate::query::SearchTerm;
use schema::{Creature, MoveRecord};

/// All name and label comparisons are ASCII case-insensitive. Only `A-Z`
/// fold to `a-z`, so `"FLABÉBÉ"` does not match `"Flabébé"`. Creatures come
/// back in ascending identifier order, moves in table order.
pub trait RecordStore {
    fn find_creature_by_id(&self, id: u32) -> StoreResult<Option<Creature>>;

    /// Creature with the highest identifier in `FIRST_ID..id`.
    fn find_creature_before(&self, id: u32) -> StoreResult<Option<Creature>>;

    /// Creature with the lowest identifier in `id + 1..=max`.
    fn find_creature_after(&self, id: u32, max: u32) -> StoreResult<Option<Creature>>;

    /// Exact name match. Names are not guaranteed unique.
    fn find_creatures_by_name(&self, name: &str) -> StoreResult<Vec<Creature>>;

    /// Creatures whose type label contains `label` as a substring.
    fn find_creatures_by_type_contains(&self, label: &str) -> StoreResult<Vec<Creature>>;

    /// Highest identifier present, or 0 when the table is empty.
    fn max_creature_id(&self) -> StoreResult<u32>;

    fn find_moves_by_name(&self, name: &str) -> StoreResult<Vec<MoveRecord>>;

    fn find_moves_by_type_contains(&self, label: &str) -> StoreResult<Vec<MoveRecord>>;

    /// Dispatches an already classified search term to the id or name lookup.
    fn find_creatures_by_id_or_name(&self, term: &SearchTerm) -> StoreResult<Vec<Creature>> {
        match term {
            SearchTerm::Id(id) => match u32::try_from(*id) {
                Ok(id) => Ok(self.find_creature_by_id(id)?.into_iter().collect()),
                // No stored identifier can be this large.
                Err(_) => Ok(Vec::new()),
            },
            SearchTerm::Name(name) => self.find_creatures_by_name(name),
        }
    }
}
