use crate::errors::StoreResult;
use crate::navigation::FIRST_ID;
use crate::store::RecordStore;
use schema::{Creature, MoveRecord};

/// In-memory record store. Matching follows the SQLite backend exactly:
/// ASCII case folding, creatures ordered by identifier, moves in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    creatures: Vec<Creature>,
    moves: Vec<MoveRecord>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

impl MemoryStore {
    pub fn new(mut creatures: Vec<Creature>, moves: Vec<MoveRecord>) -> Self {
        creatures.sort_by_key(|creature| creature.id);
        Self { creatures, moves }
    }

    /// Inserts or replaces the creature with the same identifier.
    pub fn insert_creature(&mut self, creature: Creature) {
        match self
            .creatures
            .binary_search_by_key(&creature.id, |existing| existing.id)
        {
            Ok(index) => self.creatures[index] = creature,
            Err(index) => self.creatures.insert(index, creature),
        }
    }

    pub fn remove_creature(&mut self, id: u32) -> Option<Creature> {
        let index = self
            .creatures
            .binary_search_by_key(&id, |existing| existing.id)
            .ok()?;
        Some(self.creatures.remove(index))
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }
}

impl RecordStore for MemoryStore {
    fn find_creature_by_id(&self, id: u32) -> StoreResult<Option<Creature>> {
        Ok(self
            .creatures
            .iter()
            .find(|creature| creature.id == id)
            .cloned())
    }

    fn find_creature_before(&self, id: u32) -> StoreResult<Option<Creature>> {
        Ok(self
            .creatures
            .iter()
            .rev()
            .find(|creature| creature.id < id && creature.id >= FIRST_ID)
            .cloned())
    }

    fn find_creature_after(&self, id: u32, max: u32) -> StoreResult<Option<Creature>> {
        Ok(self
            .creatures
            .iter()
            .find(|creature| creature.id > id && creature.id <= max)
            .cloned())
    }

    fn find_creatures_by_name(&self, name: &str) -> StoreResult<Vec<Creature>> {
        Ok(self
            .creatures
            .iter()
            .filter(|creature| creature.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect())
    }

    fn find_creatures_by_type_contains(&self, label: &str) -> StoreResult<Vec<Creature>> {
        Ok(self
            .creatures
            .iter()
            .filter(|creature| contains_ignore_case(&creature.type_label, label))
            .cloned()
            .collect())
    }

    fn max_creature_id(&self) -> StoreResult<u32> {
        Ok(self.creatures.last().map_or(0, |creature| creature.id))
    }

    fn find_moves_by_name(&self, name: &str) -> StoreResult<Vec<MoveRecord>> {
        Ok(self
            .moves
            .iter()
            .filter(|move_| move_.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect())
    }

    fn find_moves_by_type_contains(&self, label: &str) -> StoreResult<Vec<MoveRecord>> {
        Ok(self
            .moves
            .iter()
            .filter(|move_| contains_ignore_case(&move_.type_label, label))
            .cloned()
            .collect())
    }
}
