//! Previous/next browsing over dex numbers.

use crate::errors::StoreResult;
use crate::store::RecordStore;
use schema::Creature;
use serde::Serialize;
use tracing::debug;

/// Lowest browsable identifier.
pub const FIRST_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Moved(Creature),
    /// No record exists before the current one; the cursor did not move.
    AtFirst,
    /// No record exists after the current one; the cursor did not move.
    AtLast,
}

/// The "currently browsed" identifier of one browsing session.
///
/// Steps only ever land on identifiers that exist in the store. Missing
/// identifiers inside the range are skipped, and the upper bound is
/// re-read from the store on every forward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationCursor {
    current: u32,
}

impl Default for NavigationCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self { current: FIRST_ID }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Unchecked: callers pass identifiers that came from a store hit.
    pub fn jump_to(&mut self, id: u32) {
        self.current = id;
    }

    pub fn step_back<S: RecordStore + ?Sized>(&mut self, store: &S) -> StoreResult<StepOutcome> {
        if self.current <= FIRST_ID {
            return Ok(StepOutcome::AtFirst);
        }
        match store.find_creature_before(self.current)? {
            Some(creature) => Ok(self.land_on(creature, "stepped back")),
            None => Ok(StepOutcome::AtFirst),
        }
    }

    pub fn step_forward<S: RecordStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> StoreResult<StepOutcome> {
        let max_id = store.max_creature_id()?;
        if self.current >= max_id {
            return Ok(StepOutcome::AtLast);
        }
        match store.find_creature_after(self.current, max_id)? {
            Some(creature) => Ok(self.land_on(creature, "stepped forward")),
            None => Ok(StepOutcome::AtLast),
        }
    }

    fn land_on(&mut self, creature: Creature, message: &'static str) -> StepOutcome {
        debug!(from = self.current, to = creature.id, "{}", message);
        self.current = creature.id;
        StepOutcome::Moved(creature)
    }
}
