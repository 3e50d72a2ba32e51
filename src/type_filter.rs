//! Filtering records by type label.
//!
//! Matching is a case-insensitive substring test on the stored label, so a
//! `"Fire/Flying"` record turns up under both `Fire` and `Flying`.

use crate::errors::StoreResult;
use crate::store::RecordStore;
use schema::{Creature, MoveRecord, PokemonType};
use serde::Serialize;

/// What the user picked in the type selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSelection {
    Unselected,
    Label(String),
}

impl TypeSelection {
    /// `None` and blank strings both mean nothing was chosen.
    pub fn from_choice(choice: Option<&str>) -> Self {
        match choice.map(str::trim) {
            Some(label) if !label.is_empty() => TypeSelection::Label(label.to_string()),
            _ => TypeSelection::Unselected,
        }
    }
}

impl From<PokemonType> for TypeSelection {
    fn from(pokemon_type: PokemonType) -> Self {
        TypeSelection::Label(pokemon_type.to_string())
    }
}

/// Which collection a filter runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Domain {
    Creature,
    Move,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOutcome<T> {
    /// Store order, never empty.
    Matches(Vec<T>),
    NotFound,
    NoSelection,
}

impl<T> FilterOutcome<T> {
    fn from_matches(matches: Vec<T>) -> Self {
        if matches.is_empty() {
            FilterOutcome::NotFound
        } else {
            FilterOutcome::Matches(matches)
        }
    }

    pub fn matches(&self) -> &[T] {
        match self {
            FilterOutcome::Matches(matches) => matches,
            FilterOutcome::NotFound | FilterOutcome::NoSelection => &[],
        }
    }
}

pub fn filter_creatures<S: RecordStore + ?Sized>(
    store: &S,
    selection: &TypeSelection,
) -> StoreResult<FilterOutcome<Creature>> {
    match selection {
        TypeSelection::Unselected => Ok(FilterOutcome::NoSelection),
        TypeSelection::Label(label) => Ok(FilterOutcome::from_matches(
            store.find_creatures_by_type_contains(label)?,
        )),
    }
}

pub fn filter_moves<S: RecordStore + ?Sized>(
    store: &S,
    selection: &TypeSelection,
) -> StoreResult<FilterOutcome<MoveRecord>> {
    match selection {
        TypeSelection::Unselected => Ok(FilterOutcome::NoSelection),
        TypeSelection::Label(label) => Ok(FilterOutcome::from_matches(
            store.find_moves_by_type_contains(label)?,
        )),
    }
}
