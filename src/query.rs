//! Free-text search: a trimmed term is either a dex number or a name.

use crate::errors::StoreResult;
use crate::navigation::NavigationCursor;
use crate::store::RecordStore;
use schema::{Creature, MoveRecord};
use serde::Serialize;
use tracing::info;

/// A non-blank search term, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// The term was all decimal digits. Values too large for `u64` saturate,
    /// which can never match a stored identifier.
    Id(u64),
    Name(String),
}

impl SearchTerm {
    /// Returns `None` when nothing remains after trimming.
    pub fn parse(raw: &str) -> Option<SearchTerm> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            Some(SearchTerm::Id(trimmed.parse().unwrap_or(u64::MAX)))
        } else {
            Some(SearchTerm::Name(trimmed.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome<T> {
    /// Store order, never empty.
    Matches(Vec<T>),
    NotFound,
    /// Blank input; no query was run.
    EmptyInput,
}

impl<T> SearchOutcome<T> {
    fn from_matches(matches: Vec<T>) -> Self {
        if matches.is_empty() {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Matches(matches)
        }
    }

    pub fn matches(&self) -> &[T] {
        match self {
            SearchOutcome::Matches(matches) => matches,
            SearchOutcome::NotFound | SearchOutcome::EmptyInput => &[],
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.matches().first()
    }

    pub fn into_matches(self) -> Vec<T> {
        match self {
            SearchOutcome::Matches(matches) => matches,
            SearchOutcome::NotFound | SearchOutcome::EmptyInput => Vec::new(),
        }
    }
}

/// Looks up creatures by dex number or by exact, case-insensitive name.
pub fn find_creatures<S: RecordStore + ?Sized>(
    store: &S,
    raw: &str,
) -> StoreResult<SearchOutcome<Creature>> {
    let Some(term) = SearchTerm::parse(raw) else {
        return Ok(SearchOutcome::EmptyInput);
    };
    let matches = store.find_creatures_by_id_or_name(&term)?;
    Ok(SearchOutcome::from_matches(matches))
}

/// Same as [`find_creatures`], then moves the cursor onto the first match so
/// that stepping continues from the searched record.
pub fn search_creatures<S: RecordStore + ?Sized>(
    store: &S,
    cursor: &mut NavigationCursor,
    raw: &str,
) -> StoreResult<SearchOutcome<Creature>> {
    let outcome = find_creatures(store, raw)?;
    if let Some(first) = outcome.first() {
        info!(id = first.id, name = %first.name, "search moved cursor");
        cursor.jump_to(first.id);
    }
    Ok(outcome)
}

/// Moves have no identifier, so digits-only input is searched as a name.
pub fn search_moves<S: RecordStore + ?Sized>(
    store: &S,
    raw: &str,
) -> StoreResult<SearchOutcome<MoveRecord>> {
    let name = raw.trim();
    if name.is_empty() {
        return Ok(SearchOutcome::EmptyInput);
    }
    let matches = store.find_moves_by_name(name)?;
    Ok(SearchOutcome::from_matches(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_store;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("25", Some(SearchTerm::Id(25)))]
    #[case("  006 ", Some(SearchTerm::Id(6)))]
    #[case("99999999999999999999999", Some(SearchTerm::Id(u64::MAX)))]
    #[case("Pikachu", Some(SearchTerm::Name("Pikachu".to_string())))]
    #[case(" Mr. Mime ", Some(SearchTerm::Name("Mr. Mime".to_string())))]
    #[case("-5", Some(SearchTerm::Name("-5".to_string())))]
    #[case("25a", Some(SearchTerm::Name("25a".to_string())))]
    #[case("", None)]
    #[case(" \t ", None)]
    fn test_parse_search_term(#[case] raw: &str, #[case] expected: Option<SearchTerm>) {
        assert_eq!(SearchTerm::parse(raw), expected);
    }

    #[test]
    fn test_every_id_finds_exactly_its_record() {
        let store = sample_store();
        let max = store.max_creature_id().unwrap();
        for id in 1..=max {
            let found = find_creatures(&store, &id.to_string()).unwrap().into_matches();
            assert_eq!(found.len(), 1, "id {} should match once", id);
            assert_eq!(found[0].id, id);
        }
    }

    #[rstest]
    #[case("charizard")]
    #[case("CHARIZARD")]
    #[case("  Charizard  ")]
    #[case("6")]
    fn test_search_charizard_moves_cursor(#[case] raw: &str) {
        let store = sample_store();
        let mut cursor = NavigationCursor::new();

        let outcome = search_creatures(&store, &mut cursor, raw).unwrap();

        let first = outcome.first().expect("Charizard should be found");
        assert_eq!(first.name, "Charizard");
        assert_eq!(first.type_label, "Fire/Flying");
        assert_eq!(cursor.current(), 6);
    }

    #[rstest]
    #[case("Agumon")]
    #[case("0")]
    #[case("26")]
    #[case("Pika")]
    fn test_unmatched_search_leaves_cursor(#[case] raw: &str) {
        let store = sample_store();
        let mut cursor = NavigationCursor::new();
        cursor.jump_to(12);

        let outcome = search_creatures(&store, &mut cursor, raw).unwrap();

        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(cursor.current(), 12);
    }

    #[test]
    fn test_blank_search_is_empty_input() {
        let store = sample_store();
        let mut cursor = NavigationCursor::new();
        cursor.jump_to(3);

        let outcome = search_creatures(&store, &mut cursor, "   ").unwrap();

        assert_eq!(outcome, SearchOutcome::EmptyInput);
        assert!(outcome.matches().is_empty());
        assert_eq!(cursor.current(), 3);
    }

    #[test]
    fn test_duplicate_move_names_all_returned_in_order() {
        let store = sample_store();
        let outcome = search_moves(&store, "tackle").unwrap();

        let powers: Vec<Option<u16>> = outcome.matches().iter().map(|m| m.power).collect();
        assert_eq!(powers, vec![Some(40), Some(35)]);
    }

    #[test]
    fn test_move_search_treats_digits_as_a_name() {
        let store = sample_store();
        assert_eq!(search_moves(&store, "25").unwrap(), SearchOutcome::NotFound);
        assert_eq!(search_moves(&store, "").unwrap(), SearchOutcome::EmptyInput);
    }
}
