//! Navigation controller for one user session.
//!
//! Views are a fixed set of named states. The controller holds everything
//! that must outlive a view switch: the store, the browsing cursor and the
//! current theme.

use crate::colors::{self, ColorDescriptor};
use crate::errors::StoreResult;
use crate::navigation::{NavigationCursor, StepOutcome};
use crate::query::{self, SearchOutcome};
use crate::store::RecordStore;
use crate::type_filter::{self, Domain, FilterOutcome, TypeSelection};
use schema::{Creature, MoveRecord};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    MainMenu,
    /// Search by number or name, then browse with previous/next.
    CreatureSearch,
    MoveSearch,
    TypeFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResults {
    Creatures(FilterOutcome<Creature>),
    Moves(FilterOutcome<MoveRecord>),
}

#[derive(Debug)]
pub struct DexSession<S> {
    store: S,
    view: View,
    cursor: NavigationCursor,
    theme: ColorDescriptor,
}

impl<S: RecordStore> DexSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            view: View::MainMenu,
            cursor: NavigationCursor::new(),
            theme: ColorDescriptor::neutral(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    pub fn theme(&self) -> ColorDescriptor {
        self.theme
    }

    /// Edits land immediately; the next forward step sees the new upper bound.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Switches the active view. Entering creature search from elsewhere
    /// starts a new browsing session at the first record; going back to the
    /// main menu drops the theme.
    pub fn enter(&mut self, view: View) {
        if view == self.view {
            return;
        }
        info!(from = ?self.view, to = ?view, "switching view");

        match view {
            View::CreatureSearch => self.cursor = NavigationCursor::new(),
            View::MainMenu => self.theme = ColorDescriptor::neutral(),
            View::MoveSearch | View::TypeFilter => {}
        }
        self.view = view;
    }

    /// Creature search. A hit moves the cursor to the first match and themes
    /// the session from its type.
    pub fn search(&mut self, term: &str) -> StoreResult<SearchOutcome<Creature>> {
        let outcome = query::search_creatures(&self.store, &mut self.cursor, term)?;
        if let Some(first) = outcome.first() {
            self.theme = colors::resolve_color(&first.type_label);
        }
        Ok(outcome)
    }

    pub fn search_moves(&mut self, term: &str) -> StoreResult<SearchOutcome<MoveRecord>> {
        let outcome = query::search_moves(&self.store, term)?;
        if let Some(first) = outcome.first() {
            self.theme = colors::resolve_color(&first.type_label);
        }
        Ok(outcome)
    }

    pub fn filter_by_type(
        &self,
        selection: &TypeSelection,
        domain: Domain,
    ) -> StoreResult<FilterResults> {
        Ok(match domain {
            Domain::Creature => {
                FilterResults::Creatures(type_filter::filter_creatures(&self.store, selection)?)
            }
            Domain::Move => {
                FilterResults::Moves(type_filter::filter_moves(&self.store, selection)?)
            }
        })
    }

    pub fn step_back(&mut self) -> StoreResult<StepOutcome> {
        let outcome = self.cursor.step_back(&self.store)?;
        self.retheme(&outcome);
        Ok(outcome)
    }

    pub fn step_forward(&mut self) -> StoreResult<StepOutcome> {
        let outcome = self.cursor.step_forward(&self.store)?;
        self.retheme(&outcome);
        Ok(outcome)
    }

    /// Pure color lookup; does not change the session theme.
    pub fn resolve_color(&self, type_label: &str) -> ColorDescriptor {
        colors::resolve_color(type_label)
    }

    fn retheme(&mut self, outcome: &StepOutcome) {
        if let StepOutcome::Moved(creature) = outcome {
            self.theme = colors::resolve_color(&creature.type_label);
        }
    }
}
