//! Page-scoped UI state kept in the visitor session.
//!
//! A page owns its state from the moment it is entered until the visitor
//! navigates to a different page, at which point the state is discarded.

pub mod detail;
pub mod filters;
pub mod selection;

use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub use detail::DetailSlot;
pub use filters::{FilterQuery, TableFilters};
pub use selection::Selection;

const STATE_KEY: &str = "page_state";

/// Page state lives in the session cookie, which browsers cap at about 4 KB.
/// Free text held there is clipped to these lengths.
pub const MAX_FILTER_CHARS: usize = 100;
pub const MAX_NOTES_CHARS: usize = 500;

/// Trim `value` and keep at most `max` characters.
pub fn clip(value: &str, max: usize) -> String {
    value.trim().chars().take(max).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page: String,
    pub selection: Selection,
    pub detail: DetailSlot,
    pub filters: TableFilters,
    #[serde(default)]
    pub notes: String,
}

impl PageState {
    pub fn new(page: &str) -> Self {
        Self { page: page.to_string(), ..Default::default() }
    }

    /// State for `page`. Anything stored for a different page is dropped.
    pub fn for_page(session: &Session, page: &str) -> Result<Self, AppError> {
        let stored = session
            .get::<PageState>(STATE_KEY)
            .map_err(|e| AppError::Session(format!("Failed to read page state: {e}")))?;

        match stored {
            Some(state) if state.page == page => Ok(state),
            Some(state) => {
                log::debug!("Leaving {} for {page}, discarding page state", state.page);
                let fresh = PageState::new(page);
                fresh.save(session)?;
                Ok(fresh)
            }
            None => Ok(PageState::new(page)),
        }
    }

    pub fn hold_notes(&mut self, notes: &str) {
        self.notes = clip(notes, MAX_NOTES_CHARS);
    }

    /// Take filter values from the query string, if it carried any.
    /// Returns true when the held filters changed.
    pub fn hold_filters(&mut self, query: &FilterQuery) -> bool {
        if !TableFilters::present_in(query) {
            return false;
        }
        let filters = TableFilters::from_query(query);
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        true
    }

    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        session
            .insert(STATE_KEY, self)
            .map_err(|e| AppError::Session(format!("Failed to store page state: {e}")))
    }

    /// Forget any page state, e.g. on logout.
    pub fn discard(session: &Session) {
        session.remove(STATE_KEY);
    }
}
