//! Selection state
//!
//! Single source of truth for the active tab, the search query and the
//! last known position of the page surface.

use chrono::{DateTime, Utc};
use serde::Serialize;

use weather_tabs::{TabCatalog, TabItem};

use crate::error::PagerError;
use crate::phase::SyncPhase;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    /// Page highlighted in the tab bar
    active_index: usize,
    /// Search text, or the location query after a geolocation tap
    query: String,
    /// Frontmost page reported by the page surface
    pager_position: usize,
    /// Swipe or scroll animation currently under way
    gesture_in_progress: bool,
    /// Last modification time
    updated_at: DateTime<Utc>,
}

impl SelectionState {
    pub fn new(initial: TabItem) -> Self {
        let index = initial.index();
        Self {
            active_index: index,
            query: String::new(),
            pager_position: index,
            gesture_in_progress: false,
            updated_at: Utc::now(),
        }
    }

    pub fn page_count(&self) -> usize {
        TabCatalog::len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_tab(&self) -> TabItem {
        TabCatalog::item(self.active_index)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pager_position(&self) -> usize {
        self.pager_position
    }

    pub fn is_gesture_in_progress(&self) -> bool {
        self.gesture_in_progress
    }

    pub fn phase(&self) -> SyncPhase {
        SyncPhase::from_in_progress(self.gesture_in_progress)
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Settled state must have the highlight on the frontmost page
    pub fn is_consistent(&self) -> bool {
        self.gesture_in_progress || self.active_index == self.pager_position
    }

    /// Select a tab. Out-of-range indices are rejected without touching state.
    pub fn set_active_index(&mut self, index: usize) -> Result<bool> {
        if !TabCatalog::contains_index(index) {
            return Err(PagerError::IndexOutOfRange {
                index,
                len: self.page_count(),
            });
        }

        if self.active_index == index {
            return Ok(false);
        }

        tracing::debug!(from = self.active_index, to = index, "Active tab changed");

        self.active_index = index;
        self.touch();
        Ok(true)
    }

    /// Replace the search query. Any text is accepted, including empty.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.query == text {
            return false;
        }

        self.query = text;
        self.touch();
        true
    }

    /// Replace the query with the one produced for the current location
    pub fn set_geolocation_requested(&mut self, location_query: impl Into<String>) -> bool {
        let changed = self.set_query(location_query);
        tracing::debug!(query = %self.query, "Current location requested");
        changed
    }

    pub(crate) fn set_pager_position(&mut self, page: usize) -> bool {
        if self.pager_position == page {
            return false;
        }

        self.pager_position = page;
        self.touch();
        true
    }

    pub(crate) fn set_gesture_in_progress(&mut self, in_progress: bool) -> bool {
        if self.gesture_in_progress == in_progress {
            return false;
        }

        self.gesture_in_progress = in_progress;
        self.touch();
        true
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(TabItem::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::default();
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.pager_position(), 0);
        assert!(state.query().is_empty());
        assert!(!state.is_gesture_in_progress());
        assert_eq!(state.phase(), SyncPhase::Settled);
        assert!(state.is_consistent());

        let state = SelectionState::new(TabItem::Weekly);
        assert_eq!(state.active_tab(), TabItem::Weekly);
        assert_eq!(state.pager_position(), 2);
    }

    #[test]
    fn test_set_active_index_is_idempotent() {
        let mut state = SelectionState::default();

        assert!(state.set_active_index(1).unwrap());
        let after_first = state.clone();

        assert!(!state.set_active_index(1).unwrap());
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut state = SelectionState::default();
        state.set_active_index(2).unwrap();
        let before = state.clone();

        let err = state.set_active_index(3).unwrap_err();
        assert_eq!(err, PagerError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(state, before);
    }

    #[test]
    fn test_query_accepts_anything() {
        let mut state = SelectionState::default();

        assert!(state.set_query("Berlin"));
        assert_eq!(state.query(), "Berlin");

        assert!(state.set_query(""));
        assert_eq!(state.query(), "");

        // Same text is a no-op
        assert!(!state.set_query(""));
    }

    #[test]
    fn test_geolocation_replaces_query() {
        let mut state = SelectionState::default();
        state.set_query("Paris");

        state.set_geolocation_requested("Geolocation");
        assert_eq!(state.query(), "Geolocation");
        assert_eq!(state.active_index(), 0);
    }
}
