//! Tab bar / page surface reconciliation
//!
//! The page surface reports two signals: which page is frontmost and whether
//! a scroll is in progress. The tab bar reports taps. Taps move the highlight
//! immediately and request a scroll; swipes move the highlight only once the
//! scroll stops.

use serde::Serialize;

use weather_tabs::TabItem;

use crate::phase::SyncPhase;
use crate::selection::SelectionState;
use crate::Result;

/// What a single input did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SyncOutcome {
    /// Any observable field changed
    pub changed: bool,
    /// Page the surface should scroll to, if a new scroll is needed
    pub animate_to: Option<usize>,
}

impl SyncOutcome {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            animate_to: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageSyncController {
    state: SelectionState,
    /// Destination of the scroll requested by the last tap
    scroll_target: Option<usize>,
}

impl PageSyncController {
    pub fn new(initial: TabItem) -> Self {
        Self {
            state: SelectionState::new(initial),
            scroll_target: None,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> SyncPhase {
        self.state.phase()
    }

    pub fn scroll_target(&self) -> Option<usize> {
        self.scroll_target
    }

    /// Tab bar tap: highlight now, scroll the surface afterwards
    pub fn on_tab_tap(&mut self, index: usize) -> Result<SyncOutcome> {
        let changed = self.state.set_active_index(index)?;

        let resting_on_target =
            !self.state.is_gesture_in_progress() && self.state.pager_position() == index;
        if resting_on_target || self.scroll_target == Some(index) {
            return Ok(SyncOutcome::changed(changed));
        }

        // The scroll starts now; the surface confirms the index when it settles
        self.scroll_target = Some(index);
        let entered = self.state.set_gesture_in_progress(true);

        tracing::debug!(
            target = index,
            from = self.state.pager_position(),
            "Scroll to page requested"
        );

        Ok(SyncOutcome {
            changed: changed || entered,
            animate_to: Some(index),
        })
    }

    /// Scroll-in-progress signal from the page surface
    pub fn on_scroll_progress(&mut self, in_progress: bool) -> SyncOutcome {
        if in_progress {
            let entered = self.state.set_gesture_in_progress(true);
            if entered {
                tracing::debug!(page = self.state.pager_position(), "Pager dragging");
            }
            return SyncOutcome::changed(entered);
        }

        self.settle()
    }

    /// Frontmost page changed on the page surface
    pub fn on_current_page(&mut self, page: usize) -> SyncOutcome {
        let page = self.clamp_page(page);
        let mut changed = self.state.set_pager_position(page);

        // Without a gesture the surface moved on its own; follow it
        if !self.state.is_gesture_in_progress() {
            changed |= self.follow_pager();
        }

        SyncOutcome::changed(changed)
    }

    /// Swipe came to rest on `page`
    pub fn on_swipe_settle(&mut self, page: usize) -> SyncOutcome {
        let moved = self.on_current_page(page);
        let settled = self.settle();
        SyncOutcome::changed(moved.changed || settled.changed)
    }

    /// Drop the pending scroll target, e.g. when the user grabs the surface
    pub fn cancel_scroll(&mut self) -> Option<usize> {
        self.scroll_target.take()
    }

    pub fn set_query(&mut self, text: impl Into<String>) -> SyncOutcome {
        SyncOutcome::changed(self.state.set_query(text))
    }

    pub fn set_geolocation_requested(&mut self, location_query: impl Into<String>) -> SyncOutcome {
        SyncOutcome::changed(self.state.set_geolocation_requested(location_query))
    }

    fn settle(&mut self) -> SyncOutcome {
        self.scroll_target = None;
        let left_gesture = self.state.set_gesture_in_progress(false);
        let followed = self.follow_pager();

        if left_gesture {
            tracing::debug!(page = self.state.pager_position(), "Pager settled");
        }

        SyncOutcome::changed(left_gesture || followed)
    }

    fn follow_pager(&mut self) -> bool {
        let page = self.state.pager_position();
        // Position is always clamped, so this cannot fail
        self.state.set_active_index(page).unwrap_or(false)
    }

    fn clamp_page(&self, page: usize) -> usize {
        let last = self.state.page_count() - 1;
        if page > last {
            tracing::warn!(page, last, "Page surface reported an out-of-range page");
            last
        } else {
            page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PagerError;

    #[test]
    fn test_tap_scenario() {
        let mut sync = PageSyncController::default();

        // Tap tab 2 while settled on 0
        let outcome = sync.on_tab_tap(2).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.animate_to, Some(2));
        assert_eq!(sync.state().active_index(), 2);
        assert_eq!(sync.phase(), SyncPhase::Dragging);

        // Animation passes through page 1 without touching the highlight
        sync.on_current_page(1);
        assert_eq!(sync.state().active_index(), 2);

        // Settles on 2: no regression to 0
        sync.on_swipe_settle(2);
        assert_eq!(sync.state().active_index(), 2);
        assert_eq!(sync.phase(), SyncPhase::Settled);
        assert!(sync.state().is_consistent());
        assert_eq!(sync.scroll_target(), None);
    }

    #[test]
    fn test_swipe_does_not_flicker() {
        let mut sync = PageSyncController::default();

        sync.on_scroll_progress(true);
        for page in [1, 2, 1, 2] {
            let outcome = sync.on_current_page(page);
            assert!(outcome.animate_to.is_none());
            assert_eq!(sync.state().active_index(), 0);
        }

        sync.on_scroll_progress(false);
        assert_eq!(sync.state().active_index(), 2);
        assert!(sync.state().is_consistent());
    }

    #[test]
    fn test_settle_follows_last_page() {
        let mut sync = PageSyncController::new(TabItem::Weekly);

        sync.on_scroll_progress(true);
        sync.on_current_page(1);
        sync.on_current_page(0);
        sync.on_swipe_settle(1);

        assert_eq!(sync.state().active_index(), 1);
        assert_eq!(sync.state().pager_position(), 1);
    }

    #[test]
    fn test_page_change_while_settled_is_followed() {
        let mut sync = PageSyncController::default();

        let outcome = sync.on_current_page(1);
        assert!(outcome.changed);
        assert_eq!(sync.state().active_index(), 1);
    }

    #[test]
    fn test_tap_on_current_page_needs_no_scroll() {
        let mut sync = PageSyncController::default();

        let outcome = sync.on_tab_tap(0).unwrap();
        assert_eq!(outcome, SyncOutcome::default());
        assert_eq!(sync.phase(), SyncPhase::Settled);
    }

    #[test]
    fn test_repeated_tap_issues_single_scroll() {
        let mut sync = PageSyncController::default();

        assert_eq!(sync.on_tab_tap(1).unwrap().animate_to, Some(1));
        let before = sync.state().clone();

        let again = sync.on_tab_tap(1).unwrap();
        assert_eq!(again, SyncOutcome::default());
        assert_eq!(sync.state(), &before);
    }

    #[test]
    fn test_new_tap_supersedes_scroll_target() {
        let mut sync = PageSyncController::default();

        sync.on_tab_tap(2).unwrap();
        sync.on_current_page(1);

        let outcome = sync.on_tab_tap(1).unwrap();
        assert_eq!(outcome.animate_to, Some(1));
        assert_eq!(sync.scroll_target(), Some(1));
        assert_eq!(sync.state().active_index(), 1);

        sync.on_swipe_settle(1);
        assert_eq!(sync.state().active_index(), 1);
    }

    #[test]
    fn test_out_of_range_tap_rejected() {
        let mut sync = PageSyncController::default();
        sync.on_swipe_settle(1);
        let before = sync.state().clone();

        let err = sync.on_tab_tap(7).unwrap_err();
        assert_eq!(err, PagerError::IndexOutOfRange { index: 7, len: 3 });
        assert_eq!(sync.state(), &before);
        assert_eq!(sync.scroll_target(), None);
    }

    #[test]
    fn test_out_of_range_page_clamped() {
        let mut sync = PageSyncController::default();

        sync.on_swipe_settle(9);
        assert_eq!(sync.state().pager_position(), 2);
        assert_eq!(sync.state().active_index(), 2);
    }

    #[test]
    fn test_query_keeps_selection() {
        let mut sync = PageSyncController::default();
        sync.on_tab_tap(1).unwrap();
        sync.on_swipe_settle(1);

        assert!(sync.set_query("Berlin").changed);
        assert_eq!(sync.state().query(), "Berlin");
        assert_eq!(sync.state().active_index(), 1);
    }

    #[test]
    fn test_cancel_scroll_allows_retap() {
        let mut sync = PageSyncController::default();
        sync.on_tab_tap(2).unwrap();

        assert_eq!(sync.cancel_scroll(), Some(2));
        assert_eq!(sync.on_tab_tap(2).unwrap().animate_to, Some(2));
    }
}
