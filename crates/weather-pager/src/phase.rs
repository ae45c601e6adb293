//! Pager sync phases
//!
//! ```text
//! Settled
//!   ↓ drag starts / scroll requested
//! Dragging
//!   ↓ scroll stops (active index := current page)
//! Settled
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncPhase {
    /// Page surface at rest, tab highlight matches the frontmost page
    #[default]
    Settled,
    /// Swipe or scroll animation under way, highlight is held
    Dragging,
}

impl SyncPhase {
    pub fn from_in_progress(in_progress: bool) -> Self {
        if in_progress {
            SyncPhase::Dragging
        } else {
            SyncPhase::Settled
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, SyncPhase::Settled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncPhase::Settled => "settled",
            SyncPhase::Dragging => "dragging",
        }
    }
}

impl std::fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
