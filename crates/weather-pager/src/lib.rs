//! Weather Shell Pager Synchronization
//!
//! Keeps the bottom tab bar and the swipeable page surface pointing at the
//! same page. Tapping a tab updates the highlight at once and asks the
//! surface to scroll; swiping only moves the highlight once the gesture
//! settles.

mod error;
mod phase;
mod selection;
mod sync;

pub use error::PagerError;
pub use phase::SyncPhase;
pub use selection::SelectionState;
pub use sync::{PageSyncController, SyncOutcome};

pub type Result<T> = std::result::Result<T, PagerError>;
