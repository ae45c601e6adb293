//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab index {index} out of range (catalog has {len} tabs)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown tab route: {0}")]
    UnknownRoute(String),
}
