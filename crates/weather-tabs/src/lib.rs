//! Weather Shell Tabs
//!
//! The fixed set of top-level sections shown in the bottom navigation bar.
//! The catalog is defined once and never mutated; lookups fall back to the
//! first tab so the shell always has something to render.

mod catalog;
mod error;
mod tab;

pub use catalog::TabCatalog;
pub use error::TabError;
pub use tab::{IconRef, Tab, TabItem};

pub type Result<T> = std::result::Result<T, TabError>;
