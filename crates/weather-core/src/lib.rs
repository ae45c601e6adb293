//! Weather Shell Core
//!
//! Owns the main screen state. The host toolkit only forwards gestures in
//! and draws the render requests that come out.

mod animation;
mod config;
mod error;
mod location;
mod render;
mod screen;

pub use config::Config;
pub use error::CoreError;
pub use location::{LocationQuery, LocationResolver, PlaceholderLocation};
pub use render::{NavItem, Page, ScreenContent, ScreenRenderer, TopBar};
pub use screen::{MainScreen, RenderRequest};

pub use weather_pager::{PageSyncController, PagerError, SelectionState, SyncOutcome, SyncPhase};
pub use weather_tabs::{IconRef, Tab, TabCatalog, TabError, TabItem};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` wins over the configured filter.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(true).init();
}
