//! Current-location lookup
//!
//! No real positioning exists yet. [`PlaceholderLocation`] stands in for it
//! and yields a fixed marker query.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LocationQuery {
    /// Stand-in for an unresolved position
    Placeholder(String),
    /// Place name resolved by a real provider
    Place(String),
}

impl LocationQuery {
    /// Text written into the search field
    pub fn query_text(&self) -> &str {
        match self {
            LocationQuery::Placeholder(marker) => marker,
            LocationQuery::Place(name) => name,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, LocationQuery::Placeholder(_))
    }
}

pub trait LocationResolver: Send + Sync {
    fn resolve_current_location(&self) -> LocationQuery;
}

#[derive(Debug, Clone)]
pub struct PlaceholderLocation {
    marker: String,
}

impl PlaceholderLocation {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl Default for PlaceholderLocation {
    fn default() -> Self {
        Self::new("Geolocation")
    }
}

impl LocationResolver for PlaceholderLocation {
    fn resolve_current_location(&self) -> LocationQuery {
        LocationQuery::Placeholder(self.marker.clone())
    }
}
