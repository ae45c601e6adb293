//! Tab data structure
//!
//! Each tab in the bottom bar displays:
//! - Icon
//! - Title
//!
//! and is addressable by its position or its route key.

use serde::{Deserialize, Serialize};

use crate::error::TabError;

/// Opaque handle to an icon supplied by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconRef(&'static str);

impl IconRef {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for IconRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// The closed set of top-level sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabItem {
    /// Current conditions
    #[default]
    Currently,
    /// Hourly outlook for today
    Today,
    /// Seven day outlook
    Weekly,
}

impl TabItem {
    /// All tabs in display order
    pub const ALL: [TabItem; 3] = [TabItem::Currently, TabItem::Today, TabItem::Weekly];

    /// Position in the catalog
    pub fn index(&self) -> usize {
        match self {
            TabItem::Currently => 0,
            TabItem::Today => 1,
            TabItem::Weekly => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TabItem::Currently => "Currently",
            TabItem::Today => "Today",
            TabItem::Weekly => "Weekly",
        }
    }

    pub fn icon(&self) -> IconRef {
        match self {
            TabItem::Currently => IconRef::new("home"),
            TabItem::Today => IconRef::new("calendar_today"),
            TabItem::Weekly => IconRef::new("calendar_view_week"),
        }
    }

    /// Route key, unique across the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            TabItem::Currently => "currently",
            TabItem::Today => "today",
            TabItem::Weekly => "weekly",
        }
    }

    pub fn tab(&self) -> Tab {
        Tab {
            id: self.index(),
            title: self.title(),
            icon: self.icon(),
            route: self.as_str(),
        }
    }
}

impl std::fmt::Display for TabItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabItem {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabItem::ALL
            .into_iter()
            .find(|item| item.as_str() == s)
            .ok_or_else(|| TabError::UnknownRoute(s.to_string()))
    }
}

/// A catalog row. Immutable, built from [`TabItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tab {
    /// Position in the catalog, contiguous from zero
    pub id: usize,
    /// Label shown under the icon
    pub title: &'static str,
    /// Icon handle for the host toolkit
    pub icon: IconRef,
    /// Unique route key
    pub route: &'static str,
}

impl Tab {
    /// The variant this row was built from
    pub fn item(&self) -> TabItem {
        TabItem::ALL.get(self.id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!("today".parse::<TabItem>().unwrap(), TabItem::Today);
        assert_eq!("weekly".parse::<TabItem>().unwrap(), TabItem::Weekly);

        // Routes are exact keys, not titles
        let err = "Today".parse::<TabItem>().unwrap_err();
        assert_eq!(err, TabError::UnknownRoute("Today".to_string()));
    }

    #[test]
    fn test_tab_row_matches_item() {
        for item in TabItem::ALL {
            let tab = item.tab();
            assert_eq!(tab.item(), item);
            assert_eq!(tab.route, item.as_str());
        }
    }

    #[test]
    fn test_serde_uses_route() {
        let json = serde_json::to_string(&TabItem::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");

        let item: TabItem = serde_json::from_str("\"today\"").unwrap();
        assert_eq!(item, TabItem::Today);
    }
}
