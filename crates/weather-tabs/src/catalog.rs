//! Tab catalog
//!
//! Static, ordered table of the tabs. Lenient lookups never fail: anything
//! unknown resolves to [`TabItem::Currently`].

use crate::error::TabError;
use crate::tab::{IconRef, Tab, TabItem};
use crate::Result;

static TABS: [Tab; 3] = [
    Tab {
        id: 0,
        title: "Currently",
        icon: IconRef::new("home"),
        route: "currently",
    },
    Tab {
        id: 1,
        title: "Today",
        icon: IconRef::new("calendar_today"),
        route: "today",
    },
    Tab {
        id: 2,
        title: "Weekly",
        icon: IconRef::new("calendar_view_week"),
        route: "weekly",
    },
];

pub struct TabCatalog;

impl TabCatalog {
    /// All tabs in display order
    pub fn all() -> &'static [Tab] {
        &TABS
    }

    pub fn iter() -> impl Iterator<Item = &'static Tab> {
        TABS.iter()
    }

    pub fn len() -> usize {
        TABS.len()
    }

    pub fn contains_index(index: usize) -> bool {
        index < TABS.len()
    }

    /// Tab at `index`, falling back to the first tab when out of range
    pub fn by_index(index: usize) -> &'static Tab {
        TABS.get(index).unwrap_or(&TABS[0])
    }

    /// Tab whose route equals `route`, falling back to the first tab
    pub fn by_route(route: &str) -> &'static Tab {
        TABS.iter().find(|t| t.route == route).unwrap_or(&TABS[0])
    }

    /// Strict variant of [`TabCatalog::by_index`]
    pub fn get(index: usize) -> Result<&'static Tab> {
        TABS.get(index).ok_or(TabError::IndexOutOfRange {
            index,
            len: TABS.len(),
        })
    }

    pub fn item(index: usize) -> TabItem {
        Self::by_index(index).item()
    }
}
