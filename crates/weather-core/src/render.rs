//! Screen rendering
//!
//! Turns a [`RenderRequest`] into the frame the host draws: the search bar on
//! top, one page per tab, and the bottom navigation bar. Everything here is
//! a pure function of its inputs.

use serde::Serialize;

use weather_tabs::{IconRef, TabCatalog, TabItem};

use crate::screen::RenderRequest;

pub struct ScreenRenderer;

impl ScreenRenderer {
    /// Placeholder page text: the screen name, then the query on its own line
    pub fn render(screen_name: &str, query: &str) -> String {
        if query.is_empty() {
            screen_name.to_string()
        } else {
            format!("{}\n{}", screen_name, query)
        }
    }

    pub fn render_tab(tab: TabItem, query: &str) -> String {
        Self::render(tab.title(), query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopBar {
    pub query: String,
    /// Hint shown while the query is empty
    pub placeholder: String,
    pub geolocation_label: &'static str,
}

impl TopBar {
    /// Text the search field shows
    pub fn display_text(&self) -> &str {
        if self.query.is_empty() {
            &self.placeholder
        } else {
            &self.query
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub tab: TabItem,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub tab: TabItem,
    pub title: &'static str,
    pub icon: IconRef,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenContent {
    pub top_bar: TopBar,
    pub pages: Vec<Page>,
    /// Frontmost page of the page surface
    pub visible_page: usize,
    pub bottom_bar: Vec<NavItem>,
}

impl ScreenContent {
    pub fn compose(request: &RenderRequest, search_placeholder: &str) -> Self {
        let pages = TabCatalog::iter()
            .map(|tab| Page {
                tab: tab.item(),
                text: ScreenRenderer::render(tab.title, &request.query),
            })
            .collect();

        let bottom_bar = TabCatalog::iter()
            .map(|tab| NavItem {
                tab: tab.item(),
                title: tab.title,
                icon: tab.icon,
                selected: tab.id == request.active_index,
            })
            .collect();

        Self {
            top_bar: TopBar {
                query: request.query.clone(),
                placeholder: search_placeholder.to_string(),
                geolocation_label: "Use current location",
            },
            pages,
            visible_page: request.pager_position,
            bottom_bar,
        }
    }

    pub fn visible(&self) -> &Page {
        self.pages.get(self.visible_page).unwrap_or(&self.pages[0])
    }

    pub fn selected(&self) -> Option<&NavItem> {
        self.bottom_bar.iter().find(|item| item.selected)
    }
}

impl std::fmt::Display for ScreenContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "[ {} ]  ({})",
            self.top_bar.display_text(),
            self.top_bar.geolocation_label
        )?;
        writeln!(f, "----------------------------------------")?;
        for line in self.visible().text.lines() {
            writeln!(f, "  {}", line)?;
        }
        writeln!(f, "----------------------------------------")?;

        let labels: Vec<String> = self
            .bottom_bar
            .iter()
            .map(|item| {
                if item.selected {
                    format!("[{}]", item.title)
                } else {
                    format!(" {} ", item.title)
                }
            })
            .collect();
        write!(f, "{}", labels.join("  "))
    }
}
