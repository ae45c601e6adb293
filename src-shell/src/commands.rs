//! Line commands understood by the terminal host
//!
//! Each command maps onto one gesture the real toolkit would report.

use weather_core::MainScreen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Tap a tab in the bottom bar
    Tap(usize),
    /// Tap a tab by route key
    Route(String),
    /// Type into the search field
    Type(String),
    /// Clear the search field
    Clear,
    /// Tap the geolocation button
    Geolocation,
    /// Start dragging the page surface
    Drag,
    /// Page surface moved to a page
    Page(usize),
    /// Drag released, surface rests on a page
    Settle(usize),
    /// Print the current frame
    Show,
    /// Print the current frame as JSON
    Json,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let index = |what: &str| {
            rest.parse::<usize>()
                .map_err(|_| format!("{} expects a page number, got '{}'", what, rest))
        };

        match verb.to_lowercase().as_str() {
            "tap" => Ok(ShellCommand::Tap(index("tap")?)),
            "route" if !rest.is_empty() => Ok(ShellCommand::Route(rest.to_string())),
            "type" => Ok(ShellCommand::Type(rest.to_string())),
            "clear" => Ok(ShellCommand::Clear),
            "geo" => Ok(ShellCommand::Geolocation),
            "drag" => Ok(ShellCommand::Drag),
            "page" => Ok(ShellCommand::Page(index("page")?)),
            "settle" => Ok(ShellCommand::Settle(index("settle")?)),
            "show" => Ok(ShellCommand::Show),
            "json" => Ok(ShellCommand::Json),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            "route" => Err("route expects a route key".to_string()),
            _ => Err(format!("Unknown command: {}", verb)),
        }
    }

    /// Forward the gesture to the screen. Returns false for commands that
    /// only concern the shell.
    pub fn apply(&self, screen: &MainScreen) -> bool {
        match self {
            ShellCommand::Tap(index) => {
                screen.on_tap(*index);
            }
            ShellCommand::Route(route) => {
                screen.on_route(route);
            }
            ShellCommand::Type(text) => {
                screen.on_text_changed(text.as_str());
            }
            ShellCommand::Clear => {
                screen.on_text_changed("");
            }
            ShellCommand::Geolocation => {
                screen.on_geolocation_tap();
            }
            ShellCommand::Drag => {
                screen.on_swipe_progress(true);
            }
            ShellCommand::Page(page) => {
                screen.on_page_changed(*page);
            }
            ShellCommand::Settle(page) => {
                screen.on_swipe_settle(*page);
            }
            ShellCommand::Show | ShellCommand::Json | ShellCommand::Help | ShellCommand::Quit => {
                return false;
            }
        }
        true
    }
}

pub const HELP: &str = "\
commands:
  tap <n>       tap tab n (0 = Currently, 1 = Today, 2 = Weekly)
  route <key>   tap tab by route (currently, today, weekly)
  type <text>   set the search text
  clear         clear the search text
  geo           use current location
  drag          start dragging the pages
  page <n>      pages moved to n
  settle <n>    pages came to rest on n
  show | json   print the current frame
  quit";
