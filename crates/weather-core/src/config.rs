//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use weather_tabs::TabItem;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab shown when the screen mounts
    pub initial_tab: TabItem,
    /// Time the scroll animation spends on each page it passes
    pub animation_step_ms: u64,
    /// Query substituted when the geolocation button is tapped
    pub geolocation_marker: String,
    /// Hint shown in the empty search field
    pub search_placeholder: String,
    /// Default tracing filter
    pub log_filter: String,
}

impl Config {
    pub fn animation_step(&self) -> Duration {
        Duration::from_millis(self.animation_step_ms)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.geolocation_marker.trim().is_empty() {
            return Err(CoreError::Config(
                "geolocation_marker cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_tab: TabItem::Currently,
            animation_step_ms: 60,
            geolocation_marker: "Geolocation".to_string(),
            search_placeholder: "Search Location...".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "initial_tab": "weekly" }"#).unwrap();
        assert_eq!(config.initial_tab, TabItem::Weekly);
        assert_eq!(config.geolocation_marker, "Geolocation");
        assert_eq!(config.animation_step(), Duration::from_millis(60));
    }

    #[test]
    fn test_unknown_tab_rejected() {
        let result = Config::from_json(r#"{ "initial_tab": "monthly" }"#);
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let result = Config::from_json(r#"{ "geolocation_marker": "  " }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load("/nonexistent/weather-shell.json");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
