//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] weather_tabs::TabError),

    #[error("Pager error: {0}")]
    Pager(#[from] weather_pager::PagerError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Main screen must be mounted inside a tokio runtime")]
    NoRuntime,
}
