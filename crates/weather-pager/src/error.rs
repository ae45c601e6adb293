//! Pager error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    #[error("Page index {index} out of range (pager has {len} pages)")]
    IndexOutOfRange { index: usize, len: usize },
}
