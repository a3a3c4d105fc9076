//! Error types for predash-core

use thiserror::Error;

/// Core error type for predash operations
///
/// The synthetic data service itself cannot fail, but every fetch
/// carries this error surface so views render failures explicitly
/// instead of swallowing them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Data fetch failed for '{dataset}': {message}")]
    FetchFailed { dataset: String, message: String },
}

impl CoreError {
    pub fn fetch_failed(dataset: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            dataset: dataset.into(),
            message: message.into(),
        }
    }
}
