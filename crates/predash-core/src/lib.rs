//! predash-core - Core library for predash
//!
//! Provides the data model, the synthetic data service, and the shared
//! fetch-state machinery used by every dashboard view.

pub mod api;
pub mod error;
pub mod fetch;
pub mod models;

pub use error::CoreError;
pub use fetch::{FetchState, Fetcher};
pub use models::{Dataset, DatasetInfo, HistoricalPoint, Metric, PredictionPoint, TableRow, Trend};
