//! Content tabs

mod data;
mod overview;
mod predictions;

pub use data::DataTab;
pub use overview::OverviewTab;
pub use predictions::PredictionsTab;
