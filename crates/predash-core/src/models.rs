//! Data model for predash
//!
//! All records are immutable values built fresh by the data service on
//! every request; nothing here is persisted or mutated in place.

use serde::{Deserialize, Serialize};

/// Known datasets selectable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dataset {
    #[default]
    Sales,
    Users,
    Revenue,
    Engagement,
}

impl Dataset {
    pub fn all() -> &'static [Dataset] {
        &[
            Dataset::Sales,
            Dataset::Users,
            Dataset::Revenue,
            Dataset::Engagement,
        ]
    }

    /// Identifier used to key the data service
    pub fn id(&self) -> &'static str {
        match self {
            Dataset::Sales => "sales",
            Dataset::Users => "users",
            Dataset::Revenue => "revenue",
            Dataset::Engagement => "engagement",
        }
    }

    /// Title shown in the sidebar and content header
    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Sales => "Sales Forecast",
            Dataset::Users => "User Growth",
            Dataset::Revenue => "Revenue Prediction",
            Dataset::Engagement => "User Engagement",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Dataset::Sales => 0,
            Dataset::Users => 1,
            Dataset::Revenue => 2,
            Dataset::Engagement => 3,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Dataset::Sales,
            1 => Dataset::Users,
            2 => Dataset::Revenue,
            3 => Dataset::Engagement,
            _ => Dataset::Sales,
        }
    }
}

/// Direction of a metric's recent movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// One summary metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Unique id within a dataset's metric list
    pub id: String,
    pub title: String,
    /// Pre-formatted display value ("$124,592", "3.2%", ...)
    pub value: String,
    /// Signed percentage change vs the previous period
    pub change: f64,
    pub trend: Trend,
}

/// Descriptive record for one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Date string (YYYY-MM-DD)
    pub last_updated: String,
}

/// One point of the 12-month historical series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Display label, "Mon YYYY"
    pub date: String,
    /// Non-negative, rounded to the nearest integer
    pub value: f64,
}

/// One point of the historical + forecast series
///
/// Past points carry `actual`; future points carry `predicted` with a
/// confidence band. The boundary month carries both so the historical
/// and forecast lines join visually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPoint {
    pub date: String,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
    pub upper_bound: Option<f64>,
    pub lower_bound: Option<f64>,
}

/// One row of the tabular dataset view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub value: f64,
    /// Day-over-day percentage, rounded to 2 decimals
    pub change: f64,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_roundtrip() {
        for ds in Dataset::all() {
            assert_eq!(Dataset::from_index(ds.index()), *ds);
        }
        // Out-of-range index falls back to the default dataset
        assert_eq!(Dataset::from_index(42), Dataset::Sales);
    }

    #[test]
    fn test_trend_serialization() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Trend::Neutral).unwrap(), "\"neutral\"");
    }

    #[test]
    fn test_dataset_info_camel_case() {
        let info = DatasetInfo {
            id: "sales".into(),
            name: "Sales Forecast".into(),
            description: "Historical sales data with monthly breakdown".into(),
            last_updated: "2023-12-15".into(),
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"lastUpdated\":\"2023-12-15\""));
    }
}
