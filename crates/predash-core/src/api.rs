//! Synthetic data service
//!
//! Generates deterministic-shape, randomized-value datasets keyed by a
//! dataset identifier, each after a fixed artificial latency that
//! emulates network I/O. Unknown identifiers are tolerated everywhere:
//! they resolve to documented fallbacks, never to an error.

use crate::error::CoreError;
use crate::models::{DatasetInfo, HistoricalPoint, Metric, PredictionPoint, TableRow, Trend};
use chrono::{Datelike, Duration as ChronoDuration, Local, Months, NaiveDate};
use rand::Rng;
use std::f64::consts::PI;
use std::time::Duration;
use tracing::debug;

const METRICS_LATENCY: Duration = Duration::from_millis(1000);
const INFO_LATENCY: Duration = Duration::from_millis(800);
const HISTORICAL_LATENCY: Duration = Duration::from_millis(1200);
const PREDICTION_LATENCY: Duration = Duration::from_millis(1500);
const TABLE_LATENCY: Duration = Duration::from_millis(1000);

/// Number of monthly points in the historical series
pub const HISTORICAL_MONTHS: usize = 12;
/// Past and future halves of the prediction series
pub const PREDICTION_PAST_MONTHS: i64 = 5;
pub const PREDICTION_FUTURE_MONTHS: i64 = 6;
/// Number of daily rows in the tabular dataset
pub const TABLE_DAYS: usize = 20;

/// Fetch the 4 summary metrics for a dataset
///
/// Returns an empty list (not an error) for unrecognized identifiers.
pub async fn fetch_metrics(dataset: &str) -> Result<Vec<Metric>, CoreError> {
    tokio::time::sleep(METRICS_LATENCY).await;

    let metrics = match dataset {
        "sales" => vec![
            metric("total-sales", "Total Sales", "$124,592", 12.3, Trend::Up),
            metric("avg-order", "Avg. Order Value", "$52.45", 3.8, Trend::Up),
            metric("conversion", "Conversion Rate", "3.2%", -0.5, Trend::Down),
            metric("customers", "New Customers", "1,429", 8.1, Trend::Up),
        ],
        "users" => vec![
            metric("total-users", "Total Users", "32,594", 15.7, Trend::Up),
            metric("active-users", "Active Users", "18,429", 4.2, Trend::Up),
            metric("churn-rate", "Churn Rate", "2.8%", -1.3, Trend::Up),
            metric("avg-session", "Avg. Session", "4.2 min", 0.3, Trend::Neutral),
        ],
        "revenue" => vec![
            metric("total-revenue", "Total Revenue", "$892,345", 7.8, Trend::Up),
            metric("mrr", "MRR", "$42,567", 5.3, Trend::Up),
            metric("arpu", "ARPU", "$28.45", -2.1, Trend::Down),
            metric("ltv", "Customer LTV", "$342", 3.5, Trend::Up),
        ],
        "engagement" => vec![
            metric("dau", "Daily Active Users", "8,942", 6.7, Trend::Up),
            metric("retention", "Retention Rate", "68%", 2.3, Trend::Up),
            metric("avg-time", "Avg. Time on Site", "5.3 min", 8.1, Trend::Up),
            metric("bounce-rate", "Bounce Rate", "32%", -4.2, Trend::Up),
        ],
        _ => Vec::new(),
    };

    debug!(dataset, count = metrics.len(), "Metrics generated");
    Ok(metrics)
}

/// Fetch the descriptive record for a dataset
///
/// Unknown identifiers resolve to the sales record (explicit fallback,
/// not an error).
pub async fn fetch_dataset_info(dataset: &str) -> Result<DatasetInfo, CoreError> {
    tokio::time::sleep(INFO_LATENCY).await;

    let info = match dataset {
        "users" => dataset_info(
            "users",
            "User Growth",
            "User acquisition and growth metrics",
            "2023-12-18",
        ),
        "revenue" => dataset_info(
            "revenue",
            "Revenue Prediction",
            "Revenue trends and forecasting",
            "2023-12-10",
        ),
        "engagement" => dataset_info(
            "engagement",
            "User Engagement",
            "User engagement and interaction metrics",
            "2023-12-20",
        ),
        // "sales" and everything unrecognized
        _ => dataset_info(
            "sales",
            "Sales Forecast",
            "Historical sales data with monthly breakdown",
            "2023-12-15",
        ),
    };

    Ok(info)
}

/// Fetch the 12-month historical series, oldest first, ending at the
/// current month
///
/// Each value is `base * (1 + seasonality + trend)`: a sinusoidal
/// seasonality over the calendar year plus a linear trend that
/// strengthens toward the present.
pub async fn fetch_historical_data(dataset: &str) -> Result<Vec<HistoricalPoint>, CoreError> {
    tokio::time::sleep(HISTORICAL_LATENCY).await;

    let anchor = current_month_start();
    let mut rng = rand::thread_rng();
    let mut data = Vec::with_capacity(HISTORICAL_MONTHS);

    for i in (0..HISTORICAL_MONTHS as i64).rev() {
        let date = shift_months(anchor, -i);
        let base = monthly_base(dataset, &mut rng);
        let seasonality = (date.month0() as f64 / 11.0 * PI).sin() * 0.2;
        let trend = i as f64 / 24.0;
        let value = (base * (1.0 + seasonality + trend)).round();

        data.push(HistoricalPoint {
            date: month_label(date),
            value,
        });
    }

    debug!(dataset, points = data.len(), "Historical series generated");
    Ok(data)
}

/// Fetch the 12-point prediction series: 6 past months (with the
/// current month) carrying observed values, 6 future months carrying
/// forecasts with a confidence band that widens with the horizon
///
/// The boundary month carries both `actual` and `predicted` so the
/// historical and forecast lines join. Noise is applied to `actual`
/// only; the forecast itself stays deterministic for a given base draw.
pub async fn fetch_prediction_data(dataset: &str) -> Result<Vec<PredictionPoint>, CoreError> {
    tokio::time::sleep(PREDICTION_LATENCY).await;

    let anchor = current_month_start();
    let mut rng = rand::thread_rng();
    let mut data = Vec::with_capacity(12);

    for i in (-PREDICTION_FUTURE_MONTHS..=PREDICTION_PAST_MONTHS).rev() {
        let date = shift_months(anchor, -i);
        let base = monthly_base(dataset, &mut rng);
        // Phase-shifted by 6 months relative to the historical series
        let seasonality = ((date.month0() as f64 + 6.0) / 11.0 * PI).sin() * 0.2;
        let trend = (PREDICTION_PAST_MONTHS - i) as f64 / 20.0;
        let noise = rng.gen_range(-0.05..0.05);

        let actual = (i >= 0).then(|| (base * (1.0 + seasonality + trend + noise)).round());
        let predicted = (i <= 0).then(|| (base * (1.0 + seasonality + trend)).round());

        let band = base
            * 0.1
            * if i < 0 {
                i.unsigned_abs() as f64 / 6.0 + 1.0
            } else {
                1.0
            };

        data.push(PredictionPoint {
            date: month_label(date),
            actual,
            predicted,
            upper_bound: predicted.map(|p| p + band),
            lower_bound: predicted.map(|p| p - band),
        });
    }

    debug!(dataset, points = data.len(), "Prediction series generated");
    Ok(data)
}

/// Fetch the 20-row tabular dataset for the 20 days ending today,
/// oldest first
pub async fn fetch_table_data(dataset: &str) -> Result<Vec<TableRow>, CoreError> {
    tokio::time::sleep(TABLE_LATENCY).await;

    let today = Local::now().date_naive();
    let categories = category_set(dataset);
    let mut rng = rand::thread_rng();
    let mut data = Vec::with_capacity(TABLE_DAYS);

    for i in (0..TABLE_DAYS as i64).rev() {
        let date = today - ChronoDuration::days(i);
        let base = daily_base(dataset, &mut rng);

        let value = base.round();
        let prev = (base * (0.8 + rng.gen_range(0.0..0.4))).round();
        let change = round2((value - prev) / prev * 100.0);

        data.push(TableRow {
            id: format!("row-{}", i),
            date: date.format("%Y-%m-%d").to_string(),
            value,
            change,
            category: categories[rng.gen_range(0..categories.len())].to_string(),
        });
    }

    debug!(dataset, rows = data.len(), "Table rows generated");
    Ok(data)
}

/// Per-dataset base range for the monthly series
fn monthly_base(dataset: &str, rng: &mut impl Rng) -> f64 {
    match dataset {
        "sales" => rng.gen_range(80_000.0..120_000.0),
        "users" => rng.gen_range(25_000.0..40_000.0),
        "revenue" => rng.gen_range(650_000.0..900_000.0),
        "engagement" => rng.gen_range(7_000.0..10_000.0),
        _ => rng.gen_range(50_000.0..70_000.0),
    }
}

/// Per-dataset base range for the daily table rows
fn daily_base(dataset: &str, rng: &mut impl Rng) -> f64 {
    match dataset {
        "sales" => rng.gen_range(2_000.0..5_000.0),
        "users" => rng.gen_range(500.0..1_500.0),
        "revenue" => rng.gen_range(15_000.0..25_000.0),
        "engagement" => rng.gen_range(300.0..800.0),
        _ => rng.gen_range(1_000.0..3_000.0),
    }
}

/// Fixed 4-category set per dataset, with the sales set as fallback
pub fn category_set(dataset: &str) -> [&'static str; 4] {
    match dataset {
        "users" => ["Organic", "Referral", "Social", "Paid"],
        "revenue" => ["Subscriptions", "One-time", "Services", "Add-ons"],
        "engagement" => ["Mobile", "Desktop", "Tablet", "App"],
        _ => ["Online", "In-store", "Wholesale", "Marketplace"],
    }
}

fn metric(id: &str, title: &str, value: &str, change: f64, trend: Trend) -> Metric {
    Metric {
        id: id.to_string(),
        title: title.to_string(),
        value: value.to_string(),
        change,
        trend,
    }
}

fn dataset_info(id: &str, name: &str, description: &str, last_updated: &str) -> DatasetInfo {
    DatasetInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        last_updated: last_updated.to_string(),
    }
}

/// First day of the current local month
fn current_month_start() -> NaiveDate {
    let now = Local::now().date_naive();
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1).unwrap_or(now)
}

/// Shift a month anchor by a signed number of months
fn shift_months(anchor: NaiveDate, offset: i64) -> NaiveDate {
    if offset >= 0 {
        anchor
            .checked_add_months(Months::new(offset as u32))
            .unwrap_or(anchor)
    } else {
        anchor
            .checked_sub_months(Months::new(offset.unsigned_abs() as u32))
            .unwrap_or(anchor)
    }
}

/// "Mon YYYY" display label
fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_metrics_known_datasets() {
        for dataset in ["sales", "users", "revenue", "engagement"] {
            let metrics = fetch_metrics(dataset).await.unwrap();
            assert_eq!(metrics.len(), 4, "dataset {dataset}");

            let mut ids: Vec<_> = metrics.iter().map(|m| m.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 4, "metric ids must be unique for {dataset}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_metrics_unknown_dataset_is_empty() {
        let metrics = fetch_metrics("unknown-id").await.unwrap();
        assert!(metrics.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_info_fallback_to_sales() {
        let sales = fetch_dataset_info("sales").await.unwrap();
        assert_eq!(sales.id, "sales");
        assert_eq!(sales.name, "Sales Forecast");

        let unknown = fetch_dataset_info("unknown-id").await.unwrap();
        assert_eq!(unknown, sales);
    }

    #[test]
    fn test_shift_months_across_year_boundary() {
        let jan = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(
            shift_months(jan, -2),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
        );
        assert_eq!(
            shift_months(jan, 3),
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_month_label_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        assert_eq!(month_label(date), "Aug 2026");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(-0.004), -0.0);
    }
}
