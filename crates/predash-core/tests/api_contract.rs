//! Contract tests for the synthetic data service
//!
//! These pin the shape guarantees every view relies on: fixed lengths,
//! calendar alignment, per-dataset category sets, and the fallback
//! behavior for unrecognized dataset identifiers.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use predash_core::api;

const KNOWN_DATASETS: [&str; 4] = ["sales", "users", "revenue", "engagement"];

fn month_start_offset(offset_back: u32) -> NaiveDate {
    let now = Local::now().date_naive();
    let anchor = NaiveDate::from_ymd_opt(now.year(), now.month(), 1).unwrap();
    anchor.checked_sub_months(Months::new(offset_back)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn historical_series_is_twelve_months_ending_now() {
    for dataset in KNOWN_DATASETS {
        let series = api::fetch_historical_data(dataset).await.unwrap();
        assert_eq!(series.len(), 12, "dataset {dataset}");

        for (idx, point) in series.iter().enumerate() {
            let expected = month_start_offset(11 - idx as u32);
            assert_eq!(
                point.date,
                expected.format("%b %Y").to_string(),
                "dataset {dataset}, point {idx}"
            );
            assert!(point.value >= 0.0, "values are non-negative");
            assert_eq!(point.value, point.value.round(), "values are rounded");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn historical_values_stay_in_derivable_bounds() {
    // base in [80000,120000), seasonality in [0,0.2], trend in [0,11/24]
    let series = api::fetch_historical_data("sales").await.unwrap();
    for point in &series {
        assert!(point.value >= 80_000.0);
        assert!(point.value < 120_000.0 * (1.0 + 0.2 + 11.0 / 24.0));
    }
}

#[tokio::test(start_paused = true)]
async fn prediction_series_partitions_past_and_future() {
    let series = api::fetch_prediction_data("revenue").await.unwrap();
    assert_eq!(series.len(), 12);

    // Points 0..=4 are past-only, point 5 is the boundary month,
    // points 6..=11 are future-only.
    let both: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|(_, p)| p.actual.is_some() && p.predicted.is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(both, vec![5], "exactly the boundary month carries both");

    for (idx, point) in series.iter().enumerate() {
        if idx < 5 {
            assert!(point.actual.is_some(), "past point {idx} has actual");
            assert!(point.predicted.is_none(), "past point {idx} has no forecast");
            assert!(point.upper_bound.is_none());
            assert!(point.lower_bound.is_none());
        }
        if idx > 5 {
            assert!(point.actual.is_none(), "future point {idx} has no actual");
            assert!(point.predicted.is_some(), "future point {idx} has forecast");
        }
        if let Some(predicted) = point.predicted {
            let upper = point.upper_bound.expect("bound present with forecast");
            let lower = point.lower_bound.expect("bound present with forecast");
            assert!(lower <= predicted && predicted <= upper);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn prediction_band_widens_with_horizon() {
    let series = api::fetch_prediction_data("sales").await.unwrap();

    // Band width relative to its own base draw: 0.1 at the boundary,
    // 0.1 * (k/6 + 1) k months out. Absolute widths vary with the base
    // draw, so compare the widest possible near band against the
    // narrowest possible far band.
    let near = &series[6]; // one month out
    let far = &series[11]; // six months out
    let near_width = near.upper_bound.unwrap() - near.lower_bound.unwrap();
    let far_width = far.upper_bound.unwrap() - far.lower_bound.unwrap();

    // near: 2 * base * 0.1 * (1/6 + 1) with base < 120000, so < 28000
    // far:  2 * base * 0.1 * (6/6 + 1) with base >= 80000, so >= 32000
    assert!(near_width < 2.0 * 120_000.0 * 0.1 * (1.0 / 6.0 + 1.0));
    assert!(far_width > near_width);
}

#[tokio::test(start_paused = true)]
async fn table_rows_cover_twenty_days_ending_today() {
    let today = Local::now().date_naive();

    for dataset in KNOWN_DATASETS {
        let rows = api::fetch_table_data(dataset).await.unwrap();
        assert_eq!(rows.len(), 20, "dataset {dataset}");

        let categories = api::category_set(dataset);
        for (idx, row) in rows.iter().enumerate() {
            let expected = today - Duration::days(19 - idx as i64);
            assert_eq!(row.date, expected.format("%Y-%m-%d").to_string());
            assert!(
                categories.contains(&row.category.as_str()),
                "category '{}' outside the {dataset} set",
                row.category
            );

            // change carries exactly 2 decimal digits of precision
            let scaled = row.change * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "change {} is not 2-decimal",
                row.change
            );
            assert!(row.change.is_finite());
        }
    }
}

#[tokio::test(start_paused = true)]
async fn unknown_dataset_takes_documented_fallbacks() {
    let metrics = api::fetch_metrics("unknown-id").await.unwrap();
    assert!(metrics.is_empty());

    let info = api::fetch_dataset_info("unknown-id").await.unwrap();
    assert_eq!(info.id, "sales");
    assert_eq!(info.name, "Sales Forecast");

    let rows = api::fetch_table_data("unknown-id").await.unwrap();
    let sales_categories = api::category_set("sales");
    for row in &rows {
        assert!(sales_categories.contains(&row.category.as_str()));
    }
}

#[tokio::test(start_paused = true)]
async fn metrics_are_fixed_and_unique_per_dataset() {
    for dataset in KNOWN_DATASETS {
        let metrics = api::fetch_metrics(dataset).await.unwrap();
        assert_eq!(metrics.len(), 4);

        let mut ids: Vec<_> = metrics.iter().map(|m| m.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4, "duplicate metric id in {dataset}");

        // Same dataset always yields the same fixed metric table
        let again = api::fetch_metrics(dataset).await.unwrap();
        assert_eq!(metrics, again);
    }
}
