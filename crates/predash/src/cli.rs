//! CLI output formatting for the headless subcommands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use predash_core::{DatasetInfo, Metric, TableRow, Trend};

/// Format metric cards (human table or JSON)
pub fn format_metrics(metrics: &[Metric], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(metrics).unwrap_or_else(|_| "[]".to_string());
    }

    if metrics.is_empty() {
        return "No metrics for this dataset.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Metric", "Value", "Change", "Trend"]);
    } else {
        table.set_header(vec![
            Cell::new("Metric").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
            Cell::new("Change").fg(Color::Cyan),
            Cell::new("Trend").fg(Color::Cyan),
        ]);
    }

    for metric in metrics {
        let change = format!("{:+.1}%", metric.change);
        let trend = trend_label(metric.trend);

        if no_color {
            table.add_row(Row::from(vec![
                &metric.title,
                &metric.value,
                &change,
                trend,
            ]));
        } else {
            table.add_row(Row::from(vec![
                Cell::new(&metric.title),
                Cell::new(&metric.value),
                Cell::new(&change).fg(trend_fg(metric.trend)),
                Cell::new(trend).fg(trend_fg(metric.trend)),
            ]));
        }
    }

    table.to_string()
}

/// Format dataset description (human or JSON)
pub fn format_info(info: &DatasetInfo, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(info).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![];
    lines.push(format!("Dataset:       {}", info.id));
    lines.push(format!("Name:          {}", info.name));
    lines.push(format!("Description:   {}", info.description));
    lines.push(format!("Last updated:  {}", info.last_updated));
    lines.join("\n")
}

/// Format raw data rows (human table or JSON)
pub fn format_table(rows: &[TableRow], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string());
    }

    if rows.is_empty() {
        return "No data rows for this dataset.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["ID", "Date", "Value", "Change", "Category"]);
    } else {
        table.set_header(vec![
            Cell::new("ID").fg(Color::Cyan),
            Cell::new("Date").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
            Cell::new("Change").fg(Color::Cyan),
            Cell::new("Category").fg(Color::Cyan),
        ]);
    }

    for row in rows {
        let value = format!("{:.0}", row.value);
        let change = format!("{:+.2}%", row.change);

        if no_color {
            table.add_row(Row::from(vec![
                &row.id,
                &row.date,
                &value,
                &change,
                &row.category,
            ]));
        } else {
            let change_color = if row.change >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };
            table.add_row(Row::from(vec![
                Cell::new(&row.id),
                Cell::new(&row.date),
                Cell::new(&value),
                Cell::new(&change).fg(change_color),
                Cell::new(&row.category),
            ]));
        }
    }

    table.to_string()
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Neutral => "neutral",
    }
}

fn trend_fg(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Neutral => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metric() -> Metric {
        Metric {
            id: "total-sales".to_string(),
            title: "Total Sales".to_string(),
            value: "$1.2M".to_string(),
            change: 12.5,
            trend: Trend::Up,
        }
    }

    #[test]
    fn test_metrics_json_roundtrips() {
        let metrics = vec![sample_metric()];
        let out = format_metrics(&metrics, true, false);
        let parsed: Vec<Metric> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, metrics);
    }

    #[test]
    fn test_empty_metrics_message() {
        assert_eq!(
            format_metrics(&[], false, true),
            "No metrics for this dataset."
        );
    }

    #[test]
    fn test_metrics_table_contains_values() {
        let out = format_metrics(&[sample_metric()], false, true);
        assert!(out.contains("Total Sales"));
        assert!(out.contains("$1.2M"));
        assert!(out.contains("+12.5%"));
    }

    #[test]
    fn test_info_human_format() {
        let info = DatasetInfo {
            id: "sales".to_string(),
            name: "Sales Analytics".to_string(),
            description: "Monthly sales performance".to_string(),
            last_updated: "2024-01-15".to_string(),
        };
        let out = format_info(&info, false);
        assert!(out.contains("Dataset:       sales"));
        assert!(out.contains("Sales Analytics"));
    }

    #[test]
    fn test_table_change_has_two_decimals() {
        let rows = vec![TableRow {
            id: "sales-1".to_string(),
            date: "2024-01-01".to_string(),
            value: 3200.0,
            change: -4.2,
            category: "North".to_string(),
        }];
        let out = format_table(&rows, false, true);
        assert!(out.contains("-4.20%"));
    }
}
