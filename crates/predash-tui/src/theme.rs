//! Color conventions shared by cards, charts, and the table

use predash_core::Trend;
use ratatui::style::Color;

/// Color for a metric's trend direction
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Neutral => Color::DarkGray,
    }
}

/// Arrow glyph for a metric's trend direction
pub fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Neutral => "─",
    }
}

/// Color for a signed percentage change
pub fn change_color(change: f64) -> Color {
    if change > 0.0 {
        Color::Green
    } else if change < 0.0 {
        Color::Red
    } else {
        Color::DarkGray
    }
}

/// "+12.3%" / "-0.5%" formatting used on cards and in the table
pub fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    }
}

/// Compact axis-label formatting for chart values
pub fn format_value(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}
