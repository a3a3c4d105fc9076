//! Reusable UI components

mod metric_cards;
mod sidebar;
mod spinner;

pub use metric_cards::MetricCards;
pub use sidebar::Sidebar;
pub use spinner::Spinner;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Centered loading placeholder used by the chart and table views
pub fn render_loading(frame: &mut Frame, area: Rect, title: &str, spinner: &Spinner) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::White),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        spinner.frame(),
        Span::styled("  Loading…", Style::default().fg(Color::DarkGray)),
    ]);
    let widget = Paragraph::new(line).alignment(Alignment::Center);

    // Vertically center within the panel
    let centered = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    frame.render_widget(widget, centered);
}

/// Explicit error panel with a retry hint; a failed fetch must stay
/// visible, never masquerade as an empty result
pub fn render_fetch_error(frame: &mut Frame, area: Rect, title: &str, msg: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' to retry",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, inner);
}
