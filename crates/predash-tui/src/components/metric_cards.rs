//! Metric card row
//!
//! Four cards across the top of the content area. While the metrics
//! fetch is in flight the cards render as skeletons; on failure the row
//! collapses to an explicit error line instead of silently staying
//! empty.

use crate::components::Spinner;
use crate::theme;
use predash_core::{FetchState, Metric};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_COUNT: usize = 4;

pub struct MetricCards;

impl MetricCards {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &FetchState<Vec<Metric>>,
        spinner: &Spinner,
    ) {
        if let Some(msg) = state.error() {
            super::render_fetch_error(frame, area, "Metrics", msg);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); CARD_COUNT])
            .split(area);

        match state.data() {
            Some(metrics) if !metrics.is_empty() => {
                for (metric, chunk) in metrics.iter().zip(chunks.iter()) {
                    Self::render_card(frame, *chunk, metric);
                }
            }
            Some(_) => {
                // Unknown dataset: the service returns no metrics
                for chunk in chunks.iter() {
                    Self::render_empty_card(frame, *chunk);
                }
            }
            None => {
                for chunk in chunks.iter() {
                    Self::render_skeleton(frame, *chunk, spinner);
                }
            }
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, metric: &Metric) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", metric.title),
                Style::default().fg(Color::White),
            ));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let color = theme::trend_color(metric.trend);
        let lines = vec![
            Line::from(Span::styled(
                metric.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(theme::trend_arrow(metric.trend), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(theme::format_change(metric.change), Style::default().fg(color)),
                Span::styled(" vs prev", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let card = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(card, inner);
    }

    fn render_skeleton(frame: &mut Frame, area: Rect, spinner: &Spinner) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(spinner.frame()),
            Line::from(Span::styled("···", Style::default().fg(Color::DarkGray))),
        ];
        let skeleton = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(skeleton, inner);
    }

    fn render_empty_card(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let empty = Paragraph::new(Span::styled("—", Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use predash_core::FetchState;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_failed_fetch_renders_retry_hint() {
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        let state: FetchState<Vec<Metric>> =
            FetchState::Failed("Data fetch failed for 'sales': boom".to_string());
        let spinner = Spinner::new();

        terminal
            .draw(|f| MetricCards::render(f, f.area(), &state, &spinner))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Metrics"));
        assert!(text.contains("boom"));
        assert!(text.contains("Press 'r' to retry"));
    }
}
