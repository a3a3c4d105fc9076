//! Overview tab - 12-month historical chart with dataset description

use crate::components::{render_fetch_error, render_loading, Spinner};
use crate::theme;
use predash_core::{DatasetInfo, FetchState, HistoricalPoint};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

pub struct OverviewTab;

impl OverviewTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        historical: &FetchState<Vec<HistoricalPoint>>,
        info: &FetchState<DatasetInfo>,
        spinner: &Spinner,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Min(8),    // Chart
            ])
            .split(area);

        self.render_description(frame, chunks[0], info);

        match historical {
            FetchState::Ready(series) => self.render_chart(frame, chunks[1], series),
            FetchState::Failed(msg) => {
                render_fetch_error(frame, chunks[1], "Historical Data", msg)
            }
            _ => render_loading(frame, chunks[1], "Historical Data", spinner),
        }
    }

    fn render_description(&self, frame: &mut Frame, area: Rect, info: &FetchState<DatasetInfo>) {
        let text = match info {
            FetchState::Ready(info) => {
                format!("{} · last updated {}", info.description, info.last_updated)
            }
            FetchState::Failed(_) => "Dataset info unavailable".to_string(),
            _ => "Loading dataset info…".to_string(),
        };

        let widget = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
        frame.render_widget(widget, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, series: &[HistoricalPoint]) {
        if series.is_empty() {
            let empty = Paragraph::new("No data").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();

        let max_value = points.iter().map(|p| p.1).fold(0.0, f64::max);

        let datasets = vec![Dataset::default()
            .name("Historical")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points)];

        let x_labels = vec![
            Span::raw(series[0].date.clone()),
            Span::raw(series[series.len() / 2].date.clone()),
            Span::raw(series[series.len() - 1].date.clone()),
        ];

        let y_labels = vec![
            Span::raw("0"),
            Span::raw(theme::format_value(max_value / 2.0)),
            Span::raw(theme::format_value(max_value)),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Historical Data ",
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .labels(x_labels)
                    .bounds([0.0, (series.len() - 1) as f64]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .labels(y_labels)
                    .bounds([0.0, max_value * 1.1]),
            );

        frame.render_widget(chart, area);
    }
}

impl Default for OverviewTab {
    fn default() -> Self {
        Self::new()
    }
}
