//! Predictions tab - actual vs forecast with confidence band

use crate::components::{render_fetch_error, render_loading, Spinner};
use crate::theme;
use predash_core::{FetchState, PredictionPoint};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

pub struct PredictionsTab;

impl PredictionsTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        predictions: &FetchState<Vec<PredictionPoint>>,
        spinner: &Spinner,
    ) {
        match predictions {
            FetchState::Ready(series) => self.render_chart(frame, area, series),
            FetchState::Failed(msg) => render_fetch_error(frame, area, "Predictive Analysis", msg),
            _ => render_loading(frame, area, "Predictive Analysis", spinner),
        }
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, series: &[PredictionPoint]) {
        if series.is_empty() {
            return;
        }

        // Extract each optional field into its own line. The actual and
        // predicted lines overlap on the boundary month, joining the
        // observed past to the forecast.
        let actual = Self::line(series, |p| p.actual);
        let predicted = Self::line(series, |p| p.predicted);
        let upper = Self::line(series, |p| p.upper_bound);
        let lower = Self::line(series, |p| p.lower_bound);

        let max_value = upper
            .iter()
            .chain(actual.iter())
            .map(|p| p.1)
            .fold(0.0, f64::max);

        let datasets = vec![
            Dataset::default()
                .name("Historical")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&actual),
            Dataset::default()
                .name("Predicted")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&predicted),
            Dataset::default()
                .name("Upper Bound")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&upper),
            Dataset::default()
                .name("Lower Bound")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&lower),
        ];

        let x_labels = vec![
            Span::raw(series[0].date.clone()),
            Span::styled(
                series[series.len() / 2].date.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                series[series.len() - 1].date.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
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
                        " Predictive Analysis (6 months observed + 6 months forecast) ",
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

    fn line(
        series: &[PredictionPoint],
        field: impl Fn(&PredictionPoint) -> Option<f64>,
    ) -> Vec<(f64, f64)> {
        series
            .iter()
            .enumerate()
            .filter_map(|(i, p)| field(p).map(|v| (i as f64, v)))
            .collect()
    }
}

impl Default for PredictionsTab {
    fn default() -> Self {
        Self::new()
    }
}
