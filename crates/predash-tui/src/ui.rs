//! TUI rendering logic

use crate::app::{App, Tab};
use crate::components::{MetricCards, Sidebar, Spinner};
use crate::tabs::{DataTab, OverviewTab, PredictionsTab};
use predash_core::Dataset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Main UI renderer
pub struct Ui {
    overview: OverviewTab,
    predictions: PredictionsTab,
    data: DataTab,
    spinner: Spinner,
    /// Dataset rendered on the previous frame; a change resets
    /// view-local state like the table page
    last_dataset: Dataset,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            overview: OverviewTab::new(),
            predictions: PredictionsTab::new(),
            data: DataTab::new(),
            spinner: Spinner::new(),
            last_dataset: Dataset::default(),
        }
    }

    /// Handle key input for the active tab
    pub fn handle_tab_key(&mut self, key: crossterm::event::KeyCode, app: &App) {
        match app.active_tab {
            Tab::Overview | Tab::Predictions => {
                // Charts have no interactive elements
            }
            Tab::Data => {
                let row_count = app.table.state().data().map(Vec::len).unwrap_or(0);
                self.data.handle_key(key, row_count);
            }
        }
    }

    /// Reset view-local state when the dataset selection changed
    fn sync_dataset(&mut self, selected: Dataset) {
        if selected != self.last_dataset {
            self.data.reset();
            self.last_dataset = selected;
        }
    }

    /// Render the full UI
    pub fn render(&mut self, frame: &mut Frame, app: &App) {
        self.spinner.tick();
        self.sync_dataset(app.selected);

        let size = frame.area();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26), // Sidebar
                Constraint::Min(40),    // Content
            ])
            .split(size);

        Sidebar::render(frame, columns[0], app.selected, app.sidebar_cursor);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(6), // Metric cards
                Constraint::Length(1), // Tab bar
                Constraint::Min(10),   // Tab content
                Constraint::Length(1), // Status bar
            ])
            .split(columns[1]);

        self.render_header(frame, content[0], app);
        MetricCards::render(frame, content[1], &app.metrics.state(), &self.spinner);
        self.render_tab_bar(frame, content[2], app.active_tab);
        self.render_tab_content(frame, content[3], app);
        self.render_status_bar(frame, content[4], app);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, app: &App) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                app.selected.title(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", app.selected.id()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(header, area);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, active: Tab) {
        let titles: Vec<Line> = Tab::all()
            .iter()
            .map(|t| {
                let style = if *t == active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(
                    format!(" {} {} ", t.shortcut(), t.name()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(active.index())
            .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));

        frame.render_widget(tabs, area);
    }

    fn render_tab_content(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        match app.active_tab {
            Tab::Overview => {
                self.overview.render(
                    frame,
                    area,
                    &app.historical.state(),
                    &app.info.state(),
                    &self.spinner,
                );
            }
            Tab::Predictions => {
                self.predictions
                    .render(frame, area, &app.predictions.state(), &self.spinner);
            }
            Tab::Data => {
                self.data
                    .render(frame, area, &app.table.state(), &self.spinner);
            }
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let loading = [
            app.metrics.is_loading(),
            app.info.is_loading(),
            app.historical.is_loading(),
            app.predictions.is_loading(),
            app.table.is_loading(),
        ]
        .iter()
        .filter(|b| **b)
        .count();

        let activity = if loading > 0 {
            format!(" {} request(s) in flight ", loading)
        } else {
            " idle ".to_string()
        };

        let hint = match app.active_tab {
            Tab::Overview | Tab::Predictions => "Tab/1-3 tabs │ ↑↓+⏎ dataset │ r refresh",
            Tab::Data => "s sort │ o order │ n/p page │ ↑↓+⏎ dataset │ r refresh",
        };

        let bar = Paragraph::new(Line::from(vec![
            Span::styled(activity, Style::default().fg(Color::Cyan)),
            Span::styled("│", Style::default().fg(Color::DarkGray)),
            Span::styled(" q", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" quit ", Style::default().fg(Color::DarkGray)),
            Span::styled("│", Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {}", hint), Style::default().fg(Color::DarkGray)),
        ]))
        .style(Style::default().bg(Color::Black));

        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_dataset_change_resets_table_page() {
        let mut ui = Ui::new();
        assert_eq!(ui.last_dataset, Dataset::Sales);

        ui.data.handle_key(KeyCode::Char('n'), 20);
        assert_eq!(ui.data.page(), 1);

        ui.sync_dataset(Dataset::Users);
        assert_eq!(ui.last_dataset, Dataset::Users);
        assert_eq!(ui.data.page(), 0);
    }

    #[test]
    fn test_same_dataset_keeps_table_page() {
        let mut ui = Ui::new();
        ui.sync_dataset(Dataset::Sales);
        ui.data.handle_key(KeyCode::Char('n'), 20);

        ui.sync_dataset(Dataset::Sales);
        assert_eq!(ui.data.page(), 1);
    }
}
