//! Data tab - sortable, paginated table of the raw daily rows

use crate::components::{render_fetch_error, render_loading, Spinner};
use crate::theme;
use predash_core::{FetchState, TableRow};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

const PAGE_SIZE: usize = 10;

/// Column the table is currently sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Date,
    Value,
    Change,
    Category,
}

impl SortColumn {
    fn next(self) -> Self {
        match self {
            SortColumn::Date => SortColumn::Value,
            SortColumn::Value => SortColumn::Change,
            SortColumn::Change => SortColumn::Category,
            SortColumn::Category => SortColumn::Date,
        }
    }

    fn name(self) -> &'static str {
        match self {
            SortColumn::Date => "date",
            SortColumn::Value => "value",
            SortColumn::Change => "change",
            SortColumn::Category => "category",
        }
    }
}

/// Data tab state
pub struct DataTab {
    sort_column: SortColumn,
    ascending: bool,
    page: usize,
}

impl Default for DataTab {
    fn default() -> Self {
        Self::new()
    }
}

impl DataTab {
    pub fn new() -> Self {
        Self {
            sort_column: SortColumn::default(),
            ascending: true,
            page: 0,
        }
    }

    /// Handle key input; row_count is the length of the loaded dataset
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode, row_count: usize) {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Char('s') => {
                self.sort_column = self.sort_column.next();
            }
            KeyCode::Char('o') => {
                self.ascending = !self.ascending;
            }
            KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Right => {
                let last_page = Self::page_count(row_count).saturating_sub(1);
                self.page = (self.page + 1).min(last_page);
            }
            KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Left => {
                self.page = self.page.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Reset pagination when the dataset changes
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Current zero-based page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        table: &FetchState<Vec<TableRow>>,
        spinner: &Spinner,
    ) {
        match table {
            FetchState::Ready(rows) => self.render_table(frame, area, rows),
            FetchState::Failed(msg) => render_fetch_error(frame, area, "Raw Data", msg),
            _ => render_loading(frame, area, "Raw Data", spinner),
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, rows: &[TableRow]) {
        // Clamp in case the dataset shrank between key press and render
        let last_page = Self::page_count(rows.len()).saturating_sub(1);
        self.page = self.page.min(last_page);

        let sorted = self.sorted(rows);
        let page_rows = sorted
            .iter()
            .skip(self.page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.date.clone()),
                    Cell::from(format!("{:.0}", row.value)),
                    Cell::from(Span::styled(
                        theme::format_change(row.change),
                        Style::default().fg(theme::change_color(row.change)),
                    )),
                    Cell::from(row.category.clone()),
                ])
            });

        let order = if self.ascending { "↑" } else { "↓" };
        let title = format!(
            " Raw Data · page {}/{} · sort {} {} ",
            self.page + 1,
            Self::page_count(rows.len()).max(1),
            self.sort_column.name(),
            order,
        );

        let header = Row::new(vec!["Date", "Value", "Change", "Category"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widget = Table::new(
            page_rows,
            [
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(12),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))),
        );

        frame.render_widget(widget, area);
    }

    /// Rows sorted by the active column and order
    fn sorted(&self, rows: &[TableRow]) -> Vec<TableRow> {
        let mut sorted = rows.to_vec();
        match self.sort_column {
            SortColumn::Date => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
            SortColumn::Value => sorted.sort_by(|a, b| a.value.total_cmp(&b.value)),
            SortColumn::Change => sorted.sort_by(|a, b| a.change.total_cmp(&b.change)),
            SortColumn::Category => sorted.sort_by(|a, b| a.category.cmp(&b.category)),
        }
        if !self.ascending {
            sorted.reverse();
        }
        sorted
    }

    fn page_count(row_count: usize) -> usize {
        row_count.div_ceil(PAGE_SIZE)
    }
}
