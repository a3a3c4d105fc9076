//! Dataset sidebar
//!
//! Lists the known datasets; the cursor moves with Up/Down and Enter
//! applies the selection (handled in `App`).

use predash_core::Dataset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct Sidebar;

impl Sidebar {
    pub fn render(frame: &mut Frame, area: Rect, selected: Dataset, cursor: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ◈ predash ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Section label
                Constraint::Min(0),    // Dataset list
                Constraint::Length(1), // Hint
            ])
            .split(inner);

        let label = Paragraph::new(Span::styled(
            "Datasets",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(label, chunks[0]);

        let items: Vec<ListItem> = Dataset::all()
            .iter()
            .map(|ds| {
                let is_selected = *ds == selected;
                let marker = if is_selected { "● " } else { "  " };
                let style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(ds.title(), style),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(cursor));

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let hint = Paragraph::new(Span::styled(
            "↑↓ move · ⏎ select",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(hint, chunks[2]);
    }
}
