//! TUI application state
//!
//! Holds the selected dataset and one `Fetcher` per view. Selecting a
//! dataset fires all five requests in parallel; each view polls its own
//! fetcher during render, so the screen populates in whatever order the
//! responses land.

use predash_core::api;
use predash_core::{Dataset, DatasetInfo, Fetcher, HistoricalPoint, Metric, PredictionPoint, TableRow};
use tracing::debug;

/// Active content tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Predictions,
    Data,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Predictions, Tab::Data]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Predictions => 1,
            Tab::Data => 2,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Overview,
            1 => Tab::Predictions,
            2 => Tab::Data,
            _ => Tab::Overview,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Predictions => "Predictions",
            Tab::Data => "Data",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Overview => '1',
            Tab::Predictions => '2',
            Tab::Data => '3',
        }
    }
}

/// TUI application state
pub struct App {
    /// Dataset the content area currently shows
    pub selected: Dataset,

    /// Sidebar cursor position, applied on Enter
    pub sidebar_cursor: usize,

    /// Currently active tab
    pub active_tab: Tab,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Per-view fetchers, each with an independent loading flag
    pub metrics: Fetcher<Vec<Metric>>,
    pub info: Fetcher<DatasetInfo>,
    pub historical: Fetcher<Vec<HistoricalPoint>>,
    pub predictions: Fetcher<Vec<PredictionPoint>>,
    pub table: Fetcher<Vec<TableRow>>,
}

impl App {
    pub fn new() -> Self {
        let app = Self {
            selected: Dataset::default(),
            sidebar_cursor: 0,
            active_tab: Tab::default(),
            should_quit: false,
            metrics: Fetcher::new("metrics"),
            info: Fetcher::new("dataset_info"),
            historical: Fetcher::new("historical"),
            predictions: Fetcher::new("predictions"),
            table: Fetcher::new("table"),
        };
        app.reload();
        app
    }

    /// Re-request every view's slice of data for the selected dataset
    ///
    /// The five requests are independent and unordered; a view that
    /// finishes first paints first.
    pub fn reload(&self) {
        let id = self.selected.id();
        debug!(dataset = id, "Reloading all views");

        self.metrics.load(api::fetch_metrics(id));
        self.info.load(api::fetch_dataset_info(id));
        self.historical.load(api::fetch_historical_data(id));
        self.predictions.load(api::fetch_prediction_data(id));
        self.table.load(api::fetch_table_data(id));
    }

    /// Handle keyboard input
    /// Returns true if the key was handled as a global key
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) -> bool {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('r') | KeyCode::F(5) => {
                self.reload();
                true
            }
            KeyCode::Tab => {
                self.next_tab();
                true
            }
            KeyCode::BackTab => {
                self.prev_tab();
                true
            }
            KeyCode::Char(c) if ('1'..='3').contains(&c) => {
                let idx = (c as usize) - ('1' as usize);
                self.active_tab = Tab::from_index(idx);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = Dataset::all().len() - 1;
                self.sidebar_cursor = (self.sidebar_cursor + 1).min(max);
                true
            }
            KeyCode::Enter => {
                let picked = Dataset::from_index(self.sidebar_cursor);
                if picked != self.selected {
                    self.selected = picked;
                    self.reload();
                }
                true
            }
            _ => false,
        }
    }

    fn next_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + 1) % Tab::all().len());
    }

    fn prev_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + Tab::all().len() - 1) % Tab::all().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_tab_cycling_wraps() {
        let mut app = App::new();
        assert_eq!(app.active_tab, Tab::Overview);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Predictions);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Data);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Overview);

        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Data);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_selects_cursor_dataset() {
        let mut app = App::new();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.selected, Dataset::Revenue);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sidebar_cursor_clamps() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.sidebar_cursor, 0);

        for _ in 0..10 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.sidebar_cursor, Dataset::all().len() - 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dataset_switch_reflects_last_request() {
        let mut app = App::new();

        // Switch twice before anything resolves; the final state must
        // belong to the dataset requested last.
        app.sidebar_cursor = 1;
        app.handle_key(KeyCode::Enter);
        app.sidebar_cursor = 3;
        app.handle_key(KeyCode::Enter);

        // Longest endpoint latency is 1500ms; let everything land.
        tokio::time::sleep(Duration::from_secs(5)).await;

        let state = app.info.state();
        let info = state.data().expect("info resolved");
        assert_eq!(info.id, "engagement");
    }
}
