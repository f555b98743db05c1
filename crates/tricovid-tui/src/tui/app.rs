//! Application state.

use chrono::{DateTime, Local};
use tokio::sync::mpsc::UnboundedSender;
use tricovid_core::search::suggestions;
use tricovid_core::{DisplayRecord, Selection, SelectionTracker};

use crate::shared::services::Services;

/// Where the app is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FetchingRegions,
    RegionsLoaded,
    FetchingMetrics,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::FetchingRegions => "loading regions...",
            Phase::RegionsLoaded => "ready",
            Phase::FetchingMetrics => "fetching figures...",
        }
    }
}

/// Results delivered back from fetch tasks.
#[derive(Debug)]
pub enum AppEvent {
    RegionsLoaded(Vec<String>),
    RecordFetched {
        selection: Selection,
        region: String,
        record: DisplayRecord,
    },
}

/// Main application state.
pub struct App {
    services: Services,
    tracker: SelectionTracker,
    events: UnboundedSender<AppEvent>,

    /// Region names, replaced wholesale on every load.
    pub regions: Vec<String>,
    /// Text in the search box.
    pub query: String,
    /// Index into the current suggestions.
    pub highlighted: usize,
    /// Whether the suggestion dropdown is showing.
    pub dropdown_open: bool,
    /// Region whose figures are shown or being fetched.
    pub selected: Option<String>,
    pub current_selection: Option<Selection>,
    pub record: DisplayRecord,
    pub phase: Phase,
    pub last_updated: Option<DateTime<Local>>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Whether to show the help overlay.
    pub show_help: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(services: Services, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            services,
            tracker: SelectionTracker::new(),
            events,
            regions: Vec::new(),
            query: String::new(),
            highlighted: 0,
            dropdown_open: false,
            selected: None,
            current_selection: None,
            record: DisplayRecord::prompt(),
            phase: Phase::Idle,
            last_updated: None,
            should_quit: false,
            show_help: false,
        }
    }

    /// Suggestions for the current query.
    pub fn suggestions(&self) -> Vec<&str> {
        if !self.dropdown_open {
            return Vec::new();
        }
        suggestions(&self.regions, &self.query, self.services.suggestion_limit)
    }

    /// Reloads the region list in the background.
    pub fn refresh_regions(&mut self) {
        if self.phase != Phase::FetchingMetrics {
            self.phase = Phase::FetchingRegions;
        }

        let catalog = self.services.catalog.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let regions = catalog.list_regions().await;
            let _ = events.send(AppEvent::RegionsLoaded(regions));
        });
    }

    /// Starts fetching figures for `region`, superseding any earlier selection.
    pub fn select(&mut self, region: String) {
        let selection = self.tracker.begin();
        self.query = region.clone();
        self.dropdown_open = false;
        self.highlighted = 0;
        self.selected = Some(region.clone());
        self.current_selection = Some(selection);
        self.phase = Phase::FetchingMetrics;

        tracing::info!(region = %region, generation = selection.generation(), "Region selected");

        let records = self.services.records.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let record = records.fetch_record(&region).await;
            let _ = events.send(AppEvent::RecordFetched {
                selection,
                region,
                record,
            });
        });
    }

    /// Selects the highlighted suggestion, if any.
    pub fn select_highlighted(&mut self) {
        let choice = self
            .suggestions()
            .get(self.highlighted)
            .map(|name| name.to_string());
        if let Some(region) = choice {
            self.select(region);
        }
    }

    /// Applies a result from a background task.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::RegionsLoaded(regions) => {
                tracing::info!(count = regions.len(), "Regions loaded");
                self.regions = regions;
                self.highlighted = 0;
                if self.phase == Phase::FetchingRegions {
                    self.phase = Phase::RegionsLoaded;
                }
            }
            AppEvent::RecordFetched {
                selection,
                region,
                record,
            } => {
                if !self.tracker.is_current(&selection) {
                    tracing::debug!(region = %region, "Discarding stale result");
                    return;
                }
                self.record = record;
                self.phase = Phase::RegionsLoaded;
                self.last_updated = Some(Local::now());
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.dropdown_open = true;
        self.highlighted = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.dropdown_open = true;
        self.highlighted = 0;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.dropdown_open = false;
        self.highlighted = 0;
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.suggestions().len();
        if self.highlighted + 1 < count {
            self.highlighted += 1;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::config::resolve_config;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    pub(crate) fn test_app() -> (App, UnboundedReceiver<AppEvent>) {
        // Nothing listens on port 9; spawned fetches fail fast and are ignored.
        let config = resolve_config(Some("http://127.0.0.1:9/api"), Some(1), None);
        let services = Services::new(&config).unwrap();
        let (tx, rx) = unbounded_channel();
        let mut app = App::new(services, tx);
        app.regions = ["Oadby and Wigston", "Oldham", "Oxford", "Sheffield"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        app.phase = Phase::RegionsLoaded;
        (app, rx)
    }

    fn record(value: &str) -> DisplayRecord {
        DisplayRecord {
            case_value: value.to_string(),
            case_date: "2024-05-03".to_string(),
            death_value: value.to_string(),
            death_date: "2024-05-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_initial_state() {
        let (app, _rx) = test_app();
        assert_eq!(app.record, DisplayRecord::prompt());
        assert!(app.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_typing_opens_suggestions() {
        let (mut app, _rx) = test_app();
        app.push_char('o');
        assert_eq!(app.suggestions(), vec!["Oadby and Wigston", "Oldham", "Oxford"]);

        app.push_char('x');
        assert_eq!(app.suggestions(), vec!["Oxford"]);

        app.backspace();
        app.backspace();
        assert!(app.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_highlight_stays_in_bounds() {
        let (mut app, _rx) = test_app();
        app.push_char('o');
        app.move_up();
        assert_eq!(app.highlighted, 0);
        for _ in 0..5 {
            app.move_down();
        }
        assert_eq!(app.highlighted, 2);
    }

    #[tokio::test]
    async fn test_select_highlighted() {
        let (mut app, _rx) = test_app();
        app.push_char('o');
        app.move_down();
        app.select_highlighted();

        assert_eq!(app.selected.as_deref(), Some("Oldham"));
        assert_eq!(app.query, "Oldham");
        assert_eq!(app.phase, Phase::FetchingMetrics);
        assert!(!app.dropdown_open);
    }

    #[tokio::test]
    async fn test_select_highlighted_without_suggestions() {
        let (mut app, _rx) = test_app();
        app.select_highlighted();
        assert!(app.selected.is_none());
        assert_eq!(app.phase, Phase::RegionsLoaded);
    }

    #[tokio::test]
    async fn test_stale_result_is_discarded() {
        let (mut app, _rx) = test_app();
        app.select("Oxford".to_string());
        let first = app.current_selection.unwrap();
        app.select("Oldham".to_string());
        let second = app.current_selection.unwrap();

        app.handle_event(AppEvent::RecordFetched {
            selection: first,
            region: "Oxford".to_string(),
            record: record("1.0"),
        });
        assert_eq!(app.record, DisplayRecord::prompt());
        assert_eq!(app.phase, Phase::FetchingMetrics);

        app.handle_event(AppEvent::RecordFetched {
            selection: second,
            region: "Oldham".to_string(),
            record: record("2.0"),
        });
        assert_eq!(app.record, record("2.0"));
        assert_eq!(app.phase, Phase::RegionsLoaded);
        assert!(app.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_regions_replaced_wholesale() {
        let (mut app, _rx) = test_app();
        app.phase = Phase::FetchingRegions;
        app.handle_event(AppEvent::RegionsLoaded(vec!["Adur".to_string()]));
        assert_eq!(app.regions, vec!["Adur"]);
        assert_eq!(app.phase, Phase::RegionsLoaded);
    }

    #[tokio::test]
    async fn test_refresh_during_metrics_keeps_phase() {
        let (mut app, _rx) = test_app();
        app.select("Oxford".to_string());
        app.refresh_regions();
        assert_eq!(app.phase, Phase::FetchingMetrics);
    }
}
