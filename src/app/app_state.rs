use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::config::Config;
use crate::content::{self, ContentState, Page};
use crate::input::InputState;
use crate::suggest::suggest_render::PopupLayout;
use crate::suggest::{self, SuggestController};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBar,
    Content,
}

/// Where each component was drawn on the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub search_bar: Option<Rect>,
    pub body: Option<Rect>,
    pub suggestions: Option<PopupLayout>,
}

/// Application state
pub struct App {
    pub search_bar: InputState,
    pub suggest: SuggestController,
    pub content: ContentState,
    pub focus: Focus,
    /// Rows shown in the suggestion popup
    pub max_visible: usize,
    /// One-line message for the status bar (config warnings and such)
    pub status_message: Option<String>,
    pub regions: LayoutRegions,
    pub should_quit: bool,
    shutdown: CancellationToken,
}

impl App {
    /// Create the app, start both workers and begin loading `start`
    ///
    /// A `Search` start page also pre-fills the search bar.
    pub fn new(config: &Config, client: ApiClient, start: Page) -> Self {
        let mut app = Self::detached(config, start);

        let source = Arc::new(client);

        let (suggest_tx, suggest_rx) = tokio::sync::mpsc::unbounded_channel();
        let (suggest_response_tx, suggest_response_rx) = mpsc::channel();
        suggest::spawn_worker(
            source.clone(),
            suggest_rx,
            suggest_response_tx,
            app.shutdown.clone(),
        );
        app.suggest.set_channels(suggest_tx, suggest_response_rx);

        let (content_tx, content_rx) = tokio::sync::mpsc::unbounded_channel();
        let (content_response_tx, content_response_rx) = mpsc::channel();
        content::spawn_worker(source, content_rx, content_response_tx, app.shutdown.clone());
        app.content.set_channels(content_tx, content_response_rx);

        app.content.reload();
        app
    }

    /// Create the app without workers; callers attach channels themselves
    pub fn detached(config: &Config, start: Page) -> Self {
        let mut search_bar = InputState::new();
        let focus = match &start {
            Page::Search { query } => {
                search_bar.set_text(query);
                Focus::Content
            }
            Page::Watch { .. } => Focus::Content,
            Page::Home => Focus::SearchBar,
        };

        let mut suggest = SuggestController::new(config.suggestions.debounce_ms);
        suggest.set_enabled(config.suggestions.enabled);

        Self {
            search_bar,
            suggest,
            content: ContentState::new(start),
            focus,
            // A zero-row popup would hide a list the keys still navigate
            max_visible: config.suggestions.max_visible.max(1),
            status_message: None,
            regions: LayoutRegions::default(),
            should_quit: false,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Time the event loop may block before the next debounce deadline
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.suggest.time_until_due(now) {
            Some(due) => due.min(idle),
            None => idle,
        }
    }

    /// Fire due lookups and apply worker results
    ///
    /// Returns true when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.suggest.tick(now);
        let suggestions_changed = self.suggest.poll_responses();
        let content_changed = self.content.poll_responses();
        fired || suggestions_changed || content_changed
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        match focus {
            Focus::SearchBar => self.suggest.focus(),
            Focus::Content => self.suggest.dismiss(),
        }
        self.focus = focus;
    }

    /// Run a search chosen from the bar or the suggestion list
    pub(super) fn submit_search(&mut self, query: String) {
        self.search_bar.set_text(&query);
        self.content.open(Page::Search { query });
        self.set_focus(Focus::Content);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
