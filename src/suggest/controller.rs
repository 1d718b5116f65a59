//! Suggestion controller state
//!
//! Owns the query text, the last fetched suggestion list, the selection cursor
//! and the panel flag. Every mutation happens on the UI thread; lookups are
//! handed to the worker over a channel and their results come back tagged with
//! the generation they were issued under.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::debouncer::Debouncer;
use super::selection::{Direction, SelectionState};
use crate::api::ApiError;

/// Lookup sent to the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    pub query: String,
    /// Generation current when the lookup was issued
    pub generation: u64,
}

/// Lookup result returned by the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestResponse {
    pub query: String,
    pub generation: u64,
    pub result: Result<Vec<String>, ApiError>,
}

pub struct SuggestController {
    query: String,
    suggestions: Vec<String>,
    selection: SelectionState,
    /// Whether the panel is open; it is only drawn when the list is non-empty
    panel_open: bool,
    loading: bool,
    enabled: bool,
    /// Bumped by every query change and lookup; responses must match it
    generation: u64,
    debouncer: Debouncer,
    request_tx: Option<UnboundedSender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
}

impl SuggestController {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            selection: SelectionState::new(),
            panel_open: false,
            loading: false,
            enabled: true,
            generation: 0,
            debouncer: Debouncer::new(debounce_ms),
            request_tx: None,
            response_rx: None,
        }
    }

    /// Attach the worker channels
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Turn lookups off entirely; the query still echoes
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.debouncer.cancel();
            self.hide_and_clear();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.get_selected()
    }

    pub fn is_visible(&self) -> bool {
        self.panel_open && !self.suggestions.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long the event loop may wait before `tick` has work to do
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Record a keystroke: echo the text now, look it up after the quiet period
    pub fn set_query(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.generation = self.generation.wrapping_add(1);
        // Any in-flight lookup is now stale
        self.loading = false;
        if self.enabled {
            self.debouncer.schedule(now);
        }
    }

    /// Fire the debounced lookup once its deadline has passed
    ///
    /// Returns true when a lookup was started.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debouncer.take_due(now) {
            return false;
        }
        let query = self.query.clone();
        self.lookup(&query);
        true
    }

    /// Issue a lookup for `query`, superseding every earlier one
    pub fn lookup(&mut self, query: &str) {
        self.generation = self.generation.wrapping_add(1);

        if query.trim().is_empty() {
            self.hide_and_clear();
            return;
        }

        let request = SuggestRequest {
            query: query.to_string(),
            generation: self.generation,
        };

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());

        if sent {
            log::debug!("Suggestion lookup {} for {:?}", self.generation, query);
            self.loading = true;
        } else {
            log::warn!("Suggestion worker unavailable, dropping lookup for {:?}", query);
            self.hide_and_clear();
        }
    }

    /// Drain every response the worker has posted
    ///
    /// Returns true when visible state changed.
    pub fn poll_responses(&mut self) -> bool {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        log::debug!("Suggestion worker disconnected");
                        break;
                    }
                }
            }
        }

        let mut changed = false;
        for response in responses {
            changed |= self.apply_response(response);
        }
        changed
    }

    /// Apply a worker response if it belongs to the current generation
    ///
    /// Stale responses are dropped without touching any state.
    pub fn apply_response(&mut self, response: SuggestResponse) -> bool {
        if response.generation != self.generation {
            log::debug!(
                "Discarding stale suggestions for {:?} (generation {}, current {})",
                response.query,
                response.generation,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match response.result {
            Ok(suggestions) => {
                self.suggestions = suggestions;
                self.selection.clear_selection();
                self.panel_open = true;
            }
            Err(e) => {
                log::warn!("Error fetching suggestions for {:?}: {}", response.query, e);
                self.hide_and_clear();
            }
        }
        true
    }

    pub fn move_selection(&mut self, direction: Direction) {
        self.selection.navigate(direction, self.suggestions.len());
    }

    /// Resolve Enter into the query to search for
    ///
    /// The highlighted suggestion wins over the typed text. Pending and
    /// in-flight lookups are superseded so they cannot reopen the panel.
    /// Returns `None` when there is nothing to search for.
    pub fn accept_selection(&mut self) -> Option<String> {
        let highlighted = self
            .selection
            .get_selected()
            .and_then(|index| self.suggestions.get(index))
            .cloned();
        let chosen = match highlighted {
            Some(suggestion) => {
                self.query = suggestion.clone();
                suggestion
            }
            None => self.query.clone(),
        };

        self.debouncer.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.loading = false;
        self.dismiss();

        if chosen.trim().is_empty() {
            None
        } else {
            Some(chosen)
        }
    }

    /// Item click: highlight `index` and accept it
    pub fn click(&mut self, index: usize) -> Option<String> {
        if !self.selection.select_index(index, self.suggestions.len()) {
            return None;
        }
        self.accept_selection()
    }

    /// Blur or Esc: hide the panel but keep the text and the last list
    pub fn dismiss(&mut self) {
        self.panel_open = false;
        self.selection.clear_selection();
    }

    /// Focus: reshow the last fetched list, if any
    pub fn focus(&mut self) {
        if !self.suggestions.is_empty() {
            self.panel_open = true;
        }
    }

    /// Empty the search box
    pub fn clear(&mut self) {
        self.query.clear();
        self.debouncer.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.hide_and_clear();
    }

    fn hide_and_clear(&mut self) {
        self.suggestions.clear();
        self.selection.clear_selection();
        self.panel_open = false;
        self.loading = false;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
