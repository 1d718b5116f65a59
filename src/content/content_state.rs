//! Content page state
//!
//! Owns the navigator, the status of the current page and the cursor over its
//! video list. Page loads go to the content worker tagged with a request id;
//! only the response for the newest id is applied.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::navigator::Navigator;
use super::page::{Page, PageData, PageStatus};
use crate::api::Video;
use crate::suggest::Direction;

pub const WORKER_UNAVAILABLE: &str = "Content service unavailable";

/// Page load sent to the content worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub request_id: u64,
    pub page: Page,
}

/// Page load result returned by the content worker
#[derive(Debug, Clone, PartialEq)]
pub struct ContentResponse {
    pub request_id: u64,
    pub page: Page,
    pub result: Result<PageData, String>,
}

pub struct ContentState {
    navigator: Navigator,
    status: PageStatus,
    cursor: usize,
    /// Id of the newest load; older responses are discarded
    request_id: u64,
    request_tx: Option<UnboundedSender<ContentRequest>>,
    response_rx: Option<Receiver<ContentResponse>>,
}

impl ContentState {
    /// Create state showing `start`; nothing is requested until [`Self::reload`]
    pub fn new(start: Page) -> Self {
        Self {
            navigator: Navigator::new(start),
            status: PageStatus::Loading,
            cursor: 0,
            request_id: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<ContentRequest>,
        response_rx: Receiver<ContentResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn page(&self) -> &Page {
        self.navigator.current()
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Videos listed on the current page (empty unless loaded)
    pub fn videos(&self) -> &[Video] {
        match &self.status {
            PageStatus::Loaded(data) => data.videos(),
            _ => &[],
        }
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.videos().get(self.cursor)
    }

    /// Navigate to `page` and load it
    ///
    /// Opening the page already shown reloads it without touching history.
    pub fn open(&mut self, page: Page) {
        self.navigator.navigate(page);
        self.reload();
    }

    /// Go back one page and load it; returns false with no history
    pub fn back(&mut self) -> bool {
        if !self.navigator.back() {
            return false;
        }
        self.reload();
        true
    }

    /// Request the current page again
    pub fn reload(&mut self) {
        self.request_id += 1;
        self.status = PageStatus::Loading;
        self.cursor = 0;

        let request = ContentRequest {
            request_id: self.request_id,
            page: self.navigator.current().clone(),
        };
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());
        if !sent {
            log::error!("Content worker unavailable, cannot load {:?}", self.page());
            self.status = PageStatus::Failed(WORKER_UNAVAILABLE.to_string());
        }
    }

    /// Drain every response the worker has posted
    ///
    /// Returns true when the visible page changed.
    pub fn poll_responses(&mut self) -> bool {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        log::debug!("Content worker disconnected");
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

    /// Apply a worker response if it answers the newest request
    pub fn apply_response(&mut self, response: ContentResponse) -> bool {
        if response.request_id != self.request_id {
            log::debug!(
                "Discarding stale content for {:?} (request {}, current {})",
                response.page,
                response.request_id,
                self.request_id
            );
            return false;
        }

        self.status = match response.result {
            Ok(data) => PageStatus::Loaded(data),
            Err(message) => PageStatus::Failed(message),
        };
        self.clamp_cursor();
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let count = self.videos().len();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = match direction {
            Direction::Up => self.cursor.saturating_sub(1),
            Direction::Down => (self.cursor + 1).min(count - 1),
        };
    }

    fn clamp_cursor(&mut self) {
        let count = self.videos().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "content_state_tests.rs"]
mod content_state_tests;
