//! Suggestion worker
//!
//! Runs lookups off the UI thread. Each request becomes its own task so a
//! slow lookup does not hold up the next one; ordering is restored on the UI
//! side by generation.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::controller::{SuggestRequest, SuggestResponse};
use super::source::SuggestionSource;
use crate::worker;

/// Spawn the suggestion worker thread
///
/// In-flight lookups are never cancelled individually; the controller drops
/// their results instead.
pub fn spawn_worker(
    source: Arc<dyn SuggestionSource>,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
    shutdown: CancellationToken,
) {
    worker::spawn(
        "suggestions",
        request_rx,
        response_tx,
        shutdown,
        move |SuggestRequest { query, generation }| {
            let fetch = source.fetch(query.clone());
            async move {
                SuggestResponse {
                    query,
                    generation,
                    result: fetch.await,
                }
            }
        },
    );
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
