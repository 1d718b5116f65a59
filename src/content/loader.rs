//! Page loading
//!
//! Turns a [`Page`] into [`PageData`] by calling the video API, and runs
//! those loads on a background worker.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use futures::future::BoxFuture;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::content_state::{ContentRequest, ContentResponse};
use super::page::{Page, PageData};
use crate::api::{ApiClient, ApiError, SearchItem, Video};
use crate::worker;

/// Number of popular videos shown as "related" on a watch page
pub const RELATED_LIMIT: usize = 20;

pub const VIDEO_NOT_FOUND: &str = "Video not found or failed to load";

/// The three endpoints page loading needs
pub trait ContentSource: Send + Sync + 'static {
    fn popular(&self) -> BoxFuture<'static, Result<Vec<Video>, ApiError>>;
    fn search(&self, query: String) -> BoxFuture<'static, Result<Vec<SearchItem>, ApiError>>;
    fn video(&self, video_id: String) -> BoxFuture<'static, Result<Video, ApiError>>;
}

impl ContentSource for ApiClient {
    fn popular(&self) -> BoxFuture<'static, Result<Vec<Video>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.popular().await })
    }

    fn search(&self, query: String) -> BoxFuture<'static, Result<Vec<SearchItem>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.search(&query).await })
    }

    fn video(&self, video_id: String) -> BoxFuture<'static, Result<Video, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.video(&video_id).await })
    }
}

/// Fetch everything a page needs
///
/// The error string is what the page shows to the user.
pub async fn load_page(source: &dyn ContentSource, page: &Page) -> Result<PageData, String> {
    match page {
        Page::Home => source.popular().await.map(PageData::Popular).map_err(|e| {
            log::error!("Failed to load popular videos: {}", e);
            format!("Failed to load popular videos: {}", e)
        }),
        Page::Search { query } => match source.search(query.clone()).await {
            Ok(items) => Ok(PageData::Search {
                results: SearchItem::only_videos(items),
            }),
            Err(e) => {
                log::error!("Search for {:?} failed: {}", query, e);
                Err(format!("Search failed: {}", e))
            }
        },
        Page::Watch { video_id } => {
            if video_id.trim().is_empty() {
                return Err(ApiError::MissingVideoId.to_string());
            }

            let related = match source.popular().await {
                Ok(mut videos) => {
                    videos.truncate(RELATED_LIMIT);
                    videos
                }
                Err(e) => {
                    log::warn!("Related videos unavailable: {}", e);
                    Vec::new()
                }
            };

            let video = source.video(video_id.clone()).await.map_err(|e| {
                log::error!("Failed to load video {}: {}", video_id, e);
                VIDEO_NOT_FOUND.to_string()
            })?;

            Ok(PageData::Watch { video, related })
        }
    }
}

/// Spawn the content worker thread
pub fn spawn_worker(
    source: Arc<dyn ContentSource>,
    request_rx: UnboundedReceiver<ContentRequest>,
    response_tx: Sender<ContentResponse>,
    shutdown: CancellationToken,
) {
    worker::spawn(
        "content",
        request_rx,
        response_tx,
        shutdown,
        move |ContentRequest { request_id, page }| {
            let source = Arc::clone(&source);
            async move {
                let result = load_page(source.as_ref(), &page).await;
                ContentResponse {
                    request_id,
                    page,
                    result,
                }
            }
        },
    );
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
