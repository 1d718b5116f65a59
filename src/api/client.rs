use std::time::Duration;

use serde::de::DeserializeOwned;

use super::ApiError;
use super::types::{SearchItem, SuggestionsPayload, Video};
use crate::config::ApiConfig;

/// Async client for the video metadata API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /popular`
    pub async fn popular(&self) -> Result<Vec<Video>, ApiError> {
        let videos: Vec<Video> = self.get_json("/popular", &[]).await?;
        log::debug!("Popular videos received: {}", videos.len());
        Ok(videos)
    }

    /// `GET /search?q=<query>`
    pub async fn search(&self, query: &str) -> Result<Vec<SearchItem>, ApiError> {
        self.get_json("/search", &[("q", query)]).await
    }

    /// `GET /videos/<id>`
    pub async fn video(&self, video_id: &str) -> Result<Video, ApiError> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(ApiError::MissingVideoId);
        }

        log::debug!("Fetching video: {}", video_id);
        let url = self.segment_url(&["videos", video_id])?;
        self.fetch(url.as_str(), &[]).await
    }

    /// `GET /search/suggestions?q=<query>`
    ///
    /// Accepts both the bare-array and the `{ "suggestions": [...] }` shapes.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let payload: SuggestionsPayload = self
            .get_json("/search/suggestions", &[("q", query)])
            .await?;
        Ok(payload.into_suggestions())
    }

    /// Fetch any endpoint and pretty-print its JSON
    pub async fn raw(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        log::debug!("Probing {}{}", self.base_url, path);
        let value: serde_json::Value = self.get_json(path, query).await?;
        serde_json::to_string_pretty(&value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Base URL plus percent-encoded path segments
    fn segment_url(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Network(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network(format!("Base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.fetch(&url, query).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("API responded with status: {}", status);
            return Err(ApiError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
