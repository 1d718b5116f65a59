//! Video metadata API
//!
//! Typed async access to an Invidious-compatible `/api/v1` service. All
//! endpoints are read-only GETs returning JSON.

use thiserror::Error;

mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    ChannelSummary, PlaylistSummary, SearchItem, SuggestionsPayload, Video, VideoThumbnail,
};

/// Errors that can occur while talking to the video API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure (DNS, connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API responded with status {code} {reason}")]
    Status { code: u16, reason: String },

    /// The body was not the JSON shape we expected
    #[error("Malformed response: {0}")]
    Decode(String),

    /// A video lookup was requested without an id
    #[error("No video ID provided")]
    MissingVideoId,
}
