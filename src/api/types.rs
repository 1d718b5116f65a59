use serde::Deserialize;

/// Thumbnail variant of a video
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoThumbnail {
    pub quality: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Video summary or detail object
///
/// The popular and search endpoints return summaries, `/videos/<id>` returns a
/// superset; every field is optional on the wire so one type serves both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub author_id: String,
    pub author_url: String,
    pub video_thumbnails: Vec<VideoThumbnail>,
    pub description: String,
    pub view_count: u64,
    pub published: i64,
    pub published_text: String,
    pub length_seconds: u64,
    pub live_now: bool,
    pub premium: bool,
    pub is_upcoming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelSummary {
    pub author: String,
    pub author_id: String,
    pub sub_count: u64,
    pub video_count: u64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub title: String,
    pub playlist_id: String,
    pub author: String,
    pub video_count: u64,
}

/// One entry of `/search`, discriminated by its `type` field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchItem {
    Video(Video),
    Channel(ChannelSummary),
    Playlist(PlaylistSummary),
    #[serde(other)]
    Unknown,
}

impl SearchItem {
    /// Keep only the video entries, in order
    pub fn only_videos(items: Vec<SearchItem>) -> Vec<Video> {
        items
            .into_iter()
            .filter_map(|item| match item {
                SearchItem::Video(video) => Some(video),
                _ => None,
            })
            .collect()
    }
}

/// Body of `/search/suggestions`
///
/// Instances disagree on the shape: some return a bare array, others wrap it
/// in an object next to the echoed query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SuggestionsPayload {
    List(Vec<String>),
    Wrapped { suggestions: Vec<String> },
}

impl SuggestionsPayload {
    pub fn into_suggestions(self) -> Vec<String> {
        match self {
            SuggestionsPayload::List(list) => list,
            SuggestionsPayload::Wrapped { suggestions } => suggestions,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
