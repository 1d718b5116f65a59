//! Display formatting for video metadata

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::{Video, VideoThumbnail};

const ELLIPSIS: char = '…';

/// Compact view count: `1.5M views`, `12.3K views`, `999 views`
pub fn format_views(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M views", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K views", count as f64 / 1_000.0)
    } else {
        format!("{} views", count)
    }
}

/// `h:mm:ss` for videos of an hour or more, `m:ss` otherwise
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Prefer the `medium` thumbnail, otherwise whatever comes first
pub fn pick_thumbnail(thumbnails: &[VideoThumbnail]) -> Option<&VideoThumbnail> {
    thumbnails
        .iter()
        .find(|t| t.quality == "medium")
        .or_else(|| thumbnails.first())
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// `author • views • published • duration`, skipping parts the API left empty
pub fn video_meta_line(video: &Video) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !video.author.is_empty() {
        parts.push(video.author.clone());
    }
    if video.live_now {
        parts.push("LIVE".to_string());
    } else if video.view_count > 0 {
        parts.push(format_views(video.view_count));
    }
    if !video.published_text.is_empty() {
        parts.push(video.published_text.clone());
    }
    if video.length_seconds > 0 {
        parts.push(format_duration(video.length_seconds));
    }

    parts.join(" • ")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
