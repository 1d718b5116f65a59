use crate::api::Video;

/// A screen the user can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Search { query: String },
    Watch { video_id: String },
}

impl Page {
    /// Short label for the status line
    pub fn title(&self) -> String {
        match self {
            Page::Home => "Popular".to_string(),
            Page::Search { query } => format!("Search: {}", query),
            Page::Watch { .. } => "Watch".to_string(),
        }
    }
}

/// Successfully loaded page content
#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
    Popular(Vec<Video>),
    Search { results: Vec<Video> },
    Watch { video: Video, related: Vec<Video> },
}

impl PageData {
    /// Videos the cursor moves over on this page
    pub fn videos(&self) -> &[Video] {
        match self {
            PageData::Popular(videos) => videos,
            PageData::Search { results } => results,
            PageData::Watch { related, .. } => related,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    Loading,
    Loaded(PageData),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            video_id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_watch_page_lists_related_videos() {
        let data = PageData::Watch {
            video: video("main"),
            related: vec![video("r1"), video("r2")],
        };

        let ids: Vec<&str> = data.videos().iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(Page::Home.title(), "Popular");
        assert_eq!(
            Page::Search {
                query: "cats".into()
            }
            .title(),
            "Search: cats"
        );
    }
}
