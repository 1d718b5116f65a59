//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::content::Page;
use crate::error::VidqError;

/// Browse videos from the terminal
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Start on the results page for this search
    pub query: Option<String>,

    /// Start on the watch page for this video ID
    #[arg(long, value_name = "ID", conflicts_with = "query")]
    pub video: Option<String>,

    /// Config file to use instead of ~/.config/vidq/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL, e.g. https://example.org/api/v1
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Quiet period before a suggestion lookup fires
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Turn search suggestions off
    #[arg(long)]
    pub no_suggestions: bool,

    /// Write debug logs to this file (also enabled by VIDQ_LOG=<path>)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the raw JSON an endpoint returns, without opening the UI
    Probe {
        endpoint: ProbeEndpoint,
        /// Search text or video ID
        arg: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeEndpoint {
    Popular,
    Search,
    Video,
    Suggestions,
}

/// Endpoint path and query parameters for a probe
#[derive(Debug, PartialEq, Eq)]
pub struct ProbeRequest {
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl ProbeEndpoint {
    pub fn request(self, arg: Option<&str>) -> Result<ProbeRequest, VidqError> {
        let arg = arg.map(str::trim).filter(|a| !a.is_empty());
        match self {
            ProbeEndpoint::Popular => Ok(ProbeRequest {
                path: "/popular".to_string(),
                query: Vec::new(),
            }),
            ProbeEndpoint::Search => Ok(ProbeRequest {
                path: "/search".to_string(),
                query: vec![("q", required(arg, "search", "a query")?)],
            }),
            ProbeEndpoint::Suggestions => Ok(ProbeRequest {
                path: "/search/suggestions".to_string(),
                query: vec![("q", required(arg, "suggestions", "a query")?)],
            }),
            ProbeEndpoint::Video => Ok(ProbeRequest {
                path: format!("/videos/{}", required(arg, "video", "a video ID")?),
                query: Vec::new(),
            }),
        }
    }
}

fn required(arg: Option<&str>, endpoint: &'static str, what: &'static str) -> Result<String, VidqError> {
    arg.map(str::to_string)
        .ok_or(VidqError::MissingProbeArgument { endpoint, what })
}

impl Cli {
    /// Page the UI opens on
    pub fn start_page(&self) -> Page {
        if let Some(video_id) = &self.video {
            return Page::Watch {
                video_id: video_id.clone(),
            };
        }
        match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => Page::Search {
                query: query.to_string(),
            },
            _ => Page::Home,
        }
    }

    /// Flags win over the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.suggestions.debounce_ms = debounce_ms;
        }
        if self.no_suggestions {
            config.suggestions.enabled = false;
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
