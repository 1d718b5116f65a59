//! Configuration loading for vidq
//!
//! Reads `~/.config/vidq/config.toml`. A missing file means defaults; a broken
//! file means defaults plus a warning the UI can show.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{ApiConfig, Config, DEFAULT_BASE_URL, SuggestionsConfig};
