use thiserror::Error;

use crate::api::ApiError;

/// Custom error types for vidq
#[derive(Debug, Error)]
pub enum VidqError {
    #[error("Failed to read config file {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("`probe {endpoint}` needs {what}")]
    MissingProbeArgument {
        endpoint: &'static str,
        what: &'static str,
    },

    #[error("Video API error: {0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
