//! Tests for VidqError type

use super::*;

#[test]
fn test_config_read_error_display() {
    let error = VidqError::ConfigRead {
        path: "/tmp/vidq.toml".to_string(),
        message: "permission denied".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Failed to read config"));
    assert!(msg.contains("/tmp/vidq.toml"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn test_config_parse_error_display() {
    let error = VidqError::ConfigParse {
        path: "config.toml".to_string(),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_api_error_from_api_error() {
    let err = VidqError::from(ApiError::MissingVideoId);
    assert!(matches!(err, VidqError::Api(ApiError::MissingVideoId)));
    assert!(err.to_string().contains("Video API error"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let vidq_err = VidqError::from(io_err);
    assert!(matches!(vidq_err, VidqError::Io(_)));
    assert!(vidq_err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = VidqError::Api(ApiError::MissingVideoId);
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("MissingVideoId"));
}

#[test]
fn test_missing_probe_argument_display() {
    let error = VidqError::MissingProbeArgument {
        endpoint: "video",
        what: "a video ID",
    };
    assert_eq!(error.to_string(), "`probe video` needs a video ID");
}
