//! Error types for the application.
//!
//! - [`FetchError`] - record acquisition failures, surfaced to the view as a
//!   failed load rather than leaving it stuck in its loading state
//! - [`AppError`] - top-level wrapper returned by `main`
//!
//! Filtering, sorting and pagination have no error type: invalid inputs there
//! are absorbed by clamping.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors encountered while loading the record collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, TLS, interrupted body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// The request did not complete within the configured timeout.
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// The payload is not a JSON array of records.
    ///
    /// `origin` names where the payload came from (URL or file path).
    #[error("Malformed record data from {origin}: {reason}")]
    Decode {
        /// URL or file path the payload was read from.
        origin: String,
        /// Parser error message.
        reason: String,
    },

    /// A file source points at a path that does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure reading a file source.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The background runtime used for acquisition could not be started.
    #[error("Failed to start acquisition runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Top-level application error.
///
/// Startup and terminal failures convert into `AppError` via `From`, so the
/// binary can propagate them with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or holds invalid values.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, drawing or restore failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

impl FetchError {
    /// Build a decode error from any displayable parser error.
    pub fn decode(origin: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Decode {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = FetchError::Status {
            url: "http://localhost/posts".to_string(),
            status: 503,
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("http://localhost/posts"));
    }

    #[test]
    fn file_not_found_shows_path() {
        let err = FetchError::FileNotFound(PathBuf::from("/tmp/missing-posts.json"));
        assert!(err.to_string().contains("/tmp/missing-posts.json"));
    }

    #[test]
    fn decode_helper_captures_reason() {
        let parse_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = FetchError::decode("posts.json", &parse_err);
        match err {
            FetchError::Decode { origin, reason } => {
                assert_eq!(origin, "posts.json");
                assert!(!reason.is_empty());
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error as _;

        let err = FetchError::Io {
            path: PathBuf::from("posts.json"),
            source: std::io::Error::other("disk on fire"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn config_error_converts_to_app_error() {
        let config_err = crate::config::ConfigError::InvalidValue {
            field: "grid_page_size",
            value: "7".to_string(),
        };
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(_)));
        assert!(app_err.to_string().contains("grid_page_size"));
    }

    #[test]
    fn io_error_converts_through_tui_error() {
        let tui_err: crate::view::TuiError = std::io::Error::other("no tty").into();
        let app_err: AppError = tui_err.into();
        assert!(matches!(app_err, AppError::Tui(_)));
    }
}
