//! Error handling.
//!
//! This module provides the typed errors of the library:
//! - Initialization failures (logger, HTTP client)
//! - Document loading failures
//! - Validation API failures
//!
//! Schema rule violations are not errors; they travel as strings inside
//! validation results.

mod types;

// Re-export public API
pub use types::{InitializationError, SnapshotError, ValidationApiError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_error_messages_name_the_source() {
        let err = SnapshotError::HttpStatus {
            url: "https://example.com/deals".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Fetching https://example.com/deals returned HTTP 404"
        );

        let err = SnapshotError::Io {
            path: "missing.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("Failed to read missing.html"));
    }

    #[test]
    fn test_validation_api_error_messages() {
        assert_eq!(
            ValidationApiError::Status(503).to_string(),
            "Validation API returned HTTP 503"
        );
        assert!(ValidationApiError::Decode("missing field `valid`".into())
            .to_string()
            .contains("missing field"));
    }
}
