//! Error type definitions.
//!
//! Rule violations and malformed JSON-LD are reported as data, never as errors.
//! The types here cover the operations that genuinely fail: logger and client
//! setup, loading a document, and calling the validation API.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while turning a file or URL into a `DocumentSnapshot`.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The source file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request for the document failed.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// Underlying HTTP error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("Fetching {url} returned HTTP {status}")]
    HttpStatus {
        /// URL that was requested
        url: String,
        /// Status code returned
        status: u16,
    },

    /// The document is larger than the configured limit.
    #[error("Document at {url} exceeds {limit} bytes")]
    TooLarge {
        /// Source of the document
        url: String,
        /// Maximum accepted size
        limit: usize,
    },

    /// A page URL could not be parsed or derived.
    #[error("Invalid page URL '{0}'")]
    InvalidUrl(String),
}

/// Errors returned by a `ValidationApi` implementation.
#[derive(Error, Debug)]
pub enum ValidationApiError {
    /// The request could not be sent or timed out.
    #[error("Validation request failed: {0}")]
    Request(#[source] ReqwestError),

    /// The API answered with a non-success status.
    #[error("Validation API returned HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("Validation response could not be decoded: {0}")]
    Decode(String),
}
