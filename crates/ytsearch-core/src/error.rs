//! Error types for the YouTube search scraper
//!
//! Provides a single error enum with human-readable messages covering
//! the fetch, extraction and serialization stages.

use thiserror::Error;

/// Error type for all YouTube search scraper operations
///
/// Fetch and extraction failures are kept distinct from an empty result
/// set: a well-formed page with zero videos is not an error.
#[derive(Error, Debug)]
pub enum YtSearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Every fetch attempt returned a page without the embedded-data marker
    #[error("results page lacked the embedded data marker after {attempts} attempts")]
    MarkerNotServed {
        /// Total requests issued, initial fetch included
        attempts: u32,
    },

    /// Embedded-data marker is absent from the supplied document
    #[error("embedded data marker not found in document")]
    MarkerNotFound,

    /// No object terminator after the embedded-data marker
    #[error("embedded data terminator not found in document")]
    TerminatorNotFound,

    /// Embedded JSON failed to parse, or a result document failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Search terms were empty or whitespace-only
    #[error("search terms must not be empty")]
    EmptyQuery,

    /// A result cap of zero was requested
    #[error("result cap must be positive")]
    ZeroResultCap,
}

/// Result type alias for YouTube search operations
pub type Result<T> = std::result::Result<T, YtSearchError>;
