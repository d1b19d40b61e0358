//! Core data types for the YouTube search scraper
//!
//! Contains the main data structures used throughout the library.

use serde::{Deserialize, Serialize};

/// Placeholder stored in any text field the results page did not carry.
pub const PLACEHOLDER: &str = "N/A";

/// Placeholder stored in `channel` when none of the byline shapes matched.
///
/// Distinct from [`PLACEHOLDER`] so callers can tell an unresolved channel
/// apart from other missing fields.
pub const CHANNEL_NOT_FOUND: &str = "Channel not found";

/// Represents one video entry from a YouTube search results page
///
/// Every field is always present. When the page lacks the underlying data
/// the field holds [`PLACEHOLDER`] ([`CHANNEL_NOT_FOUND`] for `channel`,
/// an empty vector for `thumbnails`) rather than an absent value, so
/// downstream consumers never need to null-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Platform video identifier (e.g., "dQw4w9WgXcQ")
    pub id: String,

    /// Thumbnail URLs in page order, entries without a URL skipped
    pub thumbnails: Vec<String>,

    /// Video title
    pub title: String,

    /// Description snippet shown under the title on the results page
    pub long_desc: String,

    /// Channel name, resolved through the byline fallback chain
    pub channel: String,

    /// Pre-formatted duration text (e.g., "10:32"); live streams have none
    pub duration: String,

    /// Pre-formatted view count text (e.g., "1,234,567 views")
    pub views: String,

    /// Pre-formatted relative publish time (e.g., "3 years ago")
    pub publish_time: String,

    /// Relative watch path (e.g., "/watch?v=dQw4w9WgXcQ")
    pub url_suffix: String,
}
