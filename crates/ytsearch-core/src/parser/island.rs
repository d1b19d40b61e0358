//! Embedded JSON locator for YouTube results pages
//!
//! YouTube inlines the search data as a JavaScript assignment
//! (`var ytInitialData = {...};`) inside a script tag. This module slices
//! that JSON island out of the raw HTML and parses it, without touching
//! the surrounding markup.

use serde_json::Value;

use crate::error::{Result, YtSearchError};

/// Name of the embedded-data variable carried by results pages.
pub const DATA_MARKER: &str = "ytInitialData";

/// Bytes between the end of the marker and the opening brace (` = `).
const ASSIGNMENT_SKIP: usize = 3;

/// Sequence closing the island: the object's final brace plus the
/// statement semicolon.
const TERMINATOR: &str = "};";

/// Locates the embedded JSON object inside a results page document
///
/// The span starts [`ASSIGNMENT_SKIP`] bytes after the first occurrence
/// of [`DATA_MARKER`] and ends at the first [`TERMINATOR`] from there.
/// The closing brace belongs to the span, the semicolon does not.
///
/// # Arguments
/// * `html` - Raw HTML string from a results page
///
/// # Returns
/// The JSON object text, from opening to closing brace inclusive
///
/// # Errors
/// Returns `MarkerNotFound` if the marker is absent, and
/// `TerminatorNotFound` if no terminator follows the computed start.
///
/// # Example
/// ```
/// use ytsearch_core::parser::island::locate_embedded_json;
/// let html = r#"<script>var ytInitialData = {"a":1};</script>"#;
/// assert_eq!(locate_embedded_json(html).unwrap(), r#"{"a":1}"#);
/// ```
pub fn locate_embedded_json(html: &str) -> Result<&str> {
    let marker_at = html.find(DATA_MARKER).ok_or(YtSearchError::MarkerNotFound)?;
    let start = marker_at + DATA_MARKER.len() + ASSIGNMENT_SKIP;

    // get() rather than indexing: the skip may run past the end of the
    // document or land inside a multi-byte character.
    let tail = html.get(start..).ok_or(YtSearchError::TerminatorNotFound)?;
    let end = tail.find(TERMINATOR).ok_or(YtSearchError::TerminatorNotFound)?;

    Ok(&tail[..=end])
}

/// Locates and parses the embedded JSON island in one step
///
/// # Arguments
/// * `html` - Raw HTML string from a results page
///
/// # Returns
/// The parsed JSON value
///
/// # Errors
/// Location failures as in [`locate_embedded_json`]; a malformed island
/// surfaces the underlying `serde_json` error.
pub fn parse_embedded_json(html: &str) -> Result<Value> {
    let span = locate_embedded_json(html)?;
    Ok(serde_json::from_str(span)?)
}
