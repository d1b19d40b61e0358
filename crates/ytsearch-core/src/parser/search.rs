//! Search results parser for YouTube
//!
//! Walks the parsed `ytInitialData` tree, collects `videoRenderer` nodes
//! and normalizes each into a [`VideoRecord`] with every field populated.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::parser::island::parse_embedded_json;
use crate::types::{CHANNEL_NOT_FOUND, PLACEHOLDER, VideoRecord};

/// Byline fields probed for the channel name, in resolution order.
const CHANNEL_FIELDS: [&str; 3] = ["longBylineText", "shortBylineText", "ownerText"];

/// Probe shapes tried against each byline field. All fields are probed
/// with one shape before the next shape is tried.
const CHANNEL_PROBES: [fn(&Value, &str) -> Option<String>; 2] = [runs_text, simple_text];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Extracts all video records from a results page document
///
/// Composes island location, JSON parsing and entry extraction. Structural
/// failures (missing marker or terminator, malformed island) are errors;
/// a well-formed page with zero video entries is an empty `Ok`.
///
/// # Arguments
/// * `html` - Raw HTML string from a results page
///
/// # Returns
/// Vector of [`VideoRecord`] structs in page order, empty if no entries
///
/// # Errors
/// Returns `MarkerNotFound`, `TerminatorNotFound` or `Json` when the
/// embedded island cannot be recovered from the document.
pub fn extract_videos(html: &str) -> Result<Vec<VideoRecord>> {
    let data = parse_embedded_json(html)?;
    let entries = locate_video_entries(&data);
    let records: Vec<VideoRecord> = entries.into_iter().filter_map(extract_record).collect();
    debug!(count = records.len(), "extracted video records");
    Ok(records)
}

/// Collects every `videoRenderer` node from the renderer tree
///
/// Navigates `contents` > `twoColumnSearchResultsRenderer` >
/// `primaryContents` > `sectionListRenderer` > `contents`, then descends
/// into each section's `itemSectionRenderer.contents`. Sections and items
/// of other renderer kinds (shelves, ads, did-you-mean) are skipped. A
/// missing top path yields an empty vector, logged but not fatal.
pub fn locate_video_entries(data: &Value) -> Vec<&Value> {
    let sections = data
        .get("contents")
        .and_then(|v| v.get("twoColumnSearchResultsRenderer"))
        .and_then(|v| v.get("primaryContents"))
        .and_then(|v| v.get("sectionListRenderer"))
        .and_then(|v| v.get("contents"))
        .and_then(Value::as_array);

    let Some(sections) = sections else {
        warn!("search renderer path missing from embedded data");
        return Vec::new();
    };

    let mut entries = Vec::new();
    for section in sections {
        let items = section
            .get("itemSectionRenderer")
            .and_then(|v| v.get("contents"))
            .and_then(Value::as_array);
        let Some(items) = items else { continue };

        for item in items {
            if let Some(entry) = item.get("videoRenderer") {
                entries.push(entry);
            }
        }
    }
    entries
}

/// Builds one [`VideoRecord`] from a `videoRenderer` node
///
/// Every field is resolved independently and falls back to its
/// placeholder, so a reshaped or partial entry still yields a complete
/// record. Only an entry that is not a JSON object at all is dropped;
/// dropping one entry never aborts the batch.
pub fn extract_record(entry: &Value) -> Option<VideoRecord> {
    if !entry.is_object() {
        warn!("skipping malformed video entry");
        return None;
    }

    Some(VideoRecord {
        id: entry
            .get("videoId")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        thumbnails: extract_thumbnails(entry),
        title: runs_text(entry, "title")
            .or_else(|| simple_text(entry, "title"))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        long_desc: runs_text(entry, "descriptionSnippet")
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        channel: resolve_channel(entry),
        duration: simple_text(entry, "lengthText").unwrap_or_else(|| PLACEHOLDER.to_string()),
        views: simple_text(entry, "viewCountText").unwrap_or_else(|| PLACEHOLDER.to_string()),
        publish_time: simple_text(entry, "publishedTimeText")
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        url_suffix: extract_url_suffix(entry).unwrap_or_else(|| PLACEHOLDER.to_string()),
    })
}

// ---------------------------------------------------------------------------
// Field probing helpers
// ---------------------------------------------------------------------------

/// Resolves the channel name through the byline fallback chain
///
/// Applies each probe in [`CHANNEL_PROBES`] to each field in
/// [`CHANNEL_FIELDS`], first success wins. When all six probes fail the
/// record gets the distinct [`CHANNEL_NOT_FOUND`] placeholder, never the
/// generic one.
fn resolve_channel(entry: &Value) -> String {
    for probe in CHANNEL_PROBES {
        for field in CHANNEL_FIELDS {
            if let Some(name) = probe(entry, field) {
                return name;
            }
        }
    }
    CHANNEL_NOT_FOUND.to_string()
}

/// Collects thumbnail URLs under `thumbnail.thumbnails[*].url`
///
/// Entries lacking a `url` are skipped, not placeholder-padded; order is
/// preserved for the rest.
fn extract_thumbnails(entry: &Value) -> Vec<String> {
    entry
        .get("thumbnail")
        .and_then(|v| v.get("thumbnails"))
        .and_then(Value::as_array)
        .map(|thumbs| {
            thumbs
                .iter()
                .filter_map(|t| t.get("url").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Relative watch path under the entry's navigation endpoint
fn extract_url_suffix(entry: &Value) -> Option<String> {
    entry
        .get("navigationEndpoint")?
        .get("commandMetadata")?
        .get("webCommandMetadata")?
        .get("url")?
        .as_str()
        .map(str::to_string)
}

/// First `runs[0].text` under `entry[field]`, if the runs sequence is
/// present and non-empty
fn runs_text(entry: &Value, field: &str) -> Option<String> {
    entry
        .get(field)?
        .get("runs")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

/// `simpleText` scalar under `entry[field]`
fn simple_text(entry: &Value, field: &str) -> Option<String> {
    entry
        .get(field)?
        .get("simpleText")?
        .as_str()
        .map(str::to_string)
}
