//! Extraction pipeline for YouTube results pages
//!
//! Contains modules for locating the embedded JSON island and walking
//! its renderer tree.

pub mod island;
pub mod search;

pub use island::{DATA_MARKER, locate_embedded_json, parse_embedded_json};
pub use search::{extract_record, extract_videos, locate_video_entries};
