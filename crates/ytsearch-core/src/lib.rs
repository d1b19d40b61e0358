//! YouTube Search Scraper Core Library
//!
//! Provides an async API for scraping youtube.com search results without
//! an API key.
//!
//! # Overview
//!
//! YouTube renders search results from a JSON blob (`ytInitialData`)
//! embedded in the page HTML. This crate provides the full pipeline:
//! - HTTP client with browser-like headers and bounded marker polling
//! - Locator for the embedded JSON island inside the raw HTML
//! - Parser that walks the renderer tree and normalizes each entry into
//!   a fixed nine-field [`VideoRecord`]
//! - High-level search API with explicit peek/take result consumption
//!
//! # Example
//!
//! ```no_run
//! use ytsearch_core::{Result, YoutubeSearch};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut search = YoutubeSearch::search("rust programming", Some(5)).await?;
//!
//!     for video in search.peek() {
//!         println!("{} [{}] {}", video.title, video.duration, video.channel);
//!     }
//!
//!     // One-shot JSON consumption: {"videos": [...]}
//!     println!("{}", search.take_json()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Extraction stability
//!
//! The extraction is best-effort against an undocumented, changeable
//! page format. Missing fields degrade to placeholders on a per-field
//! basis and malformed entries are skipped, so a partial layout change
//! upstream narrows the data rather than breaking the batch.

mod client;
mod error;
pub mod parser;
mod search;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, YoutubeClient};

// Re-export error types
pub use error::{Result, YtSearchError};

// Re-export parser functions
pub use parser::{extract_videos, locate_embedded_json, parse_embedded_json};

// Re-export main search API
pub use search::YoutubeSearch;

// Re-export data types
pub use types::{CHANNEL_NOT_FOUND, PLACEHOLDER, VideoRecord};

// Re-export URL helper functions for convenience
pub use url::{build_search_url, build_video_url, search_path};
