//! Main search API for YouTube
//!
//! Provides the high-level API combining the HTTP client and the
//! extraction pipeline, and owns the retained result set.

use serde::Serialize;
use tracing::debug;

use crate::client::YoutubeClient;
use crate::error::{Result, YtSearchError};
use crate::parser::island::DATA_MARKER;
use crate::parser::search::extract_videos;
use crate::types::VideoRecord;
use crate::url::search_path;

/// Serialized shape of a result set: all records under one `videos` key.
#[derive(Serialize)]
struct VideoDocument<'a> {
    videos: &'a [VideoRecord],
}

/// One performed search and its retained results
///
/// Construction is the search: [`YoutubeSearch::search`] fetches the
/// results page, runs the extractor and retains the records, truncated
/// to the optional result cap. Consumption is explicit: the `peek`
/// accessors borrow and preserve the set, the `take` accessors move it
/// out and leave the set empty.
pub struct YoutubeSearch {
    videos: Vec<VideoRecord>,
}

impl YoutubeSearch {
    /// Search youtube.com and retain the extracted records
    ///
    /// # Arguments
    /// * `terms` - Search query string
    /// * `max_results` - Optional cap; longer result sets are truncated
    ///   to the first `max_results` entries in page order
    ///
    /// # Returns
    /// A `YoutubeSearch` holding the extracted records, possibly empty
    /// when the query legitimately matched nothing
    ///
    /// # Errors
    /// - `EmptyQuery` if `terms` is empty or whitespace only
    /// - `ZeroResultCap` if `max_results` is zero
    /// - `Http` if the network request fails
    /// - `MarkerNotServed` if no attempt returned the embedded data
    /// - `MarkerNotFound`, `TerminatorNotFound`, `Json` if extraction fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytsearch_core::Result<()> {
    /// use ytsearch_core::YoutubeSearch;
    /// let mut search = YoutubeSearch::search("rust tutorial", Some(5)).await?;
    /// for video in search.peek() {
    ///     println!("{}: {}", video.title, video.channel);
    /// }
    /// println!("{}", search.take_json()?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(terms: &str, max_results: Option<usize>) -> Result<Self> {
        let client = YoutubeClient::new()?;
        Self::search_with_client(&client, terms, max_results).await
    }

    /// Search with a caller-configured client
    ///
    /// Useful for a custom base URL, timeout or retry ceiling, and for
    /// reusing one client's connection pool across searches.
    ///
    /// # Arguments
    /// * `client` - Configured [`YoutubeClient`]
    /// * `terms` - Search query string
    /// * `max_results` - Optional result cap
    ///
    /// # Errors
    /// As in [`YoutubeSearch::search`]
    pub async fn search_with_client(
        client: &YoutubeClient,
        terms: &str,
        max_results: Option<usize>,
    ) -> Result<Self> {
        // Validate before any network traffic
        let trimmed = terms.trim();
        if trimmed.is_empty() {
            return Err(YtSearchError::EmptyQuery);
        }
        if max_results == Some(0) {
            return Err(YtSearchError::ZeroResultCap);
        }

        let html = client
            .fetch_until_marker(&search_path(trimmed), DATA_MARKER)
            .await?;
        Self::from_html(&html, max_results)
    }

    /// Extract results from an already-fetched results page
    ///
    /// Same extraction and truncation semantics as
    /// [`YoutubeSearch::search`], for callers bringing their own fetch
    /// layer.
    ///
    /// # Arguments
    /// * `html` - Raw HTML string from a results page
    /// * `max_results` - Optional result cap
    ///
    /// # Errors
    /// - `ZeroResultCap` if `max_results` is zero
    /// - `MarkerNotFound`, `TerminatorNotFound`, `Json` if extraction fails
    ///
    /// # Example
    /// ```
    /// use ytsearch_core::YoutubeSearch;
    ///
    /// let html = r#"<script>var ytInitialData = {"responseContext":{}};</script>"#;
    /// let search = YoutubeSearch::from_html(html, None)?;
    /// assert!(search.is_empty());
    /// # Ok::<(), ytsearch_core::YtSearchError>(())
    /// ```
    pub fn from_html(html: &str, max_results: Option<usize>) -> Result<Self> {
        if max_results == Some(0) {
            return Err(YtSearchError::ZeroResultCap);
        }

        let mut videos = extract_videos(html)?;
        if let Some(cap) = max_results
            && videos.len() > cap
        {
            debug!(extracted = videos.len(), cap, "truncating result set");
            videos.truncate(cap);
        }

        Ok(Self { videos })
    }

    /// Borrow the retained records, preserving them for later reads
    pub fn peek(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Move the retained records out, leaving the set empty
    ///
    /// One-shot consumption: a second `take` returns an empty vector.
    pub fn take(&mut self) -> Vec<VideoRecord> {
        std::mem::take(&mut self.videos)
    }

    /// Serialize the retained records as `{"videos": [...]}`, preserving
    /// them for later reads
    ///
    /// # Errors
    /// `Json` if serialization fails
    pub fn peek_json(&self) -> Result<String> {
        let document = VideoDocument {
            videos: &self.videos,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Serialize the retained records as `{"videos": [...]}` and clear
    /// the set
    ///
    /// # Errors
    /// `Json` if serialization fails; the set is left intact on error
    pub fn take_json(&mut self) -> Result<String> {
        let json = self.peek_json()?;
        self.videos.clear();
        Ok(json)
    }

    /// Number of retained records
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the retained set is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{Value, json};

    fn results_page(ids: &[&str]) -> String {
        let items: Vec<Value> = ids
            .iter()
            .map(|id| {
                json!({"videoRenderer": {
                    "videoId": id,
                    "title": {"runs": [{"text": format!("Video {id}")}]},
                    "ownerText": {"runs": [{"text": "Channel"}]}
                }})
            })
            .collect();
        let data = json!({
            "contents": {"twoColumnSearchResultsRenderer": {"primaryContents": {
                "sectionListRenderer": {"contents": [
                    {"itemSectionRenderer": {"contents": items}}
                ]}
            }}}
        });
        format!("<html><body><script>var ytInitialData = {data};</script></body></html>")
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn test_search_empty_terms() {
        let client = YoutubeClient::new().unwrap();
        let result = YoutubeSearch::search_with_client(&client, "", None).await;
        match result {
            Err(YtSearchError::EmptyQuery) => {}
            _ => panic!("Expected EmptyQuery error"),
        }
    }

    #[tokio::test]
    async fn test_search_whitespace_terms() {
        let client = YoutubeClient::new().unwrap();
        let result = YoutubeSearch::search_with_client(&client, "   ", None).await;
        match result {
            Err(YtSearchError::EmptyQuery) => {}
            _ => panic!("Expected EmptyQuery error"),
        }
    }

    #[tokio::test]
    async fn test_search_zero_cap() {
        let client = YoutubeClient::new().unwrap();
        let result = YoutubeSearch::search_with_client(&client, "rust", Some(0)).await;
        match result {
            Err(YtSearchError::ZeroResultCap) => {}
            _ => panic!("Expected ZeroResultCap error"),
        }
    }

    #[test]
    fn test_from_html_zero_cap() {
        let result = YoutubeSearch::from_html(&results_page(&["abc00000001"]), Some(0));
        match result {
            Err(YtSearchError::ZeroResultCap) => {}
            _ => panic!("Expected ZeroResultCap error"),
        }
    }

    // -----------------------------------------------------------------------
    // Truncation
    // -----------------------------------------------------------------------

    #[test]
    fn test_from_html_without_cap_keeps_all() {
        let html = results_page(&["one00000001", "two00000002", "three000003"]);
        let search = YoutubeSearch::from_html(&html, None).unwrap();
        assert_eq!(search.len(), 3);
    }

    #[test]
    fn test_from_html_truncates_to_cap() {
        let html = results_page(&["one00000001", "two00000002", "three000003"]);
        let search = YoutubeSearch::from_html(&html, Some(2)).unwrap();

        assert_eq!(search.len(), 2);
        assert_eq!(search.peek()[0].id, "one00000001");
        assert_eq!(search.peek()[1].id, "two00000002");
    }

    #[test]
    fn test_from_html_cap_larger_than_results() {
        let html = results_page(&["one00000001", "two00000002"]);
        let search = YoutubeSearch::from_html(&html, Some(10)).unwrap();
        assert_eq!(search.len(), 2);
    }

    // -----------------------------------------------------------------------
    // peek / take consumption modes
    // -----------------------------------------------------------------------

    #[test]
    fn test_peek_preserves_records() {
        let search = YoutubeSearch::from_html(&results_page(&["abc00000001"]), None).unwrap();

        assert_eq!(search.peek().len(), 1);
        assert_eq!(search.peek().len(), 1);
        assert!(!search.is_empty());
    }

    #[test]
    fn test_take_clears_records() {
        let mut search =
            YoutubeSearch::from_html(&results_page(&["one00000001", "two00000002"]), None).unwrap();

        let taken = search.take();
        assert_eq!(taken.len(), 2);

        let taken_again = search.take();
        assert!(taken_again.is_empty());
        assert!(search.is_empty());
    }

    #[test]
    fn test_peek_json_preserves_records() {
        let search = YoutubeSearch::from_html(&results_page(&["abc00000001"]), None).unwrap();

        let json = search.peek_json().unwrap();
        assert!(json.contains("\"videos\""));
        assert_eq!(search.len(), 1);
    }

    #[test]
    fn test_take_json_clears_records() {
        let mut search = YoutubeSearch::from_html(&results_page(&["abc00000001"]), None).unwrap();

        let json = search.take_json().unwrap();
        assert!(json.contains("abc00000001"));
        assert!(search.is_empty());

        let empty = search.take_json().unwrap();
        assert!(empty.contains("\"videos\""));
        assert!(!empty.contains("abc00000001"));
    }

    // -----------------------------------------------------------------------
    // Serialized document shape
    // -----------------------------------------------------------------------

    #[derive(Deserialize)]
    struct ParsedDocument {
        videos: Vec<VideoRecord>,
    }

    #[test]
    fn test_json_round_trip_is_structurally_equal() {
        let mut search =
            YoutubeSearch::from_html(&results_page(&["one00000001", "two00000002"]), None).unwrap();

        let originals = search.peek().to_vec();
        let json = search.take_json().unwrap();
        let parsed: ParsedDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.videos, originals);
    }

    #[test]
    fn test_json_document_has_single_wrapping_key() {
        let search = YoutubeSearch::from_html(&results_page(&["abc00000001"]), None).unwrap();

        let value: Value = serde_json::from_str(&search.peek_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("videos"));
        assert!(value["videos"].is_array());
    }

    #[test]
    fn test_json_output_is_pretty_printed() {
        let search = YoutubeSearch::from_html(&results_page(&["abc00000001"]), None).unwrap();
        let json = search.peek_json().unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("  \"videos\""));
    }
}
