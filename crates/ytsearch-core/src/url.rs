//! URL helper functions for youtube.com
//!
//! Provides functions for building search and watch URLs.

const BASE_URL: &str = "https://www.youtube.com";

/// Builds the relative search path for a given query
///
/// URL encodes the query and constructs the `/results` path. The path is
/// relative so it can be issued against a configurable base URL.
///
/// # Arguments
/// * `query` - Search query string
///
/// # Returns
/// Relative search path with encoded query
///
/// # Example
/// ```
/// use ytsearch_core::url::search_path;
/// let path = search_path("rust tutorial");
/// assert_eq!(path, "/results?search_query=rust%20tutorial");
/// ```
pub fn search_path(query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("/results?search_query={}", encoded)
}

/// Builds the full search URL for a given query
///
/// # Arguments
/// * `query` - Search query string
///
/// # Returns
/// Full search URL with encoded query
///
/// # Example
/// ```
/// use ytsearch_core::url::build_search_url;
/// let url = build_search_url("rust tutorial");
/// assert_eq!(url, "https://www.youtube.com/results?search_query=rust%20tutorial");
/// ```
pub fn build_search_url(query: &str) -> String {
    format!("{}{}", BASE_URL, search_path(query))
}

/// Builds the full watch URL from a record's relative suffix
///
/// # Arguments
/// * `url_suffix` - Relative watch path (e.g., "/watch?v=dQw4w9WgXcQ")
///
/// # Returns
/// Full URL to the video page
///
/// # Example
/// ```
/// use ytsearch_core::url::build_video_url;
/// let url = build_video_url("/watch?v=dQw4w9WgXcQ");
/// assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// ```
pub fn build_video_url(url_suffix: &str) -> String {
    format!("{}{}", BASE_URL, url_suffix)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_search_path_is_ascii_safe(query in ".*") {
            let path = search_path(&query);
            prop_assert!(path.starts_with("/results?search_query="));
            prop_assert!(path.is_ascii(), "encoded path should be pure ASCII");
            prop_assert!(!path.contains(' '), "spaces should be percent-encoded");
        }

        #[test]
        fn prop_search_path_round_trips(query in "[a-zA-Z0-9 /?&=+]{1,60}") {
            let path = search_path(&query);
            let encoded = path
                .strip_prefix("/results?search_query=")
                .expect("prefix is fixed");
            let decoded = urlencoding::decode(encoded).expect("own encoding must decode");
            prop_assert_eq!(decoded.into_owned(), query);
        }
    }
}
