//! Minimal end-to-end demo: search YouTube and print the results

use ytsearch_core::YoutubeSearch;
use ytsearch_core::url::build_video_url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rust programming".to_string());

    println!("Searching for '{query}'...\n");

    let mut search = YoutubeSearch::search(&query, Some(5)).await?;

    println!("{} result(s)\n", search.len());
    for video in search.peek() {
        println!("{} [{}]", video.title, video.duration);
        println!(
            "    {} | {} | {}",
            video.channel, video.views, video.publish_time
        );
        println!("    {}\n", build_video_url(&video.url_suffix));
    }

    println!("=== JSON document ===\n");
    println!("{}", search.take_json()?);

    Ok(())
}
