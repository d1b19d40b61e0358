//! Command-line interface for the YouTube search scraper
//!
//! Searches youtube.com and prints the extracted records as a JSON
//! document on stdout; diagnostics go to stderr so output stays pipeable.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ytsearch_core::YoutubeSearch;

/// CLI tool to search YouTube and print the scraped results as JSON
#[derive(Parser, Debug)]
#[command(name = "ytsearch")]
#[command(about = "Searches YouTube and prints the results as a JSON document")]
struct Cli {
    /// Search terms (joined with spaces, no quoting needed)
    #[arg(required = true)]
    query: Vec<String>,

    /// Keep only the first N results
    #[arg(short = 'n', long = "max-results")]
    max_results: Option<usize>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("ytsearch=warn".parse().unwrap());
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();

    let cli = Cli::parse();
    let query = cli.query.join(" ");

    match run(&query, cli.max_results, cli.compact).await {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(
    query: &str,
    max_results: Option<usize>,
    compact: bool,
) -> ytsearch_core::Result<String> {
    let mut search = YoutubeSearch::search(query, max_results).await?;

    if compact {
        let document = serde_json::json!({ "videos": search.take() });
        Ok(serde_json::to_string(&document)?)
    } else {
        search.take_json()
    }
}
