use clap::Parser;
use std::sync::Arc;

use du_scraper::config::ScraperConfig;
use du_scraper::constants;
use du_scraper::driver::run_sources;
use du_scraper::fetch::{Fetcher, HttpFetcher};
use du_scraper::logging;
use du_scraper::writer::ResultWriter;

#[derive(Parser)]
#[command(name = "du_scraper")]
#[command(about = "University of Denver public web page scraper")]
#[command(version = "0.1.0")]
struct Cli {
    /// Specific sources to run (comma-separated). Available: bulletin, athletics, calendar
    #[arg(long)]
    sources: Option<String>,

    /// Directory the result files are written to
    #[arg(long, default_value = constants::DEFAULT_OUTPUT_DIR)]
    output_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let config = ScraperConfig::load()?;

    let source_names: Vec<String> = match cli.sources {
        Some(source_list) => source_list
            .split(',')
            .map(|s| s.trim().to_string())
            .collect(),
        None => constants::supported_sources()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new());
    let writer = ResultWriter::new(&cli.output_dir);

    // Individual pipeline failures are logged, not surfaced as a process
    // failure; the exit code stays 0.
    run_sources(&source_names, &config, fetcher, &writer).await;

    Ok(())
}
