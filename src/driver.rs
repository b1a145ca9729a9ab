use crate::config::ScraperConfig;
use crate::constants;
use crate::fetch::Fetcher;
use crate::scrapers::athletics::AthleticsScraper;
use crate::scrapers::bulletin::BulletinScraper;
use crate::scrapers::calendar::CalendarScraper;
use crate::scrapers::Scraper;
use crate::writer::ResultWriter;
use std::sync::Arc;
use tracing::{error, info, warn};

pub fn create_scraper(source_name: &str, config: &ScraperConfig) -> Option<Box<dyn Scraper>> {
    match source_name {
        constants::BULLETIN_SOURCE => Some(Box::new(BulletinScraper::new(config.bulletin.clone()))),
        constants::ATHLETICS_SOURCE => {
            Some(Box::new(AthleticsScraper::new(config.athletics.clone())))
        }
        constants::CALENDAR_SOURCE => Some(Box::new(CalendarScraper::new(config.calendar.clone()))),
        _ => None,
    }
}

/// Runs the named pipelines strictly sequentially. Each pipeline's failure is
/// logged independently and never prevents the next from running; success is
/// observed via the written files and log output.
pub async fn run_sources(
    source_names: &[String],
    config: &ScraperConfig,
    fetcher: Arc<dyn Fetcher>,
    writer: &ResultWriter,
) {
    for source_name in source_names {
        let span = tracing::info_span!("Running source", source = %source_name);
        let _enter = span.enter();

        let Some(scraper) = create_scraper(source_name, config) else {
            warn!("Unknown source specified");
            println!("⚠️  Unknown source: {}", source_name);
            continue;
        };

        println!("🔄 Scraping {}...", source_name);
        match scraper.run(fetcher.clone(), writer).await {
            Ok(report) => {
                info!("Pipeline finished");
                println!(
                    "✅  {} → {} records",
                    report.output_file.display(),
                    report.records_written
                );
            }
            Err(e) => {
                error!("Pipeline failed: {}", e);
                println!("❌  Error scraping {}: {}", source_name, e);
                if let Err(fallback_err) = scraper.write_failure_fallback(writer, &e) {
                    error!("Failure fallback write failed: {}", fallback_err);
                }
            }
        }
    }
}
