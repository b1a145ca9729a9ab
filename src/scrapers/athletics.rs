use crate::config::AthleticsConfig;
use crate::constants::{ATHLETICS_OUTPUT_FILE, ATHLETICS_SOURCE};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::records::{AthleticEventEnvelope, AthleticEventRecord};
use crate::scrapers::{parse_selector, ScrapeReport, Scraper};
use crate::writer::ResultWriter;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::{info, warn};

/// Scrapes the athletics schedule page, one record per schedule row.
pub struct AthleticsScraper {
    config: AthleticsConfig,
}

impl AthleticsScraper {
    pub fn new(config: AthleticsConfig) -> Self {
        Self { config }
    }

    /// Extracts every schedule row from a schedule page body. No filtering;
    /// a missing sub-field renders as an empty string, never an error.
    pub fn parse_events(&self, body: &str) -> Result<Vec<AthleticEventRecord>> {
        let document = Html::parse_document(body);
        let row_selector = parse_selector(&self.config.row_selector)?;
        let date_selector = parse_selector(&self.config.date_selector)?;
        let opponent_selector = parse_selector(&self.config.opponent_selector)?;
        let location_selector = parse_selector(&self.config.location_selector)?;

        let mut events = Vec::new();
        for row in document.select(&row_selector) {
            events.push(AthleticEventRecord {
                date: field_text(&row, &date_selector),
                opponent: field_text(&row, &opponent_selector),
                location: field_text(&row, &location_selector),
            });
        }
        Ok(events)
    }
}

/// Text of the first sub-element matching `selector`, with embedded newlines
/// and tabs removed and the remainder trimmed.
fn field_text(row: &ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(|el| {
            el.text()
                .collect::<String>()
                .replace(['\n', '\t'], "")
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Scraper for AthleticsScraper {
    fn source_name(&self) -> &'static str {
        ATHLETICS_SOURCE
    }

    fn output_file(&self) -> &'static str {
        ATHLETICS_OUTPUT_FILE
    }

    async fn run(
        &self,
        fetcher: Arc<dyn Fetcher>,
        writer: &ResultWriter,
    ) -> Result<ScrapeReport> {
        info!("Fetching schedule from {}", self.config.url);
        let body = fetcher.fetch(&self.config.url).await?;

        let events = self.parse_events(&body)?;
        if events.is_empty() {
            warn!("No schedule rows found - the page structure may have changed");
        }

        let records_written = events.len();
        let envelope = AthleticEventEnvelope { events };
        let output_file = writer.write(ATHLETICS_OUTPUT_FILE, &envelope)?;
        info!(
            "Wrote {} schedule events to {}",
            records_written,
            output_file.display()
        );

        Ok(ScrapeReport {
            source_name: ATHLETICS_SOURCE.to_string(),
            records_written,
            output_file,
        })
    }
}
