pub mod athletics;
pub mod bulletin;
pub mod calendar;

use crate::error::{Result, ScraperError};
use crate::fetch::Fetcher;
use crate::writer::ResultWriter;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct ScrapeReport {
    pub source_name: String,
    pub records_written: usize,
    pub output_file: PathBuf,
}

/// Core trait for one fetch -> parse -> filter -> write pipeline.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// File name of the envelope this pipeline writes
    fn output_file(&self) -> &'static str;

    /// Run the full pipeline: fetch the page, extract records, write the
    /// envelope. Returns an error when the fetch or the write fails; the
    /// driver logs it and moves on to the next pipeline.
    async fn run(&self, fetcher: Arc<dyn Fetcher>, writer: &ResultWriter)
        -> Result<ScrapeReport>;

    /// Called by the driver after `run` failed. Pipelines that guarantee an
    /// output file even on total failure write their fallback envelope here.
    fn write_failure_fallback(
        &self,
        _writer: &ResultWriter,
        _error: &ScraperError,
    ) -> Result<()> {
        Ok(())
    }
}

/// Parses a config-supplied selector string, surfacing bad selectors as
/// configuration errors rather than panics.
pub(crate) fn parse_selector(raw: &str) -> Result<scraper::Selector> {
    scraper::Selector::parse(raw)
        .map_err(|e| ScraperError::Config(format!("Invalid selector '{raw}': {e}")))
}

/// Collects the text of an element, trimmed.
pub(crate) fn element_text(element: &scraper::ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
