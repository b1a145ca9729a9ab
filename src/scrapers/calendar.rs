use crate::config::CalendarConfig;
use crate::constants::{CALENDAR_OUTPUT_FILE, CALENDAR_SOURCE};
use crate::error::{Result, ScraperError};
use crate::fetch::Fetcher;
use crate::records::{CalendarEventEnvelope, CalendarEventRecord};
use crate::scrapers::{element_text, parse_selector, ScrapeReport, Scraper};
use crate::writer::ResultWriter;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use scraper::Html;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Known shapes of the embedded structured-data payload.
enum CalendarPayload {
    /// Keyed mapping where keys with the event prefix hold event objects.
    KeyedEvents(Map<String, Value>),
    /// Direct event sequence under a known property path.
    EventList(Vec<Value>),
    Unrecognized,
}

/// Scrapes the university calendar for events in the target year.
///
/// The calendar page is JS-driven, so the primary source is an embedded
/// structured-data script node. Every failure mode short of an unwritable
/// filesystem degrades gracefully: missing script, malformed JSON and
/// unrecognized payload shapes all yield zero records, and an empty record
/// set is replaced by a single placeholder so the envelope is never empty.
pub struct CalendarScraper {
    config: CalendarConfig,
}

impl CalendarScraper {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Extracts target-year event records from a calendar page body. The
    /// returned sequence is never empty; when nothing qualifies it holds
    /// exactly one placeholder record.
    pub fn parse_events(&self, body: &str) -> Result<Vec<CalendarEventRecord>> {
        let document = Html::parse_document(body);

        let mut events = self.structured_data_events(&document)?;
        if events.is_empty() {
            // Some renderings serve the listing markup directly.
            events = self.listing_events(&document)?;
        }
        if events.is_empty() {
            info!(
                "No calendar events matched year {}; using placeholder record",
                self.config.target_year
            );
            events.push(CalendarEventRecord::no_events(self.config.target_year));
        }
        Ok(events)
    }

    /// Phase 1/2: locate the structured-data script node and pull event
    /// objects out of its JSON payload.
    fn structured_data_events(&self, document: &Html) -> Result<Vec<CalendarEventRecord>> {
        let script_selector = parse_selector(&self.config.data_script_selector)?;

        let Some(script) = document.select(&script_selector).next() else {
            info!("No structured-data script node found on calendar page");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Value>(&script.inner_html()) {
            Ok(payload) => Ok(self.payload_events(&payload)),
            Err(e) => {
                // Malformed payload is zero matches, not a fatal error.
                warn!("Structured-data payload is not valid JSON: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn classify_payload(&self, payload: &Value) -> CalendarPayload {
        if let Some(map) = payload.as_object() {
            if map
                .keys()
                .any(|key| key.starts_with(&self.config.event_key_prefix))
            {
                return CalendarPayload::KeyedEvents(map.clone());
            }
        }
        if let Some(list) = payload
            .pointer(&self.config.event_list_pointer)
            .and_then(Value::as_array)
        {
            return CalendarPayload::EventList(list.clone());
        }
        CalendarPayload::Unrecognized
    }

    fn payload_events(&self, payload: &Value) -> Vec<CalendarEventRecord> {
        match self.classify_payload(payload) {
            CalendarPayload::KeyedEvents(map) => map
                .iter()
                .filter(|(key, _)| key.starts_with(&self.config.event_key_prefix))
                .filter_map(|(_, value)| self.event_record(value))
                .collect(),
            CalendarPayload::EventList(list) => list
                .iter()
                .filter_map(|value| self.event_record(value))
                .collect(),
            CalendarPayload::Unrecognized => {
                warn!("Structured-data payload has no recognized event shape");
                Vec::new()
            }
        }
    }

    /// Maps one candidate object to a record, keeping only objects with a
    /// parseable start date in the target year.
    fn event_record(&self, value: &Value) -> Option<CalendarEventRecord> {
        let start_date = value["startDate"].as_str()?;
        let date_part = start_date.get(..10).unwrap_or(start_date);
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
        if date.year() != self.config.target_year {
            return None;
        }

        let title = value["title"]
            .as_str()
            .or_else(|| value["name"].as_str())
            .unwrap_or("Untitled Event")
            .trim()
            .to_string();

        Some(CalendarEventRecord {
            title,
            date: start_date.to_string(),
            time: value["time"].as_str().map(|s| s.trim().to_string()),
            location: value["location"].as_str().map(|s| s.trim().to_string()),
            description: value["description"].as_str().map(|s| s.trim().to_string()),
        })
    }

    /// Server-rendered listing items: h3 title, then date / time / location
    /// paragraphs. Only rows whose date mentions the target year qualify.
    fn listing_events(&self, document: &Html) -> Result<Vec<CalendarEventRecord>> {
        let item_selector = parse_selector(&self.config.listing_selector)?;
        let title_selector = parse_selector("h3")?;
        let field_selector = parse_selector("p")?;
        let year = self.config.target_year.to_string();

        let mut events = Vec::new();
        for item in document.select(&item_selector) {
            let title = item
                .select(&title_selector)
                .next()
                .map(|el| element_text(&el))
                .unwrap_or_default();
            let fields: Vec<String> = item
                .select(&field_selector)
                .map(|el| element_text(&el))
                .collect();

            let date = fields.first().cloned().unwrap_or_default();
            if !date.contains(&year) {
                continue;
            }

            events.push(CalendarEventRecord {
                title,
                date,
                time: fields.get(1).cloned(),
                location: fields.get(2).cloned(),
                description: None,
            });
        }
        Ok(events)
    }
}

#[async_trait]
impl Scraper for CalendarScraper {
    fn source_name(&self) -> &'static str {
        CALENDAR_SOURCE
    }

    fn output_file(&self) -> &'static str {
        CALENDAR_OUTPUT_FILE
    }

    async fn run(
        &self,
        fetcher: Arc<dyn Fetcher>,
        writer: &ResultWriter,
    ) -> Result<ScrapeReport> {
        info!("Fetching calendar from {}", self.config.url);
        let body = fetcher.fetch(&self.config.url).await?;

        let events = self.parse_events(&body)?;

        let records_written = events.len();
        let envelope = CalendarEventEnvelope { events };
        let output_file = writer.write(CALENDAR_OUTPUT_FILE, &envelope)?;
        info!(
            "Wrote {} calendar events for {} to {}",
            records_written,
            self.config.target_year,
            output_file.display()
        );

        Ok(ScrapeReport {
            source_name: CALENDAR_SOURCE.to_string(),
            records_written,
            output_file,
        })
    }

    /// The calendar output file must exist and be valid JSON even when the
    /// pipeline fails outright, so the run's error is embedded in a single
    /// synthetic record.
    fn write_failure_fallback(
        &self,
        writer: &ResultWriter,
        error: &ScraperError,
    ) -> Result<()> {
        let envelope = CalendarEventEnvelope {
            events: vec![CalendarEventRecord::from_error(&error.to_string())],
        };
        let path = writer.write(CALENDAR_OUTPUT_FILE, &envelope)?;
        warn!("Wrote calendar error fallback to {}", path.display());
        Ok(())
    }
}
