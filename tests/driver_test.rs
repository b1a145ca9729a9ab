use async_trait::async_trait;
use du_scraper::config::ScraperConfig;
use du_scraper::driver::run_sources;
use du_scraper::error::Result;
use du_scraper::fetch::Fetcher;
use du_scraper::writer::ResultWriter;
use serde_json::Value;
use std::fs;
use std::sync::Arc;

const SCHEDULE_PAGE: &str = "
<div class=\"sidearm-schedule-games-container\">
  <div class=\"sidearm-schedule-game-row\">
    <div class=\"sidearm-schedule-game-opponent-date\">Sep 5 (Fri)</div>
    <div class=\"sidearm-schedule-game-opponent-name\">Air Force</div>
    <div class=\"sidearm-schedule-game-location\">Colorado Springs, Colo.</div>
  </div>
</div>
";

const CALENDAR_PAGE: &str = "<script id=\"__NEXT_DATA__\" type=\"application/json\">\
{ \"Event:1\": { \"startDate\": \"2025-05-20\", \"title\": \"Graduation\" } }\
</script>";

/// Serves canned pages and fails every URL in `failing`.
struct StubFetcher {
    failing: &'static str,
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        if url.contains(self.failing) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("connection refused: {url}"),
            )
            .into());
        }
        if url.contains("schedule") {
            Ok(SCHEDULE_PAGE.to_string())
        } else if url.contains("calendar") {
            Ok(CALENDAR_PAGE.to_string())
        } else {
            Ok("<html><body></body></html>".to_string())
        }
    }
}

fn all_sources() -> Vec<String> {
    du_scraper::constants::supported_sources()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[tokio::test]
async fn bulletin_failure_does_not_block_other_pipelines() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let fetcher = Arc::new(StubFetcher {
        failing: "bulletin",
    });

    run_sources(&all_sources(), &ScraperConfig::default(), fetcher, &writer).await;

    assert!(!dir.path().join("bulletin.json").exists());

    let athletics: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("athletic_events.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(athletics["events"][0]["opponent"], "Air Force");

    let calendar: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("calendar_events.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(calendar["events"][0]["title"], "Graduation");
}

#[tokio::test]
async fn calendar_failure_still_writes_an_error_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let fetcher = Arc::new(StubFetcher {
        failing: "calendar",
    });

    run_sources(&all_sources(), &ScraperConfig::default(), fetcher, &writer).await;

    let calendar: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("calendar_events.json")).unwrap(),
    )
    .unwrap();
    let events = calendar["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Calendar Page Error");
    assert!(events[0]["description"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn unknown_source_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let fetcher = Arc::new(StubFetcher { failing: "none" });

    run_sources(
        &["registrar".to_string()],
        &ScraperConfig::default(),
        fetcher,
        &writer,
    )
    .await;

    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}
