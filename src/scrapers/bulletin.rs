use crate::config::BulletinConfig;
use crate::constants::{BULLETIN_OUTPUT_FILE, BULLETIN_SOURCE};
use crate::error::{Result, ScraperError};
use crate::fetch::Fetcher;
use crate::records::{CourseEnvelope, CourseRecord};
use crate::scrapers::{element_text, parse_selector, ScrapeReport, Scraper};
use crate::writer::ResultWriter;
use async_trait::async_trait;
use regex::Regex;
use scraper::Html;
use std::sync::Arc;
use tracing::{info, warn};

/// Scrapes the undergraduate bulletin for upper-division courses without
/// prerequisites.
pub struct BulletinScraper {
    config: BulletinConfig,
}

impl BulletinScraper {
    pub fn new(config: BulletinConfig) -> Self {
        Self { config }
    }

    /// Extracts qualifying course records from a bulletin page body, in
    /// document order.
    ///
    /// A course block whose title doesn't match the expected pattern is
    /// skipped silently; that is expected shape variance, not an error.
    pub fn parse_courses(&self, body: &str) -> Result<Vec<CourseRecord>> {
        let document = Html::parse_document(body);
        let block_selector = parse_selector(&self.config.course_block_selector)?;
        let title_selector = parse_selector(&self.config.title_selector)?;
        let description_selector = parse_selector(&self.config.description_selector)?;
        let title_pattern = Regex::new(&self.config.title_pattern).map_err(|e| {
            ScraperError::Config(format!(
                "Invalid title pattern '{}': {}",
                self.config.title_pattern, e
            ))
        })?;

        let mut courses = Vec::new();
        for block in document.select(&block_selector) {
            let title_text = block
                .select(&title_selector)
                .next()
                .map(|el| element_text(&el))
                .unwrap_or_default();
            let description_text = block
                .select(&description_selector)
                .next()
                .map(|el| element_text(&el))
                .unwrap_or_default();

            let Some(captures) = title_pattern.captures(&title_text) else {
                continue;
            };
            let raw_code = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            let course_title = captures
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            // "COMP 3000" -> "COMP-3000"
            let course_code = normalize_course_code(raw_code);

            let Some(course_number) = leading_course_number(&course_code) else {
                continue;
            };
            if course_number < self.config.min_course_number {
                continue;
            }
            // Heuristic: a description mentioning "prereq" means the course
            // has a prerequisite.
            if description_text.to_lowercase().contains("prereq") {
                continue;
            }

            courses.push(CourseRecord {
                course: course_code,
                title: course_title,
            });
        }
        Ok(courses)
    }
}

/// Collapses each internal whitespace run in a course code to a single hyphen.
fn normalize_course_code(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("-")
}

/// First numeric token of a course code. Later numeric tokens are ignored.
fn leading_course_number(code: &str) -> Option<u32> {
    let digits: String = code
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[async_trait]
impl Scraper for BulletinScraper {
    fn source_name(&self) -> &'static str {
        BULLETIN_SOURCE
    }

    fn output_file(&self) -> &'static str {
        BULLETIN_OUTPUT_FILE
    }

    async fn run(
        &self,
        fetcher: Arc<dyn Fetcher>,
        writer: &ResultWriter,
    ) -> Result<ScrapeReport> {
        info!("Fetching course descriptions from {}", self.config.url);
        let body = fetcher.fetch(&self.config.url).await?;

        let courses = self.parse_courses(&body)?;
        if courses.is_empty() {
            warn!("No qualifying courses found - the page structure may have changed");
        }

        let records_written = courses.len();
        let envelope = CourseEnvelope { courses };
        let output_file = writer.write(BULLETIN_OUTPUT_FILE, &envelope)?;
        info!(
            "Wrote {} upper-division courses without prereqs to {}",
            records_written,
            output_file.display()
        );

        Ok(ScrapeReport {
            source_name: BULLETIN_SOURCE.to_string(),
            records_written,
            output_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_code_whitespace_collapses_to_single_hyphen() {
        assert_eq!(normalize_course_code("COMP 3000"), "COMP-3000");
        assert_eq!(normalize_course_code("COMP   3800"), "COMP-3800");
    }

    #[test]
    fn leading_number_is_first_numeric_token() {
        assert_eq!(leading_course_number("COMP-3500"), Some(3500));
        assert_eq!(leading_course_number("COMP-3500-2"), Some(3500));
        assert_eq!(leading_course_number("SEMINAR"), None);
    }
}
