use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Page URLs and selector sets for the three scrape sources.
///
/// The source pages can change shape without notice, so the selector strings
/// live here rather than in the extractors. Every field has a built-in
/// default; a `config.toml` in the working directory overrides them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub bulletin: BulletinConfig,
    pub athletics: AthleticsConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BulletinConfig {
    pub url: String,
    pub course_block_selector: String,
    pub title_selector: String,
    pub description_selector: String,
    /// Must capture (1) the course code and (2) the course title, followed by
    /// a credit parenthetical.
    pub title_pattern: String,
    pub min_course_number: u32,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            url: "https://bulletin.du.edu/undergraduate/coursedescriptions/comp/".to_string(),
            course_block_selector: "div.courseblock".to_string(),
            title_selector: "p.courseblocktitle".to_string(),
            description_selector: "p.courseblockdesc".to_string(),
            title_pattern: r"(COMP\s*\d+)\s+(.*)\(\d+.*\)".to_string(),
            min_course_number: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AthleticsConfig {
    pub url: String,
    pub row_selector: String,
    pub date_selector: String,
    pub opponent_selector: String,
    pub location_selector: String,
}

impl Default for AthleticsConfig {
    fn default() -> Self {
        Self {
            url: "https://denverpioneers.com/sports/mens-soccer/schedule".to_string(),
            row_selector: ".sidearm-schedule-games-container .sidearm-schedule-game-row"
                .to_string(),
            date_selector: ".sidearm-schedule-game-opponent-date".to_string(),
            opponent_selector: ".sidearm-schedule-game-opponent-name".to_string(),
            location_selector: ".sidearm-schedule-game-location".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub url: String,
    /// Selector for the embedded structured-data script node.
    pub data_script_selector: String,
    /// Keys with this prefix in a keyed payload hold event objects.
    pub event_key_prefix: String,
    /// JSON pointer to a direct event sequence in the payload.
    pub event_list_pointer: String,
    /// Selector for server-rendered event listing items.
    pub listing_selector: String,
    pub target_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            url: "https://www.du.edu/calendar".to_string(),
            data_script_selector: "script#__NEXT_DATA__".to_string(),
            event_key_prefix: "Event:".to_string(),
            event_list_pointer: "/props/pageProps/events".to_string(),
            listing_selector: ".events-listing__item".to_string(),
            target_year: 2025,
        }
    }
}

impl ScraperConfig {
    /// Loads configuration from `config.toml` in the working directory,
    /// falling back to the built-in defaults when the file is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: ScraperConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
