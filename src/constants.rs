/// Source name constants to ensure consistency across the codebase

// Source names (used in CLI and logs)
pub const BULLETIN_SOURCE: &str = "bulletin";
pub const ATHLETICS_SOURCE: &str = "athletics";
pub const CALENDAR_SOURCE: &str = "calendar";

// Output file names, one per pipeline
pub const BULLETIN_OUTPUT_FILE: &str = "bulletin.json";
pub const ATHLETICS_OUTPUT_FILE: &str = "athletic_events.json";
pub const CALENDAR_OUTPUT_FILE: &str = "calendar_events.json";

pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Get all supported source names, in the order the driver runs them
pub fn supported_sources() -> Vec<&'static str> {
    vec![BULLETIN_SOURCE, ATHLETICS_SOURCE, CALENDAR_SOURCE]
}
