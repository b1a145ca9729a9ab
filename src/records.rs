use serde::{Deserialize, Serialize};

/// One upper-division course without prerequisites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Normalized course code, e.g. "COMP-3000"
    pub course: String,
    pub title: String,
}

/// One row from the athletics schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleticEventRecord {
    pub date: String,
    pub opponent: String,
    pub location: String,
}

/// One event from the university calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEventRecord {
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEventRecord {
    /// Placeholder record written when no events match the target year, so
    /// the output file never holds an empty envelope.
    pub fn no_events(year: i32) -> Self {
        Self {
            title: "No Matching Events".to_string(),
            date: "N/A".to_string(),
            time: None,
            location: None,
            description: Some(format!("No calendar events found for {year}")),
        }
    }

    /// Last-resort record written when the calendar pipeline fails outright.
    pub fn from_error(message: &str) -> Self {
        Self {
            title: "Calendar Page Error".to_string(),
            date: "N/A".to_string(),
            time: Some("N/A".to_string()),
            location: None,
            description: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEnvelope {
    pub courses: Vec<CourseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleticEventEnvelope {
    pub events: Vec<AthleticEventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventEnvelope {
    pub events: Vec<CalendarEventRecord>,
}
