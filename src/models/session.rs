use super::subject::Subject;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp layout used for `start_time` / `end_time` columns.
/// Stored as local naive text so SQLite date functions operate on
/// the user's calendar day directly.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize)]
pub struct StudySession {
    pub id: i64,
    pub start_time: NaiveDateTime, // ⇔ study_sessions.start_time (TEXT)
    pub end_time: NaiveDateTime,   // ⇔ study_sessions.end_time (TEXT)
    pub duration_secs: i64,        // ⇔ study_sessions.duration (INT, seconds)
    pub subject: Subject,          // ⇔ study_sessions.subject (TEXT)
    pub weather_condition: String, // ⇔ study_sessions.weather_condition (TEXT)
    pub location: String,          // ⇔ study_sessions.location (TEXT)
}

impl StudySession {
    pub fn start_str(&self) -> String {
        self.start_time.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Parse a stored timestamp column back into a NaiveDateTime.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
