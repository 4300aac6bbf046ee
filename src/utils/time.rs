use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn from_rfc3339(s: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

/// Formats a time-of-day slot as `HH:MM`.
pub fn format_slot(hour: u8, minute: u8) -> String {
    format!("{:02}:{:02}", hour, minute)
}
