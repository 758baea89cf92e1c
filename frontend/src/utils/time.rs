use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

/// `2026/1/15`, the short date form used in list and detail panes.
pub fn format_date<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!("{}/{}/{}", value.year(), value.month(), value.day())
}

/// `2026/1/15 9:05:00`.
pub fn format_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!(
        "{} {}:{:02}:{:02}",
        format_date(value),
        value.hour(),
        value.minute(),
        value.second()
    )
}

pub fn local_date(value: &DateTime<Utc>) -> String {
    format_date(&value.with_timezone(&Local))
}

pub fn local_datetime(value: &DateTime<Utc>) -> String {
    format_datetime(&value.with_timezone(&Local))
}
