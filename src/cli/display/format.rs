//! ID, date, and truncation formatters for CLI output.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::models::task::DUE_DATE_FORMAT;

const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Return first 8 chars of an id for list display.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Format a `YYYY-MM-DD` due date as "Mar 5, 2024".
///
/// Stored values that do not parse are shown as-is.
pub fn format_due_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DUE_DATE_FORMAT) {
        Ok(d) => d.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}

/// Format an optional due date or "-".
pub fn format_due_date_opt(date: Option<&str>) -> String {
    date.map_or_else(|| "-".to_string(), format_due_date)
}

/// Format an RFC 3339 timestamp as "Mar 5, 2024 14:30 UTC".
pub fn format_timestamp(iso: &str) -> String {
    match iso.parse::<DateTime<Utc>>() {
        Ok(dt) => format!("{} UTC", dt.format("%b %-d, %Y %H:%M")),
        Err(_) => iso.to_string(),
    }
}

/// Truncate a string with unicode ellipsis.
pub fn truncate_ellipsis(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}\u{2026}")
    }
}

/// Format a count with label: "1 task", "3 tasks".
pub fn count_label(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
