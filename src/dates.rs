//! Date Helpers
//!
//! Due-date normalization for outgoing requests and parsing of backend timestamps.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Canonical form of a due-date draft, or `None` when the draft is blank.
///
/// Date-only input is UTC midnight, a local datetime uses the browser offset,
/// RFC 3339 input keeps its offset. Anything else is passed through trimmed.
pub fn normalize_due_date(draft: &str) -> Option<String> {
    let draft = draft.trim();
    if draft.is_empty() {
        return None;
    }
    match parse_input(draft) {
        Some(ts) => Some(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => Some(draft.to_string()),
    }
}

/// Blank drafts are valid (no due date)
pub fn is_valid_due_date(draft: &str) -> bool {
    let draft = draft.trim();
    draft.is_empty() || parse_input(draft).is_some()
}

fn parse_input(draft: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(draft) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(draft, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    LOCAL_DATETIME_FORMATS.iter().find_map(|fmt| {
        let naive = NaiveDateTime::parse_from_str(draft, fmt).ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Parse a timestamp as sent by the backend. Values without an offset are UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// `YYYY-MM-DD` for display and for prefilling `<input type="date">`
pub fn date_part(value: &str) -> String {
    match parse_timestamp(value) {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => value.trim().to_string(),
    }
}
