use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Non-ISO formats accepted as a last resort, tried in this order.
/// `DD/MM/YYYY` wins over `MM/DD/YYYY` for ambiguous values.
const FALLBACK_FORMATS: [&str; 3] = ["%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Parses a calendar date from the accepted input shapes, first success
/// wins: bare `YYYY-MM-DD`, ISO datetime (a trailing `Z` is rewritten to
/// `+00:00` before parsing, then truncated to the date), then the slash
/// fallback formats.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    let with_offset = raw
        .strip_suffix('Z')
        .map_or_else(|| raw.to_owned(), |stripped| format!("{stripped}+00:00"));
    if let Ok(datetime) = DateTime::parse_from_rfc3339(&with_offset) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }

    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Post-parse range repair: inverted ranges are swapped; equal endpoints
/// are padded to a one-day span, since a zero-length interval cannot be
/// rendered as a bar and would corrupt overlap counting.
#[must_use]
pub fn repair_range(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    let (start, end) = if end < start { (end, start) } else { (start, end) };
    if end == start {
        (start, start + Duration::days(1))
    } else {
        (start, end)
    }
}
