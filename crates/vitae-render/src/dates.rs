//! Date range formatting for `YYYY-MM` entry dates.

use crate::context::Translate;
use chrono::NaiveDate;
use vitae_markup::escape_content;

/// Formats a `YYYY-MM` string as `Mon YYYY` (e.g. `Mar 2020`). Values that
/// do not parse fall back to the escaped raw text so rendering stays total.
pub fn format_month(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        Ok(date) => Some(date.format("%b %Y").to_string()),
        Err(_) => Some(escape_content(raw)),
    }
}

/// Resolves an entry's date range for display. `is_present` replaces the end
/// date with the localized "present" label; when both ends are empty the
/// range is omitted entirely.
pub fn format_date_range(
    start: &str,
    end: &str,
    is_present: bool,
    translator: &dyn Translate,
) -> Option<String> {
    let start = format_month(start);
    let end = if is_present {
        Some(translator.translate("template.present"))
    } else {
        format_month(end)
    };

    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(s), None) => Some(s),
        (None, Some(e)) => Some(e),
        (None, None) => None,
    }
}
