//! Display formatting for opportunity fields.
//!
//! Listing data arrives scraped: stipends carry uneven spacing and a
//! `/month` marker, start dates are either calendar dates or the literal
//! `Starts Immediately`.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Collapse runs of whitespace and drop a trailing `/month` marker.
pub fn format_stipend(stipend: &str) -> String {
    WHITESPACE
        .replace_all(stipend, " ")
        .replace("/month", "")
        .trim()
        .to_string()
}

/// Format a start date for display.
///
/// `Starts Immediately` passes through verbatim, as does anything else that
/// fails to parse; parseable dates are reformatted for reading.
pub fn format_start_date(start_date: &str) -> String {
    if start_date == "Starts Immediately" {
        return start_date.to_string();
    }
    match shared::rules::parse_calendar_date(start_date) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => start_date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stipend_whitespace_collapses() {
        assert_eq!(format_stipend("Rs  10,000   /month"), "Rs 10,000");
    }

    #[test]
    fn stipend_without_suffix_is_untouched() {
        assert_eq!(format_stipend("Unpaid"), "Unpaid");
    }

    #[test]
    fn immediate_start_passes_through() {
        assert_eq!(format_start_date("Starts Immediately"), "Starts Immediately");
    }

    #[test]
    fn calendar_start_dates_are_reformatted() {
        assert_eq!(format_start_date("2024-07-01"), "Jul 1, 2024");
    }

    #[test]
    fn timestamp_start_dates_are_reformatted() {
        assert_eq!(format_start_date("2024-07-01T00:00:00.000Z"), "Jul 1, 2024");
    }

    #[test]
    fn unreadable_start_dates_pass_through() {
        assert_eq!(format_start_date("ASAP"), "ASAP");
    }
}
