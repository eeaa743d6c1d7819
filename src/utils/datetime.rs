//! Date utility functions for form inputs

use chrono::NaiveDate;
use std::fmt::Write;

/// Parse user input with the given chrono format
///
/// Returns `None` for empty or unparseable input.
pub fn parse_date(input: &str, format: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, format).ok()
}

/// Format a date with the given chrono format
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Characters a date input accepts while typing
pub fn is_date_input_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '/' | '.' | ' ')
}

/// Check that a format renders a full date using only typeable characters
/// and parses it back to the same day
pub fn is_valid_date_format(format: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2025, 1, 31) else {
        return false;
    };
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(format)).is_err() {
        return false;
    }
    if !rendered.chars().all(is_date_input_char) {
        return false;
    }
    NaiveDate::parse_from_str(&rendered, format).map(|d| d == sample).unwrap_or(false)
}
