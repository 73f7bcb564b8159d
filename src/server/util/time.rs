//! Date formatting & parsing for the API.
//!
//! Dates are accepted from clients as `YYYY-MM-DD` and returned as `YYYY/MM/DD`.

use chrono::NaiveDate;

/// Format of dates accepted in request bodies
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of dates returned in responses
pub const OUTPUT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Formats a stored date for a response body
pub fn format_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}

/// Parses a request date, returning `None` for dates which don't exist on the calendar
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).ok()
}
