use crate::errors::DateParseError;
use chrono::NaiveDate;

/// Accepted post date layouts, tried in order. `%b` is the three-letter
/// month abbreviation; parsing accepts both padded and unpadded days.
pub const DATE_LAYOUTS: [&str; 4] = ["%b %-d, %Y", "%b %d, %Y", "%-d %b, %Y", "%d %b, %Y"];

/// Layout used when a date is written back out, e.g. `Jan 2, 2024`.
pub const DISPLAY_LAYOUT: &str = "%b %-d, %Y";

pub fn parse_date(date_str: &str) -> Result<NaiveDate, DateParseError> {
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(date_str, layout).ok())
        .ok_or_else(|| DateParseError(date_str.to_owned()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_LAYOUT).to_string()
}

pub fn today() -> String {
    format_date(chrono::Local::now().date_naive())
}
