//! Heuristics that pull city, county and state out of a comma-separated
//! display label such as `"123 Main St, Springfield, Clarke County, GA, USA"`.
//!
//! Every function returns an empty string when nothing qualifies; callers
//! treat that as "unknown".

use std::sync::LazyLock;

use regex::Regex;

static COUNTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^,]+)\s+County").expect("valid county regex"));

/// Only the leading segments can hold the city.
const CITY_SEGMENTS: usize = 3;

fn segments(display_name: &str) -> impl DoubleEndedIterator<Item = &str> {
    display_name.split(',').map(str::trim)
}

/// First of the leading segments that is not a street number, not a county
/// and longer than two characters.
#[must_use]
pub fn extract_city(display_name: &str) -> String {
    segments(display_name)
        .take(CITY_SEGMENTS)
        .find(|part| {
            !part.starts_with(|c: char| c.is_ascii_digit())
                && !part.contains("County")
                && part.chars().count() > 2
        })
        .unwrap_or_default()
        .to_string()
}

/// Name preceding the first `"<name> County"` in the label.
#[must_use]
pub fn extract_county(display_name: &str) -> String {
    COUNTY_RE
        .captures(display_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Last segment that is exactly two uppercase letters.
#[must_use]
pub fn extract_state(display_name: &str) -> String {
    segments(display_name)
        .rev()
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase()))
        .unwrap_or_default()
        .to_string()
}
