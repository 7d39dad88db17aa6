// src/specs/parse.rs
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ScrapeError;

static HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*hr").expect("static regex"));
static MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*min").expect("static regex"));

/// Full month name first, then the abbreviation. Day may or may not be zero-padded.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y"];

/// "2 hr 15 min" → 135. Either part may be missing; nothing recognised → 0.
pub fn parse_duration(s: &str) -> u32 {
    let grab = |re: &Regex| -> u32 {
        re.captures(s)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    grab(&HOURS) * 60 + grab(&MINUTES)
}

/// "May 8, 2025" / "May 08, 2025" → 2025-05-08. Anything else is an error.
pub fn parse_flexible_date(s: &str) -> Result<NaiveDate, ScrapeError> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| ScrapeError::DateFormat(s!(s)))
}
