use std::sync::LazyLock;

use regex::Regex;

static US_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").unwrap());

/// Find the first `M/D/YYYY` token in `text`.
pub fn find_date_token(text: &str) -> Option<&str> {
    US_DATE_RE.find(text).map(|m| m.as_str())
}

/// Convert the first `M/D/YYYY` token (month first) to `YYYY-MM-DD`.
///
/// Values are zero-padded but not checked against the calendar, so
/// `13/40/2026` becomes `2026-13-40`.
pub fn normalize_date(text: &str) -> Option<String> {
    let caps = US_DATE_RE.captures(text)?;
    Some(format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[1], &caps[2]))
}
