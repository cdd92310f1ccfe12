use std::sync::LazyLock;

use regex::Regex;

static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"symbolsearch\.aspx\?symbol=([^&]+)">([^<]+)</a>\s*\([^)]+\)"#).unwrap()
});
static DRUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^<(]+)(?:\s*\((?:BLA|NDA|sBLA|sNDA)\))?\s*(?:\([A-Z0-9.]+\))?\s*$").unwrap()
});
static TICKER_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([A-Z]+\)\s*").unwrap());

/// Application-type markers that flag a drug line.
const APPLICATION_MARKERS: &[&str] = &[
    "(BLA", "(NDA", "(sBLA", "(sNDA", "BLA)", "NDA)", "sBLA)", "sNDA)",
];

/// Match a `symbolsearch.aspx?symbol=T">Name</a> (..)` line. Returns (ticker, company).
pub fn match_company(line: &str) -> Option<(&str, &str)> {
    let caps = COMPANY_RE.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

pub fn has_application_marker(line: &str) -> bool {
    APPLICATION_MARKERS.iter().any(|m| line.contains(m))
}

/// Drug name from the start of a marker line, with the application type and any
/// trailing code parenthetical stripped. `None` if the line shape doesn't fit
/// or the name is blank.
pub fn match_drug(line: &str) -> Option<String> {
    let caps = DRUG_RE.captures(line)?;
    let drug = caps.get(1)?.as_str().trim();
    if drug.is_empty() {
        None
    } else {
        Some(drug.to_string())
    }
}

/// Remove every `(UPPERCASE)` group from a company name.
pub fn clean_company_name(name: &str) -> String {
    TICKER_GROUP_RE.replace_all(name, "").trim().to_string()
}
