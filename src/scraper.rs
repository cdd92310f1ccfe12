use chrono::{Local, NaiveDate, SecondsFormat, Utc};
use tracing::info;

use crate::error::Result;
use crate::fetch;
use crate::parser::{self, ExtractionSession};
use crate::snapshot::Snapshot;

/// Current time as `2026-02-10T00:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Today's local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Extract records from a page and wrap them in a snapshot.
pub fn build_snapshot(html: &str, source_url: &str, today: NaiveDate, scraped_at: &str) -> Snapshot {
    let mut session = ExtractionSession::new(source_url, today, scraped_at);
    let records = parser::extract_records(html, &mut session);
    Snapshot::new(records, source_url, scraped_at)
}

/// Fetch the calendar and extract it. One request, one pass.
pub async fn scrape(client: &reqwest::Client, source_url: &str) -> Result<Snapshot> {
    info!("Scraping FDA calendar from {}...", source_url);
    let html = fetch::fetch_calendar(client, source_url).await?;
    let snapshot = build_snapshot(&html, source_url, today(), &timestamp_now());
    info!("Scraped {} upcoming PDUFA dates", snapshot.meta.item_count);
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'), "{ts}");
        // 2026-02-10T00:00:00.000Z
        assert_eq!(ts.len(), 24, "{ts}");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn snapshot_from_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/fdacalendar.html").unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        let s = build_snapshot(&html, "https://example.com/cal", today, "2026-02-22T08:00:00.000Z");
        assert_eq!(s.meta.item_count, 4);
        assert_eq!(s.meta.date_range.earliest.as_deref(), Some("2026-02-25"));
        assert_eq!(s.meta.date_range.latest.as_deref(), Some("2026-03-15"));
        assert!(s.data.iter().all(|r| r.scraped_at == s.meta.scraped_at));
    }

    #[test]
    fn reruns_differ_only_in_stamp() {
        let html = std::fs::read_to_string("tests/fixtures/fdacalendar.html").unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        let a = build_snapshot(&html, "u", today, "2026-02-22T08:00:00.000Z");
        let mut b = build_snapshot(&html, "u", today, "2026-02-22T09:30:00.000Z");
        assert_ne!(a, b);
        b.meta.scraped_at = a.meta.scraped_at.clone();
        for r in &mut b.data {
            r.scraped_at = a.meta.scraped_at.clone();
        }
        assert_eq!(a, b);
    }
}
