pub mod accumulator;
pub mod category;
pub mod dates;
pub mod fields;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::record::{PdufaRecord, RecordStatus};
use accumulator::{Accumulator, Candidate};

/// What happened to a completed candidate.
#[derive(Debug)]
pub enum Outcome {
    Emitted(PdufaRecord),
    PastDate { date: String, company: String },
    InvalidDate(String),
}

/// State for one extraction run: the line accumulator, the id counter and the
/// provenance stamped on every record. Ids start at 1 for every session.
pub struct ExtractionSession {
    accumulator: Accumulator,
    next_id: u32,
    today: String,
    source_url: String,
    scraped_at: String,
}

impl ExtractionSession {
    /// `today` is the scrape's calendar day; earlier decision dates are dropped.
    pub fn new(source_url: &str, today: NaiveDate, scraped_at: &str) -> Self {
        Self {
            accumulator: Accumulator::new(),
            next_id: 1,
            today: today.format("%Y-%m-%d").to_string(),
            source_url: source_url.to_string(),
            scraped_at: scraped_at.to_string(),
        }
    }

    pub fn feed_line(&mut self, line: &str) -> Option<Outcome> {
        let candidate = self.accumulator.feed(line)?;
        Some(self.complete(candidate))
    }

    fn complete(&mut self, c: Candidate) -> Outcome {
        let Some(pdufa_date) = dates::normalize_date(&c.date) else {
            warn!(date = %c.date, "invalid date format");
            return Outcome::InvalidDate(c.date);
        };

        // Zero-padded ISO strings order the same as the dates they spell.
        if pdufa_date < self.today {
            info!(date = %pdufa_date, company = %c.company, "skipping past date");
            return Outcome::PastDate {
                date: pdufa_date,
                company: c.company,
            };
        }

        let category = category::infer_category(&c.description);
        let record = PdufaRecord {
            id: self.next_id.to_string(),
            company: fields::clean_company_name(&c.company),
            ticker: c.ticker.to_uppercase(),
            drug: c.drug,
            pdufa_date,
            description: c.description,
            category,
            status: RecordStatus::Pending,
            source_url: self.source_url.clone(),
            scraped_at: self.scraped_at.clone(),
        };
        self.next_id += 1;
        info!(
            company = %record.company,
            drug = %record.drug,
            date = %record.pdufa_date,
            "added"
        );
        Outcome::Emitted(record)
    }
}

/// Scan `html` line by line and return upcoming records sorted by decision date.
pub fn extract_records(html: &str, session: &mut ExtractionSession) -> Vec<PdufaRecord> {
    let mut records: Vec<PdufaRecord> = html
        .split('\n')
        .filter_map(|line| match session.feed_line(line)? {
            Outcome::Emitted(record) => Some(record),
            _ => None,
        })
        .collect();

    records.sort_by(|a, b| a.pdufa_date.cmp(&b.pdufa_date));
    info!("Extracted {} upcoming PDUFA dates", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    const URL: &str = "https://www.rttnews.com/corpinfo/fdacalendar.aspx";
    const STAMP: &str = "2026-03-01T12:00:00.000Z";

    fn session(today: &str) -> ExtractionSession {
        let today = NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap();
        ExtractionSession::new(URL, today, STAMP)
    }

    fn entry(symbol: &str, name: &str, drug: &str, date: &str, desc: &str) -> String {
        format!(
            "<a href=\"symbolsearch.aspx?symbol={symbol}\">{name}</a> ({symbol})\n{drug} (NDA)\nDecision due {date}\nFDA decision on {drug} {desc}\n"
        )
    }

    #[test]
    fn single_record() {
        let html = entry("ABCD", "ABCD Corp", "SomeDrug", "03/15/2026", "for X (cancer)");
        let records = extract_records(&html, &mut session("2026-03-01"));
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, "1");
        assert_eq!(r.company, "ABCD Corp");
        assert_eq!(r.ticker, "ABCD");
        assert_eq!(r.drug, "SomeDrug");
        assert_eq!(r.pdufa_date, "2026-03-15");
        assert_eq!(r.category, Category::Oncology);
        assert_eq!(r.status, RecordStatus::Pending);
        assert_eq!(r.source_url, URL);
        assert_eq!(r.scraped_at, STAMP);
    }

    #[test]
    fn past_date_skipped() {
        let html = entry("ABCD", "ABCD Corp", "SomeDrug", "03/15/2026", "for X");
        assert!(extract_records(&html, &mut session("2026-03-16")).is_empty());
    }

    #[test]
    fn today_is_kept() {
        let html = entry("ABCD", "ABCD Corp", "SomeDrug", "3/15/2026", "for X");
        assert_eq!(extract_records(&html, &mut session("2026-03-15")).len(), 1);
    }

    #[test]
    fn ids_only_count_emitted_records() {
        let html = [
            entry("AAA", "Past Co", "OldDrug", "01/01/2026", "x"),
            entry("BBB", "Later Co", "LateDrug", "06/01/2026", "x"),
            entry("CCC", "Sooner Co", "SoonDrug", "04/01/2026", "x"),
        ]
        .concat();
        let records = extract_records(&html, &mut session("2026-03-01"));
        assert_eq!(records.len(), 2);
        // Sorted by date, ids reflect scan order.
        assert_eq!(records[0].ticker, "CCC");
        assert_eq!(records[0].id, "2");
        assert_eq!(records[1].ticker, "BBB");
        assert_eq!(records[1].id, "1");
    }

    #[test]
    fn lowercase_ticker_uppercased() {
        let html = entry("abcd", "ABCD Corp", "SomeDrug", "03/15/2026", "x");
        let records = extract_records(&html, &mut session("2026-03-01"));
        assert_eq!(records[0].ticker, "ABCD");
    }

    #[test]
    fn out_of_range_date_passes_through() {
        let html = entry("ABCD", "ABCD Corp", "SomeDrug", "13/40/2026", "x");
        let records = extract_records(&html, &mut session("2026-03-01"));
        assert_eq!(records[0].pdufa_date, "2026-13-40");
    }

    #[test]
    fn non_ascii_digit_date_not_captured() {
        let html = entry("ABCD", "ABCD Corp", "SomeDrug", "٠٣/١٥/٢٠٢٥", "x");
        assert!(extract_records(&html, &mut session("2026-10-19")).is_empty());
    }

    #[test]
    fn invalid_date_outcome_is_guarded() {
        let mut s = session("2026-03-01");
        let outcome = s.complete(Candidate {
            company: "ABCD Corp".into(),
            ticker: "ABCD".into(),
            drug: "SomeDrug".into(),
            date: "soon".into(),
            description: "FDA decision".into(),
        });
        assert!(matches!(outcome, Outcome::InvalidDate(d) if d == "soon"));
        assert_eq!(s.next_id, 1);
    }

    #[test]
    fn fixture_page() {
        let html = std::fs::read_to_string("tests/fixtures/fdacalendar.html").unwrap();
        let records = extract_records(&html, &mut session("2026-02-22"));
        let tickers: Vec<&str> = records.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, ["ETON", "SNY", "ASND", "ABCD"]);
        assert!(records.iter().all(|r| r.pdufa_date.as_str() >= "2026-02-22"));
    }
}
