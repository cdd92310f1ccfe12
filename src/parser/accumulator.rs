use tracing::debug;

use super::{dates, fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingCompany,
    AwaitingDrug,
    AwaitingDate,
    AwaitingDescription,
}

/// A complete candidate, taken out of the accumulator when its description line arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub company: String,
    pub ticker: String,
    pub drug: String,
    pub date: String,
    pub description: String,
}

/// Line-at-a-time builder for one candidate record.
///
/// Each line is offered to the company, drug, date and description rules in
/// that order, so one line can advance several states. A company line
/// always replaces the held company; a drug line replaces the held drug as
/// long as a company is held; the date is taken once. A description line is
/// only recognised once a drug and a date are held, and completing it resets
/// the accumulator.
#[derive(Debug, Default)]
pub struct Accumulator {
    company: String,
    ticker: String,
    drug: String,
    date: String,
    found_drug: bool,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        if self.company.is_empty() && !self.found_drug {
            State::AwaitingCompany
        } else if !self.found_drug {
            State::AwaitingDrug
        } else if self.date.is_empty() {
            State::AwaitingDate
        } else {
            State::AwaitingDescription
        }
    }

    /// Feed one line. Returns a candidate when this line completes one.
    pub fn feed(&mut self, line: &str) -> Option<Candidate> {
        if let Some((ticker, company)) = fields::match_company(line) {
            self.ticker = ticker.to_string();
            self.company = company.to_string();
            debug!(company = %self.company, ticker = %self.ticker, "found company");
        }

        if !self.company.is_empty() && fields::has_application_marker(line) {
            // A marker line that doesn't fit the drug shape is skipped; keep scanning.
            if let Some(drug) = fields::match_drug(line) {
                debug!(drug = %drug, "found drug");
                self.drug = drug;
                self.found_drug = true;
            }
        }

        if self.state() == State::AwaitingDate {
            if let Some(token) = dates::find_date_token(line) {
                self.date = token.to_string();
                debug!(date = %self.date, "found date");
            }
        }

        if self.state() == State::AwaitingDescription && line.contains("FDA decision") {
            let description = line.trim().to_string();
            debug!(description = %truncate(&description, 50), "found description");
            let taken = std::mem::take(self);
            return Some(Candidate {
                company: taken.company,
                ticker: taken.ticker,
                drug: taken.drug,
                date: taken.date,
                description,
            });
        }

        None
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
