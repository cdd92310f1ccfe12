//! Upcoming FDA/PDUFA decision dates, scraped from a public calendar page
//! into a JSON snapshot.

pub mod config;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod record;
pub mod scraper;
pub mod snapshot;
pub mod sources;

pub use error::{Result, ScrapeError};
pub use record::{Category, PdufaRecord, RecordStatus};
pub use snapshot::Snapshot;
