use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::DEFAULT_SOURCE_URL;
use crate::record::{Category, PdufaRecord, RecordStatus};
use crate::{fetch, scraper, snapshot};

/// One rung of the fallback chain, from freshest to most stale.
#[derive(Debug, Clone)]
pub enum DataSource {
    Live { url: String, user_agent: String },
    Snapshot { path: PathBuf },
    Embedded,
}

/// Records plus the name of the source that produced them.
#[derive(Debug)]
pub struct Loaded {
    pub source: &'static str,
    pub records: Vec<PdufaRecord>,
}

impl DataSource {
    pub fn name(&self) -> &'static str {
        match self {
            DataSource::Live { .. } => "live",
            DataSource::Snapshot { .. } => "snapshot",
            DataSource::Embedded => "embedded",
        }
    }

    /// Load records, or `None` if this source is unavailable.
    pub async fn try_load(&self) -> Option<Vec<PdufaRecord>> {
        match self {
            DataSource::Live { url, user_agent } => {
                let client = fetch::client(user_agent)
                    .inspect_err(|e| warn!("Live source unavailable: {}", e))
                    .ok()?;
                scraper::scrape(&client, url)
                    .await
                    .map(|s| s.data)
                    .inspect_err(|e| warn!("Live scrape failed: {}", e))
                    .ok()
            }
            DataSource::Snapshot { path } => snapshot::read_snapshot(path)
                .map(|s| s.data)
                .inspect_err(|e| warn!("Snapshot {} unusable: {}", path.display(), e))
                .ok(),
            DataSource::Embedded => Some(embedded_records()),
        }
    }
}

/// Try each source in order and take the first that loads.
pub async fn load_first(sources: &[DataSource]) -> Option<Loaded> {
    for source in sources {
        if let Some(records) = source.try_load().await {
            info!(source = source.name(), count = records.len(), "loaded records");
            return Some(Loaded {
                source: source.name(),
                records,
            });
        }
    }
    None
}

const EMBEDDED_SCRAPED_AT: &str = "2026-02-10T00:00:00Z";

// (ticker, company, drug, date, category, description)
const EMBEDDED: &[(&str, &str, &str, &str, Category, &str)] = &[
    (
        "MRK",
        "Merck & Co Inc.",
        "KEYTRUDA",
        "2026-02-20",
        Category::Oncology,
        "FDA decision on KEYTRUDA plus chemotherapy with or without bevacizumab for treatment of patients with platinum-resistant recurrent ovarian cancer",
    ),
    (
        "VNDA",
        "VANDA PHARMACEUTICALS",
        "Bysanti",
        "2026-02-21",
        Category::NeurologyPsychiatry,
        "FDA decision on Bysanti (milsaperidone) for the acute treatment of bipolar I disorder and the treatment of schizophrenia",
    ),
    (
        "ETON",
        "Eton Pharmaceuticals, Inc",
        "ET-600",
        "2026-02-25",
        Category::MetabolicEndocrine,
        "FDA decision on ET-600 for the treatment of central diabetes insipidius, also known as arginine vasopressin deficiency",
    ),
    (
        "OTSKF",
        "Otsuka Holdings Co., Ltd.",
        "INQOVI",
        "2026-02-25",
        Category::Oncology,
        "FDA decision on INQOVI plus venetoclax as a treatment for adults with newly diagnosed acute myeloid leukemia (AML) who are ineligible for intensive induction chemotherapy",
    ),
    (
        "SNY",
        "Sanofi SA",
        "Dupixent",
        "2026-02-28",
        Category::Respiratory,
        "FDA decision on Dupixent in adults and children aged 6 years and older with allergic fungal rhinosinusitis (AFRS).",
    ),
    (
        "ASND",
        "Ascendis Pharma A/S",
        "TransCon CNP",
        "2026-02-28",
        Category::GeneticRareDisease,
        "FDA decision on TransCon CNP (navepegritide) for the treatment of children with achondroplasia",
    ),
];

/// The compiled-in list used when neither a live page nor a snapshot is available.
pub fn embedded_records() -> Vec<PdufaRecord> {
    EMBEDDED
        .iter()
        .enumerate()
        .map(|(i, (ticker, company, drug, date, category, description))| PdufaRecord {
            id: format!("static-{}", i + 1),
            company: company.to_string(),
            ticker: ticker.to_string(),
            drug: drug.to_string(),
            pdufa_date: date.to_string(),
            description: description.to_string(),
            category: *category,
            status: RecordStatus::Pending,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            scraped_at: EMBEDDED_SCRAPED_AT.to_string(),
        })
        .collect()
}
