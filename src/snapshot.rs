use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ScrapeError};
use crate::record::PdufaRecord;

pub const SOURCE_NAME: &str = "RTTNews";

/// The JSON file handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub data: Vec<PdufaRecord>,
    pub meta: SnapshotMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    pub source: String,
    pub source_url: String,
    pub scraped_at: String,
    pub item_count: usize,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

impl Snapshot {
    /// Wrap records (already sorted by date) with run metadata.
    pub fn new(data: Vec<PdufaRecord>, source_url: &str, scraped_at: &str) -> Self {
        let date_range = DateRange {
            earliest: data.first().map(|r| r.pdufa_date.clone()),
            latest: data.last().map(|r| r.pdufa_date.clone()),
        };
        Self {
            meta: SnapshotMeta {
                source: SOURCE_NAME.to_string(),
                source_url: source_url.to_string(),
                scraped_at: scraped_at.to_string(),
                item_count: data.len(),
                date_range,
            },
            data,
        }
    }
}

/// Overwrite `path` with the pretty-printed snapshot, creating parent dirs.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ScrapeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Data saved to {}", path.display());
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
