use std::fmt;

use serde::{Deserialize, Serialize};

/// One upcoming regulatory decision, as written to the snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdufaRecord {
    pub id: String,
    pub company: String,
    pub ticker: String,
    pub drug: String,
    pub pdufa_date: String,
    pub description: String,
    pub category: Category,
    pub status: RecordStatus,
    pub source_url: String,
    pub scraped_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Oncology,
    #[serde(rename = "Metabolic/Endocrine")]
    MetabolicEndocrine,
    #[serde(rename = "Neurology/Psychiatry")]
    NeurologyPsychiatry,
    #[serde(rename = "Genetic/Rare Disease")]
    GeneticRareDisease,
    Respiratory,
    Diagnostics,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Oncology => "Oncology",
            Category::MetabolicEndocrine => "Metabolic/Endocrine",
            Category::NeurologyPsychiatry => "Neurology/Psychiatry",
            Category::GeneticRareDisease => "Genetic/Rare Disease",
            Category::Respiratory => "Respiratory",
            Category::Diagnostics => "Diagnostics",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Records are always pending at scrape time; no later transitions exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Pending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_fields() {
        let record = PdufaRecord {
            id: "1".into(),
            company: "ABCD Corp".into(),
            ticker: "ABCD".into(),
            drug: "SomeDrug".into(),
            pdufa_date: "2026-03-15".into(),
            description: "FDA decision on SomeDrug".into(),
            category: Category::GeneticRareDisease,
            status: RecordStatus::Pending,
            source_url: "https://example.com".into(),
            scraped_at: "2026-03-01T00:00:00.000Z".into(),
        };
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(v["pdufaDate"], "2026-03-15");
        assert_eq!(v["sourceUrl"], "https://example.com");
        assert_eq!(v["scrapedAt"], "2026-03-01T00:00:00.000Z");
        assert_eq!(v["category"], "Genetic/Rare Disease");
        assert_eq!(v["status"], "Pending");
    }

    #[test]
    fn category_labels_match_serde() {
        for c in [
            Category::Oncology,
            Category::MetabolicEndocrine,
            Category::NeurologyPsychiatry,
            Category::GeneticRareDisease,
            Category::Respiratory,
            Category::Diagnostics,
            Category::Other,
        ] {
            assert_eq!(serde_json::to_value(c).unwrap(), c.label());
        }
    }
}
