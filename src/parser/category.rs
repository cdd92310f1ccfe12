use crate::record::Category;

/// Keyword sets in priority order. First set with any substring hit wins.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Oncology,
        &["cancer", "tumor", "oncology", "leukemia", "prostate", "ovarian", "bladder"],
    ),
    (Category::MetabolicEndocrine, &["diabetes"]),
    (
        Category::NeurologyPsychiatry,
        &["schizophrenia", "bipolar", "depression", "mental"],
    ),
    (
        Category::GeneticRareDisease,
        &["achondroplasia", "metabolic", "syndrome", "mucopolysaccharidosis"],
    ),
    (Category::Respiratory, &["respiratory", "rhinosinusitis"]),
    (Category::Diagnostics, &["imaging", "pet"]),
];

pub fn infer_category(description: &str) -> Category {
    let desc = description.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| desc.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oncology_precedes_diabetes() {
        assert_eq!(
            infer_category("FDA decision on X for cancer in patients with diabetes"),
            Category::Oncology
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(infer_category("Acute Myeloid LEUKEMIA"), Category::Oncology);
        assert_eq!(infer_category("Type 2 Diabetes"), Category::MetabolicEndocrine);
    }

    #[test]
    fn metabolic_alone_is_rare_disease() {
        assert_eq!(
            infer_category("a rare metabolic disorder"),
            Category::GeneticRareDisease
        );
        assert_eq!(
            infer_category("metabolic complications of diabetes"),
            Category::MetabolicEndocrine
        );
    }

    #[test]
    fn each_rule() {
        assert_eq!(infer_category("bipolar I disorder"), Category::NeurologyPsychiatry);
        assert_eq!(infer_category("children with achondroplasia"), Category::GeneticRareDisease);
        assert_eq!(infer_category("allergic fungal rhinosinusitis"), Category::Respiratory);
        assert_eq!(infer_category("PET imaging agent"), Category::Diagnostics);
        assert_eq!(infer_category("hemophilia B"), Category::Other);
    }

    #[test]
    fn substring_match_not_word_match() {
        // "competitive" contains "pet"
        assert_eq!(infer_category("a competitive market"), Category::Diagnostics);
    }
}
