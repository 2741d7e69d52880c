//! Drug name extraction.

use crate::entities::EntityRecognizer;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// `Drug` followed by a capitalised token, e.g. "Drug Zentra" or "Drug X-12".
static DRUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bDrug\s+([A-Z][\w-]*)").expect("Invalid drug pattern"));

/// Picks the single most likely drug name in a report.
///
/// Candidates are gathered in priority order: entity spans labelled `PRODUCT`, `DRUG` or `ORG`
/// (in the order the recognizer returns them), then the first `Drug <Name>` mention. The first
/// candidate wins.
#[derive(Clone)]
pub struct DrugExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl DrugExtractor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Returns the drug name, or an empty string when there is no candidate.
    pub fn extract(&self, text: &str) -> String {
        let mut candidates: Vec<String> = self
            .recognizer
            .find_entities(text)
            .into_iter()
            .filter(|e| e.label.is_drug_candidate())
            .map(|e| e.text)
            .collect();

        if let Some(caps) = DRUG_PATTERN.captures(text) {
            candidates.push(format!("Drug {}", &caps[1]));
        }

        candidates.into_iter().next().unwrap_or_default()
    }
}
