//! Rule-based field extraction.
//!
//! Each extractor is independent and deterministic; [`Extractor`] runs all of them over one
//! report text. Extraction never fails: text that matches nothing yields empty fields.

mod adverse_events;
mod drug;
mod keywords;

pub use adverse_events::AdverseEventExtractor;
pub use drug::DrugExtractor;
pub use keywords::KeywordClassifier;

use crate::entities::EntityRecognizer;
use crate::ReportResult;
use lexicon::{AdverseEvent, Lexicons, Outcome, Severity};
use serde::Serialize;
use std::sync::Arc;

/// Structured fields extracted from one report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub drug: String,
    pub adverse_events: Vec<AdverseEvent>,
    pub severity: Option<Severity>,
    pub outcome: Option<Outcome>,
}

/// All extractors, built once from the configured lexicons.
#[derive(Clone)]
pub struct Extractor {
    drug: DrugExtractor,
    severity: KeywordClassifier<Severity>,
    outcome: KeywordClassifier<Outcome>,
    adverse_events: AdverseEventExtractor,
}

impl Extractor {
    pub fn new(lexicons: &Lexicons, recognizer: Arc<dyn EntityRecognizer>) -> ReportResult<Self> {
        Ok(Self {
            drug: DrugExtractor::new(recognizer),
            severity: KeywordClassifier::new(lexicons.severity.clone()),
            outcome: KeywordClassifier::new(lexicons.outcome.clone()),
            adverse_events: AdverseEventExtractor::new(&lexicons.adverse_events)?,
        })
    }

    pub fn extract(&self, text: &str) -> Extraction {
        Extraction {
            drug: self.drug.extract(text),
            adverse_events: self.adverse_events.extract(text),
            severity: self.severity.classify(text),
            outcome: self.outcome.classify(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NoEntities;

    fn extractor() -> Extractor {
        Extractor::new(&Lexicons::builtin(), Arc::new(NoEntities)).unwrap()
    }

    #[test]
    fn extracts_all_fields_from_report() {
        let extraction = extractor().extract(
            "Patient reported severe nausea and a persistent headache after taking Drug Zentra",
        );
        assert_eq!(
            extraction,
            Extraction {
                drug: "Drug Zentra".into(),
                adverse_events: vec![AdverseEvent::Nausea, AdverseEvent::Headache],
                severity: Some(Severity::Severe),
                outcome: None,
            }
        );
    }

    #[test]
    fn extracts_mild_recovered_rash() {
        let extraction = extractor().extract("Mild rash, fully recovered within days");
        assert_eq!(extraction.drug, "");
        assert_eq!(extraction.adverse_events, vec![AdverseEvent::Rash]);
        assert_eq!(extraction.severity, Some(Severity::Mild));
        assert_eq!(extraction.outcome, Some(Outcome::Recovered));
    }

    #[test]
    fn unmatched_text_yields_empty_fields() {
        let extraction = extractor().extract("Nothing notable to report.");
        assert_eq!(extraction.drug, "");
        assert!(extraction.adverse_events.is_empty());
        assert_eq!(extraction.severity, None);
        assert_eq!(extraction.outcome, None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let extractor = extractor();
        let text = "Drug Q caused intense vertigo and fever; patient continuing treatment";
        let first = extractor.extract(text);
        assert_eq!(first, extractor.extract(text));
        assert_eq!(first.severity, Some(Severity::Severe));
        assert_eq!(first.outcome, Some(Outcome::Ongoing));
        assert_eq!(
            first.adverse_events,
            vec![AdverseEvent::Dizziness, AdverseEvent::Fever]
        );
    }
}
