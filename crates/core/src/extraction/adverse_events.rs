//! Multi-valued adverse-event extraction.

use crate::ReportResult;
use lexicon::{AdverseEvent, Category, Lexicon};
use regex::Regex;

/// Finds every adverse-event category mentioned in a report.
///
/// Unlike [`KeywordClassifier`](super::KeywordClassifier), variants must match as whole words:
/// "lightheaded" is found in "felt lightheaded." but not in "lightheadedness".
#[derive(Clone, Debug)]
pub struct AdverseEventExtractor {
    patterns: Vec<(AdverseEvent, Regex)>,
}

impl AdverseEventExtractor {
    /// Compile one whole-word pattern per category.
    pub fn new(lexicon: &Lexicon<AdverseEvent>) -> ReportResult<Self> {
        let mut patterns = Vec::with_capacity(lexicon.len());
        for entry in lexicon.entries() {
            let alternation = entry
                .variants()
                .iter()
                .map(|v| regex::escape(v))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = Regex::new(&format!(r"\b(?:{alternation})\b"))?;
            patterns.push((entry.category(), pattern));
        }
        Ok(Self { patterns })
    }

    /// Matched categories in declaration order, each at most once.
    pub fn extract(&self, text: &str) -> Vec<AdverseEvent> {
        let lowered = text.to_lowercase();

        self.patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(&lowered))
            .map(|(category, _)| {
                tracing::debug!(category = category.as_str(), "adverse event matched");
                *category
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon::Lexicons;

    fn extractor() -> AdverseEventExtractor {
        AdverseEventExtractor::new(&Lexicons::builtin().adverse_events).unwrap()
    }

    #[test]
    fn output_follows_declaration_order() {
        assert_eq!(
            extractor().extract("A headache, then nausea"),
            vec![AdverseEvent::Nausea, AdverseEvent::Headache]
        );
    }

    #[test]
    fn synonyms_map_to_one_category_without_duplicates() {
        assert_eq!(
            extractor().extract("Queasy, vomiting and more nausea"),
            vec![AdverseEvent::Nausea]
        );
    }

    #[test]
    fn requires_whole_words() {
        assert!(extractor().extract("lightheadedness").is_empty());
        assert_eq!(
            extractor().extract("felt lightheaded."),
            vec![AdverseEvent::Dizziness]
        );
        assert!(extractor().extract("coughs").is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            extractor().extract("HIVES and Pyrexia"),
            vec![AdverseEvent::Rash, AdverseEvent::Fever]
        );
    }

    #[test]
    fn variants_with_punctuation_are_escaped() {
        let lexicon =
            Lexicon::new([(AdverseEvent::Fever, vec!["temp. (high)"])]).unwrap();
        let extractor = AdverseEventExtractor::new(&lexicon).unwrap();
        assert!(extractor.extract("temp x high").is_empty());
    }

    #[test]
    fn empty_text_has_no_events() {
        assert!(extractor().extract("").is_empty());
    }
}
