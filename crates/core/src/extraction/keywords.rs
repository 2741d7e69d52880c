//! First-match keyword classification for single-valued fields (severity, outcome).

use lexicon::{Category, Lexicon};

/// Classifies text into at most one category of a vocabulary.
///
/// The text is lower-cased, then categories and their variants are tried in declaration order;
/// the first variant that occurs anywhere in the text decides. Matching is a plain substring
/// test, so "mild" also matches inside "mildly".
#[derive(Clone, Debug)]
pub struct KeywordClassifier<C> {
    lexicon: Lexicon<C>,
}

impl<C: Category> KeywordClassifier<C> {
    pub fn new(lexicon: Lexicon<C>) -> Self {
        Self { lexicon }
    }

    pub fn classify(&self, text: &str) -> Option<C> {
        let lowered = text.to_lowercase();

        for entry in self.lexicon.entries() {
            if let Some(variant) = entry.variants().iter().find(|v| lowered.contains(v.as_str())) {
                tracing::debug!(
                    vocabulary = C::VOCABULARY,
                    category = entry.category().as_str(),
                    variant = %variant,
                    "keyword matched"
                );
                return Some(entry.category());
            }
        }

        None
    }
}
