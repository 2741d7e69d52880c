//! Ordered category → variants lexicons.

use crate::category::{AdverseEvent, Category, Outcome, Severity};
use crate::{builtin, LexiconError, LexiconResult};

/// One canonical category with its surface-form variants, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconEntry<C> {
    category: C,
    variants: Vec<String>,
}

impl<C: Category> LexiconEntry<C> {
    pub fn category(&self) -> C {
        self.category
    }

    /// Lower-cased variants, in declaration order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

/// An ordered vocabulary for one classifier.
///
/// Invariants enforced by [`Lexicon::new`]:
/// - each category appears at most once
/// - each category has at least one variant
/// - variants are non-blank and stored lower-cased (matching runs over lower-cased text)
///
/// A lexicon may omit categories; an omitted category simply never matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicon<C> {
    entries: Vec<LexiconEntry<C>>,
}

impl<C: Category> Lexicon<C> {
    /// Build a lexicon from `(category, variants)` pairs, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::InvalidLexicon`] if a category is repeated, has no variants, or
    /// has a blank variant.
    pub fn new<I, V, S>(entries: I) -> LexiconResult<Self>
    where
        I: IntoIterator<Item = (C, V)>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<LexiconEntry<C>> = Vec::new();

        for (category, variants) in entries {
            if out.iter().any(|e| e.category == category) {
                return Err(LexiconError::InvalidLexicon(format!(
                    "{} category '{}' is declared more than once",
                    C::VOCABULARY,
                    category.as_str()
                )));
            }

            let mut normalised: Vec<String> = Vec::new();
            for variant in variants {
                let variant = variant.as_ref().trim();
                if variant.is_empty() {
                    return Err(LexiconError::InvalidLexicon(format!(
                        "{} category '{}' has a blank variant",
                        C::VOCABULARY,
                        category.as_str()
                    )));
                }
                let lowered = variant.to_lowercase();
                if !normalised.contains(&lowered) {
                    normalised.push(lowered);
                }
            }

            if normalised.is_empty() {
                return Err(LexiconError::InvalidLexicon(format!(
                    "{} category '{}' has no variants",
                    C::VOCABULARY,
                    category.as_str()
                )));
            }

            out.push(LexiconEntry {
                category,
                variants: normalised,
            });
        }

        Ok(Self { entries: out })
    }

    /// Build a lexicon from static, already-normalised data.
    pub(crate) fn from_static(entries: &[(C, &[&str])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(category, variants)| LexiconEntry {
                    category: *category,
                    variants: variants.iter().map(|v| (*v).to_string()).collect(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[LexiconEntry<C>] {
        &self.entries
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        self.entries.iter().map(|e| e.category)
    }

    pub fn variants_of(&self, category: C) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.variants.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three vocabularies used by the extraction engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicons {
    pub severity: Lexicon<Severity>,
    pub outcome: Lexicon<Outcome>,
    pub adverse_events: Lexicon<AdverseEvent>,
}

impl Lexicons {
    /// The built-in vocabularies.
    pub fn builtin() -> Self {
        Self {
            severity: builtin::severity(),
            outcome: builtin::outcome(),
            adverse_events: builtin::adverse_events(),
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::builtin()
    }
}
