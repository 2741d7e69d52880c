//! Outcome label localisation.

use crate::category::{Category, Outcome};
use crate::{builtin, LexiconError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target languages for outcome translation.
///
/// This is a closed set; anything else is rejected when parsed, before any lookup happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "sw")]
    Swahili,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::French, Language::Swahili];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::Swahili => "sw",
        }
    }
}

impl FromStr for Language {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code() == s)
            .ok_or_else(|| LexiconError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language → outcome → localised label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationTable {
    languages: Vec<(Language, Vec<(Outcome, String)>)>,
}

impl TranslationTable {
    pub fn new(languages: Vec<(Language, Vec<(Outcome, String)>)>) -> Self {
        Self { languages }
    }

    pub(crate) fn from_static(data: &[(Language, &[(Outcome, &str)])]) -> Self {
        Self {
            languages: data
                .iter()
                .map(|(language, labels)| {
                    (
                        *language,
                        labels
                            .iter()
                            .map(|(outcome, label)| (*outcome, (*label).to_string()))
                            .collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        builtin::translations()
    }

    /// Localise an outcome label.
    ///
    /// The label is lower-cased first. If the language has no table, or the table has no entry
    /// for the label, the lower-cased label is returned unchanged. This never fails and never
    /// returns an empty string for a non-empty label.
    pub fn translate(&self, outcome: &str, language: Language) -> String {
        let key = outcome.to_lowercase();

        self.lookup(&key, language)
            .map(str::to_string)
            .unwrap_or(key)
    }

    fn lookup(&self, key: &str, language: Language) -> Option<&str> {
        let outcome = Outcome::from_wire(key)?;
        let (_, labels) = self.languages.iter().find(|(l, _)| *l == language)?;
        labels
            .iter()
            .find(|(o, _)| *o == outcome)
            .map(|(_, label)| label.as_str())
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::builtin()
    }
}
