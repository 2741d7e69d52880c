//! Named-entity candidates.
//!
//! The drug extractor asks an [`EntityRecognizer`] for labelled spans before falling back to
//! its own pattern. Recognition is pluggable: the default is a [`GazetteerRecognizer`] loaded
//! from a YAML list of known names, and [`NoEntities`] disables entity candidates entirely.
//!
//! Gazetteer file format:
//!
//! ```yaml
//! entities:
//!   - text: Paracetamol
//!     label: PRODUCT
//!   - text: Acme Pharma
//!     label: ORG
//! ```

use crate::{ReportError, ReportResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Entity label attached to a recognised span.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Product,
    Drug,
    Org,
    Person,
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Drug => "DRUG",
            EntityLabel::Org => "ORG",
            EntityLabel::Person => "PERSON",
            EntityLabel::Other(label) => label,
        }
    }

    /// Whether spans with this label may name a drug.
    pub fn is_drug_candidate(&self) -> bool {
        matches!(
            self,
            EntityLabel::Product | EntityLabel::Drug | EntityLabel::Org
        )
    }
}

impl From<String> for EntityLabel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRODUCT" => EntityLabel::Product,
            "DRUG" => EntityLabel::Drug,
            "ORG" => EntityLabel::Org,
            "PERSON" => EntityLabel::Person,
            _ => EntityLabel::Other(value),
        }
    }
}

impl From<EntityLabel> for String {
    fn from(value: EntityLabel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled span of report text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityCandidate {
    pub text: String,
    pub label: EntityLabel,
}

impl EntityCandidate {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Source of labelled entity spans.
///
/// Implementations must return candidates in the order they occur in `text`.
pub trait EntityRecognizer: Send + Sync {
    fn find_entities(&self, text: &str) -> Vec<EntityCandidate>;
}

/// Recognizer that never finds anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEntities;

impl EntityRecognizer for NoEntities {
    fn find_entities(&self, _text: &str) -> Vec<EntityCandidate> {
        Vec::new()
    }
}

/// Dictionary-based recognizer.
///
/// Matches are case-sensitive and whole-word, reported in text order and never overlap. When
/// two entries could match at the same position the longer surface form wins. A surface form
/// that begins or ends with punctuation (e.g. "Acme Inc.") is only anchored on its word-character
/// ends.
#[derive(Clone, Debug)]
pub struct GazetteerRecognizer {
    entries: Vec<EntityCandidate>,
    pattern: Option<Regex>,
}

impl GazetteerRecognizer {
    /// Build a gazetteer from `(surface, label)` entries.
    ///
    /// A surface form listed more than once keeps its first label.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Gazetteer`] for a blank surface form and [`ReportError::Pattern`]
    /// if the combined pattern cannot be compiled.
    pub fn new(entries: impl IntoIterator<Item = EntityCandidate>) -> ReportResult<Self> {
        let mut kept: Vec<EntityCandidate> = Vec::new();
        for entry in entries {
            let surface = entry.text.trim();
            if surface.is_empty() {
                return Err(ReportError::Gazetteer(format!(
                    "entity with label '{}' has a blank text",
                    entry.label
                )));
            }
            if kept.iter().any(|k| k.text == surface) {
                continue;
            }
            kept.push(EntityCandidate::new(surface, entry.label));
        }

        if kept.is_empty() {
            return Ok(Self::empty());
        }

        let mut surfaces: Vec<&str> = kept.iter().map(|e| e.text.as_str()).collect();
        surfaces.sort_by_key(|s| std::cmp::Reverse(s.len()));
        let alternation = surfaces
            .iter()
            .map(|s| anchored(s))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?:{alternation})"))?;

        Ok(Self {
            entries: kept,
            pattern: Some(pattern),
        })
    }

    /// A gazetteer with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            pattern: None,
        }
    }

    /// Parse a gazetteer YAML document.
    pub fn parse(yaml_text: &str) -> ReportResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let wire = serde_path_to_error::deserialize::<_, GazetteerWire>(deserializer).map_err(
            |err| {
                let path = err.path().to_string();
                let path = if path.is_empty() || path == "." {
                    "<root>".to_string()
                } else {
                    path
                };
                ReportError::Gazetteer(format!(
                    "gazetteer schema mismatch at {path}: {}",
                    err.into_inner()
                ))
            },
        )?;

        Self::new(
            wire.entities
                .into_iter()
                .map(|e| EntityCandidate::new(e.text, e.label)),
        )
    }

    /// Read and parse a gazetteer file.
    pub fn load(path: &Path) -> ReportResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Gazetteer(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&text)
    }

    pub fn entries(&self) -> &[EntityCandidate] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn label_of(&self, surface: &str) -> Option<&EntityLabel> {
        self.entries
            .iter()
            .find(|e| e.text == surface)
            .map(|e| &e.label)
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn find_entities(&self, text: &str) -> Vec<EntityCandidate> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        pattern
            .find_iter(text)
            .filter_map(|m| {
                self.label_of(m.as_str())
                    .map(|label| EntityCandidate::new(m.as_str(), label.clone()))
            })
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escaped surface form with a word boundary on each end that is a word character.
fn anchored(surface: &str) -> String {
    let starts_word = surface.chars().next().is_some_and(is_word_char);
    let ends_word = surface.chars().next_back().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        regex::escape(surface),
        if ends_word { r"\b" } else { "" },
    )
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GazetteerWire {
    #[serde(default)]
    entities: Vec<GazetteerEntryWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GazetteerEntryWire {
    text: String,
    label: EntityLabel,
}
