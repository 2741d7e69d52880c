//! YAML lexicon override file.
//!
//! Deployments can replace any of the built-in vocabularies at startup. The file is an ordered
//! document; sequence order is declaration order:
//!
//! ```yaml
//! severity:
//!   - category: severe
//!     variants: [severe, life-threatening, intense]
//!   - category: mild
//!     variants: [mild, slight]
//! adverse_events:
//!   - category: rash
//!     variants: [rash, hives]
//! ```
//!
//! A vocabulary that is absent from the file keeps its built-in contents. Unknown keys and
//! unknown categories are rejected.

use crate::category::{AdverseEvent, Category, Outcome, Severity};
use crate::lexicon::{Lexicon, Lexicons};
use crate::{LexiconError, LexiconResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lexicon file operations.
///
/// Zero-sized namespace type; all methods are associated functions.
pub struct LexiconFile;

impl LexiconFile {
    /// Parse a lexicon override document.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Schema`] with the failing path (e.g.
    /// `adverse_events[2].category`) when the YAML does not match the schema, and
    /// [`LexiconError::InvalidLexicon`] when a vocabulary breaks a lexicon invariant.
    pub fn parse(yaml_text: &str) -> LexiconResult<Lexicons> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, LexiconFileWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(LexiconError::Schema(format!(
                    "lexicon schema mismatch at {path}: {source}"
                )));
            }
        };

        let builtin = Lexicons::builtin();
        Ok(Lexicons {
            severity: vocabulary(wire.severity, builtin.severity)?,
            outcome: vocabulary(wire.outcome, builtin.outcome)?,
            adverse_events: vocabulary(wire.adverse_events, builtin.adverse_events)?,
        })
    }

    /// Read and parse a lexicon override file.
    pub fn load(path: &Path) -> LexiconResult<Lexicons> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Render all three vocabularies as a lexicon document.
    pub fn render(lexicons: &Lexicons) -> LexiconResult<String> {
        let wire = LexiconFileWire {
            severity: Some(to_wire(&lexicons.severity)),
            outcome: Some(to_wire(&lexicons.outcome)),
            adverse_events: Some(to_wire(&lexicons.adverse_events)),
        };
        Ok(serde_yaml::to_string(&wire)?)
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct LexiconFileWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    severity: Option<Vec<EntryWire<Severity>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    outcome: Option<Vec<EntryWire<Outcome>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    adverse_events: Option<Vec<EntryWire<AdverseEvent>>>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct EntryWire<C> {
    category: C,
    variants: Vec<String>,
}

fn vocabulary<C: Category>(
    wire: Option<Vec<EntryWire<C>>>,
    fallback: Lexicon<C>,
) -> LexiconResult<Lexicon<C>> {
    match wire {
        Some(entries) => Lexicon::new(entries.into_iter().map(|e| (e.category, e.variants))),
        None => Ok(fallback),
    }
}

fn to_wire<C: Category>(lexicon: &Lexicon<C>) -> Vec<EntryWire<C>> {
    lexicon
        .entries()
        .iter()
        .map(|e| EntryWire {
            category: e.category(),
            variants: e.variants().to_vec(),
        })
        .collect()
}
