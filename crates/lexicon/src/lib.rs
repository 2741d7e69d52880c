//! Clinical vocabularies for adverse-event report extraction.
//!
//! This crate owns the **data** the extraction engine matches against:
//! - the closed category sets ([`Severity`], [`Outcome`], [`AdverseEvent`])
//! - ordered lexicons mapping each category to its surface-form variants
//! - the outcome translation table ([`TranslationTable`]) and supported [`Language`]s
//! - the YAML file format used to override the built-in lexicons at startup
//!
//! Lexicons are ordered sequences rather than maps: the first category (and, within it, the
//! first variant) to match wins, so declaration order is part of the observable contract.
//!
//! Matching itself lives in `rra-core`; this crate performs no text scanning.

pub mod builtin;
pub mod category;
pub mod file;
pub mod lexicon;
pub mod translation;

pub use category::{AdverseEvent, Category, Outcome, Severity};
pub use file::LexiconFile;
pub use lexicon::{Lexicon, LexiconEntry, Lexicons};
pub use translation::{Language, TranslationTable};

/// Errors returned by the `lexicon` crate.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("unknown {vocabulary} category: '{value}'")]
    UnknownCategory {
        vocabulary: &'static str,
        value: String,
    },

    #[error("unsupported language: '{0}' (expected one of: fr, sw)")]
    UnsupportedLanguage(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("lexicon schema error: {0}")]
    Schema(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results that can fail with a [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
