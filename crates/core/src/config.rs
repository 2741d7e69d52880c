//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services as an
//! `Arc<CoreConfig>`. Nothing in request handling reads process-wide environment variables.

use crate::constants::{DEFAULT_REPORT_DATA_DIR, REPORTS_DIR_NAME};
use crate::entities::GazetteerRecognizer;
use crate::{ReportError, ReportResult};
use lexicon::{LexiconFile, Lexicons, TranslationTable};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    report_data_dir: PathBuf,
    lexicons: Lexicons,
    translations: TranslationTable,
    gazetteer: GazetteerRecognizer,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The report storage directory (`<report_data_dir>/reports`) is created if missing.
    pub fn new(
        report_data_dir: PathBuf,
        lexicons: Lexicons,
        translations: TranslationTable,
        gazetteer: GazetteerRecognizer,
    ) -> ReportResult<Self> {
        std::fs::create_dir_all(report_data_dir.join(REPORTS_DIR_NAME))
            .map_err(ReportError::StorageDirCreation)?;

        Ok(Self {
            report_data_dir,
            lexicons,
            translations,
            gazetteer,
        })
    }

    /// Configuration with built-in lexicons, built-in translations and no gazetteer.
    pub fn with_defaults(report_data_dir: PathBuf) -> ReportResult<Self> {
        Self::new(
            report_data_dir,
            Lexicons::builtin(),
            TranslationTable::builtin(),
            GazetteerRecognizer::empty(),
        )
    }

    pub fn report_data_dir(&self) -> &Path {
        &self.report_data_dir
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.report_data_dir.join(REPORTS_DIR_NAME)
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn gazetteer(&self) -> &GazetteerRecognizer {
        &self.gazetteer
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the report data directory from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REPORT_DATA_DIR`].
pub fn report_data_dir_from_env_value(value: Option<String>) -> PathBuf {
    non_blank(value)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_DATA_DIR))
}

/// Load lexicons from an optional override file path.
///
/// If `value` is `None` or empty/whitespace, returns the built-in lexicons.
pub fn lexicons_from_env_value(value: Option<String>) -> ReportResult<Lexicons> {
    match non_blank(value) {
        Some(path) => Ok(LexiconFile::load(Path::new(&path))?),
        None => Ok(Lexicons::builtin()),
    }
}

/// Load the entity gazetteer from an optional file path.
///
/// If `value` is `None` or empty/whitespace, returns a gazetteer that recognises nothing.
pub fn gazetteer_from_env_value(value: Option<String>) -> ReportResult<GazetteerRecognizer> {
    match non_blank(value) {
        Some(path) => GazetteerRecognizer::load(Path::new(&path)),
        None => Ok(GazetteerRecognizer::empty()),
    }
}

/// Assemble a `CoreConfig` from raw environment values.
///
/// Arguments are the values of `REPORT_DATA_DIR`, `RRA_LEXICON_FILE` and
/// `RRA_ENTITY_GAZETTEER_FILE`; each may be absent.
pub fn core_config_from_env_values(
    report_data_dir: Option<String>,
    lexicon_file: Option<String>,
    gazetteer_file: Option<String>,
) -> ReportResult<CoreConfig> {
    CoreConfig::new(
        report_data_dir_from_env_value(report_data_dir),
        lexicons_from_env_value(lexicon_file)?,
        TranslationTable::builtin(),
        gazetteer_from_env_value(gazetteer_file)?,
    )
}
