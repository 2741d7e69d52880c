//! # RRA Core
//!
//! Core logic for the Regulatory Report Assistant.
//!
//! This crate turns free-text adverse-event reports into structured records:
//! - rule-based extraction of drug, adverse events, severity and outcome ([`extraction`])
//! - pluggable entity candidates for drug names ([`entities`])
//! - sharded YAML storage of processed reports under `REPORT_DATA_DIR` ([`repositories`])
//! - outcome translation and severity summaries
//!
//! **No API concerns**: HTTP servers, DTOs and OpenAPI documents belong in `api-rest` and
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod extraction;
pub mod report;
pub mod repositories;
pub mod summary;
pub mod validation;

pub use config::CoreConfig;
pub use entities::{EntityCandidate, EntityLabel, EntityRecognizer, GazetteerRecognizer, NoEntities};
pub use error::{ReportError, ReportResult};
pub use extraction::{Extraction, Extractor};
pub use report::{Report, ReportFile};
pub use repositories::reports::ReportStore;
pub use summary::{severity_summary, SeveritySummary};

pub use lexicon::{AdverseEvent, Language, Outcome, Severity};
pub use rra_types::NonEmptyText;
pub use rra_uuid::ShardableUuid;

use std::sync::Arc;

/// Report processing service.
///
/// Holds the compiled extractors and the report store. Cheap to clone; clones share the same
/// read-only extractors and configuration.
#[derive(Clone)]
pub struct ReportService {
    cfg: Arc<CoreConfig>,
    extractor: Arc<Extractor>,
    store: ReportStore,
}

impl ReportService {
    /// Creates a service using the configured gazetteer as entity recognizer.
    pub fn new(cfg: Arc<CoreConfig>) -> ReportResult<Self> {
        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(cfg.gazetteer().clone());
        Self::with_recognizer(cfg, recognizer)
    }

    /// Creates a service with an explicit entity recognizer.
    pub fn with_recognizer(
        cfg: Arc<CoreConfig>,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> ReportResult<Self> {
        let extractor = Extractor::new(cfg.lexicons(), recognizer)?;
        Ok(Self {
            store: ReportStore::new(cfg.clone()),
            extractor: Arc::new(extractor),
            cfg,
        })
    }

    /// Extracts structured fields without storing anything.
    pub fn extract(&self, raw_report: &NonEmptyText) -> Extraction {
        self.extractor.extract(raw_report.as_str())
    }

    /// Extracts structured fields from a report and persists the result.
    ///
    /// # Errors
    ///
    /// Extraction itself cannot fail; any error comes from the report store.
    pub fn process(&self, raw_report: NonEmptyText) -> ReportResult<Report> {
        let extraction = self.extract(&raw_report);
        let report = self.store.create(raw_report, extraction)?;

        tracing::info!(
            report_id = %report.id(),
            drug = report.drug(),
            adverse_events = ?report.adverse_events(),
            severity = ?report.severity(),
            outcome = ?report.outcome(),
            "report processed"
        );

        Ok(report)
    }

    /// All stored reports, newest first.
    pub fn list(&self) -> Vec<Report> {
        self.store.list()
    }

    pub fn get(&self, id: &ShardableUuid) -> ReportResult<Report> {
        self.store.read(id)
    }

    /// Localises an outcome label. Unknown labels come back lower-cased.
    pub fn translate(&self, outcome: &str, language: Language) -> String {
        self.cfg.translations().translate(outcome, language)
    }

    pub fn severity_summary(&self) -> SeveritySummary {
        severity_summary(&self.list())
    }
}
