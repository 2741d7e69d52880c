//! Processed report records and their on-disk wire model.
//!
//! Responsibilities:
//! - Define the domain-level [`Report`] returned by the service layer
//! - Define a strict wire model for `report.yaml`
//! - Translate between the two
//!
//! A report is written once when it is processed and never modified afterwards.

use crate::constants::REPORT_FILENAME;
use crate::extraction::Extraction;
use crate::{ReportError, ReportResult};
use chrono::{DateTime, Utc};
use lexicon::{AdverseEvent, Outcome, Severity};
use rra_types::NonEmptyText;
use rra_uuid::ShardableUuid;
use serde::{Deserialize, Serialize};

// ============================================================================
// Public domain-level types
// ============================================================================

/// A processed adverse-event report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    id: ShardableUuid,
    raw_report: NonEmptyText,
    drug: String,
    adverse_events: Vec<AdverseEvent>,
    severity: Option<Severity>,
    outcome: Option<Outcome>,
    created_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        id: ShardableUuid,
        raw_report: NonEmptyText,
        extraction: Extraction,
        created_at: DateTime<Utc>,
    ) -> Self {
        let Extraction {
            drug,
            adverse_events,
            severity,
            outcome,
        } = extraction;

        Self {
            id,
            raw_report,
            drug,
            adverse_events,
            severity,
            outcome,
            created_at,
        }
    }

    pub fn id(&self) -> &ShardableUuid {
        &self.id
    }

    /// The report text exactly as submitted (after trimming).
    pub fn raw_report(&self) -> &str {
        self.raw_report.as_str()
    }

    /// Extracted drug name; empty when none was found.
    pub fn drug(&self) -> &str {
        &self.drug
    }

    pub fn adverse_events(&self) -> &[AdverseEvent] {
        &self.adverse_events
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ============================================================================
// report.yaml
// ============================================================================

/// `report.yaml` operations.
///
/// Zero-sized namespace type; all methods are associated functions.
pub struct ReportFile;

impl ReportFile {
    pub const NAME: &'static str = REPORT_FILENAME;

    /// Parse a `report.yaml` document.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::YamlDeserialization`] with the failing path when the YAML does not
    /// match the wire model (unknown keys, unknown categories, blank text, malformed id).
    pub fn parse(yaml_text: &str) -> ReportResult<Report> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, ReportWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(ReportError::YamlDeserialization(format!(
                    "report schema mismatch at {path}: {source}"
                )));
            }
        };

        Ok(Report {
            id: wire.id,
            raw_report: wire.raw_report,
            drug: wire.drug,
            adverse_events: wire.adverse_events,
            severity: wire.severity,
            outcome: wire.outcome,
            created_at: wire.created_at,
        })
    }

    /// Render a report as a `report.yaml` document.
    pub fn render(report: &Report) -> ReportResult<String> {
        let wire = ReportWire {
            id: report.id.clone(),
            raw_report: report.raw_report.clone(),
            drug: report.drug.clone(),
            adverse_events: report.adverse_events.clone(),
            severity: report.severity,
            outcome: report.outcome,
            created_at: report.created_at,
        };
        serde_yaml::to_string(&wire).map_err(ReportError::YamlSerialization)
    }
}

// ============================================================================
// Wire model
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportWire {
    id: ShardableUuid,
    raw_report: NonEmptyText,
    #[serde(default)]
    drug: String,
    #[serde(default)]
    adverse_events: Vec<AdverseEvent>,
    #[serde(default)]
    severity: Option<Severity>,
    #[serde(default)]
    outcome: Option<Outcome>,
    created_at: DateTime<Utc>,
}
