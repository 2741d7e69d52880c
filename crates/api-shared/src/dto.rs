//! JSON wire types.
//!
//! Category values travel as their lower-case names. An absent severity or outcome is sent as
//! an empty string rather than `null`, which is what existing clients of the report endpoints
//! expect.

use rra_core::{Report, SeveritySummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProcessReportReq {
    /// Free-text adverse-event report. Must not be blank.
    #[schema(example = "Patient reported severe nausea after taking Drug Zentra")]
    pub report: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportRes {
    /// 32 lowercase hex characters.
    pub id: String,
    pub raw_report: String,
    pub drug: String,
    pub adverse_events: Vec<String>,
    pub severity: String,
    pub outcome: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl From<&Report> for ReportRes {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id().to_string(),
            raw_report: report.raw_report().to_string(),
            drug: report.drug().to_string(),
            adverse_events: report
                .adverse_events()
                .iter()
                .map(ToString::to_string)
                .collect(),
            severity: report
                .severity()
                .map(|s| s.to_string())
                .unwrap_or_default(),
            outcome: report.outcome().map(|o| o.to_string()).unwrap_or_default(),
            created_at: report.created_at().to_rfc3339(),
        }
    }
}

impl From<Report> for ReportRes {
    fn from(report: Report) -> Self {
        Self::from(&report)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslateReq {
    #[schema(example = "recovered")]
    pub outcome: String,
    /// `fr` or `sw`.
    #[schema(example = "fr")]
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslateRes {
    pub outcome: String,
    pub language: String,
    pub translated: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeveritySummaryRes {
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
}

impl From<SeveritySummary> for SeveritySummaryRes {
    fn from(summary: SeveritySummary) -> Self {
        Self {
            mild: summary.mild,
            moderate: summary.moderate,
            severe: summary.severe,
        }
    }
}
