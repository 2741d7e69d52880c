//! Input validation for values arriving from API and CLI boundaries.
//!
//! Everything here runs before extraction or storage. Failures are
//! [`ReportError::InvalidInput`] / [`ReportError::InvalidReportId`], which callers map to
//! client errors.

use crate::{ReportError, ReportResult};
use lexicon::Language;
use rra_types::NonEmptyText;
use rra_uuid::ShardableUuid;

/// Validate the free-text body of a report.
///
/// Surrounding whitespace is trimmed; blank reports are rejected.
pub fn validate_report_text(raw: &str) -> ReportResult<NonEmptyText> {
    NonEmptyText::new(raw).map_err(|_| ReportError::InvalidInput("report cannot be empty".into()))
}

/// Validate an outcome label submitted for translation.
///
/// Surrounding whitespace is trimmed; blank labels are rejected.
pub fn validate_outcome_label(raw: &str) -> ReportResult<NonEmptyText> {
    NonEmptyText::new(raw)
        .map_err(|_| ReportError::InvalidInput("outcome cannot be empty".into()))
}

/// Parse a translation target language code (`fr` or `sw`).
pub fn parse_language(code: &str) -> ReportResult<Language> {
    code.parse::<Language>()
        .map_err(|e| ReportError::InvalidInput(e.to_string()))
}

/// Parse a report id in canonical form (32 lowercase hex characters).
pub fn parse_report_id(id: &str) -> ReportResult<ShardableUuid> {
    Ok(ShardableUuid::parse(id)?)
}
