//! Severity distribution across stored reports.

use crate::report::Report;
use lexicon::Severity;
use serde::Serialize;

/// Number of reports per severity. Reports without a severity are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeveritySummary {
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
}

impl SeveritySummary {
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Mild => self.mild,
            Severity::Moderate => self.moderate,
            Severity::Severe => self.severe,
        }
    }

    pub fn total(&self) -> usize {
        self.mild + self.moderate + self.severe
    }
}

pub fn severity_summary(reports: &[Report]) -> SeveritySummary {
    reports
        .iter()
        .filter_map(Report::severity)
        .fold(SeveritySummary::default(), |mut summary, severity| {
            match severity {
                Severity::Mild => summary.mild += 1,
                Severity::Moderate => summary.moderate += 1,
                Severity::Severe => summary.severe += 1,
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::Extraction;
    use chrono::Utc;
    use rra_types::NonEmptyText;
    use rra_uuid::ShardableUuid;

    fn report(severity: Option<Severity>) -> Report {
        Report::new(
            ShardableUuid::new(),
            NonEmptyText::new("text").unwrap(),
            Extraction {
                drug: String::new(),
                adverse_events: vec![],
                severity,
                outcome: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn counts_each_severity() {
        let reports = vec![
            report(Some(Severity::Mild)),
            report(Some(Severity::Severe)),
            report(None),
            report(Some(Severity::Mild)),
        ];

        let summary = severity_summary(&reports);
        assert_eq!(
            summary,
            SeveritySummary {
                mild: 2,
                moderate: 0,
                severe: 1
            }
        );
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.count(Severity::Mild), 2);
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(severity_summary(&[]), SeveritySummary::default());
    }
}
