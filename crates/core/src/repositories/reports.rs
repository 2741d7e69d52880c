//! Processed report storage.
//!
//! Each report lives in its own directory in a sharded layout:
//!
//! ```text
//! reports/
//!   <s1>/
//!     <s2>/
//!       <uuid>/
//!         report.yaml
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the report id. A directory is
//! allocated fresh for every report, so concurrent writers never share a file.

use crate::config::CoreConfig;
use crate::constants::MAX_DIR_ALLOCATION_ATTEMPTS;
use crate::extraction::Extraction;
use crate::report::{Report, ReportFile};
use crate::{ReportError, ReportResult};
use chrono::Utc;
use rra_types::NonEmptyText;
use rra_uuid::ShardableUuid;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Filesystem-backed report store.
#[derive(Clone, Debug)]
pub struct ReportStore {
    cfg: Arc<CoreConfig>,
}

impl ReportStore {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Persist a newly extracted report under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if:
    /// - no unique report directory can be allocated
    /// - `report.yaml` cannot be rendered or written
    /// - cleanup of a partially-created directory fails ([`ReportError::CleanupAfterCreateFailed`])
    pub fn create(&self, raw_report: NonEmptyText, extraction: Extraction) -> ReportResult<Report> {
        let reports_dir = self.cfg.reports_dir();
        let (id, report_dir) = create_unique_shared_dir(&reports_dir, ShardableUuid::new)?;

        let report = Report::new(id, raw_report, extraction, Utc::now());

        if let Err(create_error) = write_report(&report_dir, &report) {
            return match fs::remove_dir_all(&report_dir) {
                Ok(()) => Err(create_error),
                Err(cleanup_error) => Err(ReportError::CleanupAfterCreateFailed {
                    path: report_dir,
                    create_error: Box::new(create_error),
                    cleanup_error,
                }),
            };
        }

        Ok(report)
    }

    /// Read a stored report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NotFound`] if no report with this id exists.
    pub fn read(&self, id: &ShardableUuid) -> ReportResult<Report> {
        let path = id
            .sharded_dir(&self.cfg.reports_dir())
            .join(ReportFile::NAME);

        if !path.is_file() {
            return Err(ReportError::NotFound(id.to_string()));
        }

        let contents = fs::read_to_string(&path).map_err(ReportError::FileRead)?;
        let report = ReportFile::parse(&contents)?;

        if report.id() != id {
            return Err(ReportError::YamlDeserialization(format!(
                "{} holds report {} instead of {}",
                path.display(),
                report.id(),
                id
            )));
        }

        Ok(report)
    }

    /// List all stored reports, newest first.
    ///
    /// Report files that cannot be read or parsed are logged as warnings and skipped.
    pub fn list(&self) -> Vec<Report> {
        let mut reports = Vec::new();

        for report_dir in report_dirs(&self.cfg.reports_dir()) {
            let report_path = report_dir.join(ReportFile::NAME);
            if !report_path.is_file() {
                continue;
            }

            let contents = match fs::read_to_string(&report_path) {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::warn!("failed to read {}: {}", report_path.display(), e);
                    continue;
                }
            };

            match ReportFile::parse(&contents) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::warn!("failed to parse {}: {}", report_path.display(), e);
                }
            }
        }

        reports.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().to_string().cmp(&b.id().to_string()))
        });
        reports
    }
}

fn write_report(report_dir: &Path, report: &Report) -> ReportResult<()> {
    let yaml = ReportFile::render(report)?;
    fs::write(report_dir.join(ReportFile::NAME), yaml).map_err(ReportError::FileWrite)
}

/// Directories at `<base>/<s1>/<s2>/<id>/`.
fn report_dirs(base_dir: &Path) -> Vec<PathBuf> {
    fn subdirs(path: &Path) -> Vec<PathBuf> {
        match fs::read_dir(path) {
            Ok(it) => it
                .flatten()
                .map(|entry| entry.path())
                .filter(|p| p.is_dir())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    subdirs(base_dir)
        .iter()
        .flat_map(|s1| subdirs(s1))
        .flat_map(|s2| subdirs(&s2))
        .collect()
}

/// Creates a unique sharded directory for a new report.
///
/// Ids are drawn from `uuid_source` until an unused directory is created, guarding against
/// pathological collisions or pre-existing directories by retrying a bounded number of times.
pub(crate) fn create_unique_shared_dir(
    base_dir: &Path,
    mut uuid_source: impl FnMut() -> ShardableUuid,
) -> ReportResult<(ShardableUuid, PathBuf)> {
    for _attempt in 0..MAX_DIR_ALLOCATION_ATTEMPTS {
        let uuid = uuid_source();
        let candidate = uuid.sharded_dir(base_dir);

        if candidate.exists() {
            continue;
        }

        if let Some(parent) = candidate.parent() {
            fs::create_dir_all(parent).map_err(ReportError::ReportDirCreation)?;
        }

        match fs::create_dir(&candidate) {
            Ok(()) => return Ok((uuid, candidate)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(ReportError::ReportDirCreation(e)),
        }
    }

    Err(ReportError::ReportDirCreation(io::Error::new(
        ErrorKind::AlreadyExists,
        format!(
            "failed to allocate a unique report directory after {MAX_DIR_ALLOCATION_ATTEMPTS} attempts"
        ),
    )))
}
