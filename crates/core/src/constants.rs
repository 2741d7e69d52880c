//! Constants used throughout the RRA core crate.

/// Directory name for processed report storage, under the report data directory.
pub const REPORTS_DIR_NAME: &str = "reports";

/// Default directory for report data when no explicit directory is configured.
pub const DEFAULT_REPORT_DATA_DIR: &str = "report_data";

/// Filename for a stored report.
pub const REPORT_FILENAME: &str = "report.yaml";

/// Attempts made to allocate a fresh report directory before giving up.
pub const MAX_DIR_ALLOCATION_ATTEMPTS: usize = 5;
