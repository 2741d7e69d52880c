#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("report not found: {0}")]
    NotFound(String),
    #[error("lexicon error: {0}")]
    Lexicon(#[from] lexicon::LexiconError),
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("invalid report id: {0}")]
    InvalidReportId(#[from] rra_uuid::UuidError),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to create report directory: {0}")]
    ReportDirCreation(std::io::Error),
    #[error(
        "report create failed and cleanup also failed (path: {path}): create={create_error}; cleanup={cleanup_error}",
        path = path.display()
    )]
    CleanupAfterCreateFailed {
        path: std::path::PathBuf,
        #[source]
        create_error: Box<ReportError>,
        cleanup_error: std::io::Error,
    },
    #[error("failed to write report file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read report file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(String),
    #[error("failed to read entity gazetteer: {0}")]
    Gazetteer(String),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
