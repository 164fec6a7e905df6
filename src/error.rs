/// Error kinds surfaced by a reporter invocation
///
/// Every variant is fatal: main prints it and exits with status 1.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReporterError {
    /// The report JSON does not have the shape we walk
    #[error("malformed report: {0}")]
    MalformedReport(String),

    /// A required input was not supplied (or could not be parsed)
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// The comment service call failed; never retried
    #[error("comment request failed: {0}")]
    CollaboratorCall(String),

    #[error("failed to read report {}: {source}", .path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for ReporterError {
    fn from(e: serde_json::Error) -> Self {
        ReporterError::MalformedReport(e.to_string())
    }
}
