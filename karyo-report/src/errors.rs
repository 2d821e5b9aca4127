use thiserror::Error;

use karyo_core::ValidationError;

/// Error type for reading a structured report back in.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The document is not the expected JSON shape.
    #[error("Can't parse structured report: {0}")]
    Json(#[from] serde_json::Error),

    /// The fields parsed but do not form a valid karyotype result.
    #[error("Structured report fails validation: {0}")]
    Validation(#[from] ValidationError),

    /// The stored notation is not the one derived from the stored fields.
    #[error("Stored notation '{stored}' does not match derived notation '{derived}'")]
    NotationMismatch { stored: String, derived: String },
}

/// Result type alias for karyo-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
