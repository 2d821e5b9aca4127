use thiserror::Error;

///
/// Raised when findings handed to [`crate::classify`] are malformed or out of range.
///
/// `field` names the offending input, using `abnormalities[i].<name>` for
/// fields of a single abnormality event.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Error on a field of the abnormality event at `index`.
    pub fn abnormality(index: usize, field: &str, reason: impl Into<String>) -> Self {
        ValidationError::new(format!("abnormalities[{}].{}", index, field), reason)
    }
}

/// Failure of the upstream findings source (classifier service or its stand-in).
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Findings source unavailable: {0}")]
    Unavailable(String),

    #[error("Can't parse findings returned by source: {0}")]
    Unparseable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
