use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a reporting run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Missing command line parameter 1 for log file path.")]
    MissingArgument,

    #[error("The file '{}' does not exist.", path.display())]
    InputNotFound { path: PathBuf },

    #[error("'{0}' is not a valid IP address")]
    InvalidSourceIp(String),

    #[error("invalid regular expression")]
    Pattern(#[from] regex::Error),

    #[error("I/O failure")]
    Io(#[from] io::Error),

    #[error("failed to write CSV report")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON summary")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::MissingArgument
            | ReportError::InputNotFound { .. }
            | ReportError::InvalidSourceIp(_) => 1,
            _ => 2,
        }
    }
}

/// A report-eligible line that lacks one of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing {field} field")]
    Missing { field: &'static str },
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        FieldError::Missing { field }
    }
}
