//! Error types for report generation.
//!
//! Library code returns [`ReportError`]; the binary converts it into
//! `anyhow::Error` at the edge and adds context there.

use std::io;
use thiserror::Error;

/// Everything that can make a report fail.
///
/// `MissingStatistic` and `MalformedRecord` describe bad inputs from the
/// classification pipeline. The remaining variants come from loading those
/// inputs or writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required aggregate statistic is absent from the stats table.
    #[error("missing required statistic '{key}'")]
    MissingStatistic { key: String },

    /// A results entry does not have the five-field shape.
    #[error("malformed result record for '{filename}': {reason}")]
    MalformedRecord { filename: String, reason: String },

    /// A required count holds a value that is not a non-negative integer.
    #[error("statistic '{key}' must be a non-negative integer count, got {value}")]
    InvalidStatistic { key: String, value: f64 },

    /// The input document could not be parsed.
    #[error("invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ReportError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingStatistic { key: key.into() }
    }

    pub fn malformed(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            filename: filename.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_statistic_names_key() {
        let err = ReportError::missing("n_images");
        assert_eq!(err.to_string(), "missing required statistic 'n_images'");
    }

    #[test]
    fn test_malformed_record_message() {
        let err = ReportError::malformed("cat_01.jpg", "expected 5 fields, found 4");
        assert_eq!(
            err.to_string(),
            "malformed result record for 'cat_01.jpg': expected 5 fields, found 4"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err: ReportError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ReportError::Io(_)));
        assert_eq!(err.to_string(), "closed");
    }
}
