use std::io;

use thiserror::Error;

/// Library-wide error type for fdadata operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Input source cannot be opened or reached.
    #[error("Source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: String, reason: String },

    /// One raw record cannot be coerced to its canonical shape.
    #[error("Cannot normalize field '{field}' from value '{value}'")]
    Normalization { field: String, value: String },

    /// A remote page request failed after initialization. `skip` is the
    /// last committed cursor position, usable as the resume point.
    #[error("Page fetch for '{source_id}' failed at skip {skip}: {message}")]
    Fetch { source_id: String, skip: u64, message: String },

    /// Pagination operations invoked before the metadata query.
    #[error("Pagination state not initialized; the metadata query must run first")]
    NotInitialized,

    /// Export attempted with zero acquired records.
    #[error("No records acquired; nothing to export")]
    EmptyDataset,

    /// Registry lookup miss.
    #[error("Unknown source '{0}'")]
    UnknownSource(String),

    /// CSV read or write failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Stamp a source identifier onto variants that carry one.
    pub(crate) fn for_source(self, source: &str) -> Self {
        match self {
            AppError::Fetch { skip, message, .. } => {
                AppError::Fetch { source_id: source.to_string(), skip, message }
            }
            AppError::SourceUnavailable { reason, .. } => {
                AppError::SourceUnavailable { source_id: source.to_string(), reason }
            }
            other => other,
        }
    }
}
