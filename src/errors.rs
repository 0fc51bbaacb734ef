use std::io;

use thiserror::Error;

use crate::types::SourceId;

/// Error type for ingestion, allocation, configuration, and presentation failures.
///
/// Bogo sort reaching its attempt limit is not an error; see
/// [`SortOutcome`](crate::sorting::SortOutcome).
#[derive(Debug, Error)]
pub enum SortError {
    /// Dataset could not be opened or read.
    #[error("data source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable {
        /// Failing source.
        source_id: SourceId,
        /// Underlying cause.
        reason: String,
    },
    /// Working copy or auxiliary buffer allocation failed.
    #[error("could not allocate {what} for {requested} records")]
    ResourceExhausted {
        /// Buffer that could not be allocated.
        what: &'static str,
        /// Requested capacity in records.
        requested: usize,
    },
    /// A field exceeded the configured maximum length.
    #[error("line {line}: field {field} is {len} bytes long (maximum {max})")]
    FieldTooLong {
        /// 1-based line number.
        line: usize,
        /// 1-based field position.
        field: usize,
        /// Field length in bytes.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Invalid options.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// JSON run report encoding failed.
    #[error("could not encode run report: {0}")]
    Report(#[from] serde_json::Error),
    /// Presenter or prompt I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
