//! Dataset sources.
//!
//! A `RecordSource` produces the full, ordered record collection for a run
//! session in one call. Sources are read once per session; the returned
//! collection is treated as read-only by everything downstream.

use std::path::Path;
use std::sync::Arc;

use crate::config::CsvOptions;
use crate::constants::ingestion::IN_MEMORY_SOURCE_ID;
use crate::data::FireRecord;
use crate::errors::SortError;
use crate::types::SourceId;

mod csv_file;

pub use csv_file::{CsvFileSource, parse_row};

/// Producer of a complete dataset.
pub trait RecordSource {
    /// Stable identifier used in logs and error messages.
    fn id(&self) -> &str;
    /// Load every well-formed record in source order.
    ///
    /// Fails with [`SortError::SourceUnavailable`] when the source cannot be
    /// opened or read. Malformed rows are skipped, not reported.
    fn load(&self) -> Result<Vec<FireRecord>, SortError>;
}

/// Source over prebuilt records, mainly for tests and embedding callers.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    id: SourceId,
    records: Arc<Vec<FireRecord>>,
}

impl InMemorySource {
    /// Source over `records` with the default in-memory id.
    pub fn new(records: Vec<FireRecord>) -> Self {
        Self::with_id(IN_MEMORY_SOURCE_ID, records)
    }

    /// Source over `records` identified as `id`.
    pub fn with_id(id: impl Into<SourceId>, records: Vec<FireRecord>) -> Self {
        Self {
            id: id.into(),
            records: Arc::new(records),
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<FireRecord>, SortError> {
        Ok(self.records.as_ref().clone())
    }
}

/// Load a delimited dataset file with `options`.
pub fn load_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Vec<FireRecord>, SortError> {
    CsvFileSource::new(path.as_ref(), options.clone()).load()
}
