use serde::{Deserialize, Serialize};

use crate::constants::engine::BOGO_MAX_ATTEMPTS;
use crate::constants::ingestion::FIELD_DELIMITER;
use crate::constants::viewer::PAGE_SIZE;
use crate::data::RecordField;
use crate::errors::SortError;

/// Field that defines the sort order of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Administrative region (state).
    Region,
    /// Municipality name.
    Municipality,
    /// Biome name.
    Biome,
    /// Observation timestamp, compared as text.
    Timestamp,
}

impl SortKey {
    /// Every key in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Municipality,
        SortKey::Biome,
        SortKey::Timestamp,
        SortKey::Region,
    ];

    /// Record field compared under this key.
    pub fn field(self) -> RecordField {
        match self {
            SortKey::Region => RecordField::Region,
            SortKey::Municipality => RecordField::Municipality,
            SortKey::Biome => RecordField::Biome,
            SortKey::Timestamp => RecordField::Timestamp,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Region => "region",
            SortKey::Municipality => "municipality",
            SortKey::Biome => "biome",
            SortKey::Timestamp => "timestamp",
        }
    }
}

/// Parsing rules for delimited dataset files.
#[derive(Clone, Debug)]
pub struct CsvOptions {
    /// Field separator.
    pub delimiter: char,
    /// Skip the first line of each file.
    pub has_header: bool,
    /// Reject rows with any field longer than this many bytes (`None` = unbounded).
    pub max_field_len: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
            has_header: true,
            max_field_len: None,
        }
    }
}

/// Per-run engine settings.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Shuffle attempts bogo sort may make before reporting non-convergence.
    pub bogo_max_attempts: u64,
    /// Seed for bogo shuffles; `None` draws fresh entropy for every run.
    pub bogo_seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            bogo_max_attempts: BOGO_MAX_ATTEMPTS,
            bogo_seed: None,
        }
    }
}

/// Paginated viewer settings.
#[derive(Clone, Debug)]
pub struct ViewerOptions {
    /// Records emitted per page.
    pub page_size: usize,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}

/// Top-level session configuration.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Dataset parsing rules.
    pub csv: CsvOptions,
    /// Engine settings.
    pub run: RunOptions,
    /// Viewer settings.
    pub viewer: ViewerOptions,
}

impl SessionConfig {
    /// Reject settings the engine or viewer cannot operate with.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.viewer.page_size == 0 {
            return Err(SortError::Configuration(
                "page size must be greater than zero".into(),
            ));
        }
        if self.run.bogo_max_attempts == 0 {
            return Err(SortError::Configuration(
                "bogo attempt limit must be greater than zero".into(),
            ));
        }
        if self.csv.max_field_len == Some(0) {
            return Err(SortError::Configuration(
                "maximum field length must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
