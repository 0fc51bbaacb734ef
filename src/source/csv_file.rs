use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::CsvOptions;
use crate::constants::ingestion::FIELD_COUNT;
use crate::data::{FieldValue, FireRecord};
use crate::errors::SortError;
use crate::source::RecordSource;
use crate::types::SourceId;
use crate::utils::trim_field;

/// Delimited text file with one record per line, nine positional fields.
#[derive(Clone, Debug)]
pub struct CsvFileSource {
    id: SourceId,
    path: PathBuf,
    options: CsvOptions,
}

impl CsvFileSource {
    /// Source for `path`, identified by its file stem.
    pub fn new(path: impl Into<PathBuf>, options: CsvOptions) -> Self {
        let path = path.into();
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { id, path, options }
    }

    /// Override the source identifier.
    pub fn with_id(mut self, id: impl Into<SourceId>) -> Self {
        self.id = id.into();
        self
    }

    /// File this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> SortError {
        SortError::SourceUnavailable {
            source_id: self.id.clone(),
            reason: format!("{}: {}", self.path.display(), reason),
        }
    }
}

impl RecordSource for CsvFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<FireRecord>, SortError> {
        debug!(source = %self.id, path = %self.path.display(), "loading dataset");
        let file = File::open(&self.path).map_err(|err| self.unavailable(err))?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|err| self.unavailable(err))?;
            let line_no = idx + 1;
            if idx == 0 && self.options.has_header {
                continue;
            }
            // Non-UTF-8 bytes become U+FFFD; the row is kept.
            let text = String::from_utf8_lossy(&line);
            if text.trim().is_empty() {
                continue;
            }
            match parse_row(&text, &self.options, line_no)? {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    debug!(source = %self.id, line = line_no, "skipping short row");
                }
            }
        }

        info!(
            source = %self.id,
            records = records.len(),
            skipped,
            "dataset loaded"
        );
        Ok(records)
    }
}

/// Parse one dataset line into a record.
///
/// Returns `Ok(None)` for rows with fewer than nine fields. Fields past the
/// ninth are ignored. Empty fields between adjacent delimiters are kept so
/// positions never shift.
pub fn parse_row(
    line: &str,
    options: &CsvOptions,
    line_no: usize,
) -> Result<Option<FireRecord>, SortError> {
    let mut fields: Vec<FieldValue> = Vec::with_capacity(FIELD_COUNT);
    for raw in line.split(options.delimiter).take(FIELD_COUNT) {
        let value = trim_field(raw);
        if let Some(max) = options.max_field_len
            && value.len() > max
        {
            return Err(SortError::FieldTooLong {
                line: line_no,
                field: fields.len() + 1,
                len: value.len(),
                max,
            });
        }
        fields.push(value.to_string());
    }
    let Ok(fields) = <[FieldValue; FIELD_COUNT]>::try_from(fields) else {
        return Ok(None);
    };
    Ok(Some(FireRecord::from_fields(fields)))
}
