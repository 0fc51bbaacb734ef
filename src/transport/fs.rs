use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::constants::ingestion::DATASET_EXTENSION;
use crate::errors::SortError;
use crate::types::DatasetLabel;

/// Ordered set of selectable datasets, keyed by operator-facing label.
#[derive(Clone, Debug, Default)]
pub struct DatasetCatalog {
    entries: IndexMap<DatasetLabel, PathBuf>,
}

impl DatasetCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog over explicit paths, labelled by file stem, in the given order.
    ///
    /// A stem that is already taken falls back to the full path as its label.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut catalog = Self::new();
        for path in paths {
            let path = path.into();
            let label = dataset_label(&path);
            if catalog.entries.contains_key(&label) {
                catalog.insert(path.display().to_string(), path);
            } else {
                catalog.insert(label, path);
            }
        }
        catalog
    }

    /// Discover every dataset file below `root`, ordered by file name.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self, SortError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SortError::SourceUnavailable {
                source_id: root.display().to_string(),
                reason: "data directory not found".into(),
            });
        }
        let mut found: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| is_dataset_file(path))
            .collect();
        found.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
        for path in &found {
            debug!(path = %path.display(), "discovered dataset");
        }
        info!(root = %root.display(), datasets = found.len(), "dataset discovery finished");
        Ok(Self::from_paths(found))
    }

    /// Add or replace a dataset; returns the previous path for `label`.
    pub fn insert(&mut self, label: impl Into<DatasetLabel>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(label.into(), path.into())
    }

    /// Number of datasets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no dataset is listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path registered under `label`.
    pub fn get(&self, label: &str) -> Option<&Path> {
        self.entries.get(label).map(PathBuf::as_path)
    }

    /// Entry at zero-based menu position `idx`.
    pub fn get_index(&self, idx: usize) -> Option<(&str, &Path)> {
        self.entries
            .get_index(idx)
            .map(|(label, path)| (label.as_str(), path.as_path()))
    }

    /// Entries in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(label, path)| (label.as_str(), path.as_path()))
    }
}

/// Discover every dataset under `root`; see [`DatasetCatalog::discover`].
pub fn discover_datasets(root: impl AsRef<Path>) -> Result<DatasetCatalog, SortError> {
    DatasetCatalog::discover(root)
}

/// True if the path has the dataset extension (case-insensitive).
pub fn is_dataset_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(DATASET_EXTENSION))
        .unwrap_or(false)
}

/// Default label for a dataset path: its file stem.
pub fn dataset_label(path: &Path) -> DatasetLabel {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
