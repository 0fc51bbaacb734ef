#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runner and interactive menu.
pub mod apps;
/// Instrumented key comparison.
pub mod compare;
/// Sort keys and session configuration types.
pub mod config;
/// Centralized constants used across the engine, viewer, and ingestion.
pub mod constants;
/// Hotspot record type.
pub mod data;
/// Run counters and serializable reports.
pub mod metrics;
/// Run coordinator.
pub mod run;
/// The eight instrumented sorting algorithms.
pub mod sorting;
/// Data source traits and built-in sources.
pub mod source;
/// Input transports used by sources (filesystem today).
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Text normalization and formatting helpers.
pub mod utils;
/// Paginated viewer over a finished run.
pub mod viewer;

mod errors;

pub use compare::{SortContext, compare_by_key};
pub use config::{CsvOptions, RunOptions, SessionConfig, SortKey, ViewerOptions};
pub use data::{FireRecord, RecordField};
pub use errors::SortError;
pub use metrics::{RunReport, SortCounters};
pub use run::{SortRun, run_sort};
pub use sorting::{Algorithm, SortOutcome};
pub use source::{CsvFileSource, InMemorySource, RecordSource, load_csv};
pub use transport::{DatasetCatalog, discover_datasets};
pub use types::{DatasetLabel, FieldValue, RecordLine, SourceId};
pub use viewer::{Page, PagePresenter, PageViewer, TerminalPresenter, ViewerState};
