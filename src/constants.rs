/// Constants used by the sorting engine.
pub mod engine {
    /// Maximum number of shuffle attempts bogo sort makes before giving up.
    ///
    /// Fixed across dataset sizes.
    pub const BOGO_MAX_ATTEMPTS: u64 = 1_000_000;
}

/// Constants used by the paginated viewer and its terminal presenter.
pub mod viewer {
    /// Default number of records emitted per page.
    pub const PAGE_SIZE: usize = 200;
    /// Separator placed between fields when a record is printed.
    pub const RECORD_DELIMITER: &str = " ,";
    /// Leading characters of an affirmative continuation answer.
    pub const AFFIRMATIVE_PREFIXES: [char; 2] = ['S', 's'];
}

/// Constants used by dataset ingestion and discovery.
pub mod ingestion {
    /// Number of positional fields every record row must carry.
    pub const FIELD_COUNT: usize = 9;
    /// Default field delimiter for dataset rows.
    pub const FIELD_DELIMITER: char = ',';
    /// Characters trimmed from both ends of each parsed field.
    pub const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];
    /// File extension used when discovering datasets in a directory.
    pub const DATASET_EXTENSION: &str = "csv";
    /// Environment variable consulted for the default data directory.
    pub const DATA_DIR_ENV: &str = "FIRESORT_DATA_DIR";
    /// Source id used by in-memory datasets.
    pub const IN_MEMORY_SOURCE_ID: &str = "in_memory";
}
