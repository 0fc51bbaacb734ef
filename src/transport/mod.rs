/// Dataset discovery on the local filesystem.
pub mod fs;

pub use fs::{DatasetCatalog, discover_datasets};
