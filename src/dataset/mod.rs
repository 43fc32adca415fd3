// Dataset acquisition: the Git track table of repository descriptions.
//
//  .json / .jsonl / .csv / .parquet
//        │
//        ▼
//   loader    parse file → Dataset (full_text, full_text_cleaned)
//        │
//        ▼
//   source    DatasetSource trait, file-backed implementation

pub mod loader;
pub mod model;
pub mod source;

pub use model::{Dataset, Record};
pub use source::{DatasetSource, FileDatasetSource};

/// Column holding the raw repository description.
pub const RAW_TEXT_COLUMN: &str = "full_text";

/// Column holding the upstream-cleaned text fed to the model.
pub const CLEANED_TEXT_COLUMN: &str = "full_text_cleaned";
