// Dataset source trait: where the pipeline gets its rows from.
//
// The CLI reads a file at a fixed location. Tests substitute in-memory
// sources without touching the filesystem.

use std::path::PathBuf;

use tracing::info;

use super::loader;
use super::model::Dataset;
use crate::error::PipelineError;

pub trait DatasetSource {
    /// Load the full dataset. Any failure is `DataUnavailable`.
    fn load(&self) -> Result<Dataset, PipelineError>;
}

/// Reads the dataset from a file on disk.
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDatasetSource {
    fn load(&self) -> Result<Dataset, PipelineError> {
        info!(path = %self.path.display(), "Reading track dataset...");

        let dataset = loader::load_file(&self.path)
            .map_err(|e| PipelineError::data_unavailable(&self.path, &e))?;

        info!(rows = dataset.len(), "Dataset loaded");
        Ok(dataset)
    }
}

/// An already-loaded dataset can serve as its own source.
impl DatasetSource for Dataset {
    fn load(&self) -> Result<Dataset, PipelineError> {
        Ok(self.clone())
    }
}
