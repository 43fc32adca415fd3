// Pipeline error taxonomy.
//
// Every failure in a run is fatal. Internals build anyhow errors with context;
// each component boundary folds them into one of these variants so the caller
// can tell which stage gave up.

use std::path::PathBuf;

use thiserror::Error;

use crate::output::FORMAT_NAMES;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The dataset file is missing or can't be read as a table with the
    /// required text columns.
    #[error("dataset unavailable at {}: {reason}", .path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    /// The model artifact is missing, corrupt, or from an incompatible producer.
    #[error("topic model unavailable at {}: {reason}", .path.display())]
    ModelUnavailable { path: PathBuf, reason: String },

    #[error("unsupported output format '{0}' (expected one of: {})", FORMAT_NAMES)]
    UnsupportedFormat(String),

    /// The model failed during transform or returned the wrong number of results.
    #[error("topic inference failed: {0}")]
    InferenceFailure(String),

    #[error("could not write results to {destination}: {source}")]
    WriteFailure {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub(crate) fn data_unavailable(path: impl Into<PathBuf>, err: &anyhow::Error) -> Self {
        PipelineError::DataUnavailable {
            path: path.into(),
            reason: format!("{err:#}"),
        }
    }

    pub(crate) fn model_unavailable(path: impl Into<PathBuf>, err: &anyhow::Error) -> Self {
        PipelineError::ModelUnavailable {
            path: path.into(),
            reason: format!("{err:#}"),
        }
    }
}
