// Model source trait: how the pipeline acquires its fitted topic model.
//
// No validation of the model's internals happens here beyond deserializing
// it and checking that the artifact version is one this build reads.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use super::keyword::{KeywordTopicModel, SUPPORTED_FORMAT_VERSION};
use super::traits::TopicModel;
use crate::error::PipelineError;

pub trait ModelSource {
    /// Load the fitted model. Any failure is `ModelUnavailable`.
    fn load(&self) -> Result<Box<dyn TopicModel>, PipelineError>;
}

/// Reads a serialized keyword topic model from disk.
pub struct FileModelSource {
    path: PathBuf,
}

impl FileModelSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModelSource for FileModelSource {
    fn load(&self) -> Result<Box<dyn TopicModel>, PipelineError> {
        info!(path = %self.path.display(), "Loading topic extraction model...");

        let model = read_keyword_model(&self.path)
            .map_err(|e| PipelineError::model_unavailable(&self.path, &e))?;

        info!(
            topics = model.topics.len(),
            name = model.name.as_deref().unwrap_or("unnamed"),
            "Model loaded"
        );
        Ok(Box::new(model))
    }
}

/// Just enough of the artifact to decide whether the rest is readable.
#[derive(Deserialize)]
struct ArtifactHeader {
    format_version: u32,
}

/// Read and deserialize a keyword model artifact, rejecting versions from an
/// incompatible trainer before attempting the full schema.
pub fn read_keyword_model(path: &Path) -> Result<KeywordTopicModel> {
    let text = std::fs::read_to_string(path).context("reading model artifact")?;

    let header: ArtifactHeader =
        serde_json::from_str(&text).context("parsing model artifact header")?;
    if header.format_version != SUPPORTED_FORMAT_VERSION {
        bail!(
            "artifact format version {} is not supported (expected {})",
            header.format_version,
            SUPPORTED_FORMAT_VERSION
        );
    }

    serde_json::from_str(&text).context("parsing model artifact")
}
