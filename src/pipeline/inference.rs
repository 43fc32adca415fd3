// Inference step: one transform call over the cleaned-text column.
//
// The whole column goes to the model in a single call; batching, if a model
// needs it, happens behind the trait. A model error or a result count that
// doesn't match the row count fails the run: no per-row isolation, no
// truncation, no padding.

use tracing::info;

use crate::dataset::Dataset;
use crate::error::PipelineError;
use crate::topics::{TopicModel, TopicResult};

/// Predict one topic result per dataset row, in row order.
pub fn infer(model: &dyn TopicModel, dataset: &Dataset) -> Result<Vec<TopicResult>, PipelineError> {
    let documents = dataset.cleaned_texts();
    info!(documents = documents.len(), "Predicting topics...");

    let topics = model
        .transform(&documents)
        .map_err(|e| PipelineError::InferenceFailure(format!("{e:#}")))?;

    if topics.len() != documents.len() {
        return Err(PipelineError::InferenceFailure(format!(
            "model returned {} results for {} documents",
            topics.len(),
            documents.len()
        )));
    }

    Ok(topics)
}
