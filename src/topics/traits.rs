// Topic model trait: the swap-ready abstraction over a fitted pipeline.
//
// The pipeline never looks inside the model. Anything that can turn cleaned
// text into one topic result per document can stand behind this trait: the
// keyword model shipped here, or a test double.

use anyhow::Result;

/// One inference output. Its shape (a label, a list of labels, a probability
/// vector) belongs to the model; the pipeline only attaches and renders it.
pub type TopicResult = serde_json::Value;

pub trait TopicModel {
    /// Transform cleaned documents into topic results.
    ///
    /// Implementations return exactly one result per document, in input order.
    /// An error fails the whole call; there is no per-document isolation.
    fn transform(&self, documents: &[String]) -> Result<Vec<TopicResult>>;
}
