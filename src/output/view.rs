use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::PipelineError;
use crate::topics::TopicResult;

/// One output record: a row's raw text and the topic the model gave it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow<'a> {
    pub full_text: &'a str,
    pub topic: &'a TopicResult,
}

/// Dataset rows paired with their topic results, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultView<'a> {
    rows: Vec<ResultRow<'a>>,
}

impl<'a> ResultView<'a> {
    /// Pair row `i` with result `i`. The two sequences must be the same length.
    pub fn pair(dataset: &'a Dataset, topics: &'a [TopicResult]) -> Result<Self, PipelineError> {
        if dataset.len() != topics.len() {
            return Err(PipelineError::InferenceFailure(format!(
                "{} topic results for {} dataset rows",
                topics.len(),
                dataset.len()
            )));
        }

        let rows = dataset
            .records()
            .iter()
            .zip(topics)
            .map(|(record, topic)| ResultRow {
                full_text: &record.full_text,
                topic,
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ResultRow<'a>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
