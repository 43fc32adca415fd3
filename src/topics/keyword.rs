// Keyword topic model: the fitted artifact exported by the training job.
//
// Each topic is a label plus a weighted keyword set. A document's score for a
// topic is the summed weight of its tokens that are keywords of that topic,
// divided by the document's token count so long descriptions don't dominate.
// The artifact also fixes what the model hands back per document: a single
// label, a ranked list of labels, or the normalized score vector.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::{TopicModel, TopicResult};

/// Artifact version this build knows how to read.
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// Shape of the per-document result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// The best-scoring topic label (a string, or the fallback).
    #[default]
    Label,
    /// Up to `top_n` labels scoring above `min_score`, best first.
    Labels,
    /// One normalized score per topic, in topic order.
    Distribution,
}

/// A single topic: a human-readable label and its weighted keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDefinition {
    pub label: String,
    /// Lowercase keyword -> weight
    pub keywords: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTopicModel {
    pub format_version: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub output: OutputMode,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// A topic must score strictly above this to be reported.
    #[serde(default)]
    pub min_score: f64,
    /// Label used in `label` mode when no topic clears `min_score`.
    #[serde(default)]
    pub fallback_label: Option<String>,
    pub topics: Vec<TopicDefinition>,
}

fn default_top_n() -> usize {
    3
}

impl KeywordTopicModel {
    /// Build a model in the current artifact version with default settings.
    pub fn new(topics: Vec<TopicDefinition>) -> Self {
        Self {
            format_version: SUPPORTED_FORMAT_VERSION,
            name: None,
            output: OutputMode::default(),
            top_n: default_top_n(),
            min_score: 0.0,
            fallback_label: None,
            topics,
        }
    }

    /// Per-topic scores for one cleaned document, in topic order.
    ///
    /// Fails on a document with no tokens. The trainer never produced such
    /// rows, so one showing up means the cleaning step upstream went wrong.
    pub fn score(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = tokenize(document);
        if tokens.is_empty() {
            bail!("document is empty");
        }
        let n = tokens.len() as f64;

        Ok(self
            .topics
            .iter()
            .map(|topic| {
                let hits: f64 = tokens
                    .iter()
                    .filter_map(|tok| topic.keywords.get(tok.as_str()))
                    .sum();
                hits / n
            })
            .collect())
    }

    fn to_result(&self, scores: &[f64]) -> TopicResult {
        match self.output {
            OutputMode::Label => match ranked(scores).first() {
                Some(&best) if scores[best] > self.min_score => {
                    Value::String(self.topics[best].label.clone())
                }
                _ => self
                    .fallback_label
                    .clone()
                    .map(Value::String)
                    .unwrap_or(Value::Null),
            },
            OutputMode::Labels => Value::Array(
                ranked(scores)
                    .into_iter()
                    .filter(|&i| scores[i] > self.min_score)
                    .take(self.top_n)
                    .map(|i| Value::String(self.topics[i].label.clone()))
                    .collect(),
            ),
            OutputMode::Distribution => {
                let total: f64 = scores.iter().sum();
                Value::Array(
                    scores
                        .iter()
                        .map(|&s| Value::from(if total > 0.0 { s / total } else { 0.0 }))
                        .collect(),
                )
            }
        }
    }
}

impl TopicModel for KeywordTopicModel {
    fn transform(&self, documents: &[String]) -> Result<Vec<TopicResult>> {
        documents
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                let scores = self.score(doc).with_context(|| format!("document {i}"))?;
                Ok(self.to_result(&scores))
            })
            .collect()
    }
}

/// Topic indices ordered by descending score. The sort is stable, so ties
/// keep topic order.
fn ranked(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Split cleaned text into lowercase tokens. Edge punctuation is stripped,
/// except `+` and `#` so names like `c++` and `c#` survive.
fn tokenize(document: &str) -> Vec<String> {
    document
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}
