// repotopics: batch topic inference for the Git track dataset
//
// This is the library root. Each module is one stage of the run:
// load the dataset, load the fitted model, predict topics, report results.

pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod topics;

pub use error::PipelineError;
