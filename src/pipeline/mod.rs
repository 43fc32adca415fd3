// The batch inference pipeline: inference step and full-run orchestration.

pub mod inference;
pub mod run;

pub use inference::infer;
pub use run::run;
