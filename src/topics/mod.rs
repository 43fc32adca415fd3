// Topic models: the trait the pipeline consumes, the keyword model
// implementation, and loading it from disk.

pub mod keyword;
pub mod source;
pub mod traits;

pub use keyword::{KeywordTopicModel, OutputMode, TopicDefinition};
pub use source::{FileModelSource, ModelSource};
pub use traits::{TopicModel, TopicResult};
