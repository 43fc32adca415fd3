use std::env;
use std::path::PathBuf;

/// Where the Git track dataset lives unless overridden.
pub const DEFAULT_DATASET_PATH: &str = "data/git_track_dataset.json";

/// Where the fitted topic model lives unless overridden.
pub const DEFAULT_MODEL_PATH: &str = "models/topic_model.json";

/// Default log filter when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "repotopics=info";

/// Input locations for a run.
///
/// The dataset and model sit at fixed, pre-agreed paths. Environment variables
/// (optionally from a .env file, loaded at startup via dotenvy) can point a
/// deployment elsewhere; they are not part of the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// fixed locations.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path_or = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Self {
            dataset_path: path_or("REPOTOPICS_DATASET_PATH", defaults.dataset_path),
            model_path: path_or("REPOTOPICS_MODEL_PATH", defaults.model_path),
        }
    }
}
