use std::path::PathBuf;

use thiserror::Error;

/// Error surfaced when a route table or snapshot file cannot be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unsupported file extension for {0}; expected .json, .yaml or .yml")]
    UnsupportedFormat(PathBuf),
}
