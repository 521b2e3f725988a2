/// Error types for configuration, selection and quote hand-off

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown company size: {0}")]
    UnknownSize(String),

    #[error("Tender information missing, cannot send quote requests")]
    MissingTender,

    #[error("Unknown supplier id: {0}")]
    UnknownSupplier(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
