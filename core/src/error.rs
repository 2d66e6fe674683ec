//! Error types for candidate extraction.
//!
//! Extraction itself never fails; these cover the edges where input is read,
//! configuration is loaded, and candidates are serialized.

use thiserror::Error;

/// Errors that can occur while loading input or writing candidates.
#[derive(Debug, Error)]
pub enum FlagCandsError {
    /// File or stream I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Extractor configuration rejected by validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`FlagCandsError`].
pub type Result<T> = std::result::Result<T, FlagCandsError>;
