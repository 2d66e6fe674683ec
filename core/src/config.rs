//! Extractor configuration.
//!
//! Controls how help lines are classified and where descriptions are cut.
//! Both fields are optional in YAML and fall back to the build-tool help
//! conventions.
//!
//! # Example YAML
//!
//! ```yaml
//! marker: "-"
//! sentence_terminator: "."
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlagCandsError, Result};

/// Character that starts a flag-definition line.
pub const DEFAULT_MARKER: char = '-';

/// Character that ends the first sentence of a description.
pub const DEFAULT_SENTENCE_TERMINATOR: char = '.';

/// Line classification and truncation settings for the extractor.
///
/// # Examples
///
/// ```
/// use flag_cands_core::ExtractorConfig;
///
/// let config: ExtractorConfig = serde_yaml::from_str("marker: '+'").unwrap();
/// assert_eq!(config.marker, '+');
/// assert_eq!(config.sentence_terminator, '.');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// A line whose first character is this marker begins a new flag.
    pub marker: char,
    /// Descriptions are cut before the first occurrence of this character.
    pub sentence_terminator: char,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            sentence_terminator: DEFAULT_SENTENCE_TERMINATOR,
        }
    }
}

impl ExtractorConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](FlagCandsError::IoError) if the file cannot be
    /// read, [`YamlError`](FlagCandsError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](FlagCandsError::InvalidConfig) if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects whitespace markers and terminators.
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_whitespace() {
            return Err(FlagCandsError::InvalidConfig(
                "marker must not be whitespace".to_string(),
            ));
        }
        if self.sentence_terminator.is_whitespace() {
            return Err(FlagCandsError::InvalidConfig(
                "sentence_terminator must not be whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
