/// Matcher configuration
/// Loaded from a TOML file; every field has a default so an empty file is valid

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MatcherError;
use crate::models::TenderCriteria;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Suggestions per request
    #[serde(default = "default_count")]
    pub count: usize,

    /// Fixed RNG seed; random when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Generations used by `sample`
    #[serde(default = "default_runs")]
    pub runs: usize,

    #[serde(default)]
    pub criteria: TenderCriteria,
}

fn default_count() -> usize {
    12
}
fn default_runs() -> usize {
    200
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
            runs: default_runs(),
            criteria: TenderCriteria::default(),
        }
    }
}

impl MatcherConfig {
    pub fn load_from(path: &Path) -> Result<Self, MatcherError> {
        let content = fs::read_to_string(path).map_err(|source| MatcherError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, MatcherError> {
        Ok(toml::from_str(content)?)
    }
}
