use crate::error::{Result, ShiftError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Extensions (with the leading dot) that are never scanned or renamed.
    /// Compared exactly and case-sensitively.
    #[serde(default = "default_excluded_extensions")]
    pub excluded_extensions: Vec<String>,

    /// What to do when the operator types something that is not an integer
    #[serde(default)]
    pub on_invalid_count: InvalidCountPolicy,

    /// Pause after the completion message, in milliseconds
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidCountPolicy {
    /// Log the diagnostic and continue with a count of zero
    #[default]
    Proceed,
    /// Treat the bad input as fatal
    Abort,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_extensions: default_excluded_extensions(),
            on_invalid_count: InvalidCountPolicy::default(),
            exit_delay_ms: default_exit_delay_ms(),
        }
    }
}

fn default_excluded_extensions() -> Vec<String> {
    vec![".exe".to_string(), ".rs".to_string()]
}

fn default_exit_delay_ms() -> u64 {
    2000
}

impl Config {
    /// Load config from `path` if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ShiftError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        toml::from_str(&content).map_err(|e| ShiftError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    /// Whether a file with this extension must be left alone
    pub fn is_excluded(&self, extension: &str) -> bool {
        !extension.is_empty() && self.excluded_extensions.iter().any(|e| e == extension)
    }
}
