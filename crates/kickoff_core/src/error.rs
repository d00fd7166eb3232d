use std::path::PathBuf;

use thiserror::Error;

/// Failure loading or validating a match configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// The file was readable and well-formed but the values are unusable
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::Invalid(_))
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
