//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or checking `lunr-store.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid lunr-store.toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid lunr-store.toml setting {0}")]
    Validation(String),
}
