//! Configuration management for `lunr-store.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[load]`   | Validation policy, empty-store handling   |
//! | `[emit]`   | Output format of the `emit` command       |
//!
//! The file is optional; every field has a default and CLI flags override it.
//!
//! # Example
//!
//! ```toml
//! [load]
//! policy = "strict"
//!
//! [emit]
//! variable = "store"
//! ```

pub mod defaults;
mod emit;
mod error;
mod load;

pub use emit::EmitConfig;
pub use error::ConfigError;
pub use load::LoadConfig;

use crate::cli::{Cli, Commands};
use crate::loader::{LoadOptions, Policy, script};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Root configuration structure representing lunr-store.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Loader settings
    #[serde(default)]
    pub load: LoadConfig,

    /// Output settings
    #[serde(default)]
    pub emit: EmitConfig,
}

impl StoreConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Options for the loader
    pub const fn load_options(&self) -> LoadOptions {
        self.load.options()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if cli.strict {
            self.load.policy = Policy::Strict;
        } else if cli.lenient {
            self.load.policy = Policy::Lenient;
        }
        if cli.require_records {
            self.load.require_records = true;
        }

        if let Commands::Emit { json, variable, .. } = &cli.command {
            Self::update_option(&mut self.emit.json, json.as_ref());
            Self::update_option(&mut self.emit.variable, variable.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.emit.json && !script::is_valid_variable(&self.emit.variable) {
            bail!(ConfigError::Validation(format!(
                "[emit.variable] `{}` is not a valid script identifier",
                self.emit.variable
            )));
        }
        Ok(())
    }
}
