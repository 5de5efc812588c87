//! `[emit]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[emit]` section in lunr-store.toml - output format of `emit`.
///
/// # Example
/// ```toml
/// [emit]
/// variable = "store"
/// json = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    /// Variable name of the `var <name> = [...]` envelope.
    #[serde(default = "defaults::emit::variable")]
    #[educe(Default = defaults::emit::variable())]
    pub variable: String,

    /// Write a bare JSON array instead of a script.
    #[serde(default = "defaults::r#false")]
    pub json: bool,
}
