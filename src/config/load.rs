//! `[load]` section configuration.

use super::defaults;
use crate::loader::{LoadOptions, Policy};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[load]` section in lunr-store.toml - validation behavior.
///
/// # Example
/// ```toml
/// [load]
/// policy = "strict"
/// require_records = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    /// `strict` aborts on the first invalid record, `lenient` skips it.
    #[serde(default = "defaults::load::policy")]
    #[educe(Default = defaults::load::policy())]
    pub policy: Policy,

    /// Treat a store without records as an error.
    #[serde(default = "defaults::r#false")]
    pub require_records: bool,
}

impl LoadConfig {
    pub const fn options(&self) -> LoadOptions {
        LoadOptions {
            policy: self.policy,
            require_records: self.require_records,
        }
    }
}
