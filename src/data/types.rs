//! Record types for the search store.
//!
//! These types are serialized to the JSON array consumed by lunr.js.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Labels attached to a post. Ordering is irrelevant, so a sorted set is used.
pub type Labels = BTreeSet<String>;

/// Metadata for a single post, one element of the search store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post title (never empty)
    pub title: String,

    /// Excerpt as generated, may contain markup
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Categories of the post
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Labels,

    /// Tags of the post
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Labels,

    /// Site-relative URL path (e.g., "/k8s-bgp-ecmp-bfd/"), unique in a store
    pub url: String,

    /// Teaser image path, emitted as `null` when absent
    #[serde(default)]
    pub teaser: Option<String>,
}

impl PostRecord {
    /// Create a record with only the required fields set.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: String::new(),
            categories: Labels::new(),
            tags: Labels::new(),
            url: url.into(),
            teaser: None,
        }
    }

    /// Excerpt with markup tags removed and whitespace collapsed.
    pub fn plain_excerpt(&self) -> String {
        strip_markup(&self.excerpt)
    }

    /// Check whether the record carries the given category or tag.
    pub fn has_label(&self, label: &str) -> bool {
        self.categories.contains(label) || self.tags.contains(label)
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Remove `<...>` tags and collapse runs of whitespace into single spaces.
pub fn strip_markup(text: &str) -> String {
    static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
    static RE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

    let text = RE_TAG.replace_all(text, " ");
    RE_SPACE.replace_all(text.trim(), " ").into_owned()
}
