//! Immutable record store.
//!
//! A `RecordStore` is built once by the loader and then only read. It keeps
//! records in input order and indexes them by URL.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::types::{Labels, PostRecord};

/// Category/tag name mapped to the URLs of the records carrying it.
///
/// Sorted alphabetically by label; URLs keep store order.
pub type LabelIndex<'a> = BTreeMap<&'a str, Vec<&'a str>>;

/// Ordered, read-only sequence of post records with unique URLs.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<PostRecord>,
    /// URL -> position in `records`
    by_url: FxHashMap<String, usize>,
}

impl RecordStore {
    /// Build a store from records whose URLs are already known to be unique.
    ///
    /// Only the loader constructs stores, after validation.
    pub(crate) fn from_validated(records: Vec<PostRecord>) -> Self {
        let by_url = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.url.clone(), i))
            .collect();
        Self { records, by_url }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in input order.
    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostRecord> {
        self.records.iter()
    }

    /// Look up a record by its URL.
    pub fn get(&self, url: &str) -> Option<&PostRecord> {
        self.by_url.get(url).map(|&i| &self.records[i])
    }

    pub fn contains(&self, url: &str) -> bool {
        self.by_url.contains_key(url)
    }

    /// Records carrying `label` as a category or a tag, in store order.
    pub fn with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a PostRecord> {
        self.records.iter().filter(move |r| r.has_label(label))
    }

    /// Build the category index.
    pub fn categories_index(&self) -> LabelIndex<'_> {
        self.index_by(|record| &record.categories)
    }

    /// Build the tag index.
    pub fn tags_index(&self) -> LabelIndex<'_> {
        self.index_by(|record| &record.tags)
    }

    fn index_by<'a, F>(&'a self, labels: F) -> LabelIndex<'a>
    where
        F: Fn(&'a PostRecord) -> &'a Labels,
    {
        let mut index = LabelIndex::new();
        for record in &self.records {
            for label in labels(record) {
                index.entry(label.as_str()).or_default().push(record.url.as_str());
            }
        }
        index
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a PostRecord;
    type IntoIter = std::slice::Iter<'a, PostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl PartialEq for RecordStore {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for RecordStore {}
