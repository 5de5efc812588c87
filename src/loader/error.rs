//! Loader error types.

use std::path::PathBuf;
use thiserror::Error;

/// A problem with a single element of the store.
///
/// In lenient mode these are collected as skipped records instead of
/// aborting the load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record #{index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("record #{index} duplicates url `{url}` of record #{first}")]
    DuplicateUrl {
        index: usize,
        url: String,
        first: usize,
    },
}

impl RecordError {
    /// Position of the offending element in the input array.
    pub const fn index(&self) -> usize {
        match self {
            Self::MalformedRecord { index, .. } | Self::DuplicateUrl { index, .. } => *index,
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}

/// Errors that abort loading a store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("store is not a valid JSON array")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("store contains no records")]
    EmptyStore,
}
