//! Loader and validator for the lunr.js search store of a static blog.
//!
//! The store is the generated `lunr-store.js` array of post records. This crate
//! parses it into an immutable [`RecordStore`], enforcing that every record has
//! a title and a unique URL, and writes it back in the same format.
//!
//! ```ignore
//! let loaded = lunr_store::loader::load_str(r#"[{"title":"A","url":"/a/"}]"#, &Default::default())?;
//! assert_eq!(loaded.store.get("/a/").unwrap().title, "A");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod loader;
pub mod logger;

pub use data::{PostRecord, RecordStore};
pub use loader::{LoadError, LoadOptions, Loaded, Policy, RecordError};
