//! Search store data.
//!
//! The store is the array lunr.js indexes at page load:
//!
//! ```text
//! var store = [{
//!     "title": "...",
//!     "excerpt": "...",
//!     "categories": [],
//!     "tags": [],
//!     "url": "/first-post/",
//!     "teaser": null
//! }, ...];
//! ```
//!
//! `title`/`excerpt` feed full-text search, `categories`/`tags` are used for
//! filtering, `url` is the result link and `teaser` the display image.
//! The store is constructed explicitly and handed to consumers by reference.

mod store;
mod types;

pub use store::{LabelIndex, RecordStore};
pub use types::{Labels, PostRecord, strip_markup};
