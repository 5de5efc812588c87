//! Record store loader.
//!
//! Turns the serialized store (bare JSON array or `var store = [...];`)
//! into a validated [`RecordStore`], preserving input order.
//!
//! # Validation
//!
//! | Problem                             | Error             |
//! |-------------------------------------|-------------------|
//! | element is not an object            | `MalformedRecord` |
//! | `title` or `url` missing or empty   | `MalformedRecord` |
//! | field of the wrong type             | `MalformedRecord` |
//! | `url` already used by a record      | `DuplicateUrl`    |
//! | no records and `require_records`    | `EmptyStore`      |
//!
//! With [`Policy::Strict`] the first bad record aborts the load. With
//! [`Policy::Lenient`] it is skipped and reported in [`Loaded::skipped`];
//! for duplicates the first occurrence is kept.

mod error;
pub mod script;

pub use error::{LoadError, RecordError};

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{PostRecord, RecordStore};

/// What to do with a record that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Abort on the first bad record
    Strict,
    /// Skip bad records and keep going
    #[default]
    Lenient,
}

/// Options controlling a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub policy: Policy,
    /// Report an empty result as [`LoadError::EmptyStore`]
    pub require_records: bool,
}

impl LoadOptions {
    pub const fn strict() -> Self {
        Self {
            policy: Policy::Strict,
            require_records: false,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            policy: Policy::Lenient,
            require_records: false,
        }
    }
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub store: RecordStore,
    /// Records dropped in lenient mode, in input order
    pub skipped: Vec<RecordError>,
}

/// Load a store from a file.
pub fn load_path(path: &Path, options: &LoadOptions) -> Result<Loaded, LoadError> {
    let content =
        fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;
    load_str(&content, options)
}

/// Load a store from its serialized form.
///
/// Pure: nothing is printed, skipped records are only returned.
pub fn load_str(input: &str, options: &LoadOptions) -> Result<Loaded, LoadError> {
    let elements: Vec<Value> = serde_json::from_str(script::strip_envelope(input))?;

    let mut records = Vec::with_capacity(elements.len());
    let mut skipped = Vec::new();
    // url -> input index of its first occurrence
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    for (index, element) in elements.into_iter().enumerate() {
        let result = parse_record(index, element).and_then(|record| match seen.get(&record.url) {
            Some(&first) => Err(RecordError::DuplicateUrl {
                index,
                url: record.url,
                first,
            }),
            None => Ok(record),
        });

        match result {
            Ok(record) => {
                seen.insert(record.url.clone(), index);
                records.push(record);
            }
            Err(err) if options.policy == Policy::Lenient => skipped.push(err),
            Err(err) => return Err(err.into()),
        }
    }

    if records.is_empty() && options.require_records {
        return Err(LoadError::EmptyStore);
    }

    Ok(Loaded {
        store: RecordStore::from_validated(records),
        skipped,
    })
}

/// Validate a single element and convert it to a record.
fn parse_record(index: usize, element: Value) -> Result<PostRecord, RecordError> {
    let Value::Object(fields) = &element else {
        return Err(RecordError::malformed(index, "not an object"));
    };

    for key in ["title", "url"] {
        match fields.get(key) {
            None | Some(Value::Null) => {
                return Err(RecordError::malformed(index, format!("missing `{key}`")));
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(RecordError::malformed(index, format!("empty `{key}`")));
            }
            Some(Value::String(_)) => {}
            Some(_) => {
                return Err(RecordError::malformed(index, format!("`{key}` is not a string")));
            }
        }
    }

    serde_json::from_value(element).map_err(|err| RecordError::malformed(index, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trimmed copy of a generated `lunr-store.js`.
    const GENERATED: &str = r#"var store = [{
        "title": "Automating Bare Metal with Terraform & MAAS",
        "excerpt":"Provisioning servers manually is slow and error-prone.   ","categories": [],
        "tags": [],
        "url": "/first-post/",
        "teaser": null
      },{
        "title": "Kubernetes Networking Across On-Prem Datacenters with BGP, ECMP, and BFD",
        "excerpt":"Introduction Kubernetes powers mission-critical applications...","categories": [],
        "tags": [],
        "url": "/k8s-bgp-ecmp-bfd/",
        "teaser": "/assets/images/datacenter-k8s.jpeg"
      }]
"#;

    fn urls(store: &RecordStore) -> Vec<&str> {
        store.iter().map(|r| r.url.as_str()).collect()
    }

    #[test]
    fn test_load_generated_script() {
        let loaded = load_str(GENERATED, &LoadOptions::strict()).unwrap();
        assert_eq!(loaded.store.len(), 2);
        assert!(loaded.skipped.is_empty());
        assert_eq!(urls(&loaded.store), vec!["/first-post/", "/k8s-bgp-ecmp-bfd/"]);

        let second = loaded.store.get("/k8s-bgp-ecmp-bfd/").unwrap();
        assert_eq!(second.teaser.as_deref(), Some("/assets/images/datacenter-k8s.jpeg"));
        assert_eq!(loaded.store.records()[0].teaser, None);
    }

    #[test]
    fn test_minimal_record_defaults() {
        let loaded = load_str(r#"[{"title":"A","url":"/a/"}]"#, &LoadOptions::strict()).unwrap();
        assert_eq!(loaded.store.len(), 1);
        assert_eq!(loaded.store.records()[0], PostRecord::new("A", "/a/"));
    }

    #[test]
    fn test_empty_array() {
        for options in [LoadOptions::strict(), LoadOptions::lenient()] {
            let loaded = load_str("[]", &options).unwrap();
            assert!(loaded.store.is_empty());
            assert!(loaded.skipped.is_empty());
        }
        let loaded = load_str("var store = [];", &LoadOptions::default()).unwrap();
        assert!(loaded.store.is_empty());
    }

    #[test]
    fn test_empty_store_required() {
        let options = LoadOptions {
            require_records: true,
            ..LoadOptions::strict()
        };
        assert!(matches!(load_str("[]", &options), Err(LoadError::EmptyStore)));

        // Everything skipped also leaves nothing behind
        let options = LoadOptions {
            require_records: true,
            ..LoadOptions::lenient()
        };
        let result = load_str(r#"[{"title":"A"}]"#, &options);
        assert!(matches!(result, Err(LoadError::EmptyStore)));
    }

    #[test]
    fn test_missing_url_strict() {
        let result = load_str(
            r#"[{"title":"A","url":"/a/"},{"title":"B"}]"#,
            &LoadOptions::strict(),
        );
        match result {
            Err(LoadError::Record(RecordError::MalformedRecord { index, reason })) => {
                assert_eq!(index, 1);
                assert!(reason.contains("url"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_url_lenient() {
        let loaded = load_str(
            r#"[{"title":"A","url":"/a/"},{"title":"B"},{"title":"C","url":""}]"#,
            &LoadOptions::lenient(),
        )
        .unwrap();
        assert_eq!(urls(&loaded.store), vec!["/a/"]);
        assert_eq!(loaded.skipped.len(), 2);
        assert_eq!(loaded.skipped[0].index(), 1);
        assert_eq!(loaded.skipped[1].index(), 2);
        assert!(loaded.store.iter().all(|r| !r.url.is_empty()));
    }

    #[test]
    fn test_missing_or_empty_title() {
        let result = load_str(r#"[{"url":"/a/"}]"#, &LoadOptions::strict());
        assert!(matches!(
            result,
            Err(LoadError::Record(RecordError::MalformedRecord { index: 0, .. }))
        ));

        let result = load_str(r#"[{"title":"  ","url":"/a/"}]"#, &LoadOptions::strict());
        assert!(matches!(
            result,
            Err(LoadError::Record(RecordError::MalformedRecord { index: 0, .. }))
        ));
    }

    #[test]
    fn test_duplicate_url_strict() {
        let result = load_str(
            r#"[{"title":"A","url":"/x/"},{"title":"B","url":"/x/"}]"#,
            &LoadOptions::strict(),
        );
        match result {
            Err(LoadError::Record(RecordError::DuplicateUrl { index, url, first })) => {
                assert_eq!(index, 1);
                assert_eq!(url, "/x/");
                assert_eq!(first, 0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_url_lenient_keeps_first() {
        let loaded = load_str(
            r#"[{"title":"A","url":"/x/"},{"title":"B","url":"/y/"},{"title":"C","url":"/x/"}]"#,
            &LoadOptions::lenient(),
        )
        .unwrap();
        assert_eq!(urls(&loaded.store), vec!["/x/", "/y/"]);
        assert_eq!(loaded.store.get("/x/").unwrap().title, "A");
        assert_eq!(
            loaded.skipped,
            vec![RecordError::DuplicateUrl {
                index: 2,
                url: "/x/".into(),
                first: 0,
            }]
        );
    }

    #[test]
    fn test_skipped_record_does_not_claim_url() {
        // A malformed record's url must not shadow a later valid one
        let loaded = load_str(
            r#"[{"url":"/x/"},{"title":"B","url":"/x/"}]"#,
            &LoadOptions::lenient(),
        )
        .unwrap();
        assert_eq!(loaded.store.get("/x/").unwrap().title, "B");
        assert_eq!(loaded.skipped.len(), 1);
    }

    #[test]
    fn test_wrong_types_are_malformed() {
        let input = r#"[
            "not an object",
            {"title":"A","url":42},
            {"title":"B","url":"/b/","tags":"rust"},
            {"title":"C","url":"/c/","teaser":7},
            {"title":"D","url":"/d/"}
        ]"#;
        let loaded = load_str(input, &LoadOptions::lenient()).unwrap();
        assert_eq!(urls(&loaded.store), vec!["/d/"]);
        assert_eq!(
            loaded.skipped.iter().map(RecordError::index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert!(
            loaded
                .skipped
                .iter()
                .all(|e| matches!(e, RecordError::MalformedRecord { .. }))
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let loaded = load_str(
            r#"[{"title":"A","url":"/a/","date":"2024-01-15"}]"#,
            &LoadOptions::strict(),
        )
        .unwrap();
        assert_eq!(loaded.store.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        for options in [LoadOptions::strict(), LoadOptions::lenient()] {
            assert!(matches!(load_str("[{", &options), Err(LoadError::Parse(_))));
            assert!(matches!(load_str(r#"{"title":"A"}"#, &options), Err(LoadError::Parse(_))));
            assert!(matches!(load_str("", &options), Err(LoadError::Parse(_))));
        }
    }

    #[test]
    fn test_valid_input_length_preserved() {
        let input = r#"[
            {"title":"C","url":"/c/","tags":["b","a"]},
            {"title":"A","url":"/a/","categories":["ops"]},
            {"title":"B","url":"/b/","excerpt":"<p>hi</p>"}
        ]"#;
        let loaded = load_str(input, &LoadOptions::lenient()).unwrap();
        assert_eq!(loaded.store.len(), 3);
        assert_eq!(urls(&loaded.store), vec!["/c/", "/a/", "/b/"]);
    }

    #[test]
    fn test_idempotent() {
        let first = load_str(GENERATED, &LoadOptions::default()).unwrap();
        let second = load_str(GENERATED, &LoadOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_script_and_json() {
        let input = r#"[
            {"title":"A","url":"/a/","tags":["web","rust"],"categories":["dev"],"teaser":"/a.png"},
            {"title":"B","url":"/b/","excerpt":"<em>x</em> &amp; y"}
        ]"#;
        let loaded = load_str(input, &LoadOptions::strict()).unwrap();

        let script = script::to_script(&loaded.store, script::DEFAULT_VARIABLE).unwrap();
        let reloaded = load_str(&script, &LoadOptions::strict()).unwrap();
        assert_eq!(loaded.store, reloaded.store);

        let json = script::to_json(&loaded.store).unwrap();
        let reloaded = load_str(&json, &LoadOptions::strict()).unwrap();
        assert_eq!(loaded.store, reloaded.store);
    }

    #[test]
    fn test_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lunr-store.js");
        fs::write(&path, GENERATED).unwrap();

        let loaded = load_path(&path, &LoadOptions::strict()).unwrap();
        assert_eq!(loaded.store.len(), 2);

        let missing = load_path(&dir.path().join("missing.js"), &LoadOptions::strict());
        assert!(matches!(missing, Err(LoadError::Io(..))));
    }
}
