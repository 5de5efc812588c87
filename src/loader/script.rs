//! Script envelope handling.
//!
//! The generated store is a script (`var store = [...];`) so the browser can
//! load it with a plain `<script>` tag. This module strips that envelope on
//! input and writes it back on output.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::RecordStore;

/// Default variable name lunr.js templates read the store from.
pub const DEFAULT_VARIABLE: &str = "store";

/// Matches `var store =`, `let store =` or `const store =` at the start.
static RE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:var|let|const)\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=").unwrap()
});

/// Return the JSON expression inside a script envelope.
///
/// Text without an envelope is returned trimmed.
pub fn strip_envelope(text: &str) -> &str {
    let body = match RE_ASSIGNMENT.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    body.trim().trim_end_matches(';').trim_end()
}

/// Check whether a variable name can be emitted as-is.
pub fn is_valid_variable(name: &str) -> bool {
    static RE_IDENT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
    RE_IDENT.is_match(name)
}

/// Serialize the store as a bare JSON array.
pub fn to_json(store: &RecordStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store.records())
}

/// Serialize the store wrapped in `var <variable> = ...;`.
pub fn to_script(store: &RecordStore, variable: &str) -> serde_json::Result<String> {
    Ok(format!("var {variable} = {};\n", to_json(store)?))
}
