//! Subcommand implementations.
//!
//! Each command loads the store once, then only reads it. Diagnostics go
//! through `log!` (stderr); store output is written to the given writer.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};

use crate::{
    config::StoreConfig,
    data::{PostRecord, RecordStore},
    loader::{self, Loaded, script},
    log,
};

/// Filters and columns of the `list` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter<'a> {
    pub tag: Option<&'a str>,
    pub category: Option<&'a str>,
    /// Category or tag
    pub label: Option<&'a str>,
    /// Append the plain-text excerpt as a third column
    pub excerpt: bool,
}

/// Load the store named on the command line with the configured policy.
///
/// Skipped records and an empty result are reported on the log.
pub fn load(input: &Path, config: &StoreConfig) -> Result<Loaded> {
    let loaded = loader::load_path(input, &config.load_options())
        .with_context(|| format!("Failed to load store from {}", input.display()))?;

    for skipped in &loaded.skipped {
        log!("load"; "skipped {skipped}");
    }
    if loaded.store.is_empty() {
        log!("load"; "store is empty, search will return no results");
    }

    Ok(loaded)
}

/// Validate a store and report what was loaded and skipped.
pub fn check_store(input: &Path, config: &StoreConfig) -> Result<Loaded> {
    let loaded = load(input, config)?;

    log!(
        "check";
        "{} records, {} skipped, {} categories, {} tags",
        loaded.store.len(),
        loaded.skipped.len(),
        loaded.store.categories_index().len(),
        loaded.store.tags_index().len()
    );

    Ok(loaded)
}

/// Write `url<TAB>title[<TAB>excerpt]` lines for records matching the filter.
pub fn list_store(store: &RecordStore, filter: &ListFilter, out: &mut impl Write) -> Result<usize> {
    let matches = |record: &&PostRecord| {
        filter.tag.is_none_or(|t| record.tags.contains(t))
            && filter.category.is_none_or(|c| record.categories.contains(c))
    };
    let records: Box<dyn Iterator<Item = &PostRecord> + '_> = match filter.label {
        Some(label) => Box::new(store.with_label(label)),
        None => Box::new(store.iter()),
    };

    let mut count = 0;
    for record in records.filter(matches) {
        if filter.excerpt {
            writeln!(out, "{}\t{}\t{}", record.url, record.title, record.plain_excerpt())?;
        } else {
            writeln!(out, "{}\t{}", record.url, record.title)?;
        }
        count += 1;
    }
    Ok(count)
}

/// Serialize the store in the configured output format.
pub fn render_store(store: &RecordStore, config: &StoreConfig) -> Result<String> {
    let text = if config.emit.json {
        let mut json = script::to_json(store)?;
        json.push('\n');
        json
    } else {
        script::to_script(store, &config.emit.variable)?
    };
    Ok(text)
}

/// Write the rendered store to `out`; nothing else is written to it.
pub fn write_store(store: &RecordStore, config: &StoreConfig, out: &mut impl Write) -> Result<()> {
    out.write_all(render_store(store, config)?.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write the rendered store to `output`, or stdout when it is `None`.
pub fn emit_store(store: &RecordStore, config: &StoreConfig, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to write store to {}", path.display()))?;
            write_store(store, config, &mut file)?;
            log!("emit"; "{} records -> {}", store.len(), path.display());
        }
        None => write_store(store, config, &mut std::io::stdout().lock())?,
    }
    Ok(())
}
