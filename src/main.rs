//! lunr-store - check, list and re-emit the search store of a static blog.

use anyhow::{Result, bail};
use clap::Parser;
use lunr_store::{
    cli::{Cli, Commands},
    commands::{ListFilter, check_store, emit_store, list_store, load},
    config::StoreConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Check { input } => {
            let loaded = check_store(input, &config)?;
            if loaded.store.is_empty() && !loaded.skipped.is_empty() {
                bail!("No valid records in {}", input.display());
            }
            Ok(())
        }
        Commands::List {
            input,
            tag,
            category,
            label,
            excerpt,
        } => {
            let loaded = load(input, &config)?;
            let filter = ListFilter {
                tag: tag.as_deref(),
                category: category.as_deref(),
                label: label.as_deref(),
                excerpt: *excerpt,
            };
            list_store(&loaded.store, &filter, &mut std::io::stdout().lock())?;
            Ok(())
        }
        Commands::Emit { input, output, .. } => {
            let loaded = load(input, &config)?;
            emit_store(&loaded.store, &config, output.as_deref())
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; defaults are used instead.
fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let mut config = if cli.config.exists() {
        StoreConfig::from_path(&cli.config)?
    } else {
        StoreConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;
    Ok(config)
}
