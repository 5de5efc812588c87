//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lunr search store loader CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (default: lunr-store.toml, optional)
    #[arg(short = 'C', long, default_value = "lunr-store.toml")]
    pub config: PathBuf,

    /// Abort on the first invalid record
    #[arg(long, global = true, conflicts_with = "lenient")]
    pub strict: bool,

    /// Skip invalid records and keep loading
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Fail when the store contains no records
    #[arg(long, global = true)]
    pub require_records: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a store and report skipped records
    Check {
        /// Store file (`lunr-store.js` or a JSON array)
        input: PathBuf,
    },

    /// Print the records of a store
    List {
        /// Store file (`lunr-store.js` or a JSON array)
        input: PathBuf,

        /// Only records with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only records in this category
        #[arg(long)]
        category: Option<String>,

        /// Only records with this category or tag
        #[arg(long)]
        label: Option<String>,

        /// Add the excerpt, stripped of markup, as a third column
        #[arg(short, long)]
        excerpt: bool,
    },

    /// Load a store and write it back out normalized
    Emit {
        /// Store file (`lunr-store.js` or a JSON array)
        input: PathBuf,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a bare JSON array instead of a script
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        json: Option<bool>,

        /// Variable name of the script envelope
        #[arg(long)]
        variable: Option<String>,
    },
}
