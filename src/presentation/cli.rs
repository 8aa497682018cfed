//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Engine;

/// tb-vulcanize - build the single-file TensorBoard frontend
#[derive(Parser, Debug)]
#[command(name = "tb-vulcanize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten the entry document and write the bundle
    Bundle {
        /// Write the canonical name instead of the variant-suffixed one
        #[arg(long)]
        overwrite: bool,

        /// Project root (holds the components directory)
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Config file (defaults to <root>/tb-vulcanize.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Flattening engine
        #[arg(long, value_enum)]
        engine: Option<Engine>,
    },

    /// Show redirects, exclusions and the output path without flattening
    Plan {
        /// Plan for the canonical output name
        #[arg(long)]
        overwrite: bool,

        /// Project root (holds the components directory)
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Config file (defaults to <root>/tb-vulcanize.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
