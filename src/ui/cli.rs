//! Command-line interface module.
//!
//! This module handles CLI argument parsing and the choice of output writer
//! for the NEO explorer.

use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments for the NEO explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV file of near-Earth objects
    #[arg(long = "neofile", default_value = "data/neos.csv")]
    pub neofile: PathBuf,

    /// Path to the JSON file of close approaches
    #[arg(long = "cadfile", default_value = "data/cad.json")]
    pub cadfile: PathBuf,

    /// Write the linked approaches to this file (.csv or .json) instead of
    /// printing them
    #[arg(short = 'o', long = "outfile")]
    pub outfile: Option<PathBuf>,

    /// Maximum number of approaches to emit
    #[arg(short = 'l', long = "limit")]
    pub limit: Option<usize>,

    /// Default log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

/// Output format picked from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Returns `None` when the extension is neither `csv` nor `json`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
