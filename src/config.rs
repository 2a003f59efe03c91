//! Command-line configuration for the `parcelindex` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::ingest::DEFAULT_DATA_FILE;

/// Parcel index: load a parcel data file and query it by country.
#[derive(Debug, Parser)]
#[command(name = "parcelindex", version, about)]
pub struct Cli {
    /// Parcel data file, one `country, weight, value` per line
    #[arg(long, short = 'd', default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Load the data file, print index stats, and exit
    #[arg(long)]
    pub no_repl: bool,
}
