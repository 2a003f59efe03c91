//! Error types for parcelindex
//!
//! The index itself never fails; these errors belong to the layers
//! around it: parsing data lines, reading the data file, and parsing
//! menu commands.

use std::path::PathBuf;
use thiserror::Error;

/// A data line (or `ADD` arguments) that cannot become a parcel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Fewer than three comma-separated fields
    #[error("expected `country, weight, value` but found {found} field(s)")]
    FieldCount { found: usize },

    /// Country field is blank
    #[error("country is empty")]
    EmptyCountry,

    /// Numeric field did not parse as a finite number
    #[error("{field} `{raw}` is not a number")]
    InvalidNumber { field: &'static str, raw: String },

    /// Numeric field outside the accepted range
    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}


/// Failure to read the data file at all.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not read data file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}


/// Bad arguments to an interactive menu command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("{command} requires {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },

    #[error("{command} does not take any arguments")]
    UnexpectedArguments { command: &'static str },

    #[error("invalid threshold `{0}`")]
    InvalidThreshold(String),

    #[error("invalid filter `{0}`, expected HEAVIER or LIGHTER")]
    InvalidFilter(String),

    #[error(transparent)]
    Parcel(#[from] ParseError),
}


impl CommandError {
    /// Create a new Usage error
    pub fn usage(command: &'static str, usage: &'static str) -> Self {
        Self::Usage { command, usage }
    }
}
