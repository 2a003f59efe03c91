// =====================================================================
// File: session.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
// Defines the `Session` struct, the running context handed to every
// menu command: the live parcel index plus the outcome of the startup
// load.
//
// Responsibilities:
// - Own the single `ParcelIndex` for the lifetime of a run.
// - Remember which data file was loaded and how many lines were kept.
// - Route interactive `ADD` commands through the same validation as
//   the file loader.
//
// The index is created once, filled by inserts, and torn down once when
// the session is dropped.
// =====================================================================
use std::path::{Path, PathBuf};

use tracing::info;

use crate::ParcelIndex;
use crate::error::{IngestError, ParseError};
use crate::ingest::{self, LoadReport};

/// Represents a single interactive session over one parcel index.
#[derive(Debug, Default)]
pub struct Session {
    /// The in-memory hash table of bucket trees.
    pub index: ParcelIndex,

    /// Data file the index was loaded from, if any.
    pub source: Option<PathBuf>,

    /// Totals from the startup load (plus any `ADD`s).
    pub report: LoadReport,
}


impl Session {
    /// Creates a new session with an empty index.
    ///
    /// # Example
    /// ```
    /// use parcelindex::Session;
    /// let session = Session::new();
    /// assert!(session.index.is_empty());
    /// assert!(session.source.is_none());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session and fills its index from `path`.
    pub fn from_file(path: &Path) -> Result<Self, IngestError> {
        let mut session = Self::new();
        session.load(path)?;
        Ok(session)
    }

    /// Loads `path` into the current index, adding to what is there.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport, IngestError> {
        let report = ingest::load_file(&mut self.index, path)?;
        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "parcel data loaded"
        );

        self.report.loaded += report.loaded;
        self.report.skipped += report.skipped;
        self.source = Some(path.to_path_buf());
        Ok(report)
    }

    /// Validates and inserts one parcel typed at the prompt.
    ///
    /// # Arguments
    ///
    /// * `country` - Destination, normalized before storing.
    /// * `weight` - Weight text, must parse into the accepted weight range.
    /// * `value` - Declared value text, must parse into the value range.
    ///
    /// # Returns
    ///
    /// `Ok(())` once the parcel is in the index, or the `ParseError`
    /// that rejected it. A rejected parcel leaves the session unchanged.
    pub fn add_parcel(
        &mut self,
        country: &str,
        weight: &str,
        value: &str,
    ) -> Result<(), ParseError> {
        let parcel = ingest::validate_parcel(country, weight, value)?;
        self.index.insert_parcel(parcel);
        self.report.loaded += 1;
        Ok(())
    }
}


// =====================================================================
// Unit Tests for Session
// =====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_initial_state() {
        let session = Session::new();
        assert!(session.index.lookup_bucket("canada").is_none());
        assert_eq!(session.report, LoadReport::default());
    }

    #[test]
    fn test_add_parcel_inserts_into_index() {
        let mut session = Session::new();
        session.add_parcel("Canada", "500", "100").unwrap();
        assert_eq!(session.index.len(), 1);
        assert_eq!(session.report.loaded, 1);
        assert!(session.index.lookup_bucket("canada").is_some());
    }

    #[test]
    fn test_add_parcel_rejects_out_of_range() {
        let mut session = Session::new();
        let err = session.add_parcel("Canada", "60000", "100").unwrap_err();
        assert!(matches!(err, ParseError::OutOfRange { field: "weight", .. }));
        assert!(session.index.is_empty());
    }

    #[test]
    fn test_from_missing_file_fails() {
        let result = Session::from_file(Path::new("no_such_parcels.txt"));
        assert!(result.is_err());
    }
}
