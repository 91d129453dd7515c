//! # Loads Errors
//!
//! Failures raised while resolving the loads section or writing the report.

use std::path::PathBuf;

use thiserror::Error;
use trolley_spec::SpecError;

/// Errors from load estimation and report output.
#[derive(Error, Debug)]
pub enum LoadsError {
    /// The loads section is present but malformed.
    #[error("Loads section invalid: {0}")]
    Spec(#[from] SpecError),

    /// The report could not be written.
    #[error("Report I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadsError {
    /// Wrap an I/O error with the report path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
