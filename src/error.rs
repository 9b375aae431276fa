//! Error types for room card generation
//!
//! Only conditions that stop a run live here. Lookup misses found while
//! merging or selecting are [`Diagnostic`]s and never abort generation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error: no cards are rendered once one of these is returned
#[derive(Error, Debug)]
pub enum CardError {
    #[error("Cannot read dataset {}: {source}", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset {}: {source}", .path.display())]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset has no {0} column")]
    MissingColumn(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type alias for card operations
pub type CardResult<T> = Result<T, CardError>;

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::JsonError(err.to_string())
    }
}

/// Non-fatal condition recorded during a run and reported afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Room has occupants but no housekeeping schedule; sentinels were used
    MissingSchedule(String),
    /// A requested room key does not exist among the loaded rooms
    UnknownRoom(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingSchedule(room) => {
                write!(f, "room {room}: schedule not found, using defaults")
            }
            Diagnostic::UnknownRoom(room) => write!(f, "room {room}: does not exist"),
        }
    }
}
