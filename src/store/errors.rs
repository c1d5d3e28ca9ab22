/// Errors from loading the variable store.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving, reading, or parsing a variables file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The path could not be made absolute (e.g. the working directory is gone).
    #[error("Cannot resolve path '{}': {source}", path.display())]
    Resolve {
        /// The path as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file does not exist or could not be read.
    #[error("Cannot read variables file '{}': {source}", path.display())]
    Read {
        /// Absolute path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("Variables file '{}' is not valid JSON: {source}", path.display())]
    Parse {
        /// Absolute path of the file.
        path: PathBuf,
        /// Underlying parser error (carries line and column).
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an object.
    #[error("Variables file '{}' must contain a JSON object at the top level", path.display())]
    NotAMapping {
        /// Absolute path of the file.
        path: PathBuf,
    },

    /// An entry has a shape that cannot be interpreted as a variable record.
    #[error("Variable '{name}' is invalid: {reason}")]
    InvalidRecord {
        /// Key of the offending entry.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl StoreError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Resolve { .. } | Self::Read { .. } => 4,
            Self::Parse { .. } | Self::NotAMapping { .. } | Self::InvalidRecord { .. } => 1,
        }
    }
}
