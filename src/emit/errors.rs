/// Top-level errors for an emit run.
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can end an emit run.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The variables file could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EmitError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Store(store) => store.exit_code(),
            Self::Write(_) | Self::Serialize(_) => 1,
        }
    }

    /// Whether the reader of stdout went away (e.g. `emitvars vars.json | head -1`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
