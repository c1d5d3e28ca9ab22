/// Shared serializable output types.
///
/// These types are what gets written to stdout (records) and stderr (errors).
/// They are decoupled from the internal `VariableRecord` / `VariableData` types.
use serde::{Deserialize, Serialize};

/// Which emission of a variable a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordVariant {
    /// The normalized value; emitted for every record with data.
    #[default]
    Base,
    /// The backslash-escaped value for OTTL statements.
    Ottl,
}

impl RecordVariant {
    /// Label used in table output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Ottl => "ottl",
        }
    }
}

/// One output line: `{"name": ..., "payload": {"data": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedRecord {
    /// Variable name (optionally suffixed for OTTL variants).
    pub name: String,
    /// Record payload.
    pub payload: Payload,
    /// Not part of the wire format.
    #[serde(skip)]
    pub variant: RecordVariant,
}

/// Payload of an emitted record. `data` is always a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub data: String,
}

impl EmittedRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<String>, variant: RecordVariant) -> Self {
        Self {
            name: name.into(),
            payload: Payload { data: data.into() },
            variant,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from an `EmitError`.
    #[must_use]
    pub fn from_emit_error(err: &crate::emit::EmitError) -> Self {
        use crate::emit::EmitError;
        use crate::store::StoreError;

        let code = match err {
            EmitError::Store(store) => match store {
                StoreError::Resolve { .. } => "path_unresolvable",
                StoreError::Read { .. } => "read_failed",
                StoreError::Parse { .. } => "parse_failed",
                StoreError::NotAMapping { .. } => "not_a_mapping",
                StoreError::InvalidRecord { .. } => "invalid_record",
            },
            EmitError::Write(_) => "write_failed",
            EmitError::Serialize(_) => "serialize_failed",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
