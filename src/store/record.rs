/// Variable records and their interpretation from raw JSON values.
///
/// Entry classification mirrors the truthiness rules of the fixture format:
/// - falsy values (`null`, `false`, `0`, `""`) are not records at all;
/// - arrays are treated as objects without a `data` key;
/// - any other non-object value is rejected.
use serde_json::{Map, Value};

use super::errors::StoreError;

/// The payload of a variable: a single string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableData {
    /// A plain string (regexes, replacement templates).
    Scalar(String),
    /// An ordered list of strings (field names), later pipe-joined.
    Sequence(Vec<String>),
}

impl VariableData {
    /// Return the scalar string, or `None` for sequences.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Sequence(_) => None,
        }
    }
}

/// A single entry of the variable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    /// The value to emit. `None` means the entry is skipped.
    pub data: Option<VariableData>,
    /// Whether an OTTL-escaped variant should also be emitted.
    /// Only a literal JSON `true` sets this.
    pub ottl: bool,
}

/// Interpret a raw JSON entry value.
///
/// Returns `Ok(None)` for falsy entries.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` when the value is a truthy scalar, or
/// when `data` is neither a string nor an array of strings.
pub fn record_from_value(name: &str, value: &Value) -> Result<Option<VariableRecord>, StoreError> {
    if is_falsy(value) {
        return Ok(None);
    }

    match value {
        Value::Object(fields) => record_from_fields(name, fields).map(Some),
        Value::Array(_) => Ok(Some(VariableRecord {
            data: None,
            ottl: false,
        })),
        other => Err(invalid(
            name,
            format!("expected an object, got {}", json_type(other)),
        )),
    }
}

fn record_from_fields(name: &str, fields: &Map<String, Value>) -> Result<VariableRecord, StoreError> {
    let data = match fields.get("data") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(VariableData::Scalar(s.clone())),
        Some(Value::Array(items)) => {
            let strings = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_str().map(str::to_owned).ok_or_else(|| {
                        invalid(
                            name,
                            format!("data[{i}] must be a string, got {}", json_type(item)),
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Some(VariableData::Sequence(strings))
        }
        Some(other) => {
            return Err(invalid(
                name,
                format!(
                    "data must be a string or an array of strings, got {}",
                    json_type(other)
                ),
            ));
        }
    };

    let ottl = matches!(fields.get("ottl"), Some(Value::Bool(true)));

    Ok(VariableRecord { data, ottl })
}

#[allow(clippy::float_cmp)]
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn invalid(name: &str, reason: String) -> StoreError {
    StoreError::InvalidRecord {
        name: name.to_owned(),
        reason,
    }
}
