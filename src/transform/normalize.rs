/// Flatten variable data to the single string carried in an emitted payload.
use std::borrow::Cow;

use crate::store::VariableData;

/// Separator placed between sequence elements.
///
/// Elements that themselves contain `|` are not escaped, so the joined form
/// cannot always be split back into the original list.
pub const SEQUENCE_SEP: &str = "|";

/// Return the payload string for `data`.
///
/// Scalars are returned unchanged (borrowed). Sequences are joined with
/// [`SEQUENCE_SEP`] in order; an empty sequence yields `""`.
#[must_use]
pub fn to_payload_string(data: &VariableData) -> Cow<'_, str> {
    match data {
        VariableData::Scalar(s) => Cow::Borrowed(s),
        VariableData::Sequence(items) => Cow::Owned(items.join(SEQUENCE_SEP)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[&str]) -> VariableData {
        VariableData::Sequence(items.iter().map(|s| (*s).to_owned()).collect())
    }

    #[test]
    fn test_scalar_passes_through() {
        let data = VariableData::Scalar(r"\b\d{3}-\d{2}-(\d{4})\b".to_owned());
        assert_eq!(to_payload_string(&data), r"\b\d{3}-\d{2}-(\d{4})\b");
        assert!(matches!(to_payload_string(&data), Cow::Borrowed(_)));
    }

    #[test]
    fn test_sequence_joined_in_order() {
        let data = seq(&["email", "phone", "ssn", "address"]);
        assert_eq!(to_payload_string(&data), "email|phone|ssn|address");
    }

    #[test]
    fn test_single_and_empty_sequence() {
        assert_eq!(to_payload_string(&seq(&["cc"])), "cc");
        assert_eq!(to_payload_string(&seq(&[])), "");
    }

    #[test]
    fn test_pipe_inside_element_not_escaped() {
        assert_eq!(to_payload_string(&seq(&["a|b", "c"])), "a|b|c");
    }
}
