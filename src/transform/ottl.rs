/// Escaping for patterns embedded in OTTL string literals.
///
/// An OTTL statement such as
/// `replace_pattern(attributes["msg"], "<pattern>", "<template>")` reads its
/// quoted arguments with backslash escapes, so a regex like `\d{4}` must be
/// written `\\d{4}` inside the quotes.
use std::borrow::Cow;

/// Double every backslash in `s`. All other characters are left untouched.
///
/// Strings without a backslash are returned as-is (zero allocation).
#[must_use]
pub fn ottl_escape(s: &str) -> Cow<'_, str> {
    if s.contains('\\') {
        Cow::Owned(s.replace('\\', "\\\\"))
    } else {
        Cow::Borrowed(s)
    }
}
