use alloc::borrow::Cow;
use html_escape::encode_quoted_attribute;

const HEXADECIMAL_APOSTROPHE: &str = "&#x27;";
const DECIMAL_APOSTROPHE: &str = "&#039;";

/// Escapes HTML-significant characters in an attribute value.
///
/// Apostrophes are written as `&#039;`.
pub fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    match encode_quoted_attribute(value) {
        Cow::Owned(escaped) if escaped.contains(HEXADECIMAL_APOSTROPHE) => {
            Cow::Owned(escaped.replace(HEXADECIMAL_APOSTROPHE, DECIMAL_APOSTROPHE))
        }
        escaped => escaped,
    }
}
