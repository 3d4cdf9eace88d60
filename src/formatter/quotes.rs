//! Double-quote escaping for the legacy output format
//!
//! Every `"` is prefixed with a backslash in a single pass. Existing escape
//! sequences get no special treatment, so `\"` in the source becomes `\\"`.

use std::borrow::Cow;

/// Insert a backslash before every double quote
pub fn escape_double_quotes(input: &str) -> Cow<'_, str> {
    if input.contains('"') {
        Cow::Owned(input.replace('"', "\\\""))
    } else {
        Cow::Borrowed(input)
    }
}
