//! Text escaping and URL component encoding.
//!
//! HTML escaping and URL encoding are different transforms for different
//! embedding contexts; a value placed both in a query string and in visible
//! text needs each one in its own place.

use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Replace `&`, `<` and `>` with entities. Ampersand goes first so the
/// entities introduced for `<`/`>` are not escaped again.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape any displayable value; absent values become the empty string.
pub fn escape<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => escape_text(&v.to_string()),
        None => String::new(),
    }
}

/// Escaping for double-quoted attribute values: the text escapes plus quotes.
pub fn escape_attr(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode `text` for use as a single URL query component.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}
