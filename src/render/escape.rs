//! HTML escaping for text and attribute values.

use std::borrow::Cow;

/// Escape text content for HTML (`&`, `<`, `>`).
///
/// Borrows the input unchanged when nothing needs escaping; the memchr
/// scan makes the common clean-prose case a single SIMD sweep.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr::memchr3(b'&', b'<', b'>', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + 8);
    result.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape an attribute value (text escapes plus `"`).
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if memchr::memchr3(b'&', b'<', b'>', bytes).is_none() && memchr::memchr(b'"', bytes).is_none()
    {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
