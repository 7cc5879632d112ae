//! Utility functions shared across the crate.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// Authored content files are usually UTF-8, but prose pasted from word
/// processors regularly arrives as Windows-1252 (smart quotes, dashes).
///
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let (result, _encoding, _malformed) = encoding_rs::WINDOWS_1252.decode(bytes);
    Cow::Owned(result.into_owned())
}
