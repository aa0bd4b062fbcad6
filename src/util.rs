//! Text decoding helpers.

use std::borrow::Cow;

/// Decode song file bytes to a string.
///
/// Lyric files are UTF-8 (a BOM is stripped) or, when that fails, assumed to
/// be Windows-1252, which covers the Latin-1 files older editors write.
/// Valid UTF-8 without a BOM is borrowed, not copied.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if malformed {
        return encoding_rs::WINDOWS_1252.decode(bytes).0;
    }
    text
}

/// Normalize line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
