//! # Entry Name Escaping
//!
//! Group entry names use `.` as the hierarchy delimiter, so a path segment
//! that itself contains a dot must be escaped before it becomes an entry name
//! and unescaped when it is read back as a location name.
//!
//! The scheme is percent-encoding restricted to the two reserved characters:
//! `.` becomes `%2E` and `%` becomes `%25`. Decoding is lenient; a `%` that
//! does not start a recognized escape passes through unchanged.

/// Escapes a path segment for use as a group entry name.
#[must_use]
pub fn encode_name(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for ch in segment.chars() {
        match ch {
            '%' => encoded.push_str("%25"),
            '.' => encoded.push_str("%2E"),
            other => encoded.push(other),
        }
    }
    encoded
}

/// Reverses [`encode_name`], turning a group entry name back into a segment.
#[must_use]
pub fn decode_name(name: &str) -> String {
    let mut decoded = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            decoded.push(ch);
            continue;
        }
        let rest = chars.as_str();
        if let Some(tail) = rest.strip_prefix("2E") {
            decoded.push('.');
            chars = tail.chars();
        } else if let Some(tail) = rest.strip_prefix("25") {
            decoded.push('%');
            chars = tail.chars();
        } else {
            decoded.push('%');
        }
    }
    decoded
}
