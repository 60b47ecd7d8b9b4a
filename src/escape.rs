//! Path-style identifier escaping.
//!
//! The path-style grammar must be embeddable as a URL path segment without
//! further escaping, so anything outside a small unreserved set is rewritten
//! as `@XX` groups, one per UTF-8 byte, hex uppercase. The escape character
//! itself is never passed through, so an escaped name can never collide with
//! an unescaped name that happens to contain `@`.

use std::fmt::Write as _;

/// The escape character of the path-style grammar.
const ESCAPE: char = '@';

/// Escape a whole identifier segment.
pub fn escape_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        push_escaped(&mut out, c);
    }
    return out;
}

/// Append one character to `out`, escaped if needed.
pub fn push_escaped(out: &mut String, c: char) {
    if is_unreserved(c) {
        out.push(c);
        return;
    }
    let mut buf = [0u8; 4];
    for byte in c.encode_utf8(&mut buf).as_bytes() {
        // Formatting a u8 as hex never fails.
        let _ = write!(out, "{ESCAPE}{byte:02X}");
    }
}

/// Characters that pass through unescaped. Dots must pass so dotted
/// primitive names and explicit interface member names survive.
fn is_unreserved(c: char) -> bool {
    return c.is_ascii_alphanumeric() || c == '_' || c == '.';
}

#[cfg(test)]
mod tests {
    use super::escape_identifier;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(escape_identifier("SampleMethod_2"), "SampleMethod_2");
    }

    #[test]
    fn dotted_name_passes_through() {
        assert_eq!(escape_identifier("System.Int32"), "System.Int32");
    }

    #[test]
    fn two_byte_code_point() {
        assert_eq!(escape_identifier("SampleMethôd"), "SampleMeth@C3@B4d");
    }

    #[test]
    fn three_byte_code_point() {
        assert_eq!(escape_identifier("价"), "@E4@BB@B7");
    }

    #[test]
    fn escape_character_escapes_itself() {
        assert_eq!(escape_identifier("a@b"), "a@40b");
    }

    #[test]
    fn brackets_are_escaped() {
        assert_eq!(escape_identifier("[]"), "@5B@5D");
    }
}
