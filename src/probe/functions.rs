// Current module imports
use super::constants::CONTINUE_MARKER;

/// Decodes bytes as 7-bit ASCII, substituting `?` for anything above 0x7F.
pub fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

/// Decodes bytes as UTF-8, substituting U+FFFD for invalid sequences.
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Formats bytes as dash separated upper-case hex pairs, e.g. `48-54-54-50`.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join("-")
}

/// Whether the decoded response window starts with the interim status line.
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive.
/// Only the start is anchored, so trailing bytes after the marker still match.
pub fn is_continue(ascii: &str) -> bool {
    ascii
        .trim()
        .get(..CONTINUE_MARKER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(CONTINUE_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii_masks_high_bytes() {
        assert_eq!(decode_ascii(b"HTTP/1.1"), "HTTP/1.1");
        assert_eq!(decode_ascii(&[0x48, 0xC3, 0xA9, 0x00]), "H??\0");
    }

    #[test]
    fn test_decode_utf8_keeps_valid_sequences() {
        assert_eq!(decode_utf8(&[0x48, 0xC3, 0xA9]), "H\u{e9}");
        assert_eq!(decode_utf8(&[0x48, 0xFF]), "H\u{fffd}");
    }

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(b"HTTP"), "48-54-54-50");
        assert_eq!(hex_dump(&[0x20]), "20");
        assert_eq!(hex_dump(&[0x0a, 0xff]), "0A-FF");
        assert_eq!(hex_dump(&[]), "");
    }

    #[test]
    fn test_is_continue_matches_marker() {
        assert!(is_continue("HTTP/1.1 100 Continue"));
        assert!(is_continue("http/1.1 100 continue"));
        assert!(is_continue("  HTTP/1.1 100 Continue\r\n"));
        assert!(is_continue("HTTP/1.1 100 Continue\r\n\r\nHTTP/1.1 400"));
    }

    #[test]
    fn test_is_continue_rejects_other_content() {
        assert!(!is_continue("HTTP/1.1 404 Not Fo"));
        assert!(!is_continue("HTTP/1.1 100 Contin"));
        assert!(!is_continue("\r\nHTTP/1.1 100 Contin"));
        assert!(!is_continue("HTTP/1.0 100 Continue"));
        assert!(!is_continue("x HTTP/1.1 100 Continue"));
        assert!(!is_continue(""));
        assert!(!is_continue("\0\0\0\0"));
    }
}
