//! Unicode utilities for PDF text rendering
//!
//! The base-14 fonts are written with WinAnsiEncoding, so text must be
//! converted from UTF-8 before it reaches a content stream.

/// Replacement byte for characters WinAnsiEncoding cannot express
const REPLACEMENT: u8 = b'?';

/// Convert a Unicode string to WinAnsiEncoding bytes
///
/// ASCII and the Latin-1 supplement (accented Italian letters included) map
/// to their own code points; the 0x80-0x9F block holds the typographic
/// extras. Anything else becomes `?`.
pub fn unicode_to_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

/// WinAnsiEncoding byte for a single character
pub fn winansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        0x20..=0x7E => code as u8,
        0xA0..=0xFF => code as u8,
        _ => match ch {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => REPLACEMENT,
        },
    }
}

/// Decode dataset bytes: UTF-8 when valid, ISO-8859-1 otherwise
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode_dataset(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        // Latin-1 code points equal their byte values
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
