//! Modified UTF-8 codec.
//!
//! Class files store every string as modified UTF-8, which differs from standard UTF-8 in two
//! ways:
//!
//! - `U+0000` is encoded as the two-byte sequence `C0 80`, so encoded strings never contain a
//!   raw zero byte.
//! - Supplementary characters are encoded as a UTF-16 surrogate pair, each surrogate written as
//!   its own three-byte sequence. Four-byte sequences never appear.
//!
//! Symbols always hold the encoded form. This module converts between that form and host
//! strings; it is only used at the edges (building symbols from literals, rendering symbols for
//! diagnostics).

use std::borrow::Cow;

use crate::error::{SymbolError, SymbolResult};

/// Encode a host string as modified UTF-8.
///
/// Strings made only of `U+0001..=U+007F` are byte-identical in both encodings and are
/// returned borrowed.
///
/// # Examples
///
/// ```
/// use kava_symbols::mutf8;
///
/// assert_eq!(&*mutf8::encode("java/lang/Object"), b"java/lang/Object");
/// assert_eq!(&*mutf8::encode("\0"), &[0xC0, 0x80]);
/// ```
pub fn encode(text: &str) -> Cow<'_, [u8]> {
    if text.bytes().all(|b| (0x01..=0x7F).contains(&b)) {
        return Cow::Borrowed(text.as_bytes());
    }

    let mut out = Vec::with_capacity(encoded_len(text));
    for unit in text.encode_utf16() {
        push_unit(&mut out, unit);
    }
    Cow::Owned(out)
}

/// Number of bytes `text` occupies once encoded.
pub fn encoded_len(text: &str) -> usize {
    text.encode_utf16()
        .map(|unit| match unit {
            0x0001..=0x007F => 1,
            0x0000 | 0x0080..=0x07FF => 2,
            _ => 3,
        })
        .sum()
}

#[inline]
fn push_unit(out: &mut Vec<u8>, unit: u16) {
    match unit {
        0x0001..=0x007F => out.push(unit as u8),
        0x0000 | 0x0080..=0x07FF => {
            out.push(0xC0 | ((unit >> 6) as u8 & 0x1F));
            out.push(0x80 | (unit as u8 & 0x3F));
        }
        _ => {
            out.push(0xE0 | ((unit >> 12) as u8 & 0x0F));
            out.push(0x80 | ((unit >> 6) as u8 & 0x3F));
            out.push(0x80 | (unit as u8 & 0x3F));
        }
    }
}

/// Decode modified UTF-8 into a host string.
///
/// Fails on raw zero bytes, four-byte forms, truncated or malformed sequences, and on unpaired
/// surrogates (which modified UTF-8 can carry but a Rust `String` cannot).
pub fn decode(input: &[u8]) -> SymbolResult<String> {
    let mut units: Vec<u16> = Vec::with_capacity(input.len());
    let mut index = 0;
    while index < input.len() {
        let start = index;
        let byte = input[index];
        index += 1;

        match byte {
            0x00 => return Err(malformed(start, "embedded NUL byte")),
            0x01..=0x7F => units.push(u16::from(byte)),
            0xC0..=0xDF => {
                let b2 = continuation(input, index, start)?;
                index += 1;
                units.push((u16::from(byte & 0x1F) << 6) | u16::from(b2 & 0x3F));
            }
            0xE0..=0xEF => {
                let b2 = continuation(input, index, start)?;
                let b3 = continuation(input, index + 1, start)?;
                index += 2;
                units.push(
                    (u16::from(byte & 0x0F) << 12)
                        | (u16::from(b2 & 0x3F) << 6)
                        | u16::from(b3 & 0x3F),
                );
            }
            0x80..=0xBF => return Err(malformed(start, "unexpected continuation byte")),
            _ => return Err(malformed(start, "four-byte form not allowed")),
        }
    }

    String::from_utf16(&units).map_err(|_| malformed(input.len(), "unpaired surrogate"))
}

#[inline]
fn continuation(input: &[u8], index: usize, start: usize) -> SymbolResult<u8> {
    match input.get(index) {
        Some(&b) if b & 0xC0 == 0x80 => Ok(b),
        Some(_) => Err(malformed(start, "invalid continuation byte")),
        None => Err(malformed(start, "truncated sequence")),
    }
}

fn malformed(at: usize, reason: &'static str) -> SymbolError {
    SymbolError::MalformedUtf8 { at, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_ascii_is_borrowed() {
        let encoded = encode("Ljava/lang/String;");
        assert!(matches!(encoded, Cow::Borrowed(_)));
        assert_eq!(&*encoded, b"Ljava/lang/String;");
    }

    #[test]
    fn test_nul_uses_two_bytes() {
        assert_eq!(&*encode("a\0b"), &[b'a', 0xC0, 0x80, b'b']);
        assert_eq!(decode(&[b'a', 0xC0, 0x80, b'b']).unwrap(), "a\0b");
    }

    #[test]
    fn test_supplementary_uses_surrogate_pair() {
        // U+1F980 -> D83E DD80 -> two three-byte sequences
        let encoded = encode("🦀");
        assert_eq!(encoded.len(), 6);
        assert_eq!(encoded[0], 0xED);
        assert_eq!(encoded[3], 0xED);
        assert_eq!(decode(&encoded).unwrap(), "🦀");
    }

    #[test]
    fn test_encoded_len_matches() {
        for text in ["", "abc", "\0", "é", "你好", "🦀x"] {
            assert_eq!(encoded_len(text), encode(text).len());
        }
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode(&[0x00]), Err(SymbolError::MalformedUtf8 { at: 0, .. })));
        assert!(decode(&[0xC3]).is_err());
        assert!(decode(&[0xE4, 0xBD]).is_err());
        assert!(decode(&[0x80]).is_err());
        assert!(decode(&[0xF0, 0x9F, 0xA6, 0x80]).is_err());
        assert!(decode(&[0xC3, 0x41]).is_err());
        // lone high surrogate
        assert!(decode(&[0xED, 0xA0, 0xBE]).is_err());
    }

    #[quickcheck]
    fn prop_round_trip(text: String) -> bool {
        decode(&encode(&text)).map(|decoded| decoded == text).unwrap_or(false)
    }

    #[quickcheck]
    fn prop_never_contains_zero(text: String) -> bool {
        !encode(&text).contains(&0)
    }
}
