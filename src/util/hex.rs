//! # ASCII-Hex Encoding/Decoding
//!
//! YDN23 frames carry every numeric field as pairs of uppercase hexadecimal
//! characters. This module provides the byte-level conversions used by the
//! frame codec, plus a compact formatting helper for log output.
//!
//! Encoding always produces uppercase characters; decoding accepts either
//! case, per the wire format.
//!
//! ## Usage
//!
//! ```rust
//! use ydn23_rs::util::hex::{bytes_to_hex, hex_to_bytes};
//!
//! let data = [0x48, 0x0A];
//! assert_eq!(bytes_to_hex(&data), b"480A");
//!
//! let decoded = hex_to_bytes(b"480a").unwrap();
//! assert_eq!(decoded, data);
//! ```

use thiserror::Error;

/// Hex alphabet used on the wire
const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// Errors that can occur while decoding ASCII-hex text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),

    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),
}

/// Split a byte into its two nibbles and map each to an uppercase hex
/// character.
pub fn byte_to_hex_pair(b: u8) -> (u8, u8) {
    let hi = (b >> 4) & 0x0F;
    let lo = b & 0x0F;
    (HEX_ALPHABET[hi as usize], HEX_ALPHABET[lo as usize])
}

/// Encode a byte sequence as 2×N uppercase hex characters, order preserved.
pub fn bytes_to_hex(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);
    for &b in data {
        let (hi, lo) = byte_to_hex_pair(b);
        out.push(hi);
        out.push(lo);
    }
    out
}

fn nibble(c: u8) -> Result<u8, HexError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(HexError::InvalidCharacter(c as char)),
    }
}

/// Decode one hex pair to a byte. Accepts upper- and lowercase characters.
pub fn hex_pair_to_byte(hi: u8, lo: u8) -> Result<u8, HexError> {
    Ok((nibble(hi)? << 4) | nibble(lo)?)
}

/// Decode ASCII-hex text pairwise, failing on the first bad pair.
///
/// Empty input decodes to an empty vector.
pub fn hex_to_bytes(ascii: &[u8]) -> Result<Vec<u8>, HexError> {
    if ascii.len() % 2 != 0 {
        return Err(HexError::OddLength(ascii.len()));
    }
    let mut out = Vec::with_capacity(ascii.len() / 2);
    for pair in ascii.chunks_exact(2) {
        out.push(hex_pair_to_byte(pair[0], pair[1])?);
    }
    Ok(out)
}

/// Format bytes for compact display (useful for logs)
///
/// Formats data as "7e 32 31 0d" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let data = vec![0x7E, 0x21, 0x01, 0x60, 0xFF, 0x00, 0x0D];
        let encoded = bytes_to_hex(&data);
        let decoded = hex_to_bytes(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn test_encode_is_uppercase() {
        assert_eq!(bytes_to_hex(&[0xAB, 0xCD, 0xEF]), b"ABCDEF");
        assert_eq!(byte_to_hex_pair(0x4A), (b'4', b'A'));
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(hex_pair_to_byte(b'a', b'B').unwrap(), 0xAB);
        assert_eq!(hex_to_bytes(b"fF00").unwrap(), vec![0xFF, 0x00]);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(hex_to_bytes(b"").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_errors() {
        assert_eq!(hex_to_bytes(b"1"), Err(HexError::OddLength(1)));
        assert_eq!(
            hex_pair_to_byte(b'G', b'0'),
            Err(HexError::InvalidCharacter('G'))
        );
        // first bad pair wins
        assert_eq!(
            hex_to_bytes(b"00ZZ11"),
            Err(HexError::InvalidCharacter('Z'))
        );
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_hex_compact(&[0x7E, 0x32, 0x0D]), "7e 32 0d");
    }
}
