//! Tests for the error taxonomy and RTN classification.

use ydn23_rs::{classify_rtn, HexError, RtnError, Ydn23Error};

#[test]
fn test_rtn_code_mapping() {
    assert!(classify_rtn(0x00).is_ok());
    assert_eq!(classify_rtn(0x01), Err(RtnError::VersionError));
    assert_eq!(classify_rtn(0x02), Err(RtnError::ChecksumError));
    assert_eq!(classify_rtn(0x03), Err(RtnError::LengthChecksumError));
    assert_eq!(classify_rtn(0x04), Err(RtnError::InvalidCid2));
    assert_eq!(classify_rtn(0x05), Err(RtnError::CommandFormatError));
    assert_eq!(classify_rtn(0x06), Err(RtnError::DataInvalid));
    assert_eq!(classify_rtn(0x07), Err(RtnError::AsciiError));
}

#[test]
fn test_rtn_reserved_range_boundaries() {
    assert!(classify_rtn(0x7F).is_ok());
    assert_eq!(classify_rtn(0x80), Err(RtnError::Other(0x80)));
    assert_eq!(classify_rtn(0xEF), Err(RtnError::Other(0xEF)));
    assert!(classify_rtn(0xF0).is_ok());
}

/// The gaps around the reserved range stay silent, as deployed peers expect.
#[test]
fn test_rtn_gap_codes_pass_through() {
    for code in 0x08u8..=0x7F {
        assert!(classify_rtn(code).is_ok(), "code 0x{code:02X}");
    }
    for code in 0xF0u8..=0xFF {
        assert!(classify_rtn(code).is_ok(), "code 0x{code:02X}");
    }
}

#[test]
fn test_error_display() {
    assert_eq!(
        Ydn23Error::FrameTooShort(5).to_string(),
        "Frame too short: 5 bytes"
    );
    assert_eq!(
        Ydn23Error::ChecksumMismatch {
            expected: "FDB2".into(),
            calculated: "FDB0".into(),
        }
        .to_string(),
        "Invalid checksum: expected FDB2, calculated FDB0"
    );
    assert_eq!(RtnError::CommandFormatError.to_string(), "cmd format error");
    assert_eq!(
        RtnError::Other(0x90).to_string(),
        "user-defined error: 0x90"
    );
}

/// Hex and RTN errors convert losslessly into the crate error.
#[test]
fn test_error_conversions_are_transparent() {
    let err: Ydn23Error = HexError::OddLength(3).into();
    assert_eq!(err.to_string(), "Odd number of hex characters: 3");

    let err: Ydn23Error = RtnError::DataInvalid.into();
    assert_eq!(err.to_string(), "data invalid");
}
