//! # YDN23 Error Handling
//!
//! This module defines the error types produced by the ydn23-rs crate: the
//! structural/transport errors raised while encoding, decoding, or moving
//! frames, and the RTN taxonomy a device reports through the CID2 position
//! of a response frame.

use crate::util::hex::HexError;
use thiserror::Error;

/// Represents the different error types that can occur in the YDN23 crate.
#[derive(Debug, Error)]
pub enum Ydn23Error {
    /// Indicates an error related to the serial port communication.
    #[error("Serial port error: {0}")]
    SerialPortError(String),

    /// Frame shorter than the minimum the parser will consider.
    #[error("Frame too short: {0} bytes")]
    FrameTooShort(usize),

    /// Frame not bracketed by SOI and EOI.
    #[error("Invalid SOI or EOI delimiter")]
    InvalidDelimiters,

    /// Frame checksum text did not match the recomputed value.
    #[error("Invalid checksum: expected {expected}, calculated {calculated}")]
    ChecksumMismatch { expected: String, calculated: String },

    /// ASCII region too short to contain the fixed header fields.
    #[error("Malformed frame: header incomplete")]
    MalformedFrame,

    /// Carried LCHKSUM nibble disagrees with the one derived from LENID.
    #[error("Length checksum mismatch: expected 0x{expected:X}, carried 0x{carried:X}")]
    LengthChecksumMismatch { expected: u8, carried: u8 },

    /// LENID promises more INFO characters than the frame carries.
    #[error("Frame length mismatch: need {needed} ASCII characters, got {actual}")]
    FrameLengthMismatch { needed: usize, actual: usize },

    /// INFO payload too large for the 12-bit length encoding.
    #[error("Info field too large: {0} bytes overflows the 12-bit length field")]
    InfoTooLarge(usize),

    /// Non-hex or odd-length ASCII text in a frame field.
    #[error(transparent)]
    Hex(#[from] HexError),

    /// Error reported by the device through the RTN code.
    #[error(transparent)]
    Rtn(#[from] RtnError),

    /// No response arrived within the configured window.
    #[error("Response timeout")]
    Timeout,
}

/// Errors a slave device reports through the RTN code of a response frame.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RtnError {
    #[error("ver error")]
    VersionError,

    #[error("chksum error")]
    ChecksumError,

    #[error("lchksum error")]
    LengthChecksumError,

    #[error("cid2 invalid")]
    InvalidCid2,

    #[error("cmd format error")]
    CommandFormatError,

    #[error("data invalid")]
    DataInvalid,

    #[error("ascii error")]
    AsciiError,

    /// Code from the reserved user-defined range (0x80..=0xEF).
    #[error("user-defined error: 0x{0:02X}")]
    Other(u8),
}
