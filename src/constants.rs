//! YDN23 Protocol Constants
//!
//! This module defines constants used in the YDN23 protocol implementation,
//! based on the YD/T 1363 standard.

/// Start-of-information delimiter ('~')
pub const SOI: u8 = 0x7E;

/// End-of-information delimiter (carriage return)
pub const EOI: u8 = 0x0D;

/// Shortest byte sequence the frame parser will consider
pub const MIN_FRAME_LEN: usize = 9;

/// ASCII characters occupied by VER + ADR + CID1 + CID2 + LENGTH
pub const HEADER_ASCII_LEN: usize = 12;

/// Largest INFO payload whose ASCII expansion fits the 12-bit LENID
pub const MAX_INFO_LEN: usize = 0x7FF;

/// Upper bound on a complete frame: SOI + header + LENID worth of INFO
/// characters + CHKSUM + EOI
pub const MAX_FRAME_LEN: usize = 1 + HEADER_ASCII_LEN + 0xFFF + 4 + 1;

// ----------------------------------------------------------------------------
// RTN codes (CID2 position on response frames)
// ----------------------------------------------------------------------------

/// Command accepted, no error
pub const RTN_OK: u8 = 0x00;

/// VER value rejected by the device
pub const RTN_VER_ERROR: u8 = 0x01;

/// CHKSUM rejected by the device
pub const RTN_CHKSUM_ERROR: u8 = 0x02;

/// LCHKSUM rejected by the device
pub const RTN_LCHKSUM_ERROR: u8 = 0x03;

/// CID2 not recognized by the device
pub const RTN_CID2_INVALID: u8 = 0x04;

/// Command format rejected by the device
pub const RTN_COMMAND_FORMAT_ERROR: u8 = 0x05;

/// Command data rejected by the device
pub const RTN_DATA_INVALID: u8 = 0x06;

/// Non-hex character seen by the device
pub const RTN_ASCII_ERROR: u8 = 0x07;

// User-defined error range
pub const RTN_USER_DEFINED_MIN: u8 = 0x80;
pub const RTN_USER_DEFINED_MAX: u8 = 0xEF;
