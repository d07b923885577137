//! # YDN23 Frame Codec
//!
//! This module decodes and encodes YD/T 1363 (YDN23) protocol frames as
//! exchanged between a master station and addressed slave devices over a
//! serial link.
//!
//! A frame is a SOI byte (`~`), an ASCII-hex body, a 4-character CHKSUM,
//! and an EOI byte (CR):
//!
//! ```text
//! SOI  VER:2  ADR:2  CID1:2  CID2:2  LENGTH:4  INFO:LENID  CHKSUM:4  EOI
//! ```
//!
//! The LENGTH field carries the 12-bit LENID (the INFO character count)
//! protected by a 4-bit nibble checksum in its top nibble; the CHKSUM covers
//! every ASCII byte between SOI and the CHKSUM field itself. On response
//! frames the CID2 position is reinterpreted as the RTN status code and is
//! classified before the decoded unit is returned.
//!
//! `parse_frame` expects an already-delimited buffer; locating SOI/EOI in a
//! byte stream is the transport's job (see the serial module).

use crate::constants::{
    EOI, HEADER_ASCII_LEN, MAX_INFO_LEN, MIN_FRAME_LEN, RTN_ASCII_ERROR, RTN_CHKSUM_ERROR,
    RTN_CID2_INVALID, RTN_COMMAND_FORMAT_ERROR, RTN_DATA_INVALID, RTN_LCHKSUM_ERROR, RTN_OK,
    RTN_USER_DEFINED_MAX, RTN_USER_DEFINED_MIN, RTN_VER_ERROR, SOI,
};
use crate::error::{RtnError, Ydn23Error};
use crate::util::hex::{bytes_to_hex, hex_pair_to_byte, hex_to_bytes};
use crate::ydn23::checksum::{frame_checksum, length_field, verify_length_field};
use serde::{Deserialize, Serialize};

/// The decoded logical content of a YDN23 frame.
///
/// `cid2` is the command identifier on a command frame and the RTN status
/// code on a response frame; it stays a plain byte here and is classified
/// separately on the decode path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolDataUnit {
    pub ver: u8,
    pub addr: u8,
    pub cid1: u8,
    pub cid2: u8,
    pub info: Vec<u8>,
}

impl ProtocolDataUnit {
    pub fn new(ver: u8, addr: u8, cid1: u8, cid2: u8, info: Vec<u8>) -> Self {
        ProtocolDataUnit {
            ver,
            addr,
            cid1,
            cid2,
            info,
        }
    }
}

/// Map an RTN code to its outcome.
///
/// `0x00` and codes outside the defined taxonomy and the reserved
/// user-defined range pass through as success; the reference implementation
/// behaves this way and peers depend on it.
pub fn classify_rtn(code: u8) -> Result<(), RtnError> {
    match code {
        RTN_OK => Ok(()),
        RTN_VER_ERROR => Err(RtnError::VersionError),
        RTN_CHKSUM_ERROR => Err(RtnError::ChecksumError),
        RTN_LCHKSUM_ERROR => Err(RtnError::LengthChecksumError),
        RTN_CID2_INVALID => Err(RtnError::InvalidCid2),
        RTN_COMMAND_FORMAT_ERROR => Err(RtnError::CommandFormatError),
        RTN_DATA_INVALID => Err(RtnError::DataInvalid),
        RTN_ASCII_ERROR => Err(RtnError::AsciiError),
        RTN_USER_DEFINED_MIN..=RTN_USER_DEFINED_MAX => Err(RtnError::Other(code)),
        _ => Ok(()),
    }
}

/// Parse a delimited YDN23 frame into a [`ProtocolDataUnit`].
///
/// Validation order: frame length, delimiters, CHKSUM over the ASCII body,
/// header presence, field hex decoding, RTN classification, LCHKSUM, INFO
/// length. INFO characters beyond `12 + LENID` are covered by the checksum
/// but not decoded.
///
/// ```rust
/// use ydn23_rs::{parse_frame, ProtocolDataUnit};
///
/// let pdu = parse_frame(b"~210160420000FDB0\r").unwrap();
/// assert_eq!(pdu, ProtocolDataUnit::new(0x21, 0x01, 0x60, 0x42, vec![]));
/// ```
pub fn parse_frame(adu: &[u8]) -> Result<ProtocolDataUnit, Ydn23Error> {
    if adu.len() < MIN_FRAME_LEN {
        return Err(Ydn23Error::FrameTooShort(adu.len()));
    }
    if adu[0] != SOI || adu[adu.len() - 1] != EOI {
        return Err(Ydn23Error::InvalidDelimiters);
    }

    // ASCII region between SOI and the CHKSUM field
    let ascii = &adu[1..adu.len() - 5];
    let received = &adu[adu.len() - 5..adu.len() - 1];

    let calculated = frame_checksum(ascii);
    if calculated.as_bytes() != received {
        return Err(Ydn23Error::ChecksumMismatch {
            expected: String::from_utf8_lossy(received).into_owned(),
            calculated,
        });
    }

    if ascii.len() < HEADER_ASCII_LEN {
        return Err(Ydn23Error::MalformedFrame);
    }

    let ver = hex_pair_to_byte(ascii[0], ascii[1])?;
    let addr = hex_pair_to_byte(ascii[2], ascii[3])?;
    let cid1 = hex_pair_to_byte(ascii[4], ascii[5])?;
    // CID2 or RTN
    let cid2 = hex_pair_to_byte(ascii[6], ascii[7])?;
    classify_rtn(cid2)?;

    let length = hex_to_bytes(&ascii[8..12])?;
    let lenid = verify_length_field([length[0], length[1]])? as usize;

    let mut info = Vec::new();
    if lenid > 0 {
        let needed = HEADER_ASCII_LEN + lenid;
        if ascii.len() < needed {
            return Err(Ydn23Error::FrameLengthMismatch {
                needed,
                actual: ascii.len(),
            });
        }
        info = hex_to_bytes(&ascii[HEADER_ASCII_LEN..needed])?;
    }

    Ok(ProtocolDataUnit {
        ver,
        addr,
        cid1,
        cid2,
        info,
    })
}

/// Encode a [`ProtocolDataUnit`] into a complete wire frame.
///
/// The LENGTH field (including its LCHKSUM nibble) and the frame CHKSUM are
/// computed here; an INFO payload larger than [`MAX_INFO_LEN`] bytes would
/// overflow the 12-bit length encoding and is rejected.
///
/// ```rust
/// use ydn23_rs::{pack_frame, ProtocolDataUnit};
///
/// let pdu = ProtocolDataUnit::new(0x21, 0x01, 0x60, 0x42, vec![]);
/// assert_eq!(pack_frame(&pdu).unwrap(), b"~210160420000FDB0\r");
/// ```
pub fn pack_frame(pdu: &ProtocolDataUnit) -> Result<Vec<u8>, Ydn23Error> {
    if pdu.info.len() > MAX_INFO_LEN {
        return Err(Ydn23Error::InfoTooLarge(pdu.info.len()));
    }

    let info_ascii = bytes_to_hex(&pdu.info);

    let mut body = bytes_to_hex(&[pdu.ver, pdu.addr, pdu.cid1, pdu.cid2]);
    body.extend_from_slice(&length_field(info_ascii.len() as u16));
    body.extend_from_slice(&info_ascii);

    let chksum = frame_checksum(&body);

    let mut adu = Vec::with_capacity(body.len() + 6);
    adu.push(SOI);
    adu.extend_from_slice(&body);
    adu.extend_from_slice(chksum.as_bytes());
    adu.push(EOI);
    Ok(adu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rtn_passthrough_gaps() {
        // codes outside 0x00..=0x07 and 0x80..=0xEF decode as success
        assert!(classify_rtn(0x08).is_ok());
        assert!(classify_rtn(0x7F).is_ok());
        assert!(classify_rtn(0xF0).is_ok());
        assert!(classify_rtn(0xFF).is_ok());
    }

    #[test]
    fn test_classify_rtn_reserved_range() {
        assert_eq!(classify_rtn(0x80), Err(RtnError::Other(0x80)));
        assert_eq!(classify_rtn(0xEF), Err(RtnError::Other(0xEF)));
    }

    #[test]
    fn test_pack_rejects_oversize_info() {
        let pdu = ProtocolDataUnit::new(0x21, 0x01, 0x60, 0x42, vec![0; 0x800]);
        assert!(matches!(
            pack_frame(&pdu),
            Err(Ydn23Error::InfoTooLarge(0x800))
        ));
    }

    #[test]
    fn test_max_info_still_packs() {
        let pdu = ProtocolDataUnit::new(0x21, 0x01, 0x60, 0x42, vec![0xA5; MAX_INFO_LEN]);
        let adu = pack_frame(&pdu).unwrap();
        assert_eq!(parse_frame(&adu).unwrap(), pdu);
    }
}
