//! # ydn23-rs - A Rust Crate for YD/T 1363 (YDN23) Protocol Communication
//!
//! The ydn23-rs crate provides a Rust-based implementation of the YDN23
//! protocol, a Chinese telecom standard for data exchange between a master
//! station and slave devices such as rectifiers, battery packs, and power
//! distribution monitors.
//!
//! On the wire a frame is a start byte (`~`), an ASCII-hex body carrying
//! version, device address, command group (CID1), command/response code
//! (CID2/RTN), a checksummed 12-bit length field, an optional INFO payload,
//! a 16-bit frame checksum, and a carriage-return terminator.
//!
//! ## Features
//!
//! - Encode and decode YDN23 frames, including both checksum schemes
//! - Classify RTN response codes into a typed error taxonomy
//! - Connect to devices over a serial port connection
//! - Run master-side command/response exchanges with bounded retries
//! - Track per-device link statistics
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! To use the ydn23-rs crate in your Rust project, add the following to your
//! Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! ydn23-rs = "0.1.0"
//! ```
//!
//! Then, in your Rust code, you can import the necessary modules and
//! functions:
//!
//! ```rust
//! use ydn23_rs::{
//!     pack_frame, parse_frame, frame_checksum, classify_rtn,
//!     ProtocolDataUnit, Ydn23Error, RtnError, init_logger,
//! };
//! ```

pub mod constants;
pub mod error;
pub mod instrumentation;
pub mod logging;
pub mod util;
pub mod ydn23;

pub use crate::error::{RtnError, Ydn23Error};
pub use crate::logging::{init_logger, log_info};
pub use crate::util::hex::HexError;

// Core YDN23 types
pub use ydn23::checksum::{frame_checksum, length_checksum, length_field, verify_length_field};
pub use ydn23::frame::{classify_rtn, pack_frame, parse_frame, ProtocolDataUnit};
pub use ydn23::master::{ExchangeConfig, FrameLink, MasterStation};
pub use ydn23::serial::{SerialConfig, Ydn23DeviceHandle};

// Link monitoring
pub use instrumentation::{all_link_stats, link_stats, reset_link_stats, LinkStats};

/// Connect to a YDN23 device via serial port.
///
/// # Arguments
/// * `port` - Serial port path (e.g., "/dev/ttyUSB0" on Linux, "COM3" on Windows)
///
/// # Returns
/// * `Ok(Ydn23DeviceHandle)` - Connected device handle for communication
/// * `Err(Ydn23Error)` - Connection failed
pub async fn connect(port: &str) -> Result<Ydn23DeviceHandle, Ydn23Error> {
    Ydn23DeviceHandle::connect(port).await
}

/// Disconnect from a YDN23 device.
///
/// # Arguments
/// * `handle` - Device handle to disconnect
pub async fn disconnect(handle: &mut Ydn23DeviceHandle) -> Result<(), Ydn23Error> {
    handle.disconnect().await
}

/// Send a command frame to the device.
///
/// # Arguments
/// * `handle` - Device handle to send through
/// * `pdu` - Logical frame content to pack and transmit
pub async fn send_frame(
    handle: &mut Ydn23DeviceHandle,
    pdu: &ProtocolDataUnit,
) -> Result<(), Ydn23Error> {
    handle.send_frame(pdu).await
}

/// Receive and decode the next frame from the device.
///
/// # Arguments
/// * `handle` - Device handle to receive from
pub async fn recv_frame(handle: &mut Ydn23DeviceHandle) -> Result<ProtocolDataUnit, Ydn23Error> {
    handle.recv_frame().await
}
