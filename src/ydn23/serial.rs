//! # YDN23 Serial Communication
//!
//! This module handles the serial side of the protocol: opening the port,
//! sending packed frames, and extracting delimited frames from the incoming
//! byte stream before handing them to the codec.
//!
//! A device may be preceded by line noise; reception accumulates bytes in a
//! persistent buffer, discards everything before the first SOI, and returns
//! the bytes through the terminating EOI.

use crate::constants::{EOI, MAX_FRAME_LEN, SOI};
use crate::error::Ydn23Error;
use crate::logging::log_debug;
use crate::util::hex::format_hex_compact;
use crate::ydn23::frame::{pack_frame, parse_frame, ProtocolDataUnit};
use crate::ydn23::master::FrameLink;
use async_trait::async_trait;
use bytes::BytesMut;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::time::timeout;
use tokio_serial::SerialPortBuilderExt;

/// Configuration for serial connection.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub baudrate: u32,
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        SerialConfig {
            baudrate: 9600,
            timeout: Duration::from_secs(1),
        }
    }
}

/// Handle to a YDN23 serial connection, encapsulating the
/// tokio_serial::SerialStream.
pub struct Ydn23DeviceHandle {
    port: tokio_serial::SerialStream,
    config: SerialConfig,
    rx: BytesMut,
}

impl Ydn23DeviceHandle {
    /// Open the serial port with default settings (9600 8N1).
    pub async fn connect(port_name: &str) -> Result<Ydn23DeviceHandle, Ydn23Error> {
        Self::connect_with_config(port_name, SerialConfig::default()).await
    }

    /// Open the serial port with custom config.
    pub async fn connect_with_config(
        port_name: &str,
        config: SerialConfig,
    ) -> Result<Ydn23DeviceHandle, Ydn23Error> {
        let port = tokio_serial::new(port_name, config.baudrate)
            .data_bits(tokio_serial::DataBits::Eight)
            .stop_bits(tokio_serial::StopBits::One)
            .parity(tokio_serial::Parity::None)
            .timeout(config.timeout)
            .open_native_async()
            .map_err(|e| Ydn23Error::SerialPortError(e.to_string()))?;

        Ok(Ydn23DeviceHandle {
            port,
            config,
            rx: BytesMut::with_capacity(256),
        })
    }

    /// Closes the serial port connection.
    pub async fn disconnect(&mut self) -> Result<(), Ydn23Error> {
        // SerialStream has no close method; dropping the handle closes it
        Ok(())
    }

    /// Pack a [`ProtocolDataUnit`] and transmit it.
    pub async fn send_frame(&mut self, pdu: &ProtocolDataUnit) -> Result<(), Ydn23Error> {
        let data = pack_frame(pdu)?;
        log_debug(&format!("TX {}", format_hex_compact(&data)));
        self.port
            .write_all(&data)
            .await
            .map_err(|e| Ydn23Error::SerialPortError(e.to_string()))?;
        self.port
            .flush()
            .await
            .map_err(|e| Ydn23Error::SerialPortError(e.to_string()))
    }

    /// Receive the next delimited frame and decode it.
    pub async fn recv_frame(&mut self) -> Result<ProtocolDataUnit, Ydn23Error> {
        let raw = read_frame_bytes(&mut self.port, &mut self.rx, self.config.timeout).await?;
        log_debug(&format!("RX {}", format_hex_compact(&raw)));
        parse_frame(&raw)
    }
}

#[async_trait]
impl FrameLink for Ydn23DeviceHandle {
    async fn send_frame(&mut self, pdu: &ProtocolDataUnit) -> Result<(), Ydn23Error> {
        Ydn23DeviceHandle::send_frame(self, pdu).await
    }

    async fn recv_frame(&mut self) -> Result<ProtocolDataUnit, Ydn23Error> {
        Ydn23DeviceHandle::recv_frame(self).await
    }
}

/// Extract the next SOI..=EOI frame from `reader`, accumulating into `rx`.
///
/// Bytes before SOI are discarded as inter-frame noise; bytes after the
/// returned frame stay in `rx` for the next call. Each read is bounded by
/// `to`, and an unterminated run longer than [`MAX_FRAME_LEN`] is dropped.
pub async fn read_frame_bytes<R: AsyncRead + Unpin>(
    reader: &mut R,
    rx: &mut BytesMut,
    to: Duration,
) -> Result<Vec<u8>, Ydn23Error> {
    loop {
        if let Some(start) = rx.iter().position(|&b| b == SOI) {
            if start > 0 {
                let _ = rx.split_to(start);
            }
            if let Some(end) = rx.iter().position(|&b| b == EOI) {
                return Ok(rx.split_to(end + 1).to_vec());
            }
            if rx.len() > MAX_FRAME_LEN {
                rx.clear();
                return Err(Ydn23Error::SerialPortError(
                    "discarding oversize frame without EOI".into(),
                ));
            }
        } else {
            rx.clear();
        }

        let mut chunk = [0u8; 256];
        let n = timeout(to, reader.read(&mut chunk))
            .await
            .map_err(|_| Ydn23Error::Timeout)?
            .map_err(|e| Ydn23Error::SerialPortError(e.to_string()))?;
        if n == 0 {
            return Err(Ydn23Error::SerialPortError("serial port closed".into()));
        }
        rx.extend_from_slice(&chunk[..n]);
    }
}
