//! Mock serial port implementation for testing
//!
//! This module provides a mock serial port that can be used to test the
//! YDN23 serial communication without requiring actual hardware. Reads
//! drain a queued byte buffer and report end-of-file once it is empty.

use crate::error::Ydn23Error;
use crate::ydn23::frame::{pack_frame, parse_frame, ProtocolDataUnit};
use crate::ydn23::master::FrameLink;
use crate::ydn23::serial::read_frame_bytes;
use async_trait::async_trait;
use bytes::BytesMut;
use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadBuf};

/// Mock serial port that simulates bidirectional communication
#[derive(Clone, Default)]
pub struct MockSerialPort {
    /// Data written to the port (outgoing)
    pub tx_buffer: Arc<Mutex<Vec<u8>>>,
    /// Data to be read from the port (incoming)
    pub rx_buffer: Arc<Mutex<VecDeque<u8>>>,
    /// Scan buffer carried between frame reads
    scan: BytesMut,
}

impl MockSerialPort {
    pub fn new() -> Self {
        MockSerialPort::default()
    }

    /// Queue raw bytes to be read from the port
    pub fn queue_rx_data(&self, data: &[u8]) {
        let mut rx = self.rx_buffer.lock().unwrap();
        rx.extend(data);
    }

    /// Queue a packed response frame for the given unit
    pub fn queue_response(&self, pdu: &ProtocolDataUnit) -> Result<(), Ydn23Error> {
        let data = pack_frame(pdu)?;
        self.queue_rx_data(&data);
        Ok(())
    }

    /// Get data that was written to the port
    pub fn get_tx_data(&self) -> Vec<u8> {
        self.tx_buffer.lock().unwrap().clone()
    }

    /// Clear all buffers
    pub fn clear(&self) {
        self.tx_buffer.lock().unwrap().clear();
        self.rx_buffer.lock().unwrap().clear();
    }
}

impl AsyncRead for MockSerialPort {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let mut rx = self.rx_buffer.lock().unwrap();
        let n = rx.len().min(buf.remaining());
        let bytes: Vec<u8> = rx.drain(..n).collect();
        buf.put_slice(&bytes);
        Poll::Ready(Ok(()))
    }
}

impl AsyncWrite for MockSerialPort {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        data: &[u8],
    ) -> Poll<io::Result<usize>> {
        self.tx_buffer.lock().unwrap().extend_from_slice(data);
        Poll::Ready(Ok(data.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[async_trait]
impl FrameLink for MockSerialPort {
    async fn send_frame(&mut self, pdu: &ProtocolDataUnit) -> Result<(), Ydn23Error> {
        let data = pack_frame(pdu)?;
        self.write_all(&data)
            .await
            .map_err(|e| Ydn23Error::SerialPortError(e.to_string()))?;
        Ok(())
    }

    async fn recv_frame(&mut self) -> Result<ProtocolDataUnit, Ydn23Error> {
        let mut scan = std::mem::take(&mut self.scan);
        let result = read_frame_bytes(self, &mut scan, Duration::from_millis(50)).await;
        self.scan = scan;
        parse_frame(&result?)
    }
}
