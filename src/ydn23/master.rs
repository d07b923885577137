//! # Master-Side Exchange
//!
//! A YDN23 bus is strictly command/response: the master station sends one
//! addressed command frame and the addressed slave answers with one response
//! frame. This module implements that exchange over any [`FrameLink`], with
//! bounded retries for transport-integrity failures.
//!
//! RTN errors are not retried: a classified RTN code is a well-formed answer
//! from the device, and resending the same command would produce the same
//! refusal.

use crate::error::Ydn23Error;
use crate::instrumentation::stats;
use crate::logging::log_warn;
use crate::ydn23::frame::ProtocolDataUnit;
use async_trait::async_trait;

/// One end of a frame-sized pipe: send a command, receive a response.
///
/// Implemented by the serial device handle and by the mock port used in
/// tests.
#[async_trait]
pub trait FrameLink {
    async fn send_frame(&mut self, pdu: &ProtocolDataUnit) -> Result<(), Ydn23Error>;
    async fn recv_frame(&mut self) -> Result<ProtocolDataUnit, Ydn23Error>;
}

/// Configuration for a command/response exchange.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// Resend attempts after a retryable failure.
    pub retries: u32,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        ExchangeConfig { retries: 2 }
    }
}

/// Drives command/response exchanges with slave devices over a [`FrameLink`].
pub struct MasterStation<L: FrameLink> {
    link: L,
    config: ExchangeConfig,
}

impl<L: FrameLink> MasterStation<L> {
    pub fn new(link: L) -> Self {
        Self::with_config(link, ExchangeConfig::default())
    }

    pub fn with_config(link: L, config: ExchangeConfig) -> Self {
        MasterStation { link, config }
    }

    /// Send `request` and wait for the device's response.
    ///
    /// Integrity failures on the response (frame checksum, length checksum,
    /// hex corruption, timeout) are retried up to the configured count;
    /// everything else is returned to the caller immediately.
    pub async fn transact(
        &mut self,
        request: &ProtocolDataUnit,
    ) -> Result<ProtocolDataUnit, Ydn23Error> {
        let mut attempt = 0u32;
        loop {
            self.link.send_frame(request).await?;
            stats::record_request(request.addr);

            match self.link.recv_frame().await {
                Ok(response) => {
                    stats::record_response(request.addr);
                    return Ok(response);
                }
                Err(err) => {
                    match &err {
                        Ydn23Error::ChecksumMismatch { .. }
                        | Ydn23Error::LengthChecksumMismatch { .. }
                        | Ydn23Error::Hex(_) => stats::record_checksum_error(request.addr),
                        Ydn23Error::Rtn(_) => stats::record_rtn_error(request.addr),
                        Ydn23Error::Timeout => stats::record_timeout(request.addr),
                        _ => {}
                    }
                    if attempt >= self.config.retries || !is_retryable(&err) {
                        return Err(err);
                    }
                    attempt += 1;
                    log_warn(&format!(
                        "retrying device 0x{:02X} (attempt {attempt}): {err}",
                        request.addr
                    ));
                }
            }
        }
    }

    /// Consume the station and return the underlying link.
    pub fn into_inner(self) -> L {
        self.link
    }
}

fn is_retryable(err: &Ydn23Error) -> bool {
    matches!(
        err,
        Ydn23Error::ChecksumMismatch { .. }
            | Ydn23Error::LengthChecksumMismatch { .. }
            | Ydn23Error::Hex(_)
            | Ydn23Error::Timeout
    )
}
