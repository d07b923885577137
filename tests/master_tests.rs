//! Tests for the master-side exchange over a mock serial link.
//!
//! Each test uses a distinct device address so the global link statistics
//! do not interfere across tests.

use ydn23_rs::ydn23::serial_mock::MockSerialPort;
use ydn23_rs::{
    link_stats, pack_frame, ExchangeConfig, MasterStation, ProtocolDataUnit, RtnError, Ydn23Error,
};

#[tokio::test]
async fn test_transact_exchanges_one_frame_pair() {
    let port = MockSerialPort::new();
    let request = ProtocolDataUnit::new(0x21, 0x31, 0x60, 0x42, vec![]);
    let response = ProtocolDataUnit::new(0x21, 0x31, 0x60, 0x00, vec![0x01, 0x02]);
    port.queue_response(&response).unwrap();

    let mut master = MasterStation::new(port.clone());
    let got = master.transact(&request).await.unwrap();

    assert_eq!(got, response);
    assert_eq!(port.get_tx_data(), pack_frame(&request).unwrap());

    let stats = link_stats(0x31);
    assert_eq!(stats.requests, 1);
    assert_eq!(stats.responses, 1);
}

#[tokio::test]
async fn test_transact_retries_corrupted_response() {
    let port = MockSerialPort::new();
    let request = ProtocolDataUnit::new(0x21, 0x32, 0x60, 0x42, vec![]);
    let response = ProtocolDataUnit::new(0x21, 0x32, 0x60, 0x00, vec![0xAA]);

    // first answer arrives with a damaged body, the resend succeeds
    port.queue_rx_data(b"~210160420001FDB0\r");
    port.queue_response(&response).unwrap();

    let mut master = MasterStation::with_config(port.clone(), ExchangeConfig { retries: 1 });
    let got = master.transact(&request).await.unwrap();

    assert_eq!(got, response);
    // the command went out twice
    let expected = pack_frame(&request).unwrap();
    let tx = port.get_tx_data();
    assert_eq!(tx.len(), expected.len() * 2);
    assert_eq!(&tx[..expected.len()], &expected[..]);
    assert_eq!(&tx[expected.len()..], &expected[..]);

    let stats = link_stats(0x32);
    assert_eq!(stats.requests, 2);
    assert_eq!(stats.responses, 1);
    assert_eq!(stats.checksum_errors, 1);
}

#[tokio::test]
async fn test_transact_rtn_error_is_terminal() {
    let port = MockSerialPort::new();
    let request = ProtocolDataUnit::new(0x21, 0x33, 0x60, 0x42, vec![]);
    port.queue_response(&ProtocolDataUnit::new(0x21, 0x33, 0x60, 0x90, vec![]))
        .unwrap();

    let mut master = MasterStation::with_config(port.clone(), ExchangeConfig { retries: 3 });
    let err = master.transact(&request).await.unwrap_err();

    assert!(matches!(err, Ydn23Error::Rtn(RtnError::Other(0x90))));
    // no resend for a well-formed refusal
    assert_eq!(port.get_tx_data(), pack_frame(&request).unwrap());

    let stats = link_stats(0x33);
    assert_eq!(stats.requests, 1);
    assert_eq!(stats.rtn_errors, 1);
}

#[tokio::test]
async fn test_transact_surfaces_dead_link() {
    let port = MockSerialPort::new();
    let request = ProtocolDataUnit::new(0x21, 0x34, 0x60, 0x42, vec![]);

    let mut master = MasterStation::new(port);
    let err = master.transact(&request).await.unwrap_err();
    assert!(matches!(err, Ydn23Error::SerialPortError(_)));
}

#[tokio::test]
async fn test_transact_gives_up_after_retry_budget() {
    let port = MockSerialPort::new();
    let request = ProtocolDataUnit::new(0x21, 0x35, 0x60, 0x42, vec![]);

    // two damaged answers, retry budget of one
    port.queue_rx_data(b"~210160420001FDB0\r");
    port.queue_rx_data(b"~210160420001FDB0\r");

    let mut master = MasterStation::with_config(port.clone(), ExchangeConfig { retries: 1 });
    let err = master.transact(&request).await.unwrap_err();

    assert!(matches!(err, Ydn23Error::ChecksumMismatch { .. }));
    assert_eq!(link_stats(0x35).checksum_errors, 2);
}
