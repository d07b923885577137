//! The ydn23 module contains the components responsible for the core YDN23
//! protocol implementation: checksums, frame parsing and packing, serial
//! communication, and the master-side exchange.

pub mod checksum;
pub mod frame;
pub mod master;
pub mod serial;
pub mod serial_mock;

pub use checksum::*;
pub use frame::*;
pub use master::*;
pub use serial::*;
