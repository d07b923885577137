//! Shared utility helpers used across the crate.

pub mod hex;

pub use hex::{bytes_to_hex, format_hex_compact, hex_to_bytes, HexError};
