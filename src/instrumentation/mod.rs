//! Link monitoring support for the master station.

pub mod stats;

pub use stats::{all_link_stats, link_stats, reset_link_stats, LinkStats};
