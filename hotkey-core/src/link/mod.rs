//! Host connection tracking

pub mod monitor;

pub use monitor::{ConnectionMonitor, LinkEvent};
