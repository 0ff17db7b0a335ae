//! Keypad configuration
//!
//! Values are fixed at build time; the firmware converts its generated
//! constants into a [`KeypadConfig`] at startup.

pub mod dump;
pub mod types;

pub use dump::write_config;
pub use types::*;
