//! Hotkey Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. This keeps the keypad engine free of any chip
//! dependency so it can be tested on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hotkey-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hotkey-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  hotkey-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::ActiveInput`] - Digital input with polarity
//! - [`serial::SerialRx`], [`serial::SerialTx`], [`serial::HostLink`] - Host link

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use gpio::{ActiveInput, ActiveLevel, InputPin, PolarizedInput};
pub use serial::{HostLink, SerialPort, SerialRx, SerialTx};
