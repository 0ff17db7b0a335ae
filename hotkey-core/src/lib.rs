//! Board-agnostic core logic for the hotkey keypad firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button debouncing and boot-key double-tap detection
//! - Host connection tracking
//! - Command execution against the LED and update-mode actuators
//! - The per-tick engine tying these to the serial line protocol
//! - Build-time configuration types
//!
//! Everything here runs on the host, which is where it is tested.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod config;
pub mod engine;
pub mod input;
pub mod leds;
pub mod link;
pub mod traits;

pub use engine::{Dispatched, Engine, TickReport};
