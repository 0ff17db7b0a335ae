//! RP2040-specific HAL for the hotkey keypad firmware
//!
//! This crate provides RP2040 implementations of the shared `hotkey-hal`
//! and `hotkey-core` traits:
//!
//! - Config-driven GPIO allocation by pin number
//! - Push buttons with polarity-dependent pulls
//! - WS2812 LED output through PIO
//! - Reboot into the ROM USB bootloader

#![no_std]

pub mod bootloader;
pub mod gpio;
pub mod pins;
pub mod ws2812;

pub use bootloader::RomUsbBoot;
pub use gpio::{button, Button, GpioInput};
pub use pins::{GpioPeripherals, PinBank, PinError, RemainingPeripherals};
pub use ws2812::Ws2812Strip;
