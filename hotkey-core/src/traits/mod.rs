//! Actuator traits
//!
//! The engine talks to its outputs through these traits so the firmware
//! can plug in real hardware and tests can plug in recorders.

pub mod bootloader;
pub mod leds;

pub use bootloader::UpdateMode;
pub use leds::LedStrip;
