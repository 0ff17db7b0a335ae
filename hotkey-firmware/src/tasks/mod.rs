//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod bootloader;
pub mod engine;
pub mod leds;
pub mod usb;

pub use bootloader::{bootloader_task, DeferredUpdate};
pub use engine::engine_task;
pub use leds::leds_task;
pub use usb::{usb_device_task, usb_rx_task, usb_tx_task};
