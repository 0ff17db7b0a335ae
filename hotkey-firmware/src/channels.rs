//! Inter-task communication channels
//!
//! The engine task never awaits on USB directly. Received bytes and
//! outgoing text pass through pipes, and host presence is a flag the USB
//! task keeps current.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use hotkey_protocol::Rgb24;

use crate::config::LED_COUNT;

/// Host to device bytes awaiting the framer
const RX_PIPE_SIZE: usize = 256;

/// Device to host text awaiting USB; fits a full CONFIG dump
const TX_PIPE_SIZE: usize = 1024;

/// Bytes received from the host
pub static RX_PIPE: Pipe<CriticalSectionRawMutex, RX_PIPE_SIZE> = Pipe::new();

/// Bytes queued for the host
pub static TX_PIPE: Pipe<CriticalSectionRawMutex, TX_PIPE_SIZE> = Pipe::new();

/// A host has the serial port open (DTR asserted)
pub static HOST_PRESENT: AtomicBool = AtomicBool::new(false);

/// Latest rendered LED frame
pub static LED_FRAME: Signal<CriticalSectionRawMutex, [Rgb24; LED_COUNT]> = Signal::new();

/// Request to reboot into the USB bootloader
pub static BOOT_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();
