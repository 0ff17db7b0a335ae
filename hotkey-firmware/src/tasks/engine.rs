//! Keypad engine task
//!
//! Runs the engine at a fixed period and hands changed LED frames to the
//! LED task.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use hotkey_core::leds::PixelBuffer;
use hotkey_core::link::LinkEvent;
use hotkey_core::{Engine, TickReport};
use hotkey_hal_rp2040::Button;

use super::bootloader::DeferredUpdate;
use crate::channels::LED_FRAME;
use crate::config::LED_COUNT;
use crate::serial::UsbSerialPort;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 10;

pub type KeypadEngine = Engine<Button<'static>, PixelBuffer<LED_COUNT>, DeferredUpdate>;

/// Engine task - debounces keys and serves host commands every tick
#[embassy_executor::task]
pub async fn engine_task(mut engine: KeypadEngine) {
    info!("Engine task started");

    let mut port = UsbSerialPort;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        let now_ms = Instant::now().as_millis() as u32;
        let report = engine.tick(now_ms, &mut port);
        log_report(&report);

        let leds = engine.leds_mut();
        if leds.take_dirty() {
            LED_FRAME.signal(leds.render());
        }
    }
}

fn log_report(report: &TickReport) {
    for index in &report.pressed {
        debug!("Hotkey {} pressed", index);
    }
    if report.update_requested {
        info!("Boot key double tap");
    }
    match report.link {
        LinkEvent::BecamePresent => info!("Host connected"),
        LinkEvent::BecameAbsent => info!("Host disconnected"),
        LinkEvent::Unchanged => {}
    }
    if report.overflowed {
        warn!("Command line too long, dropped");
    }
    if report.discarded > 0 {
        warn!("Dropped {} bytes received without a host", report.discarded);
    }
    if let Some(dispatched) = report.dispatched {
        debug!("Command dispatched: {:?}", dispatched);
    }
}
