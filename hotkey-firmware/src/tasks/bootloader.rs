//! Deferred reboot into the USB bootloader
//!
//! The engine requests the reboot from inside a tick, right after queuing
//! the reboot notice. Jumping immediately would lose that text and the
//! `OK`, so the jump happens here after a short delay.

use defmt::*;
use embassy_time::Timer;

use hotkey_core::traits::UpdateMode;
use hotkey_hal_rp2040::RomUsbBoot;

use crate::channels::BOOT_REQUEST;

/// Time given to USB to drain pending output
const REBOOT_DELAY_MS: u64 = 50;

/// Update-mode actuator used by the engine
pub struct DeferredUpdate;

impl UpdateMode for DeferredUpdate {
    fn enter_update_mode(&mut self) {
        BOOT_REQUEST.signal(());
    }
}

/// Bootloader task - waits for a request, then reboots
#[embassy_executor::task]
pub async fn bootloader_task() {
    info!("Bootloader task started");

    BOOT_REQUEST.wait().await;
    info!("Rebooting to USB bootloader in {} ms", REBOOT_DELAY_MS);
    Timer::after_millis(REBOOT_DELAY_MS).await;

    RomUsbBoot.enter_update_mode();
}
