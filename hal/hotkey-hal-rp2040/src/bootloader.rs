//! Jump to the RP2040 ROM USB bootloader

use hotkey_core::traits::UpdateMode;

/// Reboots into the BOOTSEL mass-storage bootloader
pub struct RomUsbBoot;

impl UpdateMode for RomUsbBoot {
    fn enter_update_mode(&mut self) {
        // No activity LED, both USB interfaces enabled
        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
        #[allow(clippy::empty_loop)]
        loop {
            // Waiting for the reset to happen
        }
    }
}
