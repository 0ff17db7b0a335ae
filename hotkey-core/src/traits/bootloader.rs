//! Firmware update mode trait

/// Transfer control to the firmware-update bootloader
///
/// On hardware this does not return in any useful sense; implementations
/// may also defer the jump so pending output can drain first.
pub trait UpdateMode {
    fn enter_update_mode(&mut self);
}
