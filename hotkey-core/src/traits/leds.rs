//! Addressable LED strip trait

use hotkey_protocol::Rgb24;

/// Per-button RGB indicators
///
/// Each button owns a block of `leds_per_button` consecutive LEDs. Writes
/// that fall outside the strip are ignored.
pub trait LedStrip {
    /// Colour every LED of one button's block
    fn set_one(&mut self, button: u8, color: Rgb24);

    /// Colour a single physical LED
    fn set_pixel(&mut self, index: u8, color: Rgb24);

    /// Colour the whole strip
    fn set_all(&mut self, color: Rgb24);

    /// Set the global brightness (0-255) applied on output
    fn set_brightness(&mut self, level: u8);
}
