//! Build-time keypad configuration
//!
//! `build.rs` validates `keypad.toml` and emits the constants included
//! below.

use hotkey_core::config::KeypadConfig;
use hotkey_protocol::GREETING;

include!(concat!(env!("OUT_DIR"), "/keypad_config.rs"));

/// Assemble the runtime configuration from the generated constants
pub fn keypad_config() -> KeypadConfig {
    KeypadConfig {
        firmware_banner: GREETING,
        serial_baudrate: SERIAL_BAUDRATE,
        // build.rs caps the pin list at the core's limit
        button_pins: BUTTON_PINS.iter().copied().collect(),
        debounce_ms: DEBOUNCE_MS,
        boot_key_pin: BOOT_KEY_PIN,
        boot_key_active_low: BOOT_KEY_ACTIVE_LOW,
        double_tap_ms: DOUBLE_TAP_MS,
        led_pin: LED_PIN,
        leds_per_button: LEDS_PER_BUTTON,
        brightness: BRIGHTNESS,
    }
}
