//! Configuration type definitions

use heapless::Vec;

use crate::input::{DEBOUNCE_MS, DOUBLE_TAP_MS};

/// Maximum number of hotkeys
pub const MAX_BUTTONS: usize = 32;

/// Default LED brightness
pub const DEFAULT_BRIGHTNESS: u8 = 64;

/// Default LEDs per button
pub const DEFAULT_LEDS_PER_BUTTON: u8 = 2;

/// Default nominal baud rate
pub const DEFAULT_BAUDRATE: u32 = 250_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No hotkeys configured
    NoButtons,
    /// The same GPIO is used twice
    DuplicatePin(u8),
    /// Zero LEDs per button
    NoLedsPerButton,
}

/// Build-time keypad configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Banner sent to the host on connect
    pub firmware_banner: &'static str,
    /// Nominal serial rate (informational over USB CDC)
    pub serial_baudrate: u32,
    /// GPIO of each hotkey, in button index order
    pub button_pins: Vec<u8, MAX_BUTTONS>,
    /// Hotkey debounce window
    pub debounce_ms: u32,
    /// Boot key GPIO; `None` disables the boot key
    pub boot_key_pin: Option<u8>,
    /// Boot key reads low when pressed
    pub boot_key_active_low: bool,
    /// Maximum gap between the two presses of a double tap
    pub double_tap_ms: u32,
    /// WS2812 data GPIO; `None` when no strip is fitted
    pub led_pin: Option<u8>,
    /// LEDs in each button's block
    pub leds_per_button: u8,
    /// Global brightness 0-255
    pub brightness: u8,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            firmware_banner: hotkey_protocol::GREETING,
            serial_baudrate: DEFAULT_BAUDRATE,
            button_pins: Vec::new(),
            debounce_ms: DEBOUNCE_MS,
            boot_key_pin: None,
            boot_key_active_low: true,
            double_tap_ms: DOUBLE_TAP_MS,
            led_pin: None,
            leds_per_button: DEFAULT_LEDS_PER_BUTTON,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl KeypadConfig {
    /// Number of hotkeys
    pub fn button_count(&self) -> usize {
        self.button_pins.len()
    }

    /// LEDs needed to light every button block
    pub fn led_count(&self) -> usize {
        self.button_count() * self.leds_per_button as usize
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.button_pins.is_empty() {
            return Err(ConfigError::NoButtons);
        }
        if self.leds_per_button == 0 {
            return Err(ConfigError::NoLedsPerButton);
        }

        let mut used: Vec<u8, { MAX_BUTTONS + 2 }> = Vec::new();
        let pins = self
            .button_pins
            .iter()
            .chain(self.boot_key_pin.iter())
            .chain(self.led_pin.iter());
        for &pin in pins {
            if used.contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
            // Capacity covers every configurable pin
            let _ = used.push(pin);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pins: &[u8]) -> KeypadConfig {
        KeypadConfig {
            button_pins: Vec::from_slice(pins).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = KeypadConfig::default();
        assert_eq!(cfg.serial_baudrate, 250_000);
        assert_eq!(cfg.brightness, 64);
        assert_eq!(cfg.leds_per_button, 2);
        assert_eq!(cfg.debounce_ms, 20);
        assert_eq!(cfg.double_tap_ms, 400);
        assert!(cfg.boot_key_active_low);
    }

    #[test]
    fn test_led_count() {
        let cfg = config(&[2, 3, 4]);
        assert_eq!(cfg.led_count(), 6);
    }

    #[test]
    fn test_validate_ok() {
        let mut cfg = config(&[2, 3, 4]);
        cfg.boot_key_pin = Some(5);
        cfg.led_pin = Some(6);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(config(&[]).validate(), Err(ConfigError::NoButtons));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        assert_eq!(config(&[2, 3, 2]).validate(), Err(ConfigError::DuplicatePin(2)));

        let mut cfg = config(&[2, 3]);
        cfg.boot_key_pin = Some(3);
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicatePin(3)));

        let mut cfg = config(&[2, 3]);
        cfg.led_pin = Some(2);
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicatePin(2)));
    }

    #[test]
    fn test_validate_rejects_zero_leds() {
        let mut cfg = config(&[2]);
        cfg.leds_per_button = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::NoLedsPerButton));
    }
}
