//! Human-readable configuration dump sent in reply to `CONFIG`

use core::fmt::Write;

use heapless::String;
use hotkey_hal::SerialTx;

use super::types::{KeypadConfig, MAX_BUTTONS};

/// Longest dump line: the bracketed pin list with 32 two-digit pins
const MAX_DUMP_LINE: usize = 24 + MAX_BUTTONS * 4;

/// Write the configuration as `KEY=value` lines
pub fn write_config<T: SerialTx>(config: &KeypadConfig, out: &mut T) -> Result<(), T::Error> {
    let mut line: String<MAX_DUMP_LINE> = String::new();

    out.write_line("=== CONFIG ===")?;

    emit(out, &mut line, format_args!("SERIAL_BAUDRATE={}", config.serial_baudrate))?;
    emit(out, &mut line, format_args!("BRIGHTNESS={}", config.brightness))?;
    emit(out, &mut line, format_args!("HOTKEY_BUTTONS={}", config.button_count()))?;
    match config.boot_key_pin {
        Some(pin) => emit(out, &mut line, format_args!("BOOT_KEY_PIN={}", pin))?,
        None => out.write_line("BOOT_KEY_PIN=<disabled>")?,
    }
    emit(
        out,
        &mut line,
        format_args!("BOOT_KEY_ACTIVE_LOW={}", config.boot_key_active_low as u8),
    )?;
    emit(out, &mut line, format_args!("BOOT_DBL_MS={}", config.double_tap_ms))?;
    match config.led_pin {
        Some(pin) => emit(out, &mut line, format_args!("LED_PIN={}", pin))?,
        None => out.write_line("LED_PIN=<not defined>")?,
    }
    emit(out, &mut line, format_args!("LEDS_PER_BUTTON={}", config.leds_per_button))?;

    line.clear();
    let _ = line.push_str("HOTKEY_BUTTON_PINS_MAP=");
    push_pin_list(&mut line, config);
    out.write_line(line.as_str())?;

    // Bracketed list on a single line, not one pin per line
    line.clear();
    let _ = line.push_str("HOTKEY_BUTTON_PINS=[");
    push_pin_list(&mut line, config);
    let _ = line.push(']');
    out.write_line(line.as_str())
}

fn emit<T: SerialTx>(
    out: &mut T,
    line: &mut String<MAX_DUMP_LINE>,
    args: core::fmt::Arguments<'_>,
) -> Result<(), T::Error> {
    line.clear();
    // Every formatted line fits MAX_DUMP_LINE
    let _ = line.write_fmt(args);
    out.write_line(line.as_str())
}

fn push_pin_list(line: &mut String<MAX_DUMP_LINE>, config: &KeypadConfig) {
    for (i, pin) in config.button_pins.iter().enumerate() {
        if i > 0 {
            let _ = line.push(',');
        }
        let _ = write!(line, "{}", pin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use std::string::String as StdString;

    #[derive(Default)]
    struct Capture(StdString);

    impl SerialTx for Capture {
        type Error = ();

        fn write_all(&mut self, data: &[u8]) -> Result<(), ()> {
            self.0.push_str(core::str::from_utf8(data).unwrap());
            Ok(())
        }
    }

    #[test]
    fn test_dump_format() {
        let config = KeypadConfig {
            button_pins: Vec::from_slice(&[2, 3, 4]).unwrap(),
            boot_key_pin: Some(22),
            led_pin: Some(16),
            ..Default::default()
        };

        let mut out = Capture::default();
        write_config(&config, &mut out).unwrap();

        assert_eq!(
            out.0,
            "=== CONFIG ===\r\n\
             SERIAL_BAUDRATE=250000\r\n\
             BRIGHTNESS=64\r\n\
             HOTKEY_BUTTONS=3\r\n\
             BOOT_KEY_PIN=22\r\n\
             BOOT_KEY_ACTIVE_LOW=1\r\n\
             BOOT_DBL_MS=400\r\n\
             LED_PIN=16\r\n\
             LEDS_PER_BUTTON=2\r\n\
             HOTKEY_BUTTON_PINS_MAP=2,3,4\r\n\
             HOTKEY_BUTTON_PINS=[2,3,4]\r\n"
        );
    }

    #[test]
    fn test_dump_optional_pins() {
        let config = KeypadConfig {
            button_pins: Vec::from_slice(&[7]).unwrap(),
            ..Default::default()
        };

        let mut out = Capture::default();
        write_config(&config, &mut out).unwrap();

        assert!(out.0.contains("BOOT_KEY_PIN=<disabled>\r\n"));
        assert!(out.0.contains("LED_PIN=<not defined>\r\n"));
        assert!(out.0.contains("HOTKEY_BUTTON_PINS=[7]\r\n"));
    }
}
