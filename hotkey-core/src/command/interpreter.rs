//! Command interpreter
//!
//! Executes parsed commands against the LED and update-mode actuators and
//! decides which reply the host gets.

use hotkey_hal::SerialTx;
use hotkey_protocol::{Command, CommandResult, REBOOT_NOTICE};

use crate::config::{write_config, KeypadConfig};
use crate::traits::{LedStrip, UpdateMode};

/// Owner of the actuators driven by host commands
pub struct Interpreter<L, U> {
    leds: L,
    update: U,
}

impl<L: LedStrip, U: UpdateMode> Interpreter<L, U> {
    pub fn new(leds: L, update: U) -> Self {
        Self { leds, update }
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut L {
        &mut self.leds
    }

    pub fn update_mode(&self) -> &U {
        &self.update
    }

    pub fn update_mode_mut(&mut self) -> &mut U {
        &mut self.update
    }

    /// Parse and execute one line
    ///
    /// Returns the reply to send, or `None` when the command already
    /// answered with its own output.
    pub fn dispatch<T: SerialTx>(
        &mut self,
        line: &[u8],
        config: &KeypadConfig,
        out: &mut T,
    ) -> Option<CommandResult> {
        match Command::parse_bytes(line) {
            Ok(command) => {
                let result = self.execute(&command, config, out);
                command.acknowledged().then_some(result)
            }
            Err(e) => Some(e.result()),
        }
    }

    /// Execute a parsed command
    ///
    /// Output written here is best effort; a host that went away simply
    /// misses it.
    pub fn execute<T: SerialTx>(
        &mut self,
        command: &Command,
        config: &KeypadConfig,
        out: &mut T,
    ) -> CommandResult {
        match *command {
            Command::BootBootloader => {
                let _ = out.write_line(REBOOT_NOTICE);
                self.update.enter_update_mode();
            }
            Command::Config => {
                let _ = write_config(config, out);
            }
            Command::SetSingle { button, color } => self.leds.set_one(button, color),
            Command::SetAll { color } => self.leds.set_all(color),
            Command::Led { index, color } => self.leds.set_pixel(index, color),
        }
        CommandResult::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leds::PixelBuffer;
    use heapless::Vec;
    use hotkey_protocol::Rgb24;
    use std::string::String;

    #[derive(Default)]
    struct Capture(String);

    impl SerialTx for Capture {
        type Error = ();

        fn write_all(&mut self, data: &[u8]) -> Result<(), ()> {
            self.0.push_str(core::str::from_utf8(data).unwrap());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingUpdate(u32);

    impl UpdateMode for CountingUpdate {
        fn enter_update_mode(&mut self) {
            self.0 += 1;
        }
    }

    fn setup() -> (Interpreter<PixelBuffer<8>, CountingUpdate>, KeypadConfig, Capture) {
        let config = KeypadConfig {
            button_pins: Vec::from_slice(&[2, 3, 4, 5]).unwrap(),
            ..Default::default()
        };
        (
            Interpreter::new(PixelBuffer::new(2, 64), CountingUpdate::default()),
            config,
            Capture::default(),
        )
    }

    #[test]
    fn test_set_single() {
        let (mut interp, config, mut out) = setup();
        let result = interp.dispatch(b"SET_SINGLE B=1 C=00FF00", &config, &mut out);

        assert_eq!(result, Some(CommandResult::Ok));
        assert_eq!(interp.leds().pixel(2), Some(Rgb24::from_u32(0x00FF00)));
        assert_eq!(interp.leds().pixel(3), Some(Rgb24::from_u32(0x00FF00)));
        assert_eq!(interp.leds().pixel(4), Some(Rgb24::BLACK));
        assert!(out.0.is_empty());
    }

    #[test]
    fn test_keyed_arguments_any_order() {
        let (_, config, mut out) = setup();
        let mut interp = Interpreter::new(PixelBuffer::<12>::new(2, 64), CountingUpdate::default());

        let result = interp.dispatch(b"SET_SINGLE C=0xAABBCC B=5", &config, &mut out);
        assert_eq!(result, Some(CommandResult::Ok));
        assert_eq!(interp.leds().pixel(10), Some(Rgb24::from_u32(0xAABBCC)));
        assert_eq!(interp.leds().pixel(11), Some(Rgb24::from_u32(0xAABBCC)));
        assert_eq!(interp.leds().pixel(9), Some(Rgb24::BLACK));
    }

    #[test]
    fn test_rejected_line_has_no_effect() {
        let (mut interp, config, mut out) = setup();
        let result = interp.dispatch(b"SET_SINGLE B=1 C=fff X=1", &config, &mut out);

        assert_eq!(result, Some(CommandResult::Err));
        assert!(interp.leds().pixels().iter().all(|p| *p == Rgb24::BLACK));
    }

    #[test]
    fn test_set_single_past_strip_is_ok_noop() {
        let (mut interp, config, mut out) = setup();
        let result = interp.dispatch(b"SET_SINGLE B=200 C=FF0000", &config, &mut out);

        assert_eq!(result, Some(CommandResult::Ok));
        assert!(interp.leds().pixels().iter().all(|p| *p == Rgb24::BLACK));
    }

    #[test]
    fn test_set_all_and_led() {
        let (mut interp, config, mut out) = setup();
        interp.dispatch(b"SET_ALL C=0x0000ff", &config, &mut out);
        interp.dispatch(b"LED 7 ff0000", &config, &mut out);

        assert_eq!(interp.leds().pixel(0), Some(Rgb24::from_u32(0x0000FF)));
        assert_eq!(interp.leds().pixel(7), Some(Rgb24::from_u32(0xFF0000)));
    }

    #[test]
    fn test_config_has_no_ack() {
        let (mut interp, config, mut out) = setup();
        let result = interp.dispatch(b"CONFIG", &config, &mut out);

        assert_eq!(result, None);
        assert!(out.0.starts_with("=== CONFIG ===\r\n"));
        assert!(out.0.ends_with("HOTKEY_BUTTON_PINS=[2,3,4,5]\r\n"));
    }

    #[test]
    fn test_boot_bootloader() {
        let (mut interp, config, mut out) = setup();
        let result = interp.dispatch(b"BOOT_BOOTLOADER", &config, &mut out);

        assert_eq!(result, Some(CommandResult::Ok));
        assert_eq!(out.0, "Rebooting to bootloader...\r\n");
        assert_eq!(interp.update_mode().0, 1);
    }

    #[test]
    fn test_errors() {
        let (mut interp, config, mut out) = setup();
        assert_eq!(
            interp.dispatch(b"FOO", &config, &mut out),
            Some(CommandResult::Unknown)
        );
        assert_eq!(
            interp.dispatch(b"", &config, &mut out),
            Some(CommandResult::Err)
        );
        assert_eq!(
            interp.dispatch(b"SET_SINGLE B=256 C=FF0000", &config, &mut out),
            Some(CommandResult::Err)
        );
        assert_eq!(
            interp.dispatch(b"BOOT_BOOTLOADER now", &config, &mut out),
            Some(CommandResult::Err)
        );
        assert_eq!(
            interp.dispatch(b"SET_ALL C=ff X=1", &config, &mut out),
            Some(CommandResult::Err)
        );
        assert!(interp.leds().pixels().iter().all(|p| *p == Rgb24::BLACK));
        assert_eq!(interp.update_mode().0, 0);
        assert!(out.0.is_empty());
    }
}
