//! Device to host text
//!
//! Every request line gets exactly one reply line, except `CONFIG` whose
//! dump replaces the acknowledgement. Notifications are unsolicited lines
//! that are never replies.

use core::fmt::Write;

use heapless::String;

/// Sent once each time a host opens the port
pub const GREETING: &str = "Hotkey Companion Firmware V0.0.1";

/// Sent right before the device jumps to its bootloader
pub const REBOOT_NOTICE: &str = "Rebooting to bootloader...";

/// Longest notification line, excluding the line ending
pub const MAX_NOTIFICATION_LEN: usize = 16;

/// Outcome of one dispatched line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandResult {
    Unknown,
    Ok,
    Err,
}

impl CommandResult {
    /// Reply line text
    pub fn as_str(self) -> &'static str {
        match self {
            CommandResult::Ok => "OK",
            CommandResult::Err => "ERR",
            CommandResult::Unknown => "UNKNOWN",
        }
    }
}

/// Unsolicited device events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// A hotkey reached a stable pressed state
    Pressed(u8),
}

impl Notification {
    /// Render the notification line (without line ending)
    pub fn to_line(self) -> String<MAX_NOTIFICATION_LEN> {
        let mut line = String::new();
        match self {
            Notification::Pressed(index) => {
                // "pressed 255" always fits
                let _ = write!(line, "pressed {}", index);
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_text() {
        assert_eq!(CommandResult::Ok.as_str(), "OK");
        assert_eq!(CommandResult::Err.as_str(), "ERR");
        assert_eq!(CommandResult::Unknown.as_str(), "UNKNOWN");
    }

    #[test]
    fn test_pressed_line() {
        assert_eq!(Notification::Pressed(0).to_line().as_str(), "pressed 0");
        assert_eq!(Notification::Pressed(255).to_line().as_str(), "pressed 255");
    }
}
