//! Hotkey Serial Protocol
//!
//! This crate defines the text protocol spoken between a host computer and
//! the keypad over USB CDC. It is line based and human typeable:
//!
//! ```text
//! host   → SET_SINGLE B=3 C=00FF00⏎
//! device ← OK⏎
//! device ← pressed 3⏎          (unsolicited)
//! ```
//!
//! Requests end with CR, LF or CRLF and hold at most 127 bytes. Each request
//! gets one reply line: `OK`, `ERR` or `UNKNOWN`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod command;
pub mod line;
pub mod reply;

pub use color::Rgb24;
pub use command::{parse_color24, parse_u8_dec, Command, ParseError};
pub use line::{Feed, LineFramer, LINE_CAPACITY, MAX_LINE_LEN};
pub use reply::{CommandResult, Notification, GREETING, REBOOT_NOTICE};
