//! Command grammar
//!
//! One command per line, whitespace/tab separated tokens, command names
//! matched case-insensitively:
//!
//! ```text
//! BOOT_BOOTLOADER
//! CONFIG
//! SET_SINGLE B=<0-255> C=<hex>
//! SET_ALL C=<hex>
//! LED <0-255> <hex>
//! ```
//!
//! Keyed arguments may come in any order and any unrecognized token fails
//! the whole line. Numbers are strict: the entire token must convert.
//! Indices outside 0-255 are rejected, while hex colours keep only their
//! low 24 bits.

use crate::color::Rgb24;
use crate::reply::CommandResult;

/// Errors produced while parsing a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line holds no tokens
    Empty,
    /// First token is not a known command
    UnknownCommand,
    /// Token not accepted by the command
    UnexpectedToken,
    /// Required argument missing
    MissingArgument,
    /// Argument is not a well-formed number
    InvalidNumber,
    /// Number outside the accepted range
    OutOfRange,
    /// Line is not valid UTF-8
    InvalidUtf8,
}

impl ParseError {
    /// Result reported to the host for this error
    pub fn result(self) -> CommandResult {
        match self {
            ParseError::UnknownCommand => CommandResult::Unknown,
            _ => CommandResult::Err,
        }
    }
}

/// A parsed host command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Enter the MCU's firmware-update bootloader
    BootBootloader,
    /// Dump the build-time configuration
    Config,
    /// Colour the LED block of one button
    SetSingle { button: u8, color: Rgb24 },
    /// Colour every LED
    SetAll { color: Rgb24 },
    /// Colour one physical LED (positional form)
    Led { index: u8, color: Rgb24 },
}

const CMD_BOOT_BOOTLOADER: &str = "BOOT_BOOTLOADER";
const CMD_CONFIG: &str = "CONFIG";
const CMD_SET_SINGLE: &str = "SET_SINGLE";
const CMD_SET_ALL: &str = "SET_ALL";
const CMD_LED: &str = "LED";

const KEY_BUTTON: &str = "B";
const KEY_COLOR: &str = "C";

impl Command {
    /// Parse a raw line as received from the framer
    pub fn parse_bytes(line: &[u8]) -> Result<Self, ParseError> {
        let line = core::str::from_utf8(line).map_err(|_| ParseError::InvalidUtf8)?;
        Self::parse(line)
    }

    /// Parse a command line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = tokens(line);
        let name = tokens.next().ok_or(ParseError::Empty)?;

        if name.eq_ignore_ascii_case(CMD_BOOT_BOOTLOADER) {
            no_arguments(tokens)?;
            Ok(Command::BootBootloader)
        } else if name.eq_ignore_ascii_case(CMD_CONFIG) {
            no_arguments(tokens)?;
            Ok(Command::Config)
        } else if name.eq_ignore_ascii_case(CMD_SET_SINGLE) {
            let mut button = None;
            let mut color = None;
            for tok in tokens {
                if let Some(v) = key_value(tok, KEY_BUTTON) {
                    button = Some(v);
                } else if let Some(v) = key_value(tok, KEY_COLOR) {
                    color = Some(v);
                } else {
                    return Err(ParseError::UnexpectedToken);
                }
            }
            let (button, color) = match (button, color) {
                (Some(b), Some(c)) => (b, c),
                _ => return Err(ParseError::MissingArgument),
            };
            Ok(Command::SetSingle {
                button: parse_u8_dec(button)?,
                color: parse_color24(color)?,
            })
        } else if name.eq_ignore_ascii_case(CMD_SET_ALL) {
            let mut color = None;
            for tok in tokens {
                match key_value(tok, KEY_COLOR) {
                    Some(v) => color = Some(v),
                    None => return Err(ParseError::UnexpectedToken),
                }
            }
            let color = color.ok_or(ParseError::MissingArgument)?;
            Ok(Command::SetAll {
                color: parse_color24(color)?,
            })
        } else if name.eq_ignore_ascii_case(CMD_LED) {
            let index = tokens.next().ok_or(ParseError::MissingArgument)?;
            let color = tokens.next().ok_or(ParseError::MissingArgument)?;
            no_arguments(tokens)?;
            Ok(Command::Led {
                index: parse_u8_dec(index)?,
                color: parse_color24(color)?,
            })
        } else {
            Err(ParseError::UnknownCommand)
        }
    }

    /// Whether the host gets an `OK`/`ERR` line after this command
    ///
    /// `CONFIG` answers with its dump only.
    pub fn acknowledged(&self) -> bool {
        !matches!(self, Command::Config)
    }

    /// Canonical command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::BootBootloader => CMD_BOOT_BOOTLOADER,
            Command::Config => CMD_CONFIG,
            Command::SetSingle { .. } => CMD_SET_SINGLE,
            Command::SetAll { .. } => CMD_SET_ALL,
            Command::Led { .. } => CMD_LED,
        }
    }
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split([' ', '\t']).filter(|t| !t.is_empty())
}

fn no_arguments<'a>(mut rest: impl Iterator<Item = &'a str>) -> Result<(), ParseError> {
    match rest.next() {
        Some(_) => Err(ParseError::UnexpectedToken),
        None => Ok(()),
    }
}

/// Match `KEY=value` with a case-insensitive key, returning the value
fn key_value<'a>(token: &'a str, key: &str) -> Option<&'a str> {
    let bytes = token.as_bytes();
    let klen = key.len();
    if bytes.len() <= klen || bytes[klen] != b'=' {
        return None;
    }
    if !bytes[..klen].eq_ignore_ascii_case(key.as_bytes()) {
        return None;
    }
    // Byte `klen` is ASCII '=', so `klen + 1` is a char boundary
    Some(&token[klen + 1..])
}

/// Parse a decimal index in 0-255
///
/// An optional sign is accepted; any value outside the range is rejected
/// rather than wrapped.
pub fn parse_u8_dec(s: &str) -> Result<u8, ParseError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber);
    }

    let value = digits
        .bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as u32));

    if negative && value != 0 {
        return Err(ParseError::OutOfRange);
    }
    u8::try_from(value).map_err(|_| ParseError::OutOfRange)
}

/// Parse a hex colour with optional `0x` prefix
///
/// Digits beyond the low 24 bits are dropped silently.
pub fn parse_color24(s: &str) -> Result<Rgb24, ParseError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() {
        return Err(ParseError::InvalidNumber);
    }

    let mut value = 0u32;
    for c in digits.chars() {
        let d = c.to_digit(16).ok_or(ParseError::InvalidNumber)?;
        value = ((value << 4) | d) & 0x00FF_FFFF;
    }
    Ok(Rgb24::from_u32(value))
}
