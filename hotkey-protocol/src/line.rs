//! Line framing for the host command stream.
//!
//! Turns a raw, partially-arriving byte stream into discrete
//! newline-delimited lines:
//! - CR, LF and CRLF each terminate a line (CRLF counts once)
//! - at most [`MAX_LINE_LEN`] bytes are kept per line
//! - NUL bytes are dropped, so a delivered line is NUL-free
//! - a byte that would grow a line past that limit drops the partial line,
//!   and accumulation restarts with the byte after it
//!
//! Only one completed line is held at a time. While a line is ready the
//! framer refuses further bytes, so the caller must leave them in the
//! transport until [`LineFramer::try_take_line`] has been called.

use heapless::Vec;

/// Line buffer capacity, including room for the NUL written on copy-out
pub const LINE_CAPACITY: usize = 128;

/// Longest line that can be delivered
pub const MAX_LINE_LEN: usize = LINE_CAPACITY - 1;

const CR: u8 = b'\r';
const LF: u8 = b'\n';
const NUL: u8 = 0;

/// Result of feeding one byte to the framer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feed {
    /// Byte consumed, line still incomplete
    Pending,
    /// Byte was a terminator and a line is now ready
    LineReady,
    /// Byte overflowed the buffer; the partial line was dropped
    Overflow,
    /// Byte consumed and ignored (LF after CR, or NUL)
    Skipped,
    /// A line is already waiting; the byte was not consumed
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FramerState {
    /// Collecting bytes of the current line
    Accumulating,
    /// A complete line waits to be taken
    Ready,
}

/// Byte-at-a-time line accumulator
#[derive(Debug, Clone)]
pub struct LineFramer {
    state: FramerState,
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// Last consumed terminator was a CR
    after_cr: bool,
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFramer {
    /// Create an empty framer
    pub const fn new() -> Self {
        Self {
            state: FramerState::Accumulating,
            buffer: Vec::new(),
            after_cr: false,
        }
    }

    /// Drop any partial or ready line and start over
    ///
    /// Used when the host goes away so a half-received line never leaks
    /// into the next session.
    pub fn reset(&mut self) {
        self.state = FramerState::Accumulating;
        self.buffer.clear();
        self.after_cr = false;
    }

    /// True while a completed line waits to be taken
    pub fn is_ready(&self) -> bool {
        self.state == FramerState::Ready
    }

    /// Feed a single byte
    pub fn feed(&mut self, byte: u8) -> Feed {
        if self.state == FramerState::Ready {
            return Feed::Busy;
        }

        let swallow_lf = self.after_cr && byte == LF;
        self.after_cr = false;
        if swallow_lf {
            return Feed::Skipped;
        }

        let terminator = byte == CR || byte == LF;
        if terminator {
            self.after_cr = byte == CR;
        }

        match self.state {
            FramerState::Accumulating if terminator => {
                self.state = FramerState::Ready;
                Feed::LineReady
            }
            FramerState::Accumulating if byte == NUL => Feed::Skipped,
            FramerState::Accumulating => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    return Feed::Overflow;
                }
                Feed::Pending
            }
            FramerState::Ready => Feed::Busy,
        }
    }

    /// Feed bytes until a line becomes ready
    ///
    /// Returns how many bytes were consumed; bytes after the terminator of
    /// a completed line are left for the caller.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut consumed = 0;
        for &byte in bytes {
            if self.feed(byte) == Feed::Busy {
                break;
            }
            consumed += 1;
            if self.is_ready() {
                break;
            }
        }
        consumed
    }

    /// Copy the ready line into `out` and reset for the next line
    ///
    /// At most `out.len() - 1` bytes are copied and a NUL is written after
    /// them, so an oversized line is truncated to fit (unlike overflow
    /// during accumulation, which drops the line). Returns the number of
    /// line bytes copied, or `None` if no line is ready or `out` is empty;
    /// in the latter case the line stays ready.
    pub fn try_take_line(&mut self, out: &mut [u8]) -> Option<usize> {
        if !self.is_ready() || out.is_empty() {
            return None;
        }

        let n = self.buffer.len().min(out.len() - 1);
        out[..n].copy_from_slice(&self.buffer[..n]);
        out[n] = 0;

        self.buffer.clear();
        self.state = FramerState::Accumulating;
        Some(n)
    }
}
