//! Host serial link abstractions
//!
//! Non-blocking byte transport to the host (USB CDC on the keypad). The
//! link also reports whether a host currently has the port open, which is
//! what drives connect/disconnect handling above this layer.

/// Serial receiver
pub trait SerialRx {
    /// Take the next received byte, if any
    ///
    /// Must never block. Bytes not taken stay queued in the transport.
    fn try_read_byte(&mut self) -> Option<u8>;
}

/// Serial transmitter
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Queue data for transmission without blocking
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Queue a line followed by CRLF
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\r\n")
    }
}

/// Host presence signal
pub trait HostLink {
    /// True while a host holds the port open
    fn host_present(&self) -> bool;
}

/// Combined serial port
pub trait SerialPort: SerialRx + SerialTx + HostLink {}

// Blanket implementation
impl<T: SerialRx + SerialTx + HostLink> SerialPort for T {}
