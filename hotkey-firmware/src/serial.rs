//! Engine-side view of the USB serial port

use portable_atomic::Ordering;

use hotkey_hal::{HostLink, SerialRx, SerialTx};

use crate::channels::{HOST_PRESENT, RX_PIPE, TX_PIPE};

/// Transmit errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxError {
    /// Transmit pipe full; the rest of the data was dropped
    Full,
}

/// Non-blocking serial port backed by the USB task's pipes
pub struct UsbSerialPort;

impl SerialRx for UsbSerialPort {
    fn try_read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match RX_PIPE.try_read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

impl SerialTx for UsbSerialPort {
    type Error = TxError;

    fn write_all(&mut self, mut data: &[u8]) -> Result<(), TxError> {
        // Nobody is listening; output is lost
        if !self.host_present() {
            return Ok(());
        }

        while !data.is_empty() {
            match TX_PIPE.try_write(data) {
                Ok(n) => data = &data[n..],
                Err(_) => return Err(TxError::Full),
            }
        }
        Ok(())
    }
}

impl HostLink for UsbSerialPort {
    fn host_present(&self) -> bool {
        HOST_PRESENT.load(Ordering::Acquire)
    }
}
