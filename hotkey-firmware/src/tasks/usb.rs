//! USB CDC-ACM serial tasks
//!
//! Bridges the CDC class endpoints to the engine's pipes. The TX task also
//! owns host presence: a host counts as present only while it asserts DTR,
//! i.e. while a terminal program actually has the port open.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::Timer;
use embassy_usb::class::cdc_acm::{Receiver, Sender};
use embassy_usb::driver::EndpointError;
use embassy_usb::UsbDevice;
use portable_atomic::Ordering;

use crate::channels::{HOST_PRESENT, RX_PIPE, TX_PIPE};

pub type UsbDriver = Driver<'static, USB>;

/// Full-speed bulk packet size
pub const PACKET_SIZE: usize = 64;

/// How often DTR is sampled while idle
const PRESENCE_POLL_MS: u64 = 10;

/// USB device task - services the bus
#[embassy_executor::task]
pub async fn usb_device_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// USB receive task - moves host bytes into the RX pipe
///
/// Writing into a full pipe waits, which leaves further data in the host
/// until the engine catches up.
#[embassy_executor::task]
pub async fn usb_rx_task(mut rx: Receiver<'static, UsbDriver>) {
    info!("USB RX task started");

    let mut buf = [0u8; PACKET_SIZE];
    loop {
        rx.wait_connection().await;
        debug!("USB RX endpoint enabled");

        loop {
            match rx.read_packet(&mut buf).await {
                Ok(n) => {
                    trace!("RX: {} bytes", n);
                    RX_PIPE.write_all(&buf[..n]).await;
                }
                Err(EndpointError::Disabled) => break,
                Err(EndpointError::BufferOverflow) => {
                    warn!("USB RX packet overflow");
                }
            }
        }

        debug!("USB RX endpoint disabled");
    }
}

/// USB transmit task - tracks DTR and drains the TX pipe
#[embassy_executor::task]
pub async fn usb_tx_task(mut tx: Sender<'static, UsbDriver>) {
    info!("USB TX task started");

    let mut buf = [0u8; PACKET_SIZE];
    loop {
        tx.wait_connection().await;
        debug!("USB TX endpoint enabled");

        loop {
            let present = tx.dtr();
            set_host_present(present);

            if !present {
                Timer::after_millis(PRESENCE_POLL_MS).await;
                continue;
            }

            let read = select(
                TX_PIPE.read(&mut buf),
                Timer::after_millis(PRESENCE_POLL_MS),
            )
            .await;

            if let Either::First(n) = read {
                if let Err(e) = write_packet(&mut tx, &buf[..n]).await {
                    warn!("USB TX error: {:?}", e);
                    if e == EndpointError::Disabled {
                        break;
                    }
                }
            }
        }

        set_host_present(false);
        debug!("USB TX endpoint disabled");
    }
}

/// Publish host presence, dropping stale data when the host leaves
fn set_host_present(present: bool) {
    let was_present = HOST_PRESENT.swap(present, Ordering::AcqRel);
    if was_present && !present {
        TX_PIPE.clear();
        RX_PIPE.clear();
    }
}

/// Write one packet, retrying while the endpoint is busy
///
/// A full-size packet is followed by a zero-length one so the host does
/// not wait for more data.
async fn write_packet(tx: &mut Sender<'static, UsbDriver>, data: &[u8]) -> Result<(), EndpointError> {
    loop {
        match tx.write_packet(data).await {
            Ok(()) => break,
            Err(EndpointError::BufferOverflow) => Timer::after_millis(PRESENCE_POLL_MS).await,
            Err(e) => return Err(e),
        }
    }

    if data.len() == PACKET_SIZE {
        tx.write_packet(&[]).await?;
    }
    Ok(())
}
