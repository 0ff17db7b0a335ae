//! Hotkey - USB Macro Keypad Firmware
//!
//! Main firmware binary for RP2040-based hotkey pads: debounced keys
//! reported over USB serial, per-button RGB indicators set by the host,
//! and a double-tap boot key for firmware updates.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{PIO0, USB};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::usb::Driver;
use embassy_time::Instant;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::{Builder, Config as UsbConfig};
use heapless::Vec;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use hotkey_core::config::MAX_BUTTONS;
use hotkey_core::leds::PixelBuffer;
use hotkey_core::Engine;
use hotkey_hal::ActiveLevel;
use hotkey_hal_rp2040::{button, Button, GpioPeripherals, Ws2812Strip};

mod channels;
mod config;
mod serial;
mod tasks;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Raspberry Pi vendor ID with the generic CDC product ID
const USB_VID: u16 = 0x2e8a;
const USB_PID: u16 = 0x000a;

// Static cells for USB descriptors and class state (must live forever)
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static CDC_STATE: StaticCell<State> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hotkey firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (mut gpio, periph) = GpioPeripherals::from_peripherals(p);
    info!("Peripherals initialized");

    let keypad = config::keypad_config();
    if let Err(e) = keypad.validate() {
        // build.rs rejects these, so only a hand-edited build gets here
        error!("Invalid keypad configuration: {:?}", e);
    }
    info!(
        "Configuration: {} hotkeys, {} LEDs, brightness {}",
        keypad.button_count(),
        config::LED_COUNT,
        keypad.brightness
    );

    // LED strip on PIO0; the data pin is claimed before the pin bank
    // takes the remaining GPIOs
    let Pio {
        mut common, sm0, ..
    } = Pio::new(periph.pio0, Irqs);
    let strip = config::take_led_pin(&mut gpio).map(|pin| {
        let program = PioWs2812Program::new(&mut common);
        Ws2812Strip::new(PioWs2812::new(&mut common, sm0, periph.dma_ch0, pin, &program))
    });

    let mut bank = gpio.into_bank();

    // Hotkeys switch to ground
    let mut hotkeys: Vec<Button<'static>, MAX_BUTTONS> = Vec::new();
    for &pin in config::BUTTON_PINS.iter() {
        let key = button(unwrap!(bank.take(pin)), ActiveLevel::Low);
        if hotkeys.push(key).is_err() {
            warn!("Hotkey on GPIO {} exceeds {} buttons, ignored", pin, MAX_BUTTONS);
        }
    }

    let boot_key = keypad.boot_key_pin.map(|pin| {
        info!("Boot key on GPIO {}", pin);
        button(
            unwrap!(bank.take(pin)),
            ActiveLevel::from_active_low(keypad.boot_key_active_low),
        )
    });

    info!("GPIO initialized");

    // USB CDC-ACM serial port
    let driver = Driver::new(periph.usb, Irqs);

    let mut usb_config = UsbConfig::new(USB_VID, USB_PID);
    usb_config.manufacturer = Some("Hotkey");
    usb_config.product = Some("Hotkey Keypad");
    usb_config.serial_number = Some("0001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        usb_config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        &mut [], // No Microsoft OS descriptors
        CONTROL_BUF.init([0; 64]),
    );

    let class = CdcAcmClass::new(
        &mut builder,
        CDC_STATE.init(State::new()),
        tasks::usb::PACKET_SIZE as u16,
    );
    let (tx, rx) = class.split();
    let device = builder.build();

    info!("USB initialized");

    let engine = Engine::new(
        keypad,
        hotkeys,
        boot_key,
        PixelBuffer::<{ config::LED_COUNT }>::new(config::LEDS_PER_BUTTON, config::BRIGHTNESS),
        tasks::DeferredUpdate,
        Instant::now().as_millis() as u32,
    );

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::usb_device_task(device)));
    unwrap!(spawner.spawn(tasks::usb_rx_task(rx)));
    unwrap!(spawner.spawn(tasks::usb_tx_task(tx)));
    unwrap!(spawner.spawn(tasks::engine_task(engine)));
    unwrap!(spawner.spawn(tasks::bootloader_task()));
    match strip {
        Some(strip) => unwrap!(spawner.spawn(tasks::leds_task(strip))),
        None => info!("No LED pin configured, indicators disabled"),
    }

    info!("All tasks spawned, firmware running");

    // Keeps the PIO common block alive alongside the LED task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
