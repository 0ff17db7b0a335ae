//! Config-driven GPIO allocation
//!
//! Pin numbers come from `keypad.toml`, so pins are handed out by number
//! at startup. Pins with a special function (the WS2812 data line needs
//! its concrete pin type for PIO) are claimed from [`GpioPeripherals`]
//! first; whatever is left goes into a [`PinBank`].

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals;
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken, or claimed for a special function
    AlreadyTaken,
}

/// GPIO pins looked up by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}

/// Non-GPIO peripherals the keypad uses
pub struct RemainingPeripherals {
    pub usb: Peri<'static, peripherals::USB>,
    pub pio0: Peri<'static, peripherals::PIO0>,
    pub dma_ch0: Peri<'static, peripherals::DMA_CH0>,
}

macro_rules! gpio_peripherals {
    ($($field:ident => $pin:ident),* $(,)?) => {
        /// GPIO pins not yet claimed
        ///
        /// Fields are public so a pin with a special function can be taken
        /// with its concrete type before the rest become a [`PinBank`].
        pub struct GpioPeripherals {
            $(pub $field: Option<Peri<'static, peripherals::$pin>>,)*
        }

        impl GpioPeripherals {
            /// Split the chip peripherals into GPIOs and the rest
            pub fn from_peripherals(p: Peripherals) -> (Self, RemainingPeripherals) {
                let pins = Self {
                    $($field: Some(p.$pin),)*
                };
                let remaining = RemainingPeripherals {
                    usb: p.USB,
                    pio0: p.PIO0,
                    dma_ch0: p.DMA_CH0,
                };
                (pins, remaining)
            }

            /// Move every unclaimed pin into a bank
            pub fn into_bank(self) -> PinBank {
                PinBank {
                    pins: [$(self.$field.map(|p| p.into()),)*],
                }
            }
        }
    };
}

gpio_peripherals! {
    pin0 => PIN_0, pin1 => PIN_1, pin2 => PIN_2, pin3 => PIN_3,
    pin4 => PIN_4, pin5 => PIN_5, pin6 => PIN_6, pin7 => PIN_7,
    pin8 => PIN_8, pin9 => PIN_9, pin10 => PIN_10, pin11 => PIN_11,
    pin12 => PIN_12, pin13 => PIN_13, pin14 => PIN_14, pin15 => PIN_15,
    pin16 => PIN_16, pin17 => PIN_17, pin18 => PIN_18, pin19 => PIN_19,
    pin20 => PIN_20, pin21 => PIN_21, pin22 => PIN_22, pin23 => PIN_23,
    pin24 => PIN_24, pin25 => PIN_25, pin26 => PIN_26, pin27 => PIN_27,
    pin28 => PIN_28, pin29 => PIN_29,
}
