//! Button inputs

use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use hotkey_hal::{ActiveLevel, InputPin, PolarizedInput};

/// Raw GPIO input
pub struct GpioInput<'d> {
    input: Input<'d>,
}

impl<'d> GpioInput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>, pull: Pull) -> Self {
        Self {
            input: Input::new(pin, pull),
        }
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

/// A push button: GPIO input with its polarity applied
pub type Button<'d> = PolarizedInput<GpioInput<'d>>;

/// Set up a button on `pin`
///
/// The internal pull is chosen from the active level: active-low buttons
/// switch to ground and get a pull-up, active-high ones a pull-down.
pub fn button(pin: Peri<'_, AnyPin>, level: ActiveLevel) -> Button<'_> {
    let pull = match level {
        ActiveLevel::Low => Pull::Up,
        ActiveLevel::High => Pull::Down,
    };
    PolarizedInput::new(GpioInput::new(pin, pull), level)
}
