//! GPIO pin abstractions
//!
//! Buttons are wired either to ground with a pull-up (active low) or to
//! the supply with a pull-down (active high). Everything above this layer
//! works with "active" = pressed, never with raw levels.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Electrical level that means "asserted"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    Low,
    High,
}

impl ActiveLevel {
    /// Active-low when `true`, matching the usual config flag
    pub const fn from_active_low(active_low: bool) -> Self {
        if active_low {
            ActiveLevel::Low
        } else {
            ActiveLevel::High
        }
    }

    /// Normalize a raw pin level to "asserted"
    pub const fn is_active(self, high: bool) -> bool {
        match self {
            ActiveLevel::Low => !high,
            ActiveLevel::High => high,
        }
    }
}

/// Input with polarity already applied
pub trait ActiveInput {
    /// True while the input is asserted (button pressed)
    fn is_active(&self) -> bool;
}

/// Input pin paired with its active level
pub struct PolarizedInput<P> {
    pin: P,
    level: ActiveLevel,
}

impl<P: InputPin> PolarizedInput<P> {
    pub fn new(pin: P, level: ActiveLevel) -> Self {
        Self { pin, level }
    }

    pub fn level(&self) -> ActiveLevel {
        self.level
    }
}

impl<P: InputPin> ActiveInput for PolarizedInput<P> {
    fn is_active(&self) -> bool {
        self.level.is_active(self.pin.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FakePin<'a>(&'a Cell<bool>);

    impl InputPin for FakePin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_low() {
        let level = Cell::new(true);
        let input = PolarizedInput::new(FakePin(&level), ActiveLevel::Low);
        assert!(!input.is_active());
        level.set(false);
        assert!(input.is_active());
    }

    #[test]
    fn test_active_high() {
        let level = Cell::new(true);
        let input = PolarizedInput::new(FakePin(&level), ActiveLevel::from_active_low(false));
        assert!(input.is_active());
        assert_eq!(input.level(), ActiveLevel::High);
    }
}
