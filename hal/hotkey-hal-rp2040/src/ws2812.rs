//! WS2812 output over PIO

use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use hotkey_protocol::Rgb24;
use smart_leds::RGB8;

/// A strip of `N` WS2812 LEDs driven by PIO state machine `S`
pub struct Ws2812Strip<'d, P: Instance, const S: usize, const N: usize> {
    driver: PioWs2812<'d, P, S, N, Grb>,
    frame: [RGB8; N],
}

impl<'d, P: Instance, const S: usize, const N: usize> Ws2812Strip<'d, P, S, N> {
    pub fn new(driver: PioWs2812<'d, P, S, N, Grb>) -> Self {
        Self {
            driver,
            frame: [RGB8::default(); N],
        }
    }

    /// Push a rendered frame to the LEDs
    pub async fn write(&mut self, colors: &[Rgb24; N]) {
        for (out, color) in self.frame.iter_mut().zip(colors) {
            *out = RGB8::new(color.r(), color.g(), color.b());
        }
        self.driver.write(&self.frame).await;
    }
}
