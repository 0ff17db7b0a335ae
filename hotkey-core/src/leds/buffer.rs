//! In-memory LED frame
//!
//! Holds the unscaled colour of every LED plus the global brightness. The
//! firmware renders a scaled frame from it whenever it changed and pushes
//! that to the strip; tests inspect it directly.

use hotkey_protocol::Rgb24;

use crate::traits::LedStrip;

/// Colour buffer for a strip of `N` LEDs
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb24; N],
    leds_per_button: u8,
    brightness: u8,
    /// Set by any write, cleared by [`PixelBuffer::take_dirty`]
    dirty: bool,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a dark buffer
    pub const fn new(leds_per_button: u8, brightness: u8) -> Self {
        Self {
            pixels: [Rgb24::BLACK; N],
            leds_per_button,
            brightness,
            dirty: true,
        }
    }

    /// Number of LEDs
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Stored (unscaled) colour of one LED
    pub fn pixel(&self, index: usize) -> Option<Rgb24> {
        self.pixels.get(index).copied()
    }

    /// All stored colours
    pub fn pixels(&self) -> &[Rgb24; N] {
        &self.pixels
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Frame with brightness applied, ready for output
    pub fn render(&self) -> [Rgb24; N] {
        let mut frame = self.pixels;
        for pixel in frame.iter_mut() {
            *pixel = pixel.scaled(self.brightness);
        }
        frame
    }

    /// Return whether the frame changed since the last call, and clear the flag
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    fn write(&mut self, index: usize, color: Rgb24) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
            self.dirty = true;
        }
    }
}

impl<const N: usize> LedStrip for PixelBuffer<N> {
    fn set_one(&mut self, button: u8, color: Rgb24) {
        let per = self.leds_per_button as usize;
        let start = button as usize * per;
        for index in start..start + per {
            self.write(index, color);
        }
    }

    fn set_pixel(&mut self, index: u8, color: Rgb24) {
        self.write(index as usize, color);
    }

    fn set_all(&mut self, color: Rgb24) {
        self.pixels = [color; N];
        self.dirty = true;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb24 = Rgb24::from_u32(0xFF0000);

    #[test]
    fn test_set_one_covers_block() {
        let mut leds = PixelBuffer::<8>::new(2, 255);
        leds.set_one(2, RED);

        for i in 0..8 {
            let expected = if i == 4 || i == 5 { RED } else { Rgb24::BLACK };
            assert_eq!(leds.pixel(i), Some(expected));
        }
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut leds = PixelBuffer::<4>::new(2, 255);
        leds.take_dirty();

        leds.set_one(2, RED);
        leds.set_pixel(4, RED);
        assert!(!leds.take_dirty());
        assert!(leds.pixels().iter().all(|p| *p == Rgb24::BLACK));
    }

    #[test]
    fn test_partial_block_at_end() {
        let mut leds = PixelBuffer::<5>::new(2, 255);
        leds.set_one(2, RED);
        assert_eq!(leds.pixel(4), Some(RED));
    }

    #[test]
    fn test_brightness_applied_on_render() {
        let mut leds = PixelBuffer::<2>::new(1, 255);
        leds.set_all(Rgb24::from_u32(0xFFFFFF));
        leds.set_brightness(64);

        assert_eq!(leds.pixel(0), Some(Rgb24::from_u32(0xFFFFFF)));
        assert_eq!(leds.render()[0], Rgb24::from_u32(0x404040));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut leds = PixelBuffer::<2>::new(1, 255);
        assert!(leds.take_dirty());
        assert!(!leds.take_dirty());

        leds.set_pixel(1, RED);
        assert!(leds.take_dirty());
    }
}
