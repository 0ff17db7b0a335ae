//! 24-bit RGB colour values carried by LED commands

/// Colour packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb24(u32);

impl Rgb24 {
    pub const BLACK: Self = Self(0x000000);
    pub const YELLOW: Self = Self(0xFFFF00);

    /// Build from a packed value; bits above the low 24 are dropped
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Scale each channel by `level / 255`
    pub const fn scaled(self, level: u8) -> Self {
        const fn scale(c: u8, level: u8) -> u8 {
            ((c as u16 * level as u16) / 255) as u8
        }
        Self::from_rgb(
            scale(self.r(), level),
            scale(self.g(), level),
            scale(self.b(), level),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Rgb24::from_u32(0xAABBCC);
        assert_eq!((c.r(), c.g(), c.b()), (0xAA, 0xBB, 0xCC));
        assert_eq!(Rgb24::from_rgb(0xAA, 0xBB, 0xCC), c);
    }

    #[test]
    fn test_high_bits_masked() {
        assert_eq!(Rgb24::from_u32(0xFF12_3456).to_u32(), 0x12_3456);
    }

    #[test]
    fn test_scaled() {
        let c = Rgb24::from_u32(0xFF8000);
        assert_eq!(c.scaled(255), c);
        assert_eq!(c.scaled(0), Rgb24::BLACK);
        assert_eq!(c.scaled(64).to_u32(), 0x402000);
    }
}
