//! Panel colours
//!
//! The SSD1351 is programmed with a remap that puts red in the low five
//! bits of each 16-bit pixel word, so these constants are not the usual
//! RGB565 bit order. Conversions to and from embedded-graphics colours
//! handle the swap.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565, RgbColor};

/// One 16-bit panel pixel: blue in bits 15..11, green 10..5, red 4..0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color565(pub u16);

impl Color565 {
    pub const BLACK: Self = Self(0x0000);
    pub const RED: Self = Self(0x001f);
    pub const GREEN: Self = Self(0x07e0);
    pub const BLUE: Self = Self(0xf800);
    pub const CYAN: Self = Self(Self::BLUE.0 | Self::GREEN.0);
    pub const MAGENTA: Self = Self(Self::RED.0 | Self::BLUE.0);
    pub const YELLOW: Self = Self(Self::RED.0 | Self::GREEN.0);
    pub const WHITE: Self = Self(Self::RED.0 | Self::GREEN.0 | Self::BLUE.0);
    /// Half-intensity grey
    pub const GREY50: Self = Self(0x000f | 0x03e0 | 0x7800);
    /// Quarter-intensity grey
    pub const GREY25: Self = Self(0x0007 | 0x01e0 | 0x3800);
    /// Full red plus half green: the neon orange of a Panaplex tube
    pub const ORANGE: Self = Self(Self::RED.0 | 0x03e0);

    /// Pack 5-bit red, 6-bit green and 5-bit blue components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((b & 0x1f) as u16) << 11) | (((g & 0x3f) as u16) << 5) | ((r & 0x1f) as u16))
    }

    /// 5-bit red component
    pub const fn red(self) -> u8 {
        (self.0 & 0x1f) as u8
    }

    /// 6-bit green component
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3f) as u8
    }

    /// 5-bit blue component
    pub const fn blue(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Word as sent over SPI, most significant byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<Rgb565> for Color565 {
    fn from(c: Rgb565) -> Self {
        Self::from_rgb(c.r(), c.g(), c.b())
    }
}

impl From<Color565> for Rgb565 {
    fn from(c: Color565) -> Self {
        Rgb565::new(c.red(), c.green(), c.blue())
    }
}

/// Anything that is not black lights a monochrome pixel
impl From<Color565> for BinaryColor {
    fn from(c: Color565) -> Self {
        if c == Color565::BLACK {
            BinaryColor::Off
        } else {
            BinaryColor::On
        }
    }
}

impl From<BinaryColor> for Color565 {
    fn from(c: BinaryColor) -> Self {
        match c {
            BinaryColor::On => Color565::WHITE,
            BinaryColor::Off => Color565::BLACK,
        }
    }
}
