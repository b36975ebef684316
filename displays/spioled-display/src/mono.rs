//! 1 bpp frame buffer
//!
//! Pixels are packed eight rows to a byte, the layout monochrome OLED
//! controllers use natively: byte `bytes[y / 8][x]`, bit `y % 8`.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

use crate::backend::Raster;
use crate::canvas::Canvas;

/// Word pushed to a colour panel for a lit monochrome pixel
pub const MONO_ON_WORD: u16 = 0xffff;

/// `W` columns by `ROWS * 8` rows, one bit per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoFrameBuffer<const W: usize, const ROWS: usize> {
    bytes: [[u8; W]; ROWS],
}

impl<const W: usize, const ROWS: usize> Default for MonoFrameBuffer<W, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const ROWS: usize> MonoFrameBuffer<W, ROWS> {
    pub const fn new() -> Self {
        Self {
            bytes: [[0; W]; ROWS],
        }
    }

    /// Raw packed bytes of one eight-row band
    pub fn band(&self, row: usize) -> Option<&[u8; W]> {
        self.bytes.get(row)
    }

    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= ROWS * 8 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y / 8, x, 1 << (y % 8)))
    }
}

impl<const W: usize, const ROWS: usize> Canvas for MonoFrameBuffer<W, ROWS> {
    type Color = BinaryColor;

    fn width(&self) -> i32 {
        W as i32
    }

    fn height(&self) -> i32 {
        (ROWS * 8) as i32
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if let Some((band, col, mask)) = Self::locate(x, y) {
            match color {
                BinaryColor::On => self.bytes[band][col] |= mask,
                BinaryColor::Off => self.bytes[band][col] &= !mask,
            }
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<BinaryColor> {
        let (band, col, mask) = Self::locate(x, y)?;
        Some(if self.bytes[band][col] & mask != 0 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        })
    }

    fn fill(&mut self, color: BinaryColor) {
        let b = match color {
            BinaryColor::On => 0xff,
            BinaryColor::Off => 0x00,
        };
        for band in self.bytes.iter_mut() {
            band.fill(b);
        }
    }
}

impl<const W: usize, const ROWS: usize> Raster for MonoFrameBuffer<W, ROWS> {
    fn dimensions(&self) -> (usize, usize) {
        (W, ROWS * 8)
    }

    fn pixel_word(&self, x: usize, y: usize) -> u16 {
        if self.bytes[y / 8][x] & (1 << (y % 8)) != 0 {
            MONO_ON_WORD
        } else {
            0x0000
        }
    }
}

impl<const W: usize, const ROWS: usize> OriginDimensions for MonoFrameBuffer<W, ROWS> {
    fn size(&self) -> Size {
        Size::new(W as u32, (ROWS * 8) as u32)
    }
}

impl<const W: usize, const ROWS: usize> DrawTarget for MonoFrameBuffer<W, ROWS> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Mono = MonoFrameBuffer<16, 4>;

    #[test]
    fn test_set_pixel_touches_one_bit() {
        let mut fb = Mono::new();
        fb.set_pixel(3, 13, BinaryColor::On);
        assert_eq!(fb.band(1).map(|b| b[3]), Some(1 << 5));
        for band in 0..4 {
            for x in 0..16 {
                if (band, x) != (1, 3) {
                    assert_eq!(fb.band(band).map(|b| b[x]), Some(0));
                }
            }
        }
    }

    #[test]
    fn test_clear_pixel_masks() {
        let mut fb = Mono::new();
        fb.fill(BinaryColor::On);
        fb.set_pixel(0, 7, BinaryColor::Off);
        assert_eq!(fb.band(0).map(|b| b[0]), Some(0x7f));
        assert_eq!(fb.pixel(0, 6), Some(BinaryColor::On));
        assert_eq!(fb.pixel(0, 7), Some(BinaryColor::Off));
    }

    #[test]
    fn test_vline_spans_bands() {
        let mut fb = Mono::new();
        fb.vline(5, 6, 17, BinaryColor::On);
        assert_eq!(fb.band(0).map(|b| b[5]), Some(0xc0));
        assert_eq!(fb.band(1).map(|b| b[5]), Some(0xff));
        assert_eq!(fb.band(2).map(|b| b[5]), Some(0x03));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut fb = Mono::new();
        fb.set_pixel(16, 0, BinaryColor::On);
        fb.set_pixel(0, 32, BinaryColor::On);
        fb.hline(0, 15, 40, BinaryColor::On);
        assert_eq!(fb, Mono::new());
    }

    #[test]
    fn test_checkerboard_packs_to_grey_bytes() {
        let mut fb = Mono::new();
        fb.checkerboard(BinaryColor::Off, BinaryColor::On);
        for row in 0..4 {
            let band = fb.band(row).unwrap();
            assert!(band.chunks(2).all(|p| p == [0xaa, 0x55]));
        }
        assert_eq!(fb.band(2).map(|b| (b[0], b[1])), Some((0xaa, 0x55)));
        assert_eq!(Raster::pixel_word(&fb, 0, 1), MONO_ON_WORD);
        assert_eq!(Raster::pixel_word(&fb, 0, 0), 0);
    }
}
