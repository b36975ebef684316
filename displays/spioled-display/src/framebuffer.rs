//! 16-bit colour frame buffer

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

use crate::backend::Raster;
use crate::canvas::{clip_span, Canvas};
use crate::color::Color565;

/// `W` x `H` pixels of [`Color565`], row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[Color565; W]; H],
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// An all-black buffer
    ///
    /// `const` so a full-panel buffer can live in a static instead of on
    /// the stack.
    pub const fn new() -> Self {
        Self {
            pixels: [[Color565::BLACK; W]; H],
        }
    }

    /// One row of pixels
    pub fn row(&self, y: usize) -> Option<&[Color565; W]> {
        self.pixels.get(y)
    }
}

impl<const W: usize, const H: usize> Canvas for FrameBuffer<W, H> {
    type Color = Color565;

    fn width(&self) -> i32 {
        W as i32
    }

    fn height(&self) -> i32 {
        H as i32
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color565) {
        if x >= 0 && y >= 0 && (x as usize) < W && (y as usize) < H {
            self.pixels[y as usize][x as usize] = color;
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Color565> {
        if x < 0 || y < 0 {
            return None;
        }
        self.pixels.get(y as usize)?.get(x as usize).copied()
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color565) {
        if y < 0 || y as usize >= H {
            return;
        }
        if let Some((a, b)) = clip_span(x1, x2, W as i32) {
            self.pixels[y as usize][a as usize..=b as usize].fill(color);
        }
    }

    fn fill(&mut self, color: Color565) {
        for row in self.pixels.iter_mut() {
            row.fill(color);
        }
    }
}

impl<const W: usize, const H: usize> Raster for FrameBuffer<W, H> {
    fn dimensions(&self) -> (usize, usize) {
        (W, H)
    }

    fn pixel_word(&self, x: usize, y: usize) -> u16 {
        self.pixels[y][x].0
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = FrameBuffer::<8, 4>::new();
        assert_eq!(fb.pixel(7, 3), Some(Color565::BLACK));
        assert_eq!(fb.pixel(8, 0), None);
        assert_eq!(fb.pixel(-1, 0), None);
    }

    #[test]
    fn test_hline_fast_path_matches_pixels() {
        let mut fb = FrameBuffer::<8, 4>::new();
        fb.hline(6, 2, 1, Color565::RED);
        let row = fb.row(1).copied().unwrap_or_default();
        for (x, px) in row.iter().enumerate() {
            let want = if (2..=6).contains(&x) {
                Color565::RED
            } else {
                Color565::BLACK
            };
            assert_eq!(*px, want);
        }
    }

    #[test]
    fn test_raster_words() {
        let mut fb = FrameBuffer::<4, 2>::new();
        fb.set_pixel(3, 1, Color565::BLUE);
        assert_eq!(Raster::pixel_word(&fb, 3, 1), 0xf800);
        assert_eq!(Raster::pixel_word(&fb, 0, 0), 0x0000);
    }

    #[test]
    fn test_draw_target_clips() {
        use embedded_graphics::prelude::{Point, RgbColor};

        let mut fb = FrameBuffer::<4, 4>::new();
        let pixels = [
            Pixel(Point::new(1, 1), Rgb565::GREEN),
            Pixel(Point::new(9, 9), Rgb565::GREEN),
        ];
        fb.draw_iter(pixels).unwrap();
        assert_eq!(fb.pixel(1, 1), Some(Color565::GREEN));
    }
}
