//! 1 bpp bitmap views
//!
//! Bitmaps are stored the way the panel's page-oriented converters emit
//! them: each byte holds eight vertically stacked pixels, least
//! significant bit on top, and a band of eight rows is `stride` bytes
//! long. An atlas of glyphs is one wide bitmap; [`Bitmap::sub`] slices a
//! single glyph out of it.

/// Borrowed view of a packed 1 bpp bitmap
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Bitmap<'a> {
    /// Describe `width` x `height` pixels of `data`, with `stride` bytes per
    /// band of eight rows
    pub const fn new(data: &'a [u8], width: usize, height: usize, stride: usize) -> Self {
        Self {
            data,
            width,
            height,
            stride,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// A `width`-column window starting at column `x`, sharing the stride
    pub fn sub(&self, x: usize, width: usize) -> Bitmap<'a> {
        Bitmap {
            data: self.data.get(x..).unwrap_or(&[]),
            width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Whether the pixel at (`col`, `row`) is ink
    ///
    /// Pixels outside the bitmap, or beyond the end of a short data slice,
    /// read as background.
    pub fn bit(&self, col: usize, row: usize) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }

        self.data
            .get(self.stride * (row / 8) + col)
            .map_or(false, |byte| byte & (1 << (row % 8)) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 4 columns, 10 rows: band 0 then band 1
    const DATA: [u8; 8] = [
        0b0000_0001, 0b1000_0000, 0x00, 0xFF, // rows 0..7
        0b0000_0010, 0x00, 0x00, 0b0000_0001, // rows 8..9
    ];

    #[test]
    fn test_lsb_is_top_row() {
        let bmp = Bitmap::new(&DATA, 4, 10, 4);
        assert!(bmp.bit(0, 0));
        assert!(!bmp.bit(0, 1));
        assert!(bmp.bit(1, 7));
        assert!(bmp.bit(3, 4));
    }

    #[test]
    fn test_second_band_uses_stride() {
        let bmp = Bitmap::new(&DATA, 4, 10, 4);
        assert!(bmp.bit(0, 9));
        assert!(!bmp.bit(0, 8));
        assert!(bmp.bit(3, 8));
    }

    #[test]
    fn test_out_of_bounds_is_background() {
        let bmp = Bitmap::new(&DATA, 4, 10, 4);
        assert!(!bmp.bit(4, 0));
        assert!(!bmp.bit(0, 10));

        let short = Bitmap::new(&DATA[..2], 4, 16, 4);
        assert!(!short.bit(3, 0));
        assert!(!short.bit(0, 12));
    }

    #[test]
    fn test_sub_window() {
        let bmp = Bitmap::new(&DATA, 4, 10, 4);
        let glyph = bmp.sub(3, 1);
        assert_eq!(glyph.width(), 1);
        assert!(glyph.bit(0, 0));
        assert!(glyph.bit(0, 8));
        assert!(!glyph.bit(1, 0));
    }
}
