//! Petrol station price digits
//!
//! Chunky dot-matrix numerals drawn on a 7x8 grid, stretched 3x4 to fill a
//! 21x32 digit cell. The sixteen glyphs sit side by side in one atlas.

use crate::bitmap::Bitmap;
use crate::segments::{DIGIT_HEIGHT, DIGIT_PITCH};

/// Number of glyphs in the atlas: 0-9 then A-F
pub const PETROL_GLYPHS: usize = 16;

const CELL_W: usize = DIGIT_PITCH as usize;
const CELL_H: usize = DIGIT_HEIGHT as usize;
const STRIDE: usize = CELL_W * PETROL_GLYPHS;
const BANDS: usize = CELL_H / 8;

const SCALE_X: usize = 3;
const SCALE_Y: usize = 4;

/// Coarse rows, bit 5 on the left; the seventh column is the gap
const COARSE: [[u8; 8]; PETROL_GLYPHS] = [
    [0x1e, 0x33, 0x37, 0x3b, 0x33, 0x33, 0x33, 0x1e],
    [0x0c, 0x1c, 0x3c, 0x0c, 0x0c, 0x0c, 0x0c, 0x3f],
    [0x1e, 0x33, 0x03, 0x06, 0x0c, 0x18, 0x30, 0x3f],
    [0x1e, 0x33, 0x03, 0x0e, 0x03, 0x03, 0x33, 0x1e],
    [0x06, 0x0e, 0x1e, 0x36, 0x3f, 0x06, 0x06, 0x06],
    [0x3f, 0x30, 0x3e, 0x03, 0x03, 0x03, 0x33, 0x1e],
    [0x1e, 0x30, 0x30, 0x3e, 0x33, 0x33, 0x33, 0x1e],
    [0x3f, 0x03, 0x06, 0x0c, 0x18, 0x18, 0x18, 0x18],
    [0x1e, 0x33, 0x33, 0x1e, 0x33, 0x33, 0x33, 0x1e],
    [0x1e, 0x33, 0x33, 0x33, 0x1f, 0x03, 0x03, 0x1e],
    [0x0c, 0x1e, 0x33, 0x33, 0x3f, 0x33, 0x33, 0x33],
    [0x30, 0x30, 0x3e, 0x33, 0x33, 0x33, 0x33, 0x3e],
    [0x1e, 0x33, 0x30, 0x30, 0x30, 0x30, 0x33, 0x1e],
    [0x03, 0x03, 0x1f, 0x33, 0x33, 0x33, 0x33, 0x1f],
    [0x3f, 0x30, 0x30, 0x3e, 0x30, 0x30, 0x30, 0x3f],
    [0x3f, 0x30, 0x30, 0x3e, 0x30, 0x30, 0x30, 0x30],
];

const fn rasterise() -> [u8; STRIDE * BANDS] {
    let mut out = [0u8; STRIDE * BANDS];
    let mut g = 0;
    while g < PETROL_GLYPHS {
        let mut y = 0;
        while y < CELL_H {
            let coarse = COARSE[g][y / SCALE_Y];
            let mut x = 0;
            while x < CELL_W {
                let cx = x / SCALE_X;
                if cx < 6 && coarse & (0x20 >> cx) != 0 {
                    out[(y / 8) * STRIDE + g * CELL_W + x] |= 1 << (y % 8);
                }
                x += 1;
            }
            y += 1;
        }
        g += 1;
    }
    out
}

static PETROL_DATA: [u8; STRIDE * BANDS] = rasterise();

/// All sixteen glyphs as one 336x32 strip
pub static PETROL_ATLAS: Bitmap<'static> = Bitmap::new(&PETROL_DATA, STRIDE, CELL_H, STRIDE);

/// The 21x32 glyph for hex digit `d`; only the low nibble is used
pub fn petrol_glyph(d: u8) -> Bitmap<'static> {
    PETROL_ATLAS.sub(usize::from(d & 0x0f) * CELL_W, CELL_W)
}
