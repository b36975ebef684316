//! Direction arrows
//!
//! 24x24 arrows for the four joystick directions. Each is the north arrow
//! reflected or transposed, so only one shape is described.

use crate::bitmap::Bitmap;

/// Side of an arrow bitmap
pub const ARROW_SIZE: usize = 24;

const COUNT: usize = 4;
const STRIDE: usize = ARROW_SIZE * COUNT;
const BANDS: usize = ARROW_SIZE / 8;

/// Arrow orientation, in atlas order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Heading {
    North,
    South,
    East,
    West,
}

/// Triangular head over a square shaft
const fn north(x: usize, y: usize) -> bool {
    let last = ARROW_SIZE - 1;
    if y < ARROW_SIZE / 2 {
        (2 * x).abs_diff(last) <= 2 * y + 1
    } else {
        x >= 8 && x < 16
    }
}

const fn ink(heading: usize, x: usize, y: usize) -> bool {
    let last = ARROW_SIZE - 1;
    match heading {
        0 => north(x, y),
        1 => north(x, last - y),
        2 => north(y, last - x),
        _ => north(y, x),
    }
}

const fn rasterise() -> [u8; STRIDE * BANDS] {
    let mut out = [0u8; STRIDE * BANDS];
    let mut h = 0;
    while h < COUNT {
        let mut y = 0;
        while y < ARROW_SIZE {
            let mut x = 0;
            while x < ARROW_SIZE {
                if ink(h, x, y) {
                    out[(y / 8) * STRIDE + h * ARROW_SIZE + x] |= 1 << (y % 8);
                }
                x += 1;
            }
            y += 1;
        }
        h += 1;
    }
    out
}

static ARROW_DATA: [u8; STRIDE * BANDS] = rasterise();

static ARROW_ATLAS: Bitmap<'static> = Bitmap::new(&ARROW_DATA, STRIDE, ARROW_SIZE, STRIDE);

/// The arrow pointing `heading`
pub fn arrow(heading: Heading) -> Bitmap<'static> {
    ARROW_ATLAS.sub(heading as usize * ARROW_SIZE, ARROW_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_tip_and_shaft() {
        let n = arrow(Heading::North);
        // Tip is two pixels wide on the top row
        assert!(n.bit(11, 0) && n.bit(12, 0));
        assert!(!n.bit(10, 0) && !n.bit(13, 0));
        // Shaft
        assert!(n.bit(8, 23) && n.bit(15, 23));
        assert!(!n.bit(7, 23) && !n.bit(16, 23));
    }

    #[test]
    fn test_south_is_north_flipped() {
        let (n, s) = (arrow(Heading::North), arrow(Heading::South));
        for y in 0..ARROW_SIZE {
            for x in 0..ARROW_SIZE {
                assert_eq!(n.bit(x, y), s.bit(x, ARROW_SIZE - 1 - y));
            }
        }
    }

    #[test]
    fn test_east_points_right() {
        let e = arrow(Heading::East);
        assert!(e.bit(23, 11) && e.bit(23, 12));
        // Shaft trails off the left edge
        assert!(e.bit(0, 8) && e.bit(0, 15));
        assert!(!e.bit(0, 7) && !e.bit(0, 16));
    }

    #[test]
    fn test_west_points_left() {
        let w = arrow(Heading::West);
        assert!(w.bit(0, 11) && w.bit(0, 12));
        assert!(w.bit(23, 8) && !w.bit(23, 7));
    }
}
