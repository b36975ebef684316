//! Drawing primitives
//!
//! Every frame buffer implements [`Canvas::set_pixel`]; everything else is
//! built on top of it. All coordinates are signed and may fall outside
//! the buffer: pixels off the edge are dropped and line spans are clipped,
//! so no primitive can write outside its own row or column.

use crate::bitmap::Bitmap;

/// A pixel surface with clipped drawing operations
pub trait Canvas {
    /// Pixel value stored by this surface
    type Color: Copy + PartialEq;

    /// Width in pixels
    fn width(&self) -> i32;

    /// Height in pixels
    fn height(&self) -> i32;

    /// Set one pixel; a no-op outside the surface
    fn set_pixel(&mut self, x: i32, y: i32, color: Self::Color);

    /// Read one pixel back; `None` outside the surface
    fn pixel(&self, x: i32, y: i32) -> Option<Self::Color>;

    /// Horizontal run from `x1` to `x2` inclusive on row `y`
    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Self::Color) {
        if let Some((a, b)) = clip_span(x1, x2, self.width()) {
            if y >= 0 && y < self.height() {
                for x in a..=b {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Vertical run from `y1` to `y2` inclusive on column `x`
    fn vline(&mut self, x: i32, y1: i32, y2: i32, color: Self::Color) {
        if let Some((a, b)) = clip_span(y1, y2, self.height()) {
            if x >= 0 && x < self.width() {
                for y in a..=b {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Paint the whole surface
    fn fill(&mut self, color: Self::Color) {
        let (w, h) = (self.width(), self.height());
        for y in 0..h {
            self.hline(0, w - 1, y, color);
        }
    }

    /// Paint full-width rows `top..=bottom`
    fn fill_rows(&mut self, top: i32, bottom: i32, color: Self::Color) {
        let w = self.width();
        for y in top..=bottom {
            self.hline(0, w - 1, y, color);
        }
    }

    /// Alternate two colours pixel by pixel; (0, 0) gets `even`
    fn checkerboard(&mut self, even: Self::Color, odd: Self::Color) {
        let (w, h) = (self.width(), self.height());
        for y in 0..h {
            for x in 0..w {
                let c = if (x + y) & 1 == 0 { even } else { odd };
                self.set_pixel(x, y, c);
            }
        }
    }

    /// Rectangle outline with corners (`x1`, `y1`) and (`x2`, `y2`)
    fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Self::Color) {
        self.hline(x1, x2, y1, color);
        self.vline(x2, y1, y2, color);
        self.hline(x1, x2, y2, color);
        self.vline(x1, y1, y2, color);
    }

    /// Filled rectangle: interior in `fill`, outline in `edge`
    fn fill_rect(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        edge: Self::Color,
        fill: Self::Color,
    ) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.hline(x1, x2, y, fill);
        }
        self.rect(x1, y1, x2, y2, edge);
    }

    /// Bresenham line, both end points included
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Self::Color) {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();

        if dy > dx {
            // Walk y upwards
            let (x1, y1, x2, y2) = if y1 > y2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
            let xinc = if x2 < x1 { -1 } else { 1 };
            let mut d = 2 * dx - dy;
            let (mut x, mut y) = (x1, y1);

            self.set_pixel(x, y, color);
            while y < y2 {
                y += 1;
                if d < 0 {
                    d += 2 * dx;
                } else {
                    x += xinc;
                    d += 2 * (dx - dy);
                }
                self.set_pixel(x, y, color);
            }
        } else {
            // Walk x rightwards
            let (x1, y1, x2, y2) = if x1 > x2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
            let yinc = if y2 < y1 { -1 } else { 1 };
            let mut d = 2 * dy - dx;
            let (mut x, mut y) = (x1, y1);

            self.set_pixel(x, y, color);
            while x < x2 {
                x += 1;
                if d < 0 {
                    d += 2 * dy;
                } else {
                    y += yinc;
                    d += 2 * (dy - dx);
                }
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Circle of radius `r`, optionally filled
    fn circle(&mut self, cx: i32, cy: i32, r: i32, edge: Self::Color, fill: Option<Self::Color>) {
        self.split_circle(cx, cy, cx, cy, r, edge, fill);
    }

    /// Circle cut along both axes with its quadrants pushed apart
    ///
    /// The left/top quadrants are centred on (`x0`, `y0`) and the
    /// right/bottom ones on (`x1`, `y1`): the corners of a rounded
    /// rectangle.
    #[allow(clippy::too_many_arguments)]
    fn split_circle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        r: i32,
        edge: Self::Color,
        fill: Option<Self::Color>,
    ) {
        if r < 0 {
            return;
        }

        if let Some(fc) = fill {
            octant_points(r, |x, y| {
                self.hline(x0 - x, x1 + x, y1 + y, fc);
                self.hline(x0 - x, x1 + x, y0 - y, fc);
                self.hline(x0 - y, x1 + y, y1 + x, fc);
                self.hline(x0 - y, x1 + y, y0 - x, fc);
            });
        }

        octant_points(r, |x, y| {
            for (a, b) in [(x, y), (y, x)] {
                self.set_pixel(x1 + a, y1 + b, edge);
                self.set_pixel(x0 - a, y1 + b, edge);
                self.set_pixel(x1 + a, y0 - b, edge);
                self.set_pixel(x0 - a, y0 - b, edge);
            }
        });
    }

    /// Rounded rectangle with corner radius `r`
    #[allow(clippy::too_many_arguments)]
    fn fill_round_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        r: i32,
        edge: Self::Color,
        fill: Self::Color,
    ) {
        self.split_circle(x0 + r, y0 + r, x1 - r, y1 - r, r, edge, Some(fill));

        self.hline(x0 + r, x1 - r, y0, edge);
        self.hline(x0 + r, x1 - r, y1, edge);
        self.vline(x0, y0 + r, y1 - r, edge);
        self.vline(x1, y0 + r, y1 - r, edge);

        for y in (y0 + r)..(y1 - r) {
            self.hline(x0 + 1, x1 - 1, y, fill);
        }
    }

    /// Expand a 1 bpp bitmap at (`x`, `y`): ink in `fg`, paper in `bg`
    fn blit(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, fg: Self::Color, bg: Self::Color) {
        for row in 0..bitmap.height() {
            for col in 0..bitmap.width() {
                let c = if bitmap.bit(col, row) { fg } else { bg };
                self.set_pixel(x + col as i32, y + row as i32, c);
            }
        }
    }
}

/// A borrowed surface draws into the one it borrows
impl<C: Canvas + ?Sized> Canvas for &mut C {
    type Color = C::Color;

    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Self::Color) {
        (**self).set_pixel(x, y, color)
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Self::Color> {
        (**self).pixel(x, y)
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Self::Color) {
        (**self).hline(x1, x2, y, color)
    }

    fn vline(&mut self, x: i32, y1: i32, y2: i32, color: Self::Color) {
        (**self).vline(x, y1, y2, color)
    }

    fn fill(&mut self, color: Self::Color) {
        (**self).fill(color)
    }
}

/// Clip the inclusive span `a..=b` (either order) to `0..len`
pub(crate) fn clip_span(a: i32, b: i32, len: i32) -> Option<(i32, i32)> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let lo = lo.max(0);
    let hi = hi.min(len - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Michener's midpoint circle: one octant of offsets for radius `r`
///
/// Calls `f(x, y)` with `0 <= x <= y` for each step; the other seven
/// octants are reflections.
fn octant_points(r: i32, mut f: impl FnMut(i32, i32)) {
    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while x < y {
        f(x, y);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    if x == y {
        f(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color565;
    use crate::framebuffer::FrameBuffer;

    type Fb = FrameBuffer<32, 16>;

    const BG: Color565 = Color565::BLACK;
    const FG: Color565 = Color565::WHITE;

    fn lit(fb: &Fb) -> usize {
        let mut n = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.pixel(x, y) != Some(BG) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(2, 5, 10), Some((2, 5)));
        assert_eq!(clip_span(5, 2, 10), Some((2, 5)));
        assert_eq!(clip_span(-3, 20, 10), Some((0, 9)));
        assert_eq!(clip_span(10, 20, 10), None);
        assert_eq!(clip_span(-5, -1, 10), None);
    }

    #[test]
    fn test_hline_clipped_to_row() {
        let mut fb = Fb::new();
        fb.hline(-10, 100, 3, FG);
        for x in 0..32 {
            assert_eq!(fb.pixel(x, 3), Some(FG));
        }
        // Neighbouring rows untouched
        assert_eq!(lit(&fb), 32);
    }

    #[test]
    fn test_lines_off_surface_are_noops() {
        let mut fb = Fb::new();
        fb.hline(0, 31, -1, FG);
        fb.hline(0, 31, 16, FG);
        fb.vline(-1, 0, 15, FG);
        fb.vline(32, 0, 15, FG);
        fb.set_pixel(32, 0, FG);
        fb.set_pixel(0, 16, FG);
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_fill_rect_edge_and_interior() {
        let mut fb = Fb::new();
        fb.fill_rect(2, 3, 9, 8, FG, Color565::RED);

        for y in 3..=8 {
            for x in 2..=9 {
                let border = x == 2 || x == 9 || y == 3 || y == 8;
                let want = if border { FG } else { Color565::RED };
                assert_eq!(fb.pixel(x, y), Some(want), "({}, {})", x, y);
            }
        }
        assert_eq!(lit(&fb), 8 * 6);
    }

    #[test]
    fn test_rect_outline_only() {
        let mut fb = Fb::new();
        fb.rect(0, 0, 31, 15, FG);
        assert_eq!(fb.pixel(5, 5), Some(BG));
        assert_eq!(lit(&fb), 2 * 32 + 2 * 14);
    }

    #[test]
    fn test_line_endpoints_all_octants() {
        let ends = [
            (16, 8, 30, 10),
            (16, 8, 18, 15),
            (16, 8, 2, 6),
            (16, 8, 14, 0),
            (16, 8, 30, 0),
            (16, 8, 0, 15),
            (30, 14, 18, 2),
            (4, 2, 16, 14),
            (20, 2, 8, 14),
            (8, 14, 20, 2),
        ];
        for (x1, y1, x2, y2) in ends {
            let mut fb = Fb::new();
            fb.line(x1, y1, x2, y2, FG);
            assert_eq!(fb.pixel(x1, y1), Some(FG));
            assert_eq!(fb.pixel(x2, y2), Some(FG));
            let major = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
            assert_eq!(lit(&fb), major + 1);
        }
    }

    #[test]
    fn test_line_reversed_diagonal_follows_its_slope() {
        let mut fb = FrameBuffer::<128, 128>::new();
        fb.line(64, 64, 42, 42, FG);
        for i in 42..=64 {
            assert_eq!(fb.pixel(i, i), Some(FG), "({}, {})", i, i);
        }
        assert_eq!(fb.pixel(64, 20), Some(BG));
    }

    #[test]
    fn test_circle_edge_is_symmetric() {
        let mut fb = Fb::new();
        fb.circle(8, 8, 5, FG, None);
        assert_eq!(fb.pixel(8, 3), Some(FG));
        assert_eq!(fb.pixel(8, 13), Some(FG));
        assert_eq!(fb.pixel(3, 8), Some(FG));
        assert_eq!(fb.pixel(13, 8), Some(FG));
        assert_eq!(fb.pixel(8, 8), Some(BG));
    }

    #[test]
    fn test_filled_circle_centre() {
        let mut fb = Fb::new();
        fb.circle(8, 8, 4, FG, Some(Color565::GREEN));
        assert_eq!(fb.pixel(8, 8), Some(Color565::GREEN));
        assert_eq!(fb.pixel(8, 4), Some(FG));
    }

    #[test]
    fn test_zero_radius_circle_is_one_pixel() {
        let mut fb = Fb::new();
        fb.circle(4, 4, 0, FG, None);
        assert_eq!(lit(&fb), 1);
        assert_eq!(fb.pixel(4, 4), Some(FG));
    }

    #[test]
    fn test_split_circle_with_equal_centres_is_circle() {
        let mut a = Fb::new();
        let mut b = Fb::new();
        a.circle(15, 7, 6, FG, Some(Color565::BLUE));
        b.split_circle(15, 7, 15, 7, 6, FG, Some(Color565::BLUE));
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_rect_corners_are_rounded() {
        let mut fb = Fb::new();
        fb.fill_round_rect(2, 2, 29, 13, 4, FG, Color565::RED);
        assert_eq!(fb.pixel(2, 2), Some(BG));
        assert_eq!(fb.pixel(15, 2), Some(FG));
        assert_eq!(fb.pixel(15, 8), Some(Color565::RED));
    }

    #[test]
    fn test_blit_fg_bg() {
        let data = [0b0000_0101u8, 0x00];
        let bmp = Bitmap::new(&data, 2, 3, 2);
        let mut fb = Fb::new();
        fb.fill(Color565::GREY25);
        fb.blit(30, 14, &bmp, FG, Color565::RED);

        assert_eq!(fb.pixel(30, 14), Some(FG));
        assert_eq!(fb.pixel(30, 15), Some(Color565::RED));
        assert_eq!(fb.pixel(31, 14), Some(Color565::RED));
        // Row 16 and column 32 are clipped
        assert_eq!(fb.pixel(29, 14), Some(Color565::GREY25));
    }

    #[test]
    fn test_checkerboard() {
        let mut fb = Fb::new();
        fb.checkerboard(BG, FG);
        assert_eq!(fb.pixel(0, 0), Some(BG));
        assert_eq!(fb.pixel(1, 0), Some(FG));
        assert_eq!(fb.pixel(0, 1), Some(FG));
        assert_eq!(fb.pixel(1, 1), Some(BG));
    }

    #[test]
    fn test_borrowed_canvas_draws_through() {
        fn outline<C: Canvas<Color = Color565>>(mut c: C) -> i32 {
            c.rect(0, 0, 3, 3, FG);
            c.width()
        }

        let mut fb = Fb::new();
        assert_eq!(outline(&mut fb), 32);
        assert_eq!(fb.pixel(3, 0), Some(FG));
        assert_eq!(fb.pixel(1, 1), Some(BG));
    }
}
