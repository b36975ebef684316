//! Segment digit renderer

use spioled_protocol::Style;

use crate::assets::petrol_glyph;
use crate::canvas::Canvas;
use crate::color::Color565;
use crate::segments::{digit_segments, geometry, Segment, Stroke, DIGIT_HEIGHT, DIGIT_PITCH};

/// Colour a style switches to when selected
pub fn default_colour(style: Style) -> Color565 {
    match style {
        Style::Vfd => Color565::CYAN,
        Style::LedDot | Style::LedBar | Style::PetrolStation => Color565::RED,
        Style::Panaplex => Color565::ORANGE,
    }
}

fn draw_stroke<C>(canvas: &mut C, x: i32, stroke: Stroke, c: C::Color)
where
    C: Canvas,
{
    match stroke {
        Stroke::H { x1, x2, y } => canvas.hline(x + x1, x + x2, y, c),
        Stroke::V { x: sx, y1, y2 } => canvas.vline(x + sx, y1, y2, c),
        Stroke::Dot { col, row } => {
            let (lx, ly) = (x + col * 4, row * 4 + 3);
            for dy in 0..3 {
                canvas.hline(lx, lx + 2, ly + dy, c);
            }
        }
    }
}

/// Draw one segment of the cell whose left edge is `x`
///
/// Used on its own for the decimal point and colon, which are added on top
/// of an already rendered digit.
pub fn render_segment<C>(canvas: &mut C, x: i32, seg: Segment, style: Style, colour: Color565)
where
    C: Canvas,
    C::Color: From<Color565>,
{
    let c = C::Color::from(colour);
    for stroke in geometry(style, seg) {
        draw_stroke(canvas, x, *stroke, c);
    }
}

/// Blank the digit cell at `x` and draw hex digit `digit` into it
pub fn render_digit<C>(canvas: &mut C, x: i32, digit: u8, style: Style, colour: Color565)
where
    C: Canvas,
    C::Color: From<Color565>,
{
    let black = C::Color::from(Color565::BLACK);

    if style == Style::PetrolStation {
        canvas.blit(x, 0, &petrol_glyph(digit), colour.into(), black);
        return;
    }

    for y in 0..DIGIT_HEIGHT {
        canvas.hline(x, x + DIGIT_PITCH - 1, y, black);
    }
    for seg in digit_segments(digit).iter() {
        render_segment(canvas, x, seg, style, colour);
    }
}

/// Six digits `HHMMSS`, `pitch` pixels apart
pub fn render_clock<C>(canvas: &mut C, pitch: i32, hms: [u8; 3], style: Style, colour: Color565)
where
    C: Canvas,
    C::Color: From<Color565>,
{
    for (i, field) in hms.iter().enumerate() {
        let x = 2 * i as i32 * pitch;
        render_digit(canvas, x, field / 10, style, colour);
        render_digit(canvas, x + pitch, field % 10, style, colour);
    }
}

/// Low 24 bits of `value` as six hex digits, most significant on the left
pub fn render_hex_counter<C>(canvas: &mut C, pitch: i32, value: u32, style: Style, colour: Color565)
where
    C: Canvas,
    C::Color: From<Color565>,
{
    for i in 0..6 {
        let nibble = (value >> (4 * (5 - i))) & 0x0f;
        render_digit(canvas, i as i32 * pitch, nibble as u8, style, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    type Fb = FrameBuffer<128, 32>;

    fn cell(fb: &Fb, x0: i32) -> [[bool; 21]; 32] {
        let mut out = [[false; 21]; 32];
        for (y, row) in out.iter_mut().enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = fb.pixel(x0 + x as i32, y as i32) != Some(Color565::BLACK);
            }
        }
        out
    }

    #[test]
    fn test_digit_is_union_of_segments() {
        for style in [Style::Vfd, Style::LedDot, Style::LedBar, Style::Panaplex] {
            let mut a = Fb::new();
            render_digit(&mut a, 21, 8, style, Color565::WHITE);

            let mut b = Fb::new();
            for seg in [
                Segment::A,
                Segment::B,
                Segment::C,
                Segment::D,
                Segment::E,
                Segment::F,
                Segment::G,
            ] {
                render_segment(&mut b, 21, seg, style, Color565::WHITE);
            }
            assert_eq!(a, b, "{style:?}");
        }
    }

    #[test]
    fn test_digit_clears_its_cell_only() {
        let mut fb = Fb::new();
        fb.fill(Color565::GREY25);
        render_digit(&mut fb, 21, 1, Style::Vfd, Color565::CYAN);

        assert_eq!(fb.pixel(21, 0), Some(Color565::BLACK));
        assert_eq!(fb.pixel(41, 31), Some(Color565::BLACK));
        assert_eq!(fb.pixel(20, 0), Some(Color565::GREY25));
        assert_eq!(fb.pixel(42, 0), Some(Color565::GREY25));
        // Segment B, outer column
        assert_eq!(fb.pixel(21 + 15, 5), Some(Color565::CYAN));
    }

    #[test]
    fn test_later_digit_replaces_earlier() {
        let mut a = Fb::new();
        render_digit(&mut a, 0, 8, Style::Panaplex, Color565::ORANGE);
        render_digit(&mut a, 0, 1, Style::Panaplex, Color565::ORANGE);

        let mut b = Fb::new();
        render_digit(&mut b, 0, 1, Style::Panaplex, Color565::ORANGE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_led_dot_draws_3x3_blocks() {
        let mut fb = Fb::new();
        render_segment(&mut fb, 0, Segment::I, Style::LedDot, Color565::RED);
        for y in 3..6 {
            for x in 0..3 {
                assert_eq!(fb.pixel(x, y), Some(Color565::RED));
            }
        }
        assert_eq!(fb.pixel(3, 3), Some(Color565::BLACK));
        assert_eq!(fb.pixel(0, 6), Some(Color565::BLACK));
    }

    #[test]
    fn test_petrol_digit_blits_glyph() {
        let mut fb = Fb::new();
        fb.fill(Color565::WHITE);
        render_digit(&mut fb, 42, 7, Style::PetrolStation, Color565::GREEN);

        let glyph = petrol_glyph(7);
        let got = cell(&fb, 42);
        for y in 0..32 {
            for x in 0..21 {
                assert_eq!(got[y][x], glyph.bit(x, y), "({x}, {y})");
            }
        }
        assert_eq!(fb.pixel(42, 0), Some(Color565::GREEN));
    }

    #[test]
    fn test_petrol_colon_uses_bar_geometry() {
        let mut a = Fb::new();
        render_segment(&mut a, 0, Segment::CN, Style::PetrolStation, Color565::RED);
        let mut b = Fb::new();
        render_segment(&mut b, 0, Segment::CN, Style::LedBar, Color565::RED);
        assert_eq!(a, b);
        assert_eq!(a.pixel(17, 12), Some(Color565::RED));
    }

    #[test]
    fn test_clock_digit_order() {
        let mut fb = Fb::new();
        render_clock(&mut fb, DIGIT_PITCH, [12, 34, 56], Style::Vfd, Color565::CYAN);

        for (i, d) in [1u8, 2, 3, 4, 5, 6].into_iter().enumerate() {
            let mut want = Fb::new();
            render_digit(&mut want, 0, d, Style::Vfd, Color565::CYAN);
            assert_eq!(
                cell(&fb, i as i32 * DIGIT_PITCH),
                cell(&want, 0),
                "slot {i}"
            );
        }
    }

    #[test]
    fn test_hex_counter_most_significant_first() {
        let mut fb = Fb::new();
        render_hex_counter(&mut fb, DIGIT_PITCH, 0x00_0a_b1, Style::LedDot, Color565::RED);

        for (i, d) in [0u8, 0, 0, 0xa, 0xb, 1].into_iter().enumerate() {
            let mut want = Fb::new();
            render_digit(&mut want, 0, d, Style::LedDot, Color565::RED);
            assert_eq!(cell(&fb, i as i32 * DIGIT_PITCH), cell(&want, 0));
        }
    }

    #[test]
    fn test_default_colours() {
        assert_eq!(default_colour(Style::Vfd), Color565::CYAN);
        assert_eq!(default_colour(Style::Panaplex), Color565::ORANGE);
        assert_eq!(default_colour(Style::LedDot), Color565::RED);
    }
}
