//! Text banners
//!
//! Text goes through embedded-graphics so the firmware does not carry its
//! own font table. Any frame buffer that is also an infallible
//! [`DrawTarget`] gets [`TextCanvas`] for free.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_6X9;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::prelude::{DrawTarget, Point};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

use crate::canvas::Canvas;

/// Banner font: 6 pixel advance including the gap column
pub const FONT: &MonoFont<'static> = &FONT_6X9;

/// Horizontal advance per character
pub const CHAR_ADVANCE: i32 = 6;

/// Surfaces that can draw a line of text
pub trait TextCanvas: Canvas {
    /// Draw `text` with its top-left corner at (`x`, `y`), returning the
    /// x coordinate just past the last glyph
    fn text(&mut self, x: i32, y: i32, text: &str, fg: Self::Color, bg: Self::Color) -> i32;
}

impl<T> TextCanvas for T
where
    T: Canvas + DrawTarget<Error = Infallible>,
    <T as Canvas>::Color: Into<<T as DrawTarget>::Color>,
{
    fn text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        fg: <T as Canvas>::Color,
        bg: <T as Canvas>::Color,
    ) -> i32 {
        let style = MonoTextStyleBuilder::new()
            .font(FONT)
            .text_color(fg.into())
            .background_color(bg.into())
            .build();

        match Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self) {
            Ok(next) => next.x,
            Err(never) => match never {},
        }
    }
}

/// Width in pixels of `text` in the banner font
pub fn text_width(text: &str) -> i32 {
    text.len() as i32 * CHAR_ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color565;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_text_advances_by_char_width() {
        let mut fb = FrameBuffer::<64, 16>::new();
        let end = fb.text(2, 0, "READY", Color565::WHITE, Color565::BLACK);
        assert_eq!(end, 2 + text_width("READY"));
    }

    #[test]
    fn test_text_draws_ink() {
        let mut fb = FrameBuffer::<64, 16>::new();
        fb.text(0, 0, "E", Color565::WHITE, Color565::BLACK);
        let mut ink = 0;
        for y in 0..9 {
            for x in 0..6 {
                if fb.pixel(x, y) == Some(Color565::WHITE) {
                    ink += 1;
                }
            }
        }
        assert!(ink > 5);
    }

    #[test]
    fn test_text_clipped_at_edge() {
        let mut fb = FrameBuffer::<8, 8>::new();
        fb.text(4, 4, "WIDE", Color565::WHITE, Color565::BLACK);
        assert_eq!(fb.pixel(0, 0), Some(Color565::BLACK));
    }
}
