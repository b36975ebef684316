//! Display transport trait
//!
//! A transport pushes full-width row spans of a frame buffer to the
//! physical panel. Callers pick the smallest span that changed.

/// Display transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// The bus rejected a transfer
    Bus(E),
    /// The frame is wider than the transport's line buffer
    FrameTooWide,
}

impl<E> From<E> for DisplayError<E> {
    fn from(e: E) -> Self {
        DisplayError::Bus(e)
    }
}

/// Read access to frame buffer contents in panel word format
pub trait Raster {
    /// Width and height in pixels
    fn dimensions(&self) -> (usize, usize);

    /// 16-bit panel word at (`x`, `y`); both must be in range
    fn pixel_word(&self, x: usize, y: usize) -> u16;
}

impl<R: Raster + ?Sized> Raster for &mut R {
    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn pixel_word(&self, x: usize, y: usize) -> u16 {
        (**self).pixel_word(x, y)
    }
}

/// Something that can show a frame buffer
pub trait DisplayTransport {
    /// Error type for flushes
    type Error;

    /// Push rows `top..=bottom` of `frame`, every column
    ///
    /// `bottom` is clamped to the frame; an empty span does nothing.
    fn flush<R: Raster>(&mut self, frame: &R, top: usize, bottom: usize)
        -> Result<(), Self::Error>;
}

/// Clamp a requested row span to a frame of `height` rows
pub fn clamp_rows(top: usize, bottom: usize, height: usize) -> Option<(usize, usize)> {
    let bottom = bottom.min(height.checked_sub(1)?);
    (top <= bottom).then_some((top, bottom))
}
