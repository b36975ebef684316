//! Bitmap assets
//!
//! Assets are rasterised at compile time by `const fn`s from compact
//! descriptions, so the flash image carries only the packed result.

pub mod arrows;
pub mod petrol;

pub use arrows::{arrow, Heading, ARROW_SIZE};
pub use petrol::{petrol_glyph, PETROL_ATLAS, PETROL_GLYPHS};
