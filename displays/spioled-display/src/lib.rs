//! Frame buffers and rendering for SSD1351 OLED panels
//!
//! This crate provides:
//! - [`Color565`] and the panel palette
//! - The [`Canvas`] trait: clamped pixel, line, rectangle, circle and
//!   bitmap primitives shared by every frame buffer
//! - [`FrameBuffer`] (16-bit colour) and [`MonoFrameBuffer`] (1 bpp, 8 rows
//!   per byte)
//! - A segment digit renderer with five visual styles
//! - Compile-time generated bitmap assets (petrol digits, arrows)
//! - The [`DisplayTransport`] trait and an SSD1351 implementation over the
//!   `spioled-hal` SPI traits
//!
//! # Architecture
//!
//! Drawing never touches the panel. The foreground loop mutates a frame
//! buffer through [`Canvas`] and then asks a [`DisplayTransport`] to push a
//! full-width span of rows. The transport reads the buffer through
//! [`Raster`], so colour and monochrome buffers flush the same way.

#![no_std]
#![deny(unsafe_code)]

pub mod assets;
pub mod backend;
pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod framebuffer;
pub mod mono;
pub mod renderer;
pub mod segments;
pub mod ssd1351;
pub mod text;

// Re-export key types
pub use backend::{DisplayError, DisplayTransport, Raster};
pub use assets::{arrow, petrol_glyph, Heading, PETROL_ATLAS};
pub use bitmap::Bitmap;
pub use canvas::Canvas;
pub use color::Color565;
pub use framebuffer::FrameBuffer;
pub use mono::MonoFrameBuffer;
pub use renderer::{default_colour, render_clock, render_digit, render_hex_counter, render_segment};
pub use segments::{Segment, SegmentSet, DIGIT_HEIGHT, DIGIT_PITCH};
pub use spioled_protocol::Style;
pub use ssd1351::Ssd1351;
pub use text::{text_width, TextCanvas};
