//! Side effects requested by the interpreter

use spioled_display::Segment;
use spioled_protocol::Style;

use super::machine::DisplayMode;

/// What the reactor must do after a byte has been interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Nothing to draw or report
    None,
    /// Render hex digit `digit` in digit slot `slot`
    DrawDigit { slot: u8, digit: u8 },
    /// Add a decimal point or colon to slot `slot`
    DrawSegment { slot: u8, segment: Segment },
    /// Time-setting started; report the current time
    BeginTimeSet,
    /// All six digits received; unvalidated
    SetTime { hour: u8, minute: u8, second: u8 },
    /// Draw the clock once, colons included
    ShowClock,
    /// Display mode switched
    ModeChanged(DisplayMode),
    /// Digit style switched; the colour follows the style
    StyleChanged(Style),
    /// Blank the frame
    Clear,
    /// White border
    Border,
    /// White quarter grid
    Grid,
    /// Petrol atlas test strip
    PetrolStrip,
}
