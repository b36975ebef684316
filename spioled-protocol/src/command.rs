//! Console command decoding
//!
//! Maps a received byte to the action it requests while the interpreter is
//! idle. The time-setting digits are handled by the interpreter itself.

use crate::style::Style;

/// Display mode requested by a console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayModeSelect {
    /// Digits change only in response to console bytes
    Manual,
    /// Redraw HH:MM:SS every second with a blinking colon
    AutoClock,
    /// Redraw seconds-since-boot in hex every second
    AutoHex,
}

/// Commands accepted by the idle interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Render hex digit 0..=15 at the current slot
    Digit(u8),
    /// Make slot 0..=5 current
    SelectSlot(u8),
    /// Decimal point at the current slot
    Point,
    /// Colon at the current slot
    Colon,
    /// Start the `HHMMSS` time-setting sequence
    BeginTimeSet,
    /// Draw the clock once, with colons
    ShowClock,
    /// Switch display mode
    Mode(DisplayModeSelect),
    /// Switch digit style (and its default colour)
    Style(Style),
    /// Blank the whole frame
    Clear,
    /// White border around the panel
    Border,
    /// White quarter grid
    Grid,
    /// Petrol atlas test strip
    PetrolStrip,
}

// Wire format values
const SLOT_FIRST: u8 = b'g';
const SLOT_LAST: u8 = b'l';
const PETROL_STRIP: u8 = b'\r';

impl Command {
    /// Parse a command from its console byte
    ///
    /// Slot letters are lowercase only; every other letter command accepts
    /// both cases.
    pub fn from_byte(byte: u8) -> Option<Self> {
        let cmd = match byte {
            b'0'..=b'9' => Command::Digit(byte - b'0'),
            b'a'..=b'f' => Command::Digit(byte - b'a' + 10),
            b'A'..=b'F' => Command::Digit(byte - b'A' + 10),
            SLOT_FIRST..=SLOT_LAST => Command::SelectSlot(byte - SLOT_FIRST),
            b'.' => Command::Point,
            b':' => Command::Colon,
            b's' => Command::BeginTimeSet,
            b't' => Command::ShowClock,
            b'm' | b'M' => Command::Mode(DisplayModeSelect::Manual),
            b'u' | b'U' => Command::Mode(DisplayModeSelect::AutoClock),
            b'p' | b'P' => Command::Mode(DisplayModeSelect::AutoHex),
            b'n' | b'N' => Command::Style(Style::PetrolStation),
            b'v' | b'V' => Command::Style(Style::Vfd),
            b'w' | b'W' => Command::Style(Style::LedDot),
            b'x' | b'X' => Command::Style(Style::Panaplex),
            b'y' | b'Y' => Command::Style(Style::LedBar),
            b'z' | b'Z' => Command::Clear,
            b'r' | b'R' => Command::Border,
            b'q' | b'Q' => Command::Grid,
            PETROL_STRIP => Command::PetrolStrip,
            _ => return None,
        };

        Some(cmd)
    }
}
