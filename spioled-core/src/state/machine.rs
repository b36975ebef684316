//! Interpreter state machine
//!
//! Outside time-setting every byte is decoded through
//! [`Command::from_byte`]. After `s` the next six bytes must be ASCII
//! digits `HHMMSS`; anything else abandons the sequence.

use spioled_display::Segment;
use spioled_protocol::{Command, DisplayModeSelect, Style};

use super::effects::Effect;

/// Interpreter states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Decoding commands
    #[default]
    Idle,
    SettingHourTens,
    SettingHourUnits,
    SettingMinuteTens,
    SettingMinuteUnits,
    SettingSecondTens,
    SettingSecondUnits,
}

impl State {
    /// Whether a time-setting sequence is in progress
    pub fn is_setting_time(&self) -> bool {
        !matches!(self, State::Idle)
    }

    /// State after one more time digit
    fn next(self) -> Self {
        use State::*;

        match self {
            Idle => SettingHourTens,
            SettingHourTens => SettingHourUnits,
            SettingHourUnits => SettingMinuteTens,
            SettingMinuteTens => SettingMinuteUnits,
            SettingMinuteUnits => SettingSecondTens,
            SettingSecondTens => SettingSecondUnits,
            SettingSecondUnits => Idle,
        }
    }
}

/// How the digits are driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Only console bytes change the digits
    #[default]
    Manual,
    /// HH:MM:SS redrawn every second
    AutoClock,
    /// Seconds since boot, in hex, redrawn every second
    AutoHex,
}

impl From<DisplayModeSelect> for DisplayMode {
    fn from(m: DisplayModeSelect) -> Self {
        match m {
            DisplayModeSelect::Manual => DisplayMode::Manual,
            DisplayModeSelect::AutoClock => DisplayMode::AutoClock,
            DisplayModeSelect::AutoHex => DisplayMode::AutoHex,
        }
    }
}

/// Byte-at-a-time console interpreter
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    state: State,
    slot: u8,
    style: Style,
    mode: DisplayMode,
    /// HH, MM, SS being assembled
    pending: [u8; 3],
}

impl Interpreter {
    /// Idle, slot 0, VFD style, manual mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Interpret one received byte
    pub fn feed(&mut self, byte: u8) -> Effect {
        if self.state.is_setting_time() {
            return self.feed_time_digit(byte);
        }

        let Some(cmd) = Command::from_byte(byte) else {
            return Effect::None;
        };

        match cmd {
            Command::Digit(digit) => Effect::DrawDigit {
                slot: self.slot,
                digit,
            },
            Command::SelectSlot(slot) => {
                self.slot = slot;
                Effect::None
            }
            Command::Point => Effect::DrawSegment {
                slot: self.slot,
                segment: Segment::DP,
            },
            Command::Colon => Effect::DrawSegment {
                slot: self.slot,
                segment: Segment::CN,
            },
            Command::BeginTimeSet => {
                self.state = State::SettingHourTens;
                self.pending = [0; 3];
                Effect::BeginTimeSet
            }
            Command::ShowClock => Effect::ShowClock,
            Command::Mode(m) => {
                self.mode = m.into();
                Effect::ModeChanged(self.mode)
            }
            Command::Style(s) => {
                self.style = s;
                Effect::StyleChanged(s)
            }
            Command::Clear => Effect::Clear,
            Command::Border => Effect::Border,
            Command::Grid => Effect::Grid,
            Command::PetrolStrip => Effect::PetrolStrip,
        }
    }

    fn feed_time_digit(&mut self, byte: u8) -> Effect {
        if !byte.is_ascii_digit() {
            self.state = State::Idle;
            return Effect::None;
        }

        let d = byte - b'0';
        let field = match self.state {
            State::SettingHourTens | State::SettingHourUnits => 0,
            State::SettingMinuteTens | State::SettingMinuteUnits => 1,
            _ => 2,
        };
        let tens = matches!(
            self.state,
            State::SettingHourTens | State::SettingMinuteTens | State::SettingSecondTens
        );
        if tens {
            self.pending[field] = d * 10;
        } else {
            self.pending[field] += d;
        }

        let done = self.state == State::SettingSecondUnits;
        self.state = self.state.next();

        if done {
            let [hour, minute, second] = self.pending;
            Effect::SetTime {
                hour,
                minute,
                second,
            }
        } else {
            Effect::None
        }
    }
}
