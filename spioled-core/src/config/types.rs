//! Configuration type definitions

use spioled_display::segments::{DIGIT_HEIGHT, DIGIT_PITCH};

/// Number of digit slots on the clock face
pub const DIGIT_SLOTS: u8 = 6;

/// Clock console timing and layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Horizontal distance between digit slots (pixels)
    pub digit_pitch: i32,
    /// Last frame row the digits occupy
    pub digit_bottom: i32,
    /// Delay from a per-second redraw to the first colon (ms)
    pub colon_delay_ms: u32,
    /// Delay from a `t` redraw to the first colon (ms)
    pub show_clock_colon_delay_ms: u32,
    /// Colon redraw period after the first (ms)
    pub colon_period_ms: u32,
    /// Heartbeat LED toggle period (ms)
    pub heartbeat_ms: u32,
    /// Top row of the petrol test strip
    pub petrol_strip_y: i32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            digit_pitch: DIGIT_PITCH,
            digit_bottom: DIGIT_HEIGHT - 1,
            colon_delay_ms: 500,
            show_clock_colon_delay_ms: 1100,
            colon_period_ms: 600,
            heartbeat_ms: 500,
            petrol_strip_y: 64,
        }
    }
}

/// Maximum radar targets
pub const MAX_TARGETS: usize = 10;

/// Maximum live echoes
pub const MAX_ECHOES: usize = 10;

/// Radar game tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadarConfig {
    /// Scope radius (pixels)
    pub radius: i32,
    /// Targets placed at the start of a game (at most [`MAX_TARGETS`])
    pub targets: usize,
    /// Starting game length in sweeps
    pub duration: u32,
    /// Ceiling for time bonuses
    pub max_duration: u32,
    /// Sweeps added by a time bonus
    pub time_bonus: u32,
    /// Sweep-to-bearing distance that counts as a hit (degrees)
    pub bearing_tolerance: i32,
    /// Frames an echo stays visible
    pub echo_lifetime: i32,
    /// Degrees the sweep advances per frame
    pub sweep_step: i32,
    /// Sweep lines drawn per frame, 2 degrees apart
    pub sweep_repeats: i32,
    /// Minimum frame time (ms)
    pub frame_ms: u32,
    /// Joystick dead band either side of centre (ADC counts)
    pub deadband: u16,
    /// Playfield side (pixels)
    pub playfield: i32,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            radius: 33,
            targets: MAX_TARGETS,
            duration: 40,
            max_duration: 60,
            time_bonus: 5,
            bearing_tolerance: 6,
            echo_lifetime: 90,
            sweep_step: 3,
            sweep_repeats: 3,
            frame_ms: 40,
            deadband: 512,
            playfield: 256,
        }
    }
}
