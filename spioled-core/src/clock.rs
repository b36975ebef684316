//! Software clock
//!
//! Two interrupt sources drive the clock: a 1 kHz SysTick calls
//! [`Clock::tick_millisecond`] and a 1 Hz timer calls
//! [`Clock::tick_second`]. The wall-clock fields are packed into one
//! atomic word so the foreground never reads a half-updated time.

use core::fmt;

use portable_atomic::{AtomicU32, Ordering};
use spioled_hal::OutputPin;

use crate::flags::Flag;

/// Out-of-range hour, minute or second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidTime;

/// Wall-clock time, 24-hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Validated constructor
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, InvalidTime> {
        if hour < 24 && minute < 60 && second < 60 {
            Ok(Self {
                hour,
                minute,
                second,
            })
        } else {
            Err(InvalidTime)
        }
    }

    /// One second later, wrapping at midnight
    pub fn next_second(self) -> Self {
        let mut t = self;
        t.second += 1;
        if t.second >= 60 {
            t.second = 0;
            t.minute += 1;
            if t.minute >= 60 {
                t.minute = 0;
                t.hour += 1;
                if t.hour >= 24 {
                    t.hour = 0;
                }
            }
        }
        t
    }

    /// Fields in display order
    pub fn hms(self) -> [u8; 3] {
        [self.hour, self.minute, self.second]
    }

    const fn pack(self) -> u32 {
        (self.hour as u32) << 16 | (self.minute as u32) << 8 | self.second as u32
    }

    const fn unpack(word: u32) -> Self {
        Self {
            hour: (word >> 16) as u8,
            minute: (word >> 8) as u8,
            second: word as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Millisecond counter, time of day and the flags their ticks raise
pub struct Clock {
    millis: AtomicU32,
    time: AtomicU32,
    /// Raised every millisecond
    pub tick: Flag,
    /// Raised every second
    pub rtc_tick: Flag,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Midnight, zero milliseconds
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
            time: AtomicU32::new(TimeOfDay::MIDNIGHT.pack()),
            tick: Flag::new(),
            rtc_tick: Flag::new(),
        }
    }

    /// SysTick body: count, toggle the scope strobe, raise `tick`
    pub fn tick_millisecond(&self, strobe: &mut impl OutputPin) {
        self.millis.fetch_add(1, Ordering::Relaxed);
        strobe.toggle();
        self.tick.raise();
    }

    /// 1 Hz timer body: advance the time of day, raise `rtc_tick`
    pub fn tick_second(&self) {
        let _ = self
            .time
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |w| {
                Some(TimeOfDay::unpack(w).next_second().pack())
            });
        self.rtc_tick.raise();
    }

    /// Replace the time of day; out-of-range values are rejected and the
    /// clock keeps running unchanged
    pub fn set_time(&self, hour: u8, minute: u8, second: u8) -> Result<TimeOfDay, InvalidTime> {
        let t = TimeOfDay::new(hour, minute, second)?;
        self.time.store(t.pack(), Ordering::Release);
        Ok(t)
    }

    pub fn now(&self) -> TimeOfDay {
        TimeOfDay::unpack(self.time.load(Ordering::Acquire))
    }

    /// Milliseconds since boot, wrapping after about 49 days
    pub fn millis(&self) -> u32 {
        self.millis.load(Ordering::Relaxed)
    }
}

/// A point on the wrapping millisecond timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline(u32);

impl Deadline {
    pub const fn at(ms: u32) -> Self {
        Self(ms)
    }

    /// `delay` milliseconds after `now`
    pub const fn after(now: u32, delay: u32) -> Self {
        Self(now.wrapping_add(delay))
    }

    pub const fn millis(self) -> u32 {
        self.0
    }

    /// Whether `now` is at or past the deadline
    ///
    /// Correct across counter wrap as long as the two are less than
    /// 2^31 ms apart.
    pub const fn is_reached(self, now: u32) -> bool {
        (now.wrapping_sub(self.0) as i32) >= 0
    }

    /// Push the deadline `by` milliseconds later
    pub fn advance(&mut self, by: u32) {
        self.0 = self.0.wrapping_add(by);
    }
}
