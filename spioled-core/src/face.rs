//! Clock face reactor
//!
//! [`ClockFace`] owns the frame buffer and panel transport and turns
//! console bytes and clock ticks into drawing, flushing and log lines.
//! It never blocks on anything but the transport; the firmware main loop
//! calls it whenever an ISR flag or received byte says there is work.

use core::fmt::{self, Write};

use spioled_display::{
    default_colour, render_clock, render_digit, render_hex_counter, render_segment, Canvas,
    Color565, DisplayTransport, Raster, Segment, PETROL_ATLAS,
};
use spioled_hal::OutputPin;
use spioled_protocol::Style;

use crate::clock::{Clock, Deadline};
use crate::config::ClockConfig;
use crate::state::{DisplayMode, Effect, Interpreter};

/// Digit slots that carry the HH:MM:SS colons
const COLON_SLOTS: [i32; 2] = [1, 3];

/// Console clock display
pub struct ClockFace<C, T> {
    canvas: C,
    transport: T,
    interpreter: Interpreter,
    colour: Color565,
    config: ClockConfig,
    /// Next colon redraw, AutoClock only
    colon: Option<Deadline>,
    heartbeat: Deadline,
}

impl<C, T> ClockFace<C, T>
where
    C: Canvas + Raster,
    C::Color: From<Color565>,
    T: DisplayTransport,
{
    pub fn new(canvas: C, transport: T, config: ClockConfig) -> Self {
        let interpreter = Interpreter::new();
        Self {
            canvas,
            transport,
            colour: default_colour(interpreter.style()),
            interpreter,
            colon: None,
            heartbeat: Deadline::at(config.heartbeat_ms),
            config,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Current digit colour
    pub fn colour(&self) -> Color565 {
        self.colour
    }

    pub fn colon_deadline(&self) -> Option<Deadline> {
        self.colon
    }

    /// Grey test pattern, then greet the console
    pub fn boot(&mut self, out: &mut impl Write) -> Result<(), T::Error> {
        self.canvas
            .checkerboard(Color565::BLACK.into(), Color565::WHITE.into());
        self.flush_all()?;
        let _ = writeln!(out, "Hello from spioled");
        Ok(())
    }

    /// Interpret one console byte and apply the result
    pub fn on_byte(
        &mut self,
        byte: u8,
        clock: &Clock,
        out: &mut impl Write,
    ) -> Result<Effect, T::Error> {
        let effect = self.interpreter.feed(byte);
        self.apply(effect, clock, out)?;
        Ok(effect)
    }

    fn apply(&mut self, effect: Effect, clock: &Clock, out: &mut impl Write) -> Result<(), T::Error> {
        let style = self.interpreter.style();
        let pitch = self.config.digit_pitch;

        match effect {
            Effect::None => {}
            Effect::DrawDigit { slot, digit } => {
                render_digit(&mut self.canvas, i32::from(slot) * pitch, digit, style, self.colour);
                self.flush_digits()?;
            }
            Effect::DrawSegment { slot, segment } => {
                render_segment(&mut self.canvas, i32::from(slot) * pitch, segment, style, self.colour);
                self.flush_digits()?;
            }
            Effect::BeginTimeSet => {
                let _ = writeln!(out, "OLD: {}", clock.now());
            }
            Effect::SetTime {
                hour,
                minute,
                second,
            } => match clock.set_time(hour, minute, second) {
                Ok(t) => {
                    let _ = writeln!(out, "NEW: {}", t);
                }
                Err(_) => {
                    let _ = writeln!(out, "BAD: {:02}:{:02}:{:02}", hour, minute, second);
                }
            },
            Effect::ShowClock => {
                self.draw_clock(clock);
                self.draw_colons();
                self.flush_digits()?;
                self.colon = Some(Deadline::after(
                    clock.millis(),
                    self.config.show_clock_colon_delay_ms,
                ));
            }
            Effect::ModeChanged(mode) => {
                if mode != DisplayMode::AutoClock {
                    self.colon = None;
                }
            }
            Effect::StyleChanged(style) => {
                self.colour = default_colour(style);
            }
            Effect::Clear => {
                self.canvas.fill(Color565::BLACK.into());
                self.flush_all()?;
            }
            Effect::Border => {
                let (w, h) = (self.canvas.width(), self.canvas.height());
                self.canvas.rect(0, 0, w - 1, h - 1, Color565::WHITE.into());
                self.flush_all()?;
            }
            Effect::Grid => {
                let (w, h) = (self.canvas.width(), self.canvas.height());
                let white = C::Color::from(Color565::WHITE);
                for q in 1..4 {
                    self.canvas.vline(w * q / 4, 0, h - 1, white);
                    self.canvas.hline(0, w - 1, h * q / 4, white);
                }
                self.flush_all()?;
            }
            Effect::PetrolStrip => {
                let top = self.config.petrol_strip_y;
                self.canvas.blit(
                    0,
                    top,
                    &PETROL_ATLAS,
                    Color565::GREEN.into(),
                    Color565::BLACK.into(),
                );
                let bottom = top + PETROL_ATLAS.height() as i32 - 1;
                self.transport
                    .flush(&self.canvas, top as usize, bottom as usize)?;
            }
        }
        Ok(())
    }

    /// 1 Hz tick: log the time and redraw in the automatic modes
    pub fn on_rtc_tick(&mut self, clock: &Clock, out: &mut impl Write) -> Result<(), T::Error> {
        let _ = writeln!(out, "RTC: {}", clock.now());

        match self.interpreter.mode() {
            DisplayMode::Manual => {}
            DisplayMode::AutoClock => {
                self.draw_clock(clock);
                self.flush_digits()?;
                self.colon = Some(Deadline::after(clock.millis(), self.config.colon_delay_ms));
            }
            DisplayMode::AutoHex => {
                render_hex_counter(
                    &mut self.canvas,
                    self.config.digit_pitch,
                    clock.millis() / 1000,
                    self.interpreter.style(),
                    self.colour,
                );
                self.flush_digits()?;
            }
        }
        Ok(())
    }

    /// 1 kHz tick: heartbeat LED and colon blink
    pub fn on_ms_tick(
        &mut self,
        now: u32,
        led: &mut impl OutputPin,
        out: &mut impl Write,
    ) -> Result<(), T::Error> {
        if self.heartbeat.is_reached(now) {
            led.toggle();
            let _ = writeln!(out, "millis = {}", now);
            self.heartbeat.advance(self.config.heartbeat_ms);
        }

        if self.interpreter.mode() != DisplayMode::AutoClock {
            return Ok(());
        }
        if let Some(mut due) = self.colon {
            if due.is_reached(now) {
                self.draw_colons();
                self.flush_digits()?;
                due.advance(self.config.colon_period_ms);
                self.colon = Some(due);
            }
        }
        Ok(())
    }

    fn draw_clock(&mut self, clock: &Clock) {
        self.canvas
            .fill_rows(0, self.config.digit_bottom, Color565::BLACK.into());
        render_clock(
            &mut self.canvas,
            self.config.digit_pitch,
            clock.now().hms(),
            self.interpreter.style(),
            self.colour,
        );
    }

    fn draw_colons(&mut self) {
        let style: Style = self.interpreter.style();
        for slot in COLON_SLOTS {
            render_segment(
                &mut self.canvas,
                slot * self.config.digit_pitch,
                Segment::CN,
                style,
                self.colour,
            );
        }
    }

    fn flush_digits(&mut self) -> Result<(), T::Error> {
        self.transport
            .flush(&self.canvas, 0, self.config.digit_bottom as usize)
    }

    fn flush_all(&mut self) -> Result<(), T::Error> {
        let (_, h) = self.canvas.dimensions();
        self.transport.flush(&self.canvas, 0, h.saturating_sub(1))
    }
}

impl<C, T> fmt::Debug for ClockFace<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockFace")
            .field("interpreter", &self.interpreter)
            .field("colour", &self.colour)
            .field("colon", &self.colon)
            .finish_non_exhaustive()
    }
}
