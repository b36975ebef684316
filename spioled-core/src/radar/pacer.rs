//! Minimum frame time

/// Holds each frame to at least `frame_ms` milliseconds
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame_ms: u32,
    start: u32,
}

impl FramePacer {
    pub const fn new(frame_ms: u32) -> Self {
        Self { frame_ms, start: 0 }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self, now: u32) {
        self.start = now;
    }

    /// Milliseconds since [`begin`](Self::begin)
    pub fn elapsed(&self, now: u32) -> u32 {
        now.wrapping_sub(self.start)
    }

    /// Block until the frame time is up, calling `idle` between polls of
    /// `now`; returns the full frame time
    pub fn wait(&self, mut now: impl FnMut() -> u32, mut idle: impl FnMut()) -> u32 {
        loop {
            let elapsed = self.elapsed(now());
            if elapsed >= self.frame_ms {
                return elapsed;
            }
            idle();
        }
    }
}
