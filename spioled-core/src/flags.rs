//! Sticky interrupt flags
//!
//! An interrupt handler raises a flag; the foreground loop takes it. Raises
//! that happen before the loop gets round to taking the flag collapse into
//! one, so handlers must not count on every raise being seen.

use portable_atomic::{AtomicBool, Ordering};

/// Level-triggered event flag shared between an ISR and the main loop
#[derive(Debug, Default)]
pub struct Flag(AtomicBool);

impl Flag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Mark the event as pending
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Clear the flag, returning whether it was pending
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    /// Peek without clearing
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
