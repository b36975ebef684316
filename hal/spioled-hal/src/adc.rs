//! Analog input abstraction
//!
//! One implementor per channel; the joystick owns two of them.

/// Single ADC channel
pub trait AnalogInput {
    /// Full-scale count of a reading (4096 for a 12-bit converter)
    const RANGE: u16 = 4096;

    /// Take one blocking conversion
    fn read(&mut self) -> u16;

    /// Mid-scale count, where a centred joystick sits
    fn centre(&self) -> u16 {
        Self::RANGE / 2
    }
}
