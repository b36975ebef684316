//! Millisecond and one-second interrupt sources
//!
//! SysTick runs at 1 kHz for the millisecond counter; TIM4 overflows once
//! a second for the time of day. Neither goes through embassy-time.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use embassy_stm32::pac;
use embassy_stm32::peripherals::TIM4;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::low_level::Timer;

/// SysTick reload for a 1 kHz tick from the core clock
pub const fn systick_reload(hclk_hz: u32) -> u32 {
    hclk_hz / 1000 - 1
}

/// Start SysTick interrupting every millisecond
pub fn start_systick(syst: &mut SYST, hclk_hz: u32) {
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(systick_reload(hclk_hz));
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();
}

/// TIM4 as a 1 Hz update interrupt
///
/// Keep this alive: dropping the embassy timer gates its clock.
pub struct SecondTimer<'d> {
    timer: Timer<'d, TIM4>,
}

impl<'d> SecondTimer<'d> {
    pub fn new(timer: Timer<'d, TIM4>) -> Self {
        Self { timer }
    }

    /// Program 1 Hz and start counting with the update interrupt on
    pub fn start(&mut self) {
        self.timer.stop();
        self.timer.set_frequency(Hertz(1));
        self.timer.enable_update_interrupt(true);
        self.timer.start();
    }
}

/// Clear the TIM4 update flag; call first thing in the TIM4 handler
pub fn acknowledge_second() {
    pac::TIM4.sr().modify(|w| w.set_uif(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_systick_reload() {
        assert_eq!(systick_reload(100_000_000), 99_999);
        assert_eq!(systick_reload(72_000_000), 71_999);
    }
}
