//! GPIO output wrapper

use embassy_stm32::gpio::Output;
use spioled_hal::OutputPin;

/// Push-pull output driven through the hal trait
pub struct Pin<'d> {
    output: Output<'d>,
}

impl<'d> Pin<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl OutputPin for Pin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn toggle(&mut self) {
        self.output.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
