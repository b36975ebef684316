//! Blocking ADC channels for the joystick
//!
//! Both axes share ADC1, so each [`AdcInput`] borrows the converter for
//! the duration of one conversion.

use core::cell::RefCell;

use embassy_stm32::adc::{Adc, AnyAdcChannel, Instance, SampleTime};
use spioled_hal::AnalogInput;

/// Set the slow sample time the joystick pots need and share the ADC
pub fn shared<'d, T: Instance>(mut adc: Adc<'d, T>) -> RefCell<Adc<'d, T>> {
    adc.set_sample_time(SampleTime::CYCLES84);
    RefCell::new(adc)
}

/// One ADC channel behind a shared converter
pub struct AdcInput<'a, 'd, T: Instance> {
    adc: &'a RefCell<Adc<'d, T>>,
    channel: AnyAdcChannel<T>,
}

impl<'a, 'd, T: Instance> AdcInput<'a, 'd, T> {
    pub fn new(adc: &'a RefCell<Adc<'d, T>>, channel: AnyAdcChannel<T>) -> Self {
        Self { adc, channel }
    }
}

impl<T: Instance> AnalogInput for AdcInput<'_, '_, T> {
    fn read(&mut self) -> u16 {
        self.adc.borrow_mut().blocking_read(&mut self.channel)
    }
}
