//! STM32-specific HAL for the spioled firmware
//!
//! This crate implements the `spioled-hal` traits on top of embassy-stm32
//! and, where the firmware needs interrupt-level access, the raw PAC. It
//! supports:
//!
//! - STM32F411CE ("Black Pill", 100 MHz)
//! - STM32F103C8 ("Blue Pill", 72 MHz)
//!
//! # Features
//!
//! - `stm32f411ce` - Enable support for the Black Pill MCU (includes `adc`)
//! - `stm32f103c8` - Enable support for the Blue Pill MCU
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Peripherals are constructed with embassy-stm32 in the firmware and then
//! wrapped here. The USART and TIM4 interrupt handlers use the register
//! views in [`uart`] and [`time`] directly, since embassy's drivers cannot
//! be shared with an ISR.

#![no_std]

#[cfg(feature = "adc")]
pub mod adc;
pub mod gpio;
pub mod spi;
pub mod time;
pub mod uart;

pub use gpio::Pin;
pub use spi::{SpiBusError, SpiPort};
pub use uart::UsartPort;
