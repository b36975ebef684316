//! spioled Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display and game logic are
//! written against. Chip crates (currently `spioled-hal-stm32`) implement
//! them on top of embassy-stm32, and host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  spioled-firmware / spioled-radar       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  spioled-core / spioled-display         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  spioled-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ spioled-hal-  │
//!             │    stm32      │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (panel DC/CS, LED, debug strobe)
//! - [`spi::SpiBus`] - Write-only SPI master for the panel
//! - [`uart::SerialPort`] - Register-level UART access from an interrupt
//! - [`adc::AnalogInput`] - Single-channel ADC reads (joystick)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use gpio::OutputPin;
pub use spi::SpiBus;
pub use uart::SerialPort;
