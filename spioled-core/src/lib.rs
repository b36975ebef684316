//! Board-agnostic core logic for the spioled firmware images
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - SPSC byte ring buffers for the console UART
//! - The millisecond/second software clock and sticky ISR flags
//! - The UART interrupt service routine body and a `fmt::Write` adapter
//! - The console command interpreter (pure state machine)
//! - The clock face reactor that applies interpreter effects to a frame
//! - The radar game engine
//! - Configuration type definitions
//!
//! Interrupt handlers only ever touch [`ring`] halves, [`clock::Clock`]
//! and [`flags::Flag`]s. Everything else runs in the foreground loop.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod face;
pub mod flags;
pub mod radar;
pub mod ring;
pub mod serial;
pub mod state;

pub use clock::{Clock, Deadline, InvalidTime, TimeOfDay};
pub use face::ClockFace;
pub use flags::Flag;
pub use radar::{Direction, FramePacer, Game, TickReport};
pub use ring::{Full, RingBuffer, RingConsumer, RingProducer, UART_BUFFER_SIZE};
pub use serial::{service_interrupt, SerialWriter};
pub use state::{DisplayMode, Effect, Interpreter, State};
