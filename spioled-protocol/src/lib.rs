//! spioled console protocol
//!
//! The clock console is driven by single ASCII bytes arriving on the UART.
//! There is no framing, escaping or acknowledgement: every byte is either a
//! command, a digit consumed by the time-setting sequence, or ignored.
//!
//! ```text
//! 0-9 a-f A-F   render hex digit at the current slot
//! g h i j k l   select digit slot 0..5
//! . :           decimal point / colon at the current slot
//! s HHMMSS      set the wall clock
//! t             draw the clock once, with colons
//! m u p         manual / auto clock / auto hex display modes
//! n v w x y     petrol / VFD / LED-dot / Panaplex / LED-bar style
//! z r q         clear / border / grid
//! CR            petrol digit strip test pattern
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod style;

pub use command::{Command, DisplayModeSelect};
pub use style::Style;
