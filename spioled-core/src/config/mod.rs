//! Configuration types
//!
//! Tunables are compiled in; nothing is read from or written to flash.

pub mod types;

pub use types::*;
