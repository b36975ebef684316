//! Console command interpreter
//!
//! The interpreter is a pure function of its state and one received byte.
//! It never draws or talks to hardware: it returns an [`Effect`] that the
//! clock face applies.

pub mod effects;
pub mod machine;

pub use effects::Effect;
pub use machine::{DisplayMode, Interpreter, State};
