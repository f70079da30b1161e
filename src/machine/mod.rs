//! Generic finite-state machine driver.
//!
//! States are case-insensitive names mapped to handler closures. A run
//! threads one value through the handlers until an end state is reached.
//! The driver knows nothing about cards; games wire their own handlers.

pub mod driver;

pub use driver::{Finished, Handler, MachineError, StateMachine, StateName, Transition};
