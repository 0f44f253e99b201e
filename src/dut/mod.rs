//! Behavioral model of the counter: logical signal values plus the clocked
//! register and output mux. Pin-bit conventions live in `bench`, not here;
//! the model only sees already-decoded active levels and byte values.

pub mod counter;
pub mod signal;

pub use counter::{CounterCore, ResetTiming};
pub use signal::{DataOut, Level};
