//! Cycle-accurate behavioral model of an 8-bit loadable counter with
//! tri-state output, plus the clocked bench used to drive and verify it.
//!
//! The [`dut`] module holds the design content: a counter register with
//! synchronous load, reset (synchronous or asynchronous, chosen at
//! construction), and a combinational output-enable mux. The [`bench`]
//! module holds everything a verification run needs around it: a clock
//! loop, physical pin conventions, per-cycle logging, and VCD capture.

pub mod bench;
pub mod dut;
