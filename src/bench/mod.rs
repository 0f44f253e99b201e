//! Verification-harness plumbing around the counter model: physical pin
//! conventions, the clock loop that drives edges, and waveform capture.
//! Nothing in here adds behavior to the model; it only stimulates inputs
//! and samples outputs on clock boundaries.

pub mod error;
pub mod pins;
pub mod testbench;
pub mod vcd;

pub use error::{BenchError, BenchResult};
pub use pins::{LineState, UioPins};
pub use testbench::CounterBench;
pub use vcd::WaveWriter;
