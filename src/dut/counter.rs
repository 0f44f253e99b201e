//! The counter register itself: an 8-bit value with a clocked
//! count/load/reset transition and a combinational tri-state output mux.

use crate::dut::signal::DataOut;

/// When the reset condition takes effect.
///
/// Both variants describe the same state machine; the choice only moves the
/// point at which an asserted reset line zeroes the register. Selected at
/// construction, never at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResetTiming {
    /// Reset is sampled like any other input, on the rising clock edge.
    Synchronous,
    /// Reset acts the moment the line changes and holds the register at
    /// zero for as long as the line stays asserted.
    Asynchronous,
}

/// 8-bit counter register with synchronous load and tri-state output.
///
/// The stored value is `None` until the first reset or load is observed,
/// mirroring an uninitialized flip-flop bank: a four-state simulator would
/// show `x`, and nothing here assumes zero before reset. Incrementing an
/// unknown value leaves it unknown.
pub struct CounterCore {
    timing: ResetTiming,
    value: Option<u8>,
}

impl CounterCore {
    pub fn new(timing: ResetTiming) -> Self {
        Self {
            timing,
            value: None,
        }
    }

    #[inline(always)]
    pub fn timing(&self) -> ResetTiming {
        self.timing
    }

    /// Current register contents; `None` before the first reset or load.
    #[inline(always)]
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Reports a level change on the reset line.
    ///
    /// In the asynchronous configuration an asserted line zeroes the
    /// register immediately, outside the clocked path. In the synchronous
    /// configuration the line is only sampled at the next edge, so this is
    /// a no-op there. Callers must deliver the change before any clock edge
    /// that samples the new level.
    pub fn reset_line_change(&mut self, active: bool) {
        if self.timing == ResetTiming::Asynchronous && active {
            self.value = Some(0);
        }
    }

    /// Evaluates one rising clock edge.
    ///
    /// Inputs are the levels sampled for this edge. Priority is strict:
    /// reset beats load, load beats increment, and exactly one of the three
    /// happens per edge.
    pub fn clock_edge(&mut self, reset_active: bool, load_active: bool, load_data: u8) {
        if reset_active {
            // Synchronous: this is where reset lands. Asynchronous: the
            // line-change path already forced zero and the edge holds it.
            self.value = Some(0);
        } else if load_active {
            self.value = Some(load_data);
        } else {
            self.value = self.value.map(|value| value.wrapping_add(1));
        }
    }

    /// Combinational output mux; pure, safe to call any number of times
    /// between edges.
    #[inline(always)]
    pub fn read_output(&self, output_enabled: bool) -> DataOut {
        if !output_enabled {
            return DataOut::HighZ;
        }
        match self.value {
            Some(value) => DataOut::Driven(value),
            None => DataOut::Unknown,
        }
    }
}
