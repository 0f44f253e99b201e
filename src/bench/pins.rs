//! Physical pin conventions used by the bench. The model only understands
//! logical active levels; the bit positions below are presentation and the
//! sampling into [`LineState`] is the single place they are decoded.

use bitflags::bitflags;

use crate::dut::signal::Level;

bitflags! {
    /// Bidirectional control pins, as driven by the bench.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UioPins: u8 {
        /// Load enable, active-low: clear this bit to load `ui_in` on the
        /// next edge.
        const LOAD_N = 0b01;
        /// Output tri-state control: set this bit to float `uo_out`.
        const OUT_HIZ = 0b10;
    }
}

/// Logical input levels sampled for one clock edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineState {
    pub reset_active: bool,
    pub load_active: bool,
    pub load_data: u8,
    pub output_enabled: bool,
}

impl LineState {
    /// Decodes pin levels into the model's logical lines.
    ///
    /// `rst_n` and `LOAD_N` are active-low; the output is enabled while
    /// `OUT_HIZ` is clear.
    pub fn sample(rst_n: Level, ui_in: u8, uio_in: UioPins) -> Self {
        Self {
            reset_active: rst_n.asserted_low(),
            load_active: !uio_in.contains(UioPins::LOAD_N),
            load_data: ui_in,
            output_enabled: !uio_in.contains(UioPins::OUT_HIZ),
        }
    }
}
