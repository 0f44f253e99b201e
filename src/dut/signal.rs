use std::fmt;

/// Logic level on a single wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline(always)]
    pub fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }

    #[inline(always)]
    pub fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Asserted state of an active-low control line at this level.
    #[inline(always)]
    pub fn asserted_low(self) -> bool {
        self.is_low()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "0"),
            Level::High => write!(f, "1"),
        }
    }
}

/// Value observed on the 8-bit data output.
///
/// `HighZ` is what the bus shows while the output drivers are disabled and
/// `Unknown` is the register before anything has ever been written to it.
/// Neither is a number; comparing either against `Driven(0)` is exactly the
/// bug this type exists to rule out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataOut {
    Driven(u8),
    HighZ,
    Unknown,
}

impl DataOut {
    /// The driven byte, or `None` for high-impedance and unknown states.
    #[inline(always)]
    pub fn driven(self) -> Option<u8> {
        match self {
            DataOut::Driven(value) => Some(value),
            DataOut::HighZ | DataOut::Unknown => None,
        }
    }

    #[inline(always)]
    pub fn is_high_z(self) -> bool {
        matches!(self, DataOut::HighZ)
    }

    /// Per-bit characters in VCD order (MSB first).
    pub fn bit_chars(self) -> [char; 8] {
        match self {
            DataOut::Driven(value) => {
                let mut bits = ['0'; 8];
                for (idx, slot) in bits.iter_mut().enumerate() {
                    if value & (0x80 >> idx) != 0 {
                        *slot = '1';
                    }
                }
                bits
            }
            DataOut::HighZ => ['z'; 8],
            DataOut::Unknown => ['x'; 8],
        }
    }
}

impl fmt::Display for DataOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOut::Driven(value) => write!(f, "0x{value:02X}"),
            DataOut::HighZ => write!(f, "zzzzzzzz"),
            DataOut::Unknown => write!(f, "xxxxxxxx"),
        }
    }
}
