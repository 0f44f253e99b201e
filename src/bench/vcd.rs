//! Minimal VCD emitter for bench runs. Dumps are change-only: a signal is
//! re-emitted at a timestamp only when its value differs from the last one
//! written, so idle signals cost nothing. `uo_out` is dumped as `z` bits
//! while tri-stated and `x` bits before the register is initialized.

use std::io::{self, Write};

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::dut::signal::{DataOut, Level};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WaveSignal {
    Clk,
    RstN,
    Ena,
    UiIn,
    UioIn,
    UoOut,
}

impl WaveSignal {
    const ALL: [WaveSignal; 6] = [
        WaveSignal::Clk,
        WaveSignal::RstN,
        WaveSignal::Ena,
        WaveSignal::UiIn,
        WaveSignal::UioIn,
        WaveSignal::UoOut,
    ];

    fn name(self) -> &'static str {
        match self {
            WaveSignal::Clk => "clk",
            WaveSignal::RstN => "rst_n",
            WaveSignal::Ena => "ena",
            WaveSignal::UiIn => "ui_in",
            WaveSignal::UioIn => "uio_in",
            WaveSignal::UoOut => "uo_out",
        }
    }

    fn width(self) -> usize {
        match self {
            WaveSignal::Clk | WaveSignal::RstN | WaveSignal::Ena => 1,
            WaveSignal::UiIn | WaveSignal::UioIn | WaveSignal::UoOut => 8,
        }
    }
}

/// Snapshot of every recorded signal at one instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WaveFrame {
    pub clk: Level,
    pub rst_n: Level,
    pub ena: Level,
    pub ui_in: u8,
    pub uio_in: u8,
    pub uo_out: DataOut,
}

impl WaveFrame {
    fn render(&self, signal: WaveSignal) -> String {
        match signal {
            WaveSignal::Clk => self.clk.to_string(),
            WaveSignal::RstN => self.rst_n.to_string(),
            WaveSignal::Ena => self.ena.to_string(),
            WaveSignal::UiIn => format!("{:b}", self.ui_in),
            WaveSignal::UioIn => format!("{:b}", self.uio_in),
            WaveSignal::UoOut => self.uo_out.bit_chars().iter().collect(),
        }
    }
}

pub struct WaveWriter<W: Write> {
    writer: W,
    ids: AHashMap<WaveSignal, String>,
    last_values: AHashMap<WaveSignal, String>,
    timestamp: u64,
    started: bool,
}

impl<W: Write> WaveWriter<W> {
    /// Writes the VCD header and `$var` declarations for the bench pinout.
    pub fn new(mut writer: W) -> io::Result<Self> {
        let mut ids = AHashMap::default();

        writeln!(writer, "$version")?;
        writeln!(writer, "  countbench")?;
        writeln!(writer, "$end")?;
        writeln!(writer, "$timescale 1ms $end")?;
        writeln!(writer, "$scope module counter $end")?;
        for (num, signal) in WaveSignal::ALL.into_iter().enumerate() {
            let id = Self::id_code(num);
            writeln!(
                writer,
                "$var wire {} {} {} $end",
                signal.width(),
                id,
                signal.name()
            )?;
            ids.insert(signal, id);
        }
        writeln!(writer, "$upscope $end")?;
        writeln!(writer, "$enddefinitions $end")?;
        writeln!(writer, "$dumpvars")?;
        writeln!(writer, "$end")?;

        Ok(Self {
            writer,
            ids,
            last_values: AHashMap::default(),
            timestamp: 0,
            started: false,
        })
    }

    /// Short printable-ASCII identifier, one character per signal here but
    /// base-94 beyond that.
    fn id_code(num: usize) -> String {
        let mut id = String::new();
        let mut n = num;
        loop {
            id.push(((n % 94) + 33) as u8 as char);
            if n < 94 {
                break;
            }
            n = (n / 94) - 1;
        }
        id.chars().rev().collect()
    }

    /// Records one timestamped frame, emitting only the signals that
    /// changed since the previous dump.
    pub fn dump(&mut self, timestamp: u64, frame: &WaveFrame) -> io::Result<()> {
        let mut changes: SmallVec<[(WaveSignal, String); 6]> = SmallVec::new();
        for signal in WaveSignal::ALL {
            let rendered = frame.render(signal);
            if self.last_values.get(&signal) != Some(&rendered) {
                changes.push((signal, rendered));
            }
        }
        if changes.is_empty() {
            return Ok(());
        }

        if timestamp > self.timestamp || !self.started {
            writeln!(self.writer, "#{timestamp}")?;
            self.timestamp = timestamp;
            self.started = true;
        }
        for (signal, rendered) in changes {
            let id = &self.ids[&signal];
            if signal.width() == 1 {
                writeln!(self.writer, "{rendered}{id}")?;
            } else {
                writeln!(self.writer, "b{rendered} {id}")?;
            }
            self.last_values.insert(signal, rendered);
        }
        self.writer.flush()
    }
}
