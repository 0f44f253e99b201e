//! Clocked bench around [`CounterCore`]. Owns the pin levels and the
//! simulated clock, evaluates the model exactly once per rising edge, and
//! optionally streams every half-period to a VCD file. Pure stimulus and
//! sampling; the bench adds no behavior of its own.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bench::error::BenchResult;
use crate::bench::pins::{LineState, UioPins};
use crate::bench::vcd::{WaveFrame, WaveWriter};
use crate::dut::counter::{CounterCore, ResetTiming};
use crate::dut::signal::{DataOut, Level};

pub struct CounterBench {
    core: CounterCore,
    rst_n: Level,
    ena: Level,
    ui_in: u8,
    uio_in: UioPins,
    /// Simulated time in half-periods; advances twice per clock cycle.
    time: u64,
    cycle: u64,
    wave: Option<WaveWriter<Box<dyn Write>>>,
}

impl CounterBench {
    /// Bench with idle pins: reset released, load inactive, output enabled.
    pub fn new(timing: ResetTiming) -> Self {
        Self {
            core: CounterCore::new(timing),
            rst_n: Level::High,
            ena: Level::High,
            ui_in: 0,
            uio_in: UioPins::LOAD_N,
            time: 0,
            cycle: 0,
            wave: None,
        }
    }

    pub fn core(&self) -> &CounterCore {
        &self.core
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Drives the reset pin. The new level reaches the model immediately,
    /// before any subsequent clock edge, which is what gives the
    /// asynchronous configuration its zero-delay reset.
    pub fn set_rst_n(&mut self, level: Level) {
        if self.rst_n != level {
            log::debug!("rst_n <- {level}");
        }
        self.rst_n = level;
        self.core.reset_line_change(level.asserted_low());
    }

    /// Harness enable pin; held high by every test and ignored by the
    /// model, kept only so waveforms show the full pinout.
    pub fn set_ena(&mut self, level: Level) {
        self.ena = level;
    }

    pub fn set_ui_in(&mut self, value: u8) {
        self.ui_in = value;
    }

    pub fn set_uio_in(&mut self, pins: UioPins) {
        self.uio_in = pins;
    }

    /// Asserts or releases the active-low load enable.
    pub fn set_load_active(&mut self, active: bool) {
        self.uio_in.set(UioPins::LOAD_N, !active);
    }

    /// Drives the tri-state control; `false` floats `uo_out`.
    pub fn set_output_enabled(&mut self, enabled: bool) {
        self.uio_in.set(UioPins::OUT_HIZ, !enabled);
    }

    /// Samples the data output through the current pin levels. Purely
    /// combinational; safe between edges and repeatable.
    pub fn uo_out(&self) -> DataOut {
        let lines = LineState::sample(self.rst_n, self.ui_in, self.uio_in);
        self.core.read_output(lines.output_enabled)
    }

    /// Runs `n` full clock periods. Each rising edge samples the pins once
    /// and evaluates the model; each half-period lands in the waveform if
    /// capture is attached.
    pub fn clock_cycles(&mut self, n: u64) -> BenchResult<()> {
        for _ in 0..n {
            let lines = LineState::sample(self.rst_n, self.ui_in, self.uio_in);
            self.time += 1;
            self.cycle += 1;
            self.core
                .clock_edge(lines.reset_active, lines.load_active, lines.load_data);
            log::trace!(
                "cycle {cycle}: rst={reset} load={load} data=0x{data:02X} -> uo_out={out}",
                cycle = self.cycle,
                reset = lines.reset_active,
                load = lines.load_active,
                data = lines.load_data,
                out = self.uo_out(),
            );
            self.dump_half_period(Level::High)?;
            self.time += 1;
            self.dump_half_period(Level::Low)?;
        }
        Ok(())
    }

    /// Standard bench prologue: hold reset for two cycles, release, run one
    /// settling cycle. Leaves the counter counting, one past zero.
    pub fn reset_sequence(&mut self) -> BenchResult<()> {
        self.set_rst_n(Level::Low);
        self.clock_cycles(2)?;
        self.set_rst_n(Level::High);
        self.clock_cycles(1)
    }

    /// Starts VCD capture into `path`, dumping the current pin state as the
    /// first frame. Capture stays attached for the rest of the run.
    pub fn record_vcd<P: AsRef<Path>>(&mut self, path: P) -> BenchResult<()> {
        let file = File::create(path)?;
        let writer: Box<dyn Write> = Box::new(BufWriter::new(file));
        let mut wave = WaveWriter::new(writer)?;
        wave.dump(self.time, &self.frame(Level::Low))?;
        self.wave = Some(wave);
        Ok(())
    }

    fn frame(&self, clk: Level) -> WaveFrame {
        WaveFrame {
            clk,
            rst_n: self.rst_n,
            ena: self.ena,
            ui_in: self.ui_in,
            uio_in: self.uio_in.bits(),
            uo_out: self.uo_out(),
        }
    }

    fn dump_half_period(&mut self, clk: Level) -> BenchResult<()> {
        let frame = self.frame(clk);
        if let Some(wave) = self.wave.as_mut() {
            wave.dump(self.time, &frame)?;
        }
        Ok(())
    }
}
