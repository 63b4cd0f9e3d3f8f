//! Sampling loop: one-shot cumulative report or continuous interval report.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info};

use crate::collector::traits::FileSystem;
use crate::collector::{CollectError, DEFAULT_SYS_PATH, TapeCollector};
use crate::fmt::{
    render_cumulative_header, render_cumulative_row, render_rate_header, render_rate_row,
};
use crate::rates::TapeRateState;
use crate::util::Unit;

/// Longest uninterrupted sleep; bounds how long a stop request can go unnoticed.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Settings fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub unit: Unit,
    /// Print per-interval deltas until stopped instead of one cumulative table.
    pub continuous: bool,
    pub interval: Duration,
    /// sysfs mount point.
    pub sys_path: PathBuf,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Bytes,
            continuous: false,
            interval: Duration::from_secs(1),
            sys_path: PathBuf::from(DEFAULT_SYS_PATH),
        }
    }
}

/// Error type for a sampling run.
#[derive(Debug)]
pub enum SampleError {
    /// Device discovery or a counter read failed.
    Collect(CollectError),
    /// Writing the table failed.
    Output(io::Error),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::Collect(e) => write!(f, "{}", e),
            SampleError::Output(e) => write!(f, "write error: {}", e),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Collect(e) => Some(e),
            SampleError::Output(e) => Some(e),
        }
    }
}

impl SampleError {
    /// True when the reader of the table went away (`tapestat -c | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, SampleError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<CollectError> for SampleError {
    fn from(e: CollectError) -> Self {
        SampleError::Collect(e)
    }
}

impl From<io::Error> for SampleError {
    fn from(e: io::Error) -> Self {
        SampleError::Output(e)
    }
}

/// Drives the collector and writes the table.
pub struct Sampler<F: FileSystem> {
    collector: TapeCollector<F>,
    config: SamplerConfig,
}

impl<F: FileSystem> Sampler<F> {
    pub fn new(fs: F, config: SamplerConfig) -> Self {
        Self {
            collector: TapeCollector::new(fs, &config.sys_path),
            config,
        }
    }

    /// Runs in the configured mode until done or until `stop` is raised.
    pub fn run<W: Write>(&self, out: &mut W, stop: &AtomicBool) -> Result<(), SampleError> {
        if self.config.continuous {
            self.run_continuous(out, stop)
        } else {
            self.run_once(out, stop)
        }
    }

    /// Prints cumulative counters of every device once.
    ///
    /// A baseline pass is read and discarded before the warm-up sleep, so a
    /// device that fails to read is reported before anything is printed.
    pub fn run_once<W: Write>(&self, out: &mut W, stop: &AtomicBool) -> Result<(), SampleError> {
        let devices = self.collector.discover()?;
        let baseline = self.collector.read_all(&devices)?;
        debug!("Baseline taken for {} device(s)", baseline.len());

        if !self.sleep(stop) {
            info!("Stopped during warm-up");
            return Ok(());
        }

        let unit = self.config.unit;
        writeln!(out, "{}", render_cumulative_header(unit))?;
        for device in &devices {
            let snapshot = self.collector.read_counters(device)?;
            writeln!(
                out,
                "{}",
                render_cumulative_row(device, &snapshot.counters, unit)
            )?;
        }
        out.flush()?;
        Ok(())
    }

    /// Prints per-interval deltas every `interval` until `stop` is raised.
    pub fn run_continuous<W: Write>(
        &self,
        out: &mut W,
        stop: &AtomicBool,
    ) -> Result<(), SampleError> {
        let devices = self.collector.discover()?;
        info!(
            "Sampling {} tape device(s) in {} every {:?}",
            devices.len(),
            self.collector.class_path().display(),
            self.config.interval
        );

        let mut state = TapeRateState::new(self.config.unit, self.config.interval);
        state.prime(self.collector.read_all(&devices)?);

        let mut passes: u64 = 0;
        while self.sleep(stop) {
            self.continuous_pass(&devices, &mut state, out)?;
            passes += 1;
        }

        info!("Stopped after {} pass(es)", passes);
        Ok(())
    }

    /// Header, one row per device, blank separator line.
    fn continuous_pass<W: Write>(
        &self,
        devices: &[String],
        state: &mut TapeRateState,
        out: &mut W,
    ) -> Result<(), SampleError> {
        let unit = self.config.unit;
        writeln!(out, "{}", render_rate_header(unit))?;
        for device in devices {
            let snapshot = self.collector.read_counters(device)?;
            let rates = state.update(snapshot);
            writeln!(out, "{}", render_rate_row(device, &rates))?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Sleeps one interval in short slices. Returns false if `stop` was raised.
    fn sleep(&self, stop: &AtomicBool) -> bool {
        let mut remaining = self.config.interval;
        while remaining > Duration::ZERO && !stop.load(Ordering::SeqCst) {
            let slice = remaining.min(STOP_POLL_INTERVAL);
            std::thread::sleep(slice);
            remaining = remaining.saturating_sub(slice);
        }
        !stop.load(Ordering::SeqCst)
    }
}
