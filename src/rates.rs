//! Per-second rates for tape counters.
//!
//! Keeps exactly one previous snapshot per device. Each update computes the
//! difference against it, scales it to one second of the sampling interval,
//! and then replaces it with the new snapshot.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::models::{TapeRates, TapeSnapshot};
use crate::util::Unit;

/// `io_ns` per second divisor that turns busy nanoseconds into percent.
pub const IO_NS_PER_UTIL_PCT: f64 = 10_000_000.0;

/// Plain signed counter delta. A reset counter yields a negative value.
pub fn delta(curr: i64, prev: i64) -> i64 {
    curr.wrapping_sub(prev)
}

/// Computes the per-second rates of one device between two of its snapshots
/// taken `interval` apart.
///
/// With a one-second interval the rates are the raw deltas.
pub fn compute_tape_rates(
    prev: &TapeSnapshot,
    curr: &TapeSnapshot,
    unit: Unit,
    interval: Duration,
) -> TapeRates {
    let p = &prev.counters;
    let c = &curr.counters;
    let secs = interval.as_secs_f64();
    let per_sec = |d: i64| d as f64 / secs;
    TapeRates {
        dt_secs: delta(curr.timestamp_ms, prev.timestamp_ms) as f64 / 1000.0,
        read_bytes: unit.convert(delta(c.read_byte_cnt, p.read_byte_cnt)) / secs,
        reads: per_sec(delta(c.read_cnt, p.read_cnt)),
        write_bytes: unit.convert(delta(c.write_byte_cnt, p.write_byte_cnt)) / secs,
        writes: per_sec(delta(c.write_cnt, p.write_cnt)),
        other: per_sec(delta(c.other_cnt, p.other_cnt)),
        util_pct: per_sec(delta(c.io_ns, p.io_ns)) / IO_NS_PER_UTIL_PCT,
    }
}

/// Rate tracking state for tape devices.
#[derive(Debug)]
pub struct TapeRateState {
    pub prev_sample: HashMap<String, TapeSnapshot>,
    unit: Unit,
    interval: Duration,
}

impl TapeRateState {
    pub fn new(unit: Unit, interval: Duration) -> Self {
        Self {
            prev_sample: HashMap::new(),
            unit,
            interval,
        }
    }

    /// Seeds the state with a full pass of snapshots.
    pub fn prime(&mut self, snapshots: Vec<TapeSnapshot>) {
        self.prev_sample = snapshots
            .into_iter()
            .map(|s| (s.device.clone(), s))
            .collect();
    }

    /// Computes rates against the device's previous snapshot and makes `curr`
    /// the new previous snapshot.
    ///
    /// A device without a previous snapshot is compared against itself and
    /// reports zero activity.
    pub fn update(&mut self, curr: TapeSnapshot) -> TapeRates {
        let prev = self
            .prev_sample
            .entry(curr.device.clone())
            .or_insert_with(|| curr.clone());
        let rates = compute_tape_rates(prev, &curr, self.unit, self.interval);
        debug!("{}: {:.3}s since previous sample", curr.device, rates.dt_secs);
        if rates.reads < 0.0 || rates.writes < 0.0 || rates.other < 0.0 {
            warn!("{}: counters went backwards, driver stats reset?", curr.device);
        }
        *prev = curr;
        rates
    }
}
