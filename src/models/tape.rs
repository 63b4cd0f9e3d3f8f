/// One of the counters exported under `/sys/class/scsi_tape/<dev>/stats/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapeCounter {
    InFlight,
    IoNs,
    OtherCnt,
    ReadByteCnt,
    ReadCnt,
    ReadNs,
    ResidCnt,
    WriteByteCnt,
    WriteCnt,
    WriteNs,
}

impl TapeCounter {
    /// Every counter, in the order the kernel documents them.
    pub const ALL: [TapeCounter; 10] = [
        TapeCounter::InFlight,
        TapeCounter::IoNs,
        TapeCounter::OtherCnt,
        TapeCounter::ReadByteCnt,
        TapeCounter::ReadCnt,
        TapeCounter::ReadNs,
        TapeCounter::ResidCnt,
        TapeCounter::WriteByteCnt,
        TapeCounter::WriteCnt,
        TapeCounter::WriteNs,
    ];

    /// Attribute file name inside the device's `stats` directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TapeCounter::InFlight => "in_flight",
            TapeCounter::IoNs => "io_ns",
            TapeCounter::OtherCnt => "other_cnt",
            TapeCounter::ReadByteCnt => "read_byte_cnt",
            TapeCounter::ReadCnt => "read_cnt",
            TapeCounter::ReadNs => "read_ns",
            TapeCounter::ResidCnt => "resid_cnt",
            TapeCounter::WriteByteCnt => "write_byte_cnt",
            TapeCounter::WriteCnt => "write_cnt",
            TapeCounter::WriteNs => "write_ns",
        }
    }
}

/// Raw cumulative counters of one tape device at one instant.
///
/// Source: `/sys/class/scsi_tape/<dev>/stats/*`, one integer per file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TapeCounters {
    /// Commands issued to the drive and not yet completed.
    pub in_flight: i64,
    /// Time the drive spent servicing I/O, in nanoseconds.
    pub io_ns: i64,
    /// Commands that were neither reads nor writes (rewind, space, ...).
    pub other_cnt: i64,
    /// Bytes read from tape.
    pub read_byte_cnt: i64,
    /// Completed read commands.
    pub read_cnt: i64,
    /// Time spent in read commands, in nanoseconds.
    pub read_ns: i64,
    /// Reads or writes that finished with a residual count.
    pub resid_cnt: i64,
    /// Bytes written to tape.
    pub write_byte_cnt: i64,
    /// Completed write commands.
    pub write_cnt: i64,
    /// Time spent in write commands, in nanoseconds.
    pub write_ns: i64,
}

impl TapeCounters {
    /// Returns the value of a single counter.
    pub fn get(&self, counter: TapeCounter) -> i64 {
        match counter {
            TapeCounter::InFlight => self.in_flight,
            TapeCounter::IoNs => self.io_ns,
            TapeCounter::OtherCnt => self.other_cnt,
            TapeCounter::ReadByteCnt => self.read_byte_cnt,
            TapeCounter::ReadCnt => self.read_cnt,
            TapeCounter::ReadNs => self.read_ns,
            TapeCounter::ResidCnt => self.resid_cnt,
            TapeCounter::WriteByteCnt => self.write_byte_cnt,
            TapeCounter::WriteCnt => self.write_cnt,
            TapeCounter::WriteNs => self.write_ns,
        }
    }
}

/// Counters of one device together with the time they were collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeSnapshot {
    /// Device name (`st0`, `st1`, ...).
    pub device: String,
    /// Collection time, milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    pub counters: TapeCounters,
}

/// Per-second activity of one tape device over one sampling interval.
///
/// Byte columns are already divided by the display unit. Values come from
/// plain signed differences, so a counter reset shows up as a negative number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TapeRates {
    /// Wall-clock seconds between the two samples.
    pub dt_secs: f64,
    pub read_bytes: f64,
    pub reads: f64,
    pub write_bytes: f64,
    pub writes: f64,
    pub other: f64,
    /// Share of the interval the drive was busy, in percent.
    pub util_pct: f64,
}
