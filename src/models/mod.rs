//! Tape counter snapshots and the per-interval rates derived from them.

mod tape;

pub use tape::*;
