//! Text table formatting.
//!
//! Rows are `<device>\t` followed by right-aligned `{:8.2}` fields. The read
//! pair and the write pair are printed back to back; the remaining columns are
//! separated by a single space.

use crate::models::{TapeCounters, TapeRates};
use crate::util::Unit;

/// Minimum width of every numeric column.
pub const COLUMN_WIDTH: usize = 8;

/// Header of the per-interval table.
pub fn render_rate_header(unit: Unit) -> String {
    format!(
        "Dev:\t{:>w$}{:>w$} {:>w$}{:>w$} {:>w$} {:>w$}",
        format!("r{}/s", unit.label()),
        "r/s",
        format!("w{}/s", unit.label()),
        "w/s",
        "other/s",
        "%util",
        w = COLUMN_WIDTH,
    )
}

/// One row of the per-interval table.
pub fn render_rate_row(device: &str, rates: &TapeRates) -> String {
    format!(
        "{}\t{:>w$.2}{:>w$.2} {:>w$.2}{:>w$.2} {:>w$.2} {:>w$.2}",
        device,
        rates.read_bytes,
        rates.reads,
        rates.write_bytes,
        rates.writes,
        rates.other,
        rates.util_pct,
        w = COLUMN_WIDTH,
    )
}

/// Header of the cumulative (since driver load) table.
pub fn render_cumulative_header(unit: Unit) -> String {
    format!(
        "Dev:\t{:>w$}{:>w$} {:>w$}{:>w$} {:>w$}",
        format!("r{}", unit.label()),
        "reads",
        format!("w{}", unit.label()),
        "writes",
        "other",
        w = COLUMN_WIDTH,
    )
}

/// One row of the cumulative table.
pub fn render_cumulative_row(device: &str, counters: &TapeCounters, unit: Unit) -> String {
    format!(
        "{}\t{:>w$.2}{:>w$.2} {:>w$.2}{:>w$.2} {:>w$.2}",
        device,
        unit.convert(counters.read_byte_cnt),
        counters.read_cnt as f64,
        unit.convert(counters.write_byte_cnt),
        counters.write_cnt as f64,
        counters.other_cnt as f64,
        w = COLUMN_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(row: &str) -> Vec<&str> {
        row.split_whitespace().skip(1).collect()
    }

    #[test]
    fn test_rate_header() {
        assert_eq!(
            render_rate_header(Unit::Kilo),
            "Dev:\t   rKB/s     r/s    wKB/s     w/s  other/s    %util"
        );
        assert!(render_rate_header(Unit::Bytes).contains("rB/s"));
    }

    #[test]
    fn test_cumulative_header() {
        assert_eq!(
            render_cumulative_header(Unit::Mega),
            "Dev:\t     rMB   reads      wMB  writes    other"
        );
    }

    #[test]
    fn test_rate_row() {
        let rates = TapeRates {
            dt_secs: 1.0,
            read_bytes: 500.0 / 1024.0,
            reads: 2.0,
            write_bytes: 200.0 / 1024.0,
            writes: 1.0,
            other: 1.0,
            util_pct: 1.0,
        };
        let row = render_rate_row("st0", &rates);
        assert_eq!(row, "st0\t    0.49    2.00     0.20    1.00     1.00     1.00");
    }

    #[test]
    fn test_cumulative_row() {
        let counters = TapeCounters {
            read_byte_cnt: 4096,
            read_cnt: 10,
            write_byte_cnt: 8192,
            write_cnt: 20,
            other_cnt: 3,
            ..TapeCounters::default()
        };
        let row = render_cumulative_row("st0", &counters, Unit::Bytes);
        assert_eq!(
            fields(&row),
            vec!["4096.00", "10.00", "8192.00", "20.00", "3.00"]
        );
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let counters = TapeCounters {
            read_byte_cnt: 123_456_789_012,
            ..TapeCounters::default()
        };
        let row = render_cumulative_row("st12", &counters, Unit::Bytes);
        assert!(row.starts_with("st12\t123456789012.00"));
    }

    #[test]
    fn test_negative_delta_rendered() {
        let rates = TapeRates {
            reads: -7.0,
            ..TapeRates::default()
        };
        assert_eq!(fields(&render_rate_row("st0", &rates))[1], "-7.00");
    }
}
