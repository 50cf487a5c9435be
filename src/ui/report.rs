//! Console report for a finished run
//!
//! The report is five plain lines on stdout. Lines are rendered to strings
//! first so the exact text can be checked without capturing stdout.

use std::io::{self, Write};

use crate::stats::call_measurement::CallMeasurement;

/// Header line naming the benchmark
pub const REPORT_TITLE: &str = "Rust Empty Calls:";

/// Render the report lines for a measurement
pub fn render_report(measurement: &CallMeasurement) -> Vec<String> {
    let calls = measurement.calls;
    let summary = &measurement.summary;
    vec![
        REPORT_TITLE.to_string(),
        format!("  {} calls", calls),
        format!(
            "  Avg:  {:.2} ms ({:.0} calls/ms)",
            summary.avg,
            summary.avg_throughput(calls)
        ),
        format!(
            "  Best: {:.2} ms ({:.0} calls/ms)",
            summary.best,
            summary.best_throughput(calls)
        ),
        format!("  = {:.0} calls/second", summary.calls_per_second(calls)),
    ]
}

/// Write the report, one line at a time
pub fn write_report<W: Write>(out: &mut W, measurement: &CallMeasurement) -> io::Result<()> {
    for line in render_report(measurement) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_three_run_renders_from_its_samples() {
        // 3 calls, samples 0.004 ms and 0.002 ms
        let m = CallMeasurement::from_samples(3, vec![0.004, 0.002]).unwrap();
        assert_eq!(m.raw_samples.len(), 2);
        assert_eq!(
            render_report(&m),
            vec![
                "Rust Empty Calls:",
                "  3 calls",
                "  Avg:  0.00 ms (1000 calls/ms)",
                "  Best: 0.00 ms (1500 calls/ms)",
                "  = 1500000 calls/second",
            ]
        );
    }

    #[test]
    fn default_sized_run() {
        let m = CallMeasurement::from_samples(100_000, vec![2.0, 4.0, 3.0, 3.0]).unwrap();
        assert_eq!(
            render_report(&m),
            vec![
                "Rust Empty Calls:",
                "  100000 calls",
                "  Avg:  3.00 ms (33333 calls/ms)",
                "  Best: 2.00 ms (50000 calls/ms)",
                "  = 50000000 calls/second",
            ]
        );
    }

    #[test]
    fn writes_five_lines() {
        let m = CallMeasurement::from_samples(10, vec![1.25]).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &m).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with("calls/second\n"));
        assert!(text.contains("  Avg:  1.25 ms (8 calls/ms)"));
    }
}
