use std::hint::black_box;
use std::io::{self, Error, ErrorKind};
use std::time::Instant;

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::stats::call_measurement::CallMeasurement;
use crate::ui::report::write_report;
use crate::ui::system_info::print_system_info;
use crate::utils::helpers::{duration_to_ms, iteration_progress_bar};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Number of timed outer iterations per run
pub const DEFAULT_ITERATIONS: usize = 10;
/// Number of no-op calls inside one outer iteration
pub const DEFAULT_CALLS: u64 = 100_000;

/// Shape of a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkParameters {
    iterations: usize,
    calls: u64,
}

impl BenchmarkParameters {
    /// Both counts must be positive; a zero count would leave nothing to time.
    pub fn new(iterations: usize, calls: u64) -> io::Result<Self> {
        if iterations == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "Iteration count must be positive"));
        }
        if calls == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "Call count must be positive"));
        }
        Ok(Self { iterations, calls })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl Default for BenchmarkParameters {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            calls: DEFAULT_CALLS,
        }
    }
}

// ============================================================================
// MEASUREMENT
// ============================================================================

/// The function whose call overhead is measured
#[inline(never)]
pub fn empty() {}

/// Time `params.calls()` invocations of `op`, once per outer iteration.
///
/// Each outer iteration yields one sample in milliseconds. `progress` is
/// advanced after a sample is recorded, outside the timed region.
pub fn measure_calls<F: FnMut()>(
    params: &BenchmarkParameters,
    progress: &ProgressBar,
    mut op: F,
) -> io::Result<CallMeasurement> {
    let mut samples = Vec::with_capacity(params.iterations());

    for iteration in 0..params.iterations() {
        let start = Instant::now();
        for _ in 0..params.calls() {
            black_box(op());
        }
        let elapsed_ms = duration_to_ms(start.elapsed());

        debug!(iteration, elapsed_ms, "sample recorded");
        samples.push(elapsed_ms);
        progress.inc(1);
    }

    CallMeasurement::from_samples(params.calls(), samples)
}

// ============================================================================
// ENTRY POINT
// ============================================================================

pub fn run_benchmark() -> io::Result<()> {
    print_system_info();

    let params = BenchmarkParameters::default();
    let pb = iteration_progress_bar(params.iterations())?;
    pb.set_message(format!("{} calls each", params.calls()));

    // Calling through an opaque pointer keeps every call in the loop.
    let op: fn() = black_box(empty as fn());
    let measurement = measure_calls(&params, &pb, op)?;
    pb.finish_and_clear();

    info!(
        avg_ms = measurement.summary.avg,
        best_ms = measurement.summary.best,
        samples = measurement.raw_samples.len(),
        "benchmark finished"
    );

    write_report(&mut io::stdout().lock(), &measurement)
}
