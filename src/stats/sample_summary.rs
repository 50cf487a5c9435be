//! Summary statistics over a list of timing samples
//!
//! Samples are elapsed times in milliseconds, one per outer iteration.

/// Average and best of a non-empty sample list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub avg: f64,  // arithmetic mean, ms
    pub best: f64, // minimum, ms
    pub sample_count: usize,
}

impl SampleSummary {
    /// Summarize samples; `None` when there is nothing to summarize.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let best = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;

        // Summation rounding can land the mean a few ulps under the minimum.
        let avg = mean.max(best);

        Some(Self {
            avg,
            best,
            sample_count: samples.len(),
        })
    }

    /// Calls per millisecond at the average time
    pub fn avg_throughput(&self, calls: u64) -> f64 {
        throughput(calls, self.avg)
    }

    /// Calls per millisecond at the best time
    pub fn best_throughput(&self, calls: u64) -> f64 {
        throughput(calls, self.best)
    }

    /// Best throughput rescaled to calls per second
    pub fn calls_per_second(&self, calls: u64) -> f64 {
        self.best_throughput(calls) * 1000.0
    }
}

/// Calls per millisecond for `calls` invocations taking `elapsed_ms`.
pub fn throughput(calls: u64, elapsed_ms: f64) -> f64 {
    calls as f64 / elapsed_ms
}
