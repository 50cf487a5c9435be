//! Utility functions and helpers for the empty-call benchmark

use std::io::{self, Error, ErrorKind};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Convert an elapsed duration to fractional milliseconds
pub fn duration_to_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Progress bar over the outer iterations, drawn on stderr
pub fn iteration_progress_bar(iterations: usize) -> io::Result<ProgressBar> {
    let pb = ProgressBar::new(iterations as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} iterations {wide_msg}")
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?
        .progress_chars("##-");
    pb.set_style(style);
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_durations_to_ms() {
        assert_eq!(duration_to_ms(Duration::from_millis(250)), 250.0);
        assert_eq!(duration_to_ms(Duration::from_micros(1500)), 1.5);
        assert_eq!(duration_to_ms(Duration::ZERO), 0.0);
    }

    #[test]
    fn progress_bar_spans_all_iterations() {
        let pb = iteration_progress_bar(10).unwrap();
        assert_eq!(pb.length(), Some(10));
        assert_eq!(pb.position(), 0);
    }
}
