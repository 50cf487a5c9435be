//! One complete run of the empty-call benchmark

use std::io::{self, Error, ErrorKind};

use crate::stats::sample_summary::SampleSummary;

/// Raw samples of a run together with their summary
#[derive(Debug, Clone)]
pub struct CallMeasurement {
    pub calls: u64,
    pub summary: SampleSummary,
    pub raw_samples: Vec<f64>,
}

impl CallMeasurement {
    pub fn from_samples(calls: u64, raw_samples: Vec<f64>) -> io::Result<Self> {
        let summary = SampleSummary::from_samples(&raw_samples).ok_or_else(|| {
            Error::new(ErrorKind::InvalidData, "Cannot summarize an empty sample list")
        })?;
        Ok(Self {
            calls,
            summary,
            raw_samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_rejected() {
        let err = CallMeasurement::from_samples(100, Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn keeps_samples_in_order() {
        let m = CallMeasurement::from_samples(3, vec![0.3, 0.1, 0.2]).unwrap();
        assert_eq!(m.raw_samples, vec![0.3, 0.1, 0.2]);
        assert_eq!(m.summary.best, 0.1);
        assert_eq!(m.calls, 3);
    }
}
