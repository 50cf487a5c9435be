pub mod call_measurement;
pub mod sample_summary;
