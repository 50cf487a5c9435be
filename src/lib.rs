//! Empty Call Benchmark Library
//!
//! This library measures the overhead of calling a function that does nothing.

pub mod core;
pub mod stats;
pub mod ui;
pub mod utils;

pub use core::run_benchmark;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
