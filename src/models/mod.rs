//! Data models module
//!
//! Contains the benchmark result record and its aggregation arithmetic.

pub mod result;

// Re-export commonly used types
pub use result::BenchmarkResult;
