//! CMRB - CPU Math Rust Bench
//!
//! A cross-platform terminal application for CPU-bound math benchmarking:
//! runs a fixed suite of numeric workloads across a configurable number of
//! worker threads and renders live and final results to the terminal.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod config;
pub mod kernels;
pub mod models;
pub mod report;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum CmrbError {
    /// I/O operation failed (terminal, config file)
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Benchmark definition or execution error
    BenchmarkError(String),
    /// Worker thread failure (spawn failure or panic)
    WorkerError(String),
    /// Reporter rendering or serialization error
    ReportError(String),
}

impl fmt::Display for CmrbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmrbError::IoError(err) => write!(f, "I/O error: {}", err),
            CmrbError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CmrbError::BenchmarkError(msg) => write!(f, "Benchmark error: {}", msg),
            CmrbError::WorkerError(msg) => write!(f, "Worker error: {}", msg),
            CmrbError::ReportError(msg) => write!(f, "Report error: {}", msg),
        }
    }
}

impl std::error::Error for CmrbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CmrbError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CmrbError {
    fn from(err: std::io::Error) -> Self {
        CmrbError::IoError(err)
    }
}

impl From<serde_json::Error> for CmrbError {
    fn from(err: serde_json::Error) -> Self {
        CmrbError::ReportError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for CmrbError {
    fn from(err: toml::de::Error) -> Self {
        CmrbError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CmrbError {
    fn from(err: toml::ser::Error) -> Self {
        CmrbError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for CMRB operations
pub type Result<T> = std::result::Result<T, CmrbError>;

// Common types and constants
pub const APP_NAME: &str = "cmrb";
pub const CONFIG_FILE: &str = "cmrb.toml";
pub const SUMMARY_TOP_N: usize = 5;
