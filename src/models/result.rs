//! Benchmark result data models
//!
//! Contains the per-benchmark result record with per-thread timings and
//! the derived throughput aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete result of one benchmark run across all worker threads.
///
/// Created pending when a benchmark starts (`completed == false`, no
/// durations yet) and populated once every worker has joined. All durations
/// are wall-clock seconds as measured by the worker itself; `total_duration`
/// sums them, so it is a CPU-seconds figure, not a wall-clock span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Benchmark name as registered in the workload table
    pub name: String,
    /// Iteration count each worker performed independently
    pub iterations: u64,
    /// Per-thread elapsed seconds, indexed by worker id
    pub thread_durations: Vec<f64>,
    /// Sum of all per-thread durations (CPU seconds)
    pub total_duration: f64,
    /// total_duration / thread count
    pub avg_duration: f64,
    /// iterations / avg_duration; each worker runs the full iteration
    /// count, so system throughput is thread count times this figure
    pub ops_per_sec: f64,
    /// Whether all workers have finished
    pub completed: bool,
    /// Timestamp when the benchmark was started
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkResult {
    /// Create a pending result for a benchmark that has just started.
    pub fn pending(name: &str, iterations: u64) -> Self {
        Self {
            name: name.to_string(),
            iterations,
            thread_durations: Vec::new(),
            total_duration: 0.0,
            avg_duration: 0.0,
            ops_per_sec: 0.0,
            completed: false,
            timestamp: Utc::now(),
        }
    }

    /// Build a completed result from the joined per-thread durations.
    ///
    /// `ops_per_sec` is not guarded against a zero average duration; a
    /// near-instantaneous workload yields an infinite value which the
    /// formatting layer renders as "N/A".
    pub fn from_durations(name: &str, iterations: u64, thread_durations: Vec<f64>) -> Self {
        let total_duration: f64 = thread_durations.iter().sum();
        let avg_duration = total_duration / thread_durations.len() as f64;
        let ops_per_sec = iterations as f64 / avg_duration;

        Self {
            name: name.to_string(),
            iterations,
            thread_durations,
            total_duration,
            avg_duration,
            ops_per_sec,
            completed: true,
            timestamp: Utc::now(),
        }
    }

    /// Number of worker threads that contributed to this result.
    pub fn thread_count(&self) -> usize {
        self.thread_durations.len()
    }

    /// Fastest per-thread duration, if any thread has finished.
    pub fn min_duration(&self) -> Option<f64> {
        self.thread_durations.iter().copied().reduce(f64::min)
    }

    /// Slowest per-thread duration, if any thread has finished.
    pub fn max_duration(&self) -> Option<f64> {
        self.thread_durations.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_result() {
        let result = BenchmarkResult::pending("Sorting", 100);
        assert_eq!(result.name, "Sorting");
        assert_eq!(result.iterations, 100);
        assert!(!result.completed);
        assert!(result.thread_durations.is_empty());
        assert_eq!(result.thread_count(), 0);
        assert_eq!(result.min_duration(), None);
        assert!(result.timestamp <= Utc::now());
    }

    #[test]
    fn test_constant_duration_aggregation() {
        let result = BenchmarkResult::from_durations("Trigonometry", 1_000, vec![0.5; 4]);
        assert!(result.completed);
        assert_eq!(result.thread_count(), 4);
        assert!((result.total_duration - 2.0).abs() < 1e-12);
        assert!((result.avg_duration - 0.5).abs() < 1e-12);
        assert!((result.ops_per_sec - 2_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_thread_avg_equals_total() {
        let result = BenchmarkResult::from_durations("Logarithms", 10, vec![0.25]);
        assert_eq!(result.avg_duration, result.total_duration);
    }

    #[test]
    fn test_min_max_duration() {
        let result = BenchmarkResult::from_durations("Sorting", 100, vec![0.3, 0.1, 0.2]);
        assert_eq!(result.min_duration(), Some(0.1));
        assert_eq!(result.max_duration(), Some(0.3));
    }

    #[test]
    fn test_single_iteration_has_finite_throughput() {
        let result = BenchmarkResult::from_durations("Fourier Transform", 1, vec![0.02]);
        assert!(result.ops_per_sec.is_finite());
        assert!(result.ops_per_sec > 0.0);
    }

    #[test]
    fn test_zero_duration_yields_infinite_throughput() {
        let result = BenchmarkResult::from_durations("Fibonacci", 40, vec![0.0, 0.0]);
        assert_eq!(result.total_duration, 0.0);
        assert!(result.ops_per_sec.is_infinite());
    }

    #[test]
    fn test_serde_round_trip() {
        let result = BenchmarkResult::from_durations("Prime Sieve", 100, vec![0.4, 0.6]);
        let json = serde_json::to_string(&result).expect("Failed to serialize to JSON");
        let deserialized: BenchmarkResult =
            serde_json::from_str(&json).expect("Failed to deserialize from JSON");

        assert_eq!(result.name, deserialized.name);
        assert_eq!(result.iterations, deserialized.iterations);
        assert_eq!(result.thread_durations, deserialized.thread_durations);
        assert_eq!(result.completed, deserialized.completed);
        assert_eq!(result.timestamp, deserialized.timestamp);
    }
}
