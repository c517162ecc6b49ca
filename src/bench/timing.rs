//! Timed-loop measurement primitive
//!
//! Measures wall-clock time for a fixed number of invocations of an action
//! on the calling thread. Parallelism comes from running one of these loops
//! per worker thread, never from inside the loop itself.

use std::time::Instant;

/// Invoke `action` exactly `iterations` times in a tight sequential loop
/// and return the elapsed wall-clock seconds with sub-millisecond
/// resolution.
///
/// # Examples
/// ```
/// use cmrb::bench::timing::time_function;
///
/// let mut count = 0u64;
/// let elapsed = time_function(|| count += 1, 1_000);
/// assert_eq!(count, 1_000);
/// assert!(elapsed >= 0.0);
/// ```
pub fn time_function<F: FnMut()>(mut action: F, iterations: u64) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        action();
    }
    start.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_invokes_exact_iteration_count() {
        let mut count = 0u64;
        let elapsed = time_function(|| count += 1, 10_000);
        assert_eq!(count, 10_000);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_zero_iterations_runs_nothing() {
        let mut count = 0u64;
        let elapsed = time_function(|| count += 1, 0);
        assert_eq!(count, 0);
        assert!(elapsed < 1.0);
    }

    #[test]
    fn test_measures_sleeping_action() {
        let elapsed = time_function(|| std::thread::sleep(Duration::from_millis(5)), 4);
        assert!(elapsed >= 0.02);
    }
}
