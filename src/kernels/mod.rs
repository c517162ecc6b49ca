//! Workload kernels module
//!
//! The pluggable units of work the engine measures. Each factory takes an
//! iteration count and returns a self-contained worker closure: the worker
//! owns its random generator (seeded from entropy per thread) and its
//! accumulators, and shares no mutable state with other threads. Results
//! feed through `std::hint::black_box` so the timed loops survive
//! optimization.
//!
//! What one iteration means varies per kernel (a single arithmetic step for
//! the tight math loops, one full sort/sieve/transform for the composite
//! kernels); each kernel documents its own unit.

pub mod data;
pub mod hash;
pub mod math;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::Worker;

    fn all_factories() -> Vec<(&'static str, fn(u64) -> Worker)> {
        vec![
            ("arithmetic", math::arithmetic as fn(u64) -> Worker),
            ("trigonometry", math::trigonometry),
            ("logarithm", math::logarithm),
            ("exponential", math::exponential),
            ("square_root", math::square_root),
            ("fibonacci", math::fibonacci),
            ("sha256", hash::sha256),
            ("sorting", data::sorting),
            ("matrix_multiply", data::matrix_multiply),
            ("prime_sieve", data::prime_sieve),
            ("monte_carlo_pi", data::monte_carlo_pi),
            ("fourier_transform", data::fourier_transform),
        ]
    }

    #[test]
    fn test_every_kernel_returns_a_valid_duration() {
        for (name, factory) in all_factories() {
            let worker = factory(1);
            let duration = worker(0);
            assert!(duration.is_finite(), "{} produced a non-finite time", name);
            assert!(duration >= 0.0, "{} produced a negative time", name);
        }
    }

    #[test]
    fn test_workers_are_index_agnostic() {
        let worker = math::logarithm(10);
        let first = worker(0);
        let last = worker(7);
        assert!(first >= 0.0 && last >= 0.0);
    }
}
