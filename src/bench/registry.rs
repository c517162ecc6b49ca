//! Workload registry
//!
//! Data-driven table of benchmark definitions. Adding a benchmark means
//! registering one entry (name, default iteration count, kernel factory)
//! instead of duplicating orchestration code.

use crate::kernels;
use crate::Result;

use super::runner::{BenchmarkSpec, Worker};

/// One registered workload: a display name, the default iteration count,
/// and the factory producing the worker closure for that count.
pub struct WorkloadEntry {
    /// Benchmark display name
    pub name: &'static str,
    /// Default iteration count; what one iteration means is documented
    /// per kernel
    pub iterations: u64,
    /// Kernel factory building the worker for a given iteration count
    pub factory: fn(u64) -> Worker,
}

impl WorkloadEntry {
    /// Build the benchmark spec for this entry's default iteration count.
    pub fn spec(&self) -> Result<BenchmarkSpec> {
        BenchmarkSpec::new(self.name, self.iterations, (self.factory)(self.iterations))
    }
}

/// Ordered table of workloads; the suite runs entries in insertion order.
pub struct WorkloadRegistry {
    entries: Vec<WorkloadEntry>,
}

impl WorkloadRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register one workload.
    pub fn register(&mut self, name: &'static str, iterations: u64, factory: fn(u64) -> Worker) {
        self.entries.push(WorkloadEntry {
            name,
            iterations,
            factory,
        });
    }

    /// The standard suite of twelve CPU-bound workloads.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("Basic Arithmetic", 10_000_000, kernels::math::arithmetic);
        registry.register("Trigonometry", 1_000_000, kernels::math::trigonometry);
        registry.register("Logarithms", 1_000_000, kernels::math::logarithm);
        registry.register("Exponentials", 1_000_000, kernels::math::exponential);
        registry.register("Square Roots", 1_000_000, kernels::math::square_root);
        registry.register("SHA-256 Hashing", 100_000, kernels::hash::sha256);
        registry.register("Sorting", 100, kernels::data::sorting);
        registry.register("Matrix Multiply", 100, kernels::data::matrix_multiply);
        registry.register("Prime Sieve", 100, kernels::data::prime_sieve);
        registry.register("Fibonacci", 1_600, kernels::math::fibonacci);
        registry.register("Monte Carlo Pi", 10, kernels::data::monte_carlo_pi);
        registry.register("Fourier Transform", 10, kernels::data::fourier_transform);
        registry
    }

    /// Registered entries in suite order.
    pub fn entries(&self) -> &[WorkloadEntry] {
        &self.entries
    }

    /// Number of registered workloads.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no workloads.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WorkloadRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_covers_the_suite() {
        let registry = WorkloadRegistry::standard();
        assert_eq!(registry.len(), 12);
        assert!(!registry.is_empty());

        for entry in registry.entries() {
            assert!(entry.iterations > 0, "{} has no iterations", entry.name);
            assert!(entry.spec().is_ok(), "{} spec rejected", entry.name);
        }
    }

    #[test]
    fn test_standard_registry_order_and_names() {
        let registry = WorkloadRegistry::standard();
        let names: Vec<&str> = registry.entries().iter().map(|e| e.name).collect();
        assert_eq!(names[0], "Basic Arithmetic");
        assert_eq!(names[5], "SHA-256 Hashing");
        assert_eq!(names[11], "Fourier Transform");
    }

    #[test]
    fn test_register_appends_in_order() {
        fn noop(_iterations: u64) -> Worker {
            std::sync::Arc::new(|_| 0.0)
        }

        let mut registry = WorkloadRegistry::new();
        registry.register("First", 1, noop);
        registry.register("Second", 2, noop);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].name, "First");
        assert_eq!(registry.entries()[1].name, "Second");
    }
}
