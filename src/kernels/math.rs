//! Scalar math kernels
//!
//! Tight loops over individual floating-point operations. One iteration is
//! one pass through the loop body unless noted otherwise.

use std::hint::black_box;
use std::sync::Arc;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::bench::{time_function, Worker};

/// Mixed add/multiply loop over two drifting operands. One iteration is one
/// update of both operands plus the running sum and product.
pub fn arithmetic(iterations: u64) -> Worker {
    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();
        let mut a: f64 = rng.gen_range(0.0..10_000.0);
        let mut b: f64 = rng.gen_range(0.0..10_000.0);
        let mut sum = 0.0f64;
        let mut product = 1.0f64;
        // Scaling the product keeps it from overflowing over long runs.
        let scale = iterations as f64 * 1e-7;

        let elapsed = time_function(
            || {
                a = a * 1.0001 + 0.5;
                b = b * 0.9999 + 0.3;
                sum += a + b;
                product *= (a * b) / scale;
            },
            iterations,
        );

        black_box((sum, product));
        elapsed
    })
}

/// Sine, cosine and tangent of a slowly advancing angle. One iteration
/// evaluates all three functions once.
pub fn trigonometry(iterations: u64) -> Worker {
    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();
        let mut angle: f64 = rng.gen_range(0.0..360.0);
        let mut sin_acc = 0.0f64;
        let mut cos_acc = 0.0f64;
        let mut tan_acc = 0.0f64;

        let elapsed = time_function(
            || {
                let rad = angle.to_radians();
                sin_acc += rad.sin();
                cos_acc += rad.cos();
                tan_acc += rad.tan();
                angle += 0.001;
            },
            iterations,
        );

        black_box((sin_acc, cos_acc, tan_acc));
        elapsed
    })
}

/// Natural logarithm of fresh random values. One iteration is one `ln`.
pub fn logarithm(iterations: u64) -> Worker {
    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();
        let mut sum = 0.0f64;

        let elapsed = time_function(
            || {
                let value: f64 = rng.gen_range(1.0..10_001.0);
                sum += value.ln();
            },
            iterations,
        );

        black_box(sum);
        elapsed
    })
}

/// `exp` of fresh random values in [0, 100). One iteration is one `exp`.
pub fn exponential(iterations: u64) -> Worker {
    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();
        let mut sum = 0.0f64;

        let elapsed = time_function(
            || {
                let value: f64 = rng.gen_range(0.0..100.0);
                sum += value.exp();
            },
            iterations,
        );

        black_box(sum);
        elapsed
    })
}

/// Square roots of fresh random values. One iteration is one `sqrt`.
pub fn square_root(iterations: u64) -> Worker {
    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();
        let mut sum = 0.0f64;

        let elapsed = time_function(
            || {
                let value: f64 = rng.gen_range(1.0..10_001.0);
                sum += value.sqrt();
            },
            iterations,
        );

        black_box(sum);
        elapsed
    })
}

/// Naive recursive Fibonacci. One iteration is one full `fib(20)`
/// evaluation, so the figure is recursion throughput, not additions.
pub fn fibonacci(iterations: u64) -> Worker {
    const DEPTH: u32 = 20;

    Arc::new(move |_index| {
        time_function(
            || {
                black_box(fib(black_box(DEPTH)));
            },
            iterations,
        )
    })
}

fn fib(n: u32) -> u64 {
    if n <= 1 {
        n as u64
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fib_base_cases() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(1), 1);
        assert_eq!(fib(10), 55);
        assert_eq!(fib(20), 6_765);
    }

    #[test]
    fn test_arithmetic_kernel_runs() {
        let worker = arithmetic(100);
        assert!(worker(0) >= 0.0);
    }

    #[test]
    fn test_trigonometry_kernel_runs() {
        let worker = trigonometry(100);
        assert!(worker(3) >= 0.0);
    }
}
