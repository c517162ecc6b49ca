//! Composite data kernels
//!
//! Workloads whose unit of work is an entire algorithm pass over a freshly
//! generated problem instance. One iteration is one full pass (one sort,
//! one sieve, one transform), so ops/sec here is repetition throughput.

use std::f64::consts::PI;
use std::hint::black_box;
use std::sync::Arc;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::bench::{time_function, Worker};

/// Sort a fresh random vector of 100 000 integers per iteration.
pub fn sorting(iterations: u64) -> Worker {
    const DATA_SIZE: usize = 100_000;

    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();

        time_function(
            || {
                let mut data: Vec<i32> =
                    (0..DATA_SIZE).map(|_| rng.gen_range(0..1_000_000)).collect();
                data.sort_unstable();
                black_box(data.last().copied());
            },
            iterations,
        )
    })
}

/// Multiply two fresh random 100x100 matrices per iteration with the
/// classic triple loop.
pub fn matrix_multiply(iterations: u64) -> Worker {
    const SIZE: usize = 100;

    fn random_matrix(rng: &mut SmallRng) -> Vec<Vec<f64>> {
        (0..SIZE)
            .map(|_| (0..SIZE).map(|_| rng.gen_range(0.0..1.0)).collect())
            .collect()
    }

    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();

        time_function(
            || {
                let a = random_matrix(&mut rng);
                let b = random_matrix(&mut rng);
                let mut c = vec![vec![0.0f64; SIZE]; SIZE];

                for i in 0..SIZE {
                    for j in 0..SIZE {
                        for k in 0..SIZE {
                            c[i][j] += a[i][k] * b[k][j];
                        }
                    }
                }
                black_box(&c);
            },
            iterations,
        )
    })
}

/// Sieve of Eratosthenes up to 1 000 000 per iteration.
pub fn prime_sieve(iterations: u64) -> Worker {
    const LIMIT: usize = 1_000_000;

    Arc::new(move |_index| {
        time_function(
            || {
                let mut is_prime = vec![true; LIMIT + 1];
                is_prime[0] = false;
                is_prime[1] = false;

                let mut p = 2;
                while p * p <= LIMIT {
                    if is_prime[p] {
                        let mut multiple = p * p;
                        while multiple <= LIMIT {
                            is_prime[multiple] = false;
                            multiple += p;
                        }
                    }
                    p += 1;
                }
                black_box(&is_prime);
            },
            iterations,
        )
    })
}

/// Estimate pi from 10 000 000 random points per iteration.
pub fn monte_carlo_pi(iterations: u64) -> Worker {
    const POINTS: u64 = 10_000_000;

    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();

        time_function(
            || {
                let mut inside = 0u64;
                for _ in 0..POINTS {
                    let x: f64 = rng.gen_range(0.0..1.0);
                    let y: f64 = rng.gen_range(0.0..1.0);
                    if x * x + y * y <= 1.0 {
                        inside += 1;
                    }
                }
                black_box(4.0 * inside as f64 / POINTS as f64);
            },
            iterations,
        )
    })
}

/// Direct discrete Fourier transform of 1024 fresh random complex points
/// per iteration (the O(n^2) formulation, deliberately not an FFT).
pub fn fourier_transform(iterations: u64) -> Worker {
    const DATA_SIZE: usize = 1 << 10;

    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();

        time_function(
            || {
                let data: Vec<(f64, f64)> = (0..DATA_SIZE)
                    .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
                    .collect();

                let mut spectrum = Vec::with_capacity(DATA_SIZE);
                for k in 0..DATA_SIZE {
                    let mut re = 0.0f64;
                    let mut im = 0.0f64;
                    for (n, &(xr, xi)) in data.iter().enumerate() {
                        let angle = -2.0 * PI * (k * n) as f64 / DATA_SIZE as f64;
                        let (sin, cos) = angle.sin_cos();
                        re += xr * cos - xi * sin;
                        im += xr * sin + xi * cos;
                    }
                    spectrum.push((re, im));
                }
                black_box(&spectrum);
            },
            iterations,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorting_kernel_runs() {
        let worker = sorting(2);
        assert!(worker(0) >= 0.0);
    }

    #[test]
    fn test_matrix_multiply_kernel_runs() {
        let worker = matrix_multiply(1);
        assert!(worker(0) > 0.0);
    }

    #[test]
    fn test_prime_sieve_kernel_runs() {
        let worker = prime_sieve(1);
        assert!(worker(0) > 0.0);
    }

    #[test]
    fn test_fourier_transform_kernel_runs() {
        let worker = fourier_transform(1);
        assert!(worker(0) > 0.0);
    }
}
