//! Benchmark execution engine
//!
//! Runs one unit of work identically across N fresh worker threads, joins
//! them all, aggregates per-thread timings into a result record, and hands
//! the record to the configured reporter.

use std::sync::Arc;
use std::thread;

use crate::config::EngineConfig;
use crate::models::BenchmarkResult;
use crate::report::Reporter;
use crate::{CmrbError, Result};

use super::registry::WorkloadRegistry;

/// A unit of work: takes a zero-based thread index, performs its
/// self-contained computation the configured number of times, and returns
/// its own elapsed seconds.
pub type Worker = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// One benchmark definition: a title, an iteration count, and the worker
/// closure every thread runs. Immutable once constructed.
pub struct BenchmarkSpec {
    /// Display name, also the reporter registration key
    pub title: String,
    /// Iterations each worker performs independently
    pub iterations: u64,
    /// The unit of work; opaque to the runner
    pub worker: Worker,
}

impl BenchmarkSpec {
    /// Create a benchmark spec. An iteration count of zero is rejected: it
    /// would make the ops/sec denominator meaningless.
    pub fn new(title: &str, iterations: u64, worker: Worker) -> Result<Self> {
        if iterations == 0 {
            return Err(CmrbError::BenchmarkError(format!(
                "Benchmark '{}' has an iteration count of 0",
                title
            )));
        }

        Ok(Self {
            title: title.to_string(),
            iterations,
            worker,
        })
    }
}

/// Benchmark runner: fans one spec out to `thread_count` fresh OS threads
/// and fans back in before returning. Never touches display primitives
/// directly; all presentation goes through the reporter contract.
pub struct Runner<R> {
    config: EngineConfig,
    reporter: R,
}

impl<R: Reporter> Runner<R> {
    /// Create a runner with an immutable engine configuration.
    pub fn new(config: EngineConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    /// Execute one benchmark across all configured worker threads.
    ///
    /// Spawns exactly `thread_count` threads, each invoking the worker once
    /// with its own index, and does not return until every thread has been
    /// joined. Total duration is the arithmetic sum of per-thread times (a
    /// CPU-seconds figure); a panicking worker surfaces as a `WorkerError`
    /// after the join barrier and aborts the remaining suite.
    pub fn execute(&mut self, spec: &BenchmarkSpec) -> Result<BenchmarkResult> {
        self.reporter.start(&spec.title, spec.iterations)?;

        let thread_count = self.config.thread_count;
        let mut handles = Vec::with_capacity(thread_count);
        for index in 0..thread_count {
            let worker = Arc::clone(&spec.worker);
            let handle = thread::Builder::new()
                .name(format!("bench-worker-{}", index))
                .spawn(move || worker(index))?;
            handles.push(handle);
        }

        // Join every handle before propagating any failure, so no worker is
        // left running past this barrier.
        let mut joined = Vec::with_capacity(thread_count);
        for handle in handles {
            joined.push(handle.join());
        }

        let mut thread_durations = Vec::with_capacity(thread_count);
        for (index, outcome) in joined.into_iter().enumerate() {
            match outcome {
                Ok(duration) => thread_durations.push(duration),
                Err(_) => {
                    return Err(CmrbError::WorkerError(format!(
                        "Worker {} panicked during benchmark '{}'",
                        index, spec.title
                    )));
                }
            }
        }

        let result = BenchmarkResult::from_durations(&spec.title, spec.iterations, thread_durations);
        self.reporter.complete(&spec.title, result.clone())?;

        Ok(result)
    }

    /// Run every registered workload strictly sequentially, then render the
    /// closing summary. A failing benchmark aborts the rest of the suite.
    pub fn run_all(&mut self, registry: &WorkloadRegistry) -> Result<Vec<BenchmarkResult>> {
        let mut results = Vec::with_capacity(registry.len());
        for entry in registry.entries() {
            let spec = entry.spec()?;
            results.push(self.execute(&spec)?);
        }
        self.reporter.summary()?;
        Ok(results)
    }

    /// Borrow the reporter, e.g. to inspect collected results.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the runner and recover the reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
