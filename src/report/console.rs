//! Plain console reporter
//!
//! Line-oriented output: one block of per-thread timings per completed
//! benchmark, printed above an overall suite progress bar, and a closing
//! summary with the top performers.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::models::BenchmarkResult;
use crate::util::units::{format_ops_per_sec, format_seconds};
use crate::{Result, SUMMARY_TOP_N};

use super::{Reporter, SuiteBoard};

/// Reporter rendering plain text suitable for pipes and dumb terminals.
pub struct ConsoleReporter {
    board: SuiteBoard,
    thread_count: usize,
    progress: ProgressBar,
}

impl ConsoleReporter {
    /// Create a console reporter for a suite of `planned` benchmarks.
    pub fn new(thread_count: usize, planned: usize) -> Self {
        let progress = ProgressBar::new(planned as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner} [{pos}/{len}] {msg}").unwrap(),
        );

        Self {
            board: SuiteBoard::new(),
            thread_count,
            progress,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn start(&mut self, name: &str, iterations: u64) -> Result<()> {
        self.board.register_start(name, iterations);
        self.progress.set_message(name.to_string());
        self.progress
            .println(format!("Running {} benchmark ({} iterations)...", name, iterations));
        Ok(())
    }

    fn complete(&mut self, name: &str, result: BenchmarkResult) -> Result<()> {
        for (index, duration) in result.thread_durations.iter().enumerate() {
            self.progress
                .println(format!("  thread {}: {}", index, format_seconds(*duration)));
        }
        self.progress.println(format!(
            "  combined time across all threads: {}",
            format_seconds(result.total_duration)
        ));
        self.progress.println(format!(
            "  {} (avg per thread)",
            format_ops_per_sec(result.ops_per_sec)
        ));

        self.board.record_complete(name, result);
        self.progress.inc(1);
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        self.progress.finish_and_clear();

        let wall_clock = Duration::from_secs(self.board.elapsed().as_secs());

        println!();
        println!("Benchmark summary");
        println!("-----------------");
        println!("Benchmarks completed: {}", self.board.completed_count());
        println!("Threads used: {}", self.thread_count);
        println!(
            "Combined CPU time: {}",
            format_seconds(self.board.total_cpu_seconds())
        );
        println!("Wall-clock elapsed: {}", humantime::format_duration(wall_clock));
        println!();
        println!("Top performers:");
        for (rank, result) in self.board.ranking(SUMMARY_TOP_N).iter().enumerate() {
            println!(
                "  {}. {:<24} {}",
                rank + 1,
                result.name,
                format_ops_per_sec(result.ops_per_sec)
            );
        }
        Ok(())
    }
}
