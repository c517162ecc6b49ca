//! Structured log reporter
//!
//! Emits one JSON object per lifecycle event on stdout, line-delimited,
//! for machine consumption.

use serde_json::json;

use crate::models::BenchmarkResult;
use crate::{Result, SUMMARY_TOP_N};

use super::{Reporter, SuiteBoard};

/// Reporter printing line-delimited JSON events.
pub struct JsonReporter {
    board: SuiteBoard,
    thread_count: usize,
}

impl JsonReporter {
    /// Create a JSON reporter.
    pub fn new(thread_count: usize) -> Self {
        Self {
            board: SuiteBoard::new(),
            thread_count,
        }
    }
}

impl Reporter for JsonReporter {
    fn start(&mut self, name: &str, iterations: u64) -> Result<()> {
        self.board.register_start(name, iterations);
        let event = json!({
            "event": "start",
            "name": name,
            "iterations": iterations,
        });
        println!("{}", serde_json::to_string(&event)?);
        Ok(())
    }

    fn complete(&mut self, name: &str, result: BenchmarkResult) -> Result<()> {
        let event = json!({
            "event": "complete",
            "result": result,
        });
        println!("{}", serde_json::to_string(&event)?);
        self.board.record_complete(name, result);
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        let top: Vec<_> = self
            .board
            .ranking(SUMMARY_TOP_N)
            .iter()
            .enumerate()
            .map(|(rank, result)| {
                json!({
                    "rank": rank + 1,
                    "name": result.name,
                    "ops_per_sec": result.ops_per_sec,
                })
            })
            .collect();

        let event = json!({
            "event": "summary",
            "threads": self.thread_count,
            "completed": self.board.completed_count(),
            "total_cpu_seconds": self.board.total_cpu_seconds(),
            "elapsed_seconds": self.board.elapsed().as_secs_f64(),
            "top_performers": top,
        });
        println!("{}", serde_json::to_string(&event)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_reporter_tracks_board_state() {
        let mut reporter = JsonReporter::new(4);
        reporter.start("Sorting", 100).unwrap();

        let result = BenchmarkResult::from_durations("Sorting", 100, vec![0.1; 4]);
        reporter.complete("Sorting", result).unwrap();

        assert_eq!(reporter.board.completed_count(), 1);
        reporter.summary().unwrap();
    }

    #[test]
    fn test_completed_result_serializes() {
        let result = BenchmarkResult::from_durations("Sorting", 100, vec![0.1, 0.2]);
        let event = json!({ "event": "complete", "result": result });
        let line = serde_json::to_string(&event).unwrap();
        assert!(line.contains("\"event\":\"complete\""));
        assert!(line.contains("\"name\":\"Sorting\""));
    }
}
