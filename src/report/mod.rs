//! Reporting module
//!
//! The reporter contract the engine drives, the shared suite board holding
//! per-entry display state, and the available renderers (plain console,
//! terminal dashboard, JSON event log, in-memory collector).

use std::time::{Duration, Instant};

use crate::models::BenchmarkResult;
use crate::Result;

pub mod console;
pub mod json;
pub mod terminal;
pub mod tui;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use tui::TuiReporter;

/// Presentation contract the runner drives. Reporters are pure consumers:
/// they never drive computation, and they are only ever called from the
/// single orchestrating thread.
pub trait Reporter {
    /// A benchmark is about to run across all worker threads.
    fn start(&mut self, name: &str, iterations: u64) -> Result<()>;

    /// All workers of the named benchmark finished; `result` is completed.
    fn complete(&mut self, name: &str, result: BenchmarkResult) -> Result<()>;

    /// The whole suite finished; render totals and the ranking.
    fn summary(&mut self) -> Result<()>;
}

/// Display state of one suite entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Registered but never started
    Pending,
    /// start() seen, complete() not yet
    Running,
    /// complete() seen; never regresses
    Done,
}

/// One entry on the board: its display state plus the latest result data.
#[derive(Debug, Clone)]
pub struct BoardEntry {
    pub state: EntryState,
    pub result: BenchmarkResult,
}

/// Shared bookkeeping for renderers: entries in insertion order, the
/// currently running benchmark, and the suite start time.
#[derive(Debug)]
pub struct SuiteBoard {
    entries: Vec<BoardEntry>,
    current: Option<String>,
    started_at: Instant,
}

impl SuiteBoard {
    /// Create an empty board; the suite clock starts now.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            started_at: Instant::now(),
        }
    }

    /// Pre-register a planned benchmark in Pending state so renderers can
    /// show the full suite before anything runs. No-op if already known.
    pub fn seed(&mut self, name: &str, iterations: u64) {
        if self.find(name).is_none() {
            self.entries.push(BoardEntry {
                state: EntryState::Pending,
                result: BenchmarkResult::pending(name, iterations),
            });
        }
    }

    /// Record a start event. Registers the entry if unknown; an entry that
    /// already exists keeps its prior data until complete() overwrites it,
    /// and a Done entry never regresses.
    pub fn register_start(&mut self, name: &str, iterations: u64) {
        match self.find_mut(name) {
            Some(entry) => {
                if entry.state != EntryState::Done {
                    entry.state = EntryState::Running;
                    self.current = Some(name.to_string());
                }
            }
            None => {
                self.entries.push(BoardEntry {
                    state: EntryState::Running,
                    result: BenchmarkResult::pending(name, iterations),
                });
                self.current = Some(name.to_string());
            }
        }
    }

    /// Record a completion. Replaces the matching entry's data, marks it
    /// Done, and clears the running marker; an unknown name is registered
    /// on first write.
    pub fn record_complete(&mut self, name: &str, result: BenchmarkResult) {
        match self.find_mut(name) {
            Some(entry) => {
                entry.result = result;
                entry.state = EntryState::Done;
            }
            None => {
                self.entries.push(BoardEntry {
                    state: EntryState::Done,
                    result,
                });
            }
        }
        self.current = None;
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    /// Name of the currently running benchmark, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Number of entries on the board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of Done entries.
    pub fn completed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.state == EntryState::Done)
            .count()
    }

    /// Sum of total durations over all Done entries (CPU seconds).
    pub fn total_cpu_seconds(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.state == EntryState::Done)
            .map(|e| e.result.total_duration)
            .sum()
    }

    /// Wall-clock time since the board was created.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Top `n` completed entries by ops/sec, descending; ties keep their
    /// insertion order (the sort is stable).
    pub fn ranking(&self, n: usize) -> Vec<&BenchmarkResult> {
        let mut done: Vec<&BenchmarkResult> = self
            .entries
            .iter()
            .filter(|e| e.state == EntryState::Done)
            .map(|e| &e.result)
            .collect();
        done.sort_by(|a, b| {
            b.ops_per_sec
                .partial_cmp(&a.ops_per_sec)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        done.truncate(n);
        done
    }

    fn find(&self, name: &str) -> Option<&BoardEntry> {
        self.entries.iter().find(|e| e.result.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut BoardEntry> {
        self.entries.iter_mut().find(|e| e.result.name == name)
    }
}

impl Default for SuiteBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Event recorded by the in-memory reporter.
#[derive(Debug, Clone)]
pub enum ReportEvent {
    Started { name: String, iterations: u64 },
    Completed { name: String, result: BenchmarkResult },
    Summarized,
}

/// Reporter that collects events and board state in memory; used by tests
/// and by library consumers that want results without terminal output.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    board: SuiteBoard,
    events: Vec<ReportEvent>,
}

impl MemoryReporter {
    /// Create an empty in-memory reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in call order.
    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// The underlying board state.
    pub fn board(&self) -> &SuiteBoard {
        &self.board
    }
}

impl Reporter for MemoryReporter {
    fn start(&mut self, name: &str, iterations: u64) -> Result<()> {
        self.board.register_start(name, iterations);
        self.events.push(ReportEvent::Started {
            name: name.to_string(),
            iterations,
        });
        Ok(())
    }

    fn complete(&mut self, name: &str, result: BenchmarkResult) -> Result<()> {
        self.board.record_complete(name, result.clone());
        self.events.push(ReportEvent::Completed {
            name: name.to_string(),
            result,
        });
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        self.events.push(ReportEvent::Summarized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done_result(name: &str, ops: f64) -> BenchmarkResult {
        let mut result = BenchmarkResult::from_durations(name, 100, vec![0.1]);
        result.ops_per_sec = ops;
        result
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut board = SuiteBoard::new();
        board.register_start("Sorting", 100);
        board.register_start("Sorting", 100);
        board.record_complete("Sorting", done_result("Sorting", 10.0));

        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].state, EntryState::Done);
        assert!(board.entries()[0].result.completed);
    }

    #[test]
    fn test_complete_without_start_registers() {
        let mut board = SuiteBoard::new();
        board.record_complete("Fibonacci", done_result("Fibonacci", 5.0));

        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].state, EntryState::Done);
        assert_eq!(board.current(), None);
    }

    #[test]
    fn test_state_path_pending_running_done() {
        let mut board = SuiteBoard::new();
        board.seed("Sorting", 100);
        assert_eq!(board.entries()[0].state, EntryState::Pending);

        board.register_start("Sorting", 100);
        assert_eq!(board.entries()[0].state, EntryState::Running);
        assert_eq!(board.current(), Some("Sorting"));

        board.record_complete("Sorting", done_result("Sorting", 10.0));
        assert_eq!(board.entries()[0].state, EntryState::Done);
        assert_eq!(board.current(), None);

        // A Done entry never regresses to Running.
        board.register_start("Sorting", 100);
        assert_eq!(board.entries()[0].state, EntryState::Done);
    }

    #[test]
    fn test_seed_keeps_existing_entries() {
        let mut board = SuiteBoard::new();
        board.record_complete("Sorting", done_result("Sorting", 10.0));
        board.seed("Sorting", 100);

        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].state, EntryState::Done);
    }

    #[test]
    fn test_ranking_descends_by_ops() {
        let mut board = SuiteBoard::new();
        board.record_complete("Slow", done_result("Slow", 2.5));
        board.record_complete("Fast", done_result("Fast", 5.0));
        board.record_complete("Medium", done_result("Medium", 3.0));

        let top = board.ranking(5);
        assert_eq!(top[0].name, "Fast");
        assert_eq!(top[1].name, "Medium");
        assert_eq!(top[2].name, "Slow");
    }

    #[test]
    fn test_ranking_ties_keep_insertion_order() {
        let mut board = SuiteBoard::new();
        board.record_complete("First", done_result("First", 4.0));
        board.record_complete("Second", done_result("Second", 4.0));

        let top = board.ranking(2);
        assert_eq!(top[0].name, "First");
        assert_eq!(top[1].name, "Second");
    }

    #[test]
    fn test_ranking_truncates_and_skips_pending() {
        let mut board = SuiteBoard::new();
        board.seed("Never Run", 1);
        for (name, ops) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
            board.record_complete(name, done_result(name, ops));
        }

        let top = board.ranking(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "C");
    }

    #[test]
    fn test_totals() {
        let mut board = SuiteBoard::new();
        board.record_complete("A", BenchmarkResult::from_durations("A", 10, vec![0.25, 0.25]));
        board.record_complete("B", BenchmarkResult::from_durations("B", 10, vec![0.5]));

        assert_eq!(board.completed_count(), 2);
        assert!((board.total_cpu_seconds() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_memory_reporter_records_in_order() {
        let mut reporter = MemoryReporter::new();
        reporter.start("Sorting", 100).unwrap();
        reporter
            .complete("Sorting", done_result("Sorting", 10.0))
            .unwrap();
        reporter.summary().unwrap();

        assert_eq!(reporter.events().len(), 3);
        assert!(matches!(reporter.events()[0], ReportEvent::Started { .. }));
        assert!(matches!(reporter.events()[2], ReportEvent::Summarized));
        assert_eq!(reporter.board().completed_count(), 1);
    }
}
