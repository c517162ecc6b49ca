//! Terminal dashboard reporter
//!
//! Full-screen suite view redrawn on every lifecycle event: a benchmark
//! table with per-entry state, a footer with suite progress, and a closing
//! summary screen shown until a key is pressed.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::bench::WorkloadRegistry;
use crate::models::BenchmarkResult;
use crate::util::units::{format_ops_per_sec, format_seconds};
use crate::{Result, SUMMARY_TOP_N};

use super::terminal::Tui;
use super::{EntryState, Reporter, SuiteBoard};

/// Reporter rendering a full-screen dashboard with ratatui.
pub struct TuiReporter {
    tui: Tui,
    board: SuiteBoard,
    thread_count: usize,
}

impl TuiReporter {
    /// Create the dashboard reporter and take over the terminal. Planned
    /// benchmarks are pre-seeded so the table shows Pending rows up front.
    pub fn new(thread_count: usize, planned: &WorkloadRegistry) -> Result<Self> {
        let mut board = SuiteBoard::new();
        for entry in planned.entries() {
            board.seed(entry.name, entry.iterations);
        }

        let mut tui = Tui::new()?;
        tui.init()?;

        Ok(Self {
            tui,
            board,
            thread_count,
        })
    }

    fn redraw(&mut self) -> Result<()> {
        let board = &self.board;
        let thread_count = self.thread_count;
        self.tui
            .draw(|f| render_dashboard(f, board, thread_count))?;
        Ok(())
    }
}

impl Reporter for TuiReporter {
    fn start(&mut self, name: &str, iterations: u64) -> Result<()> {
        self.board.register_start(name, iterations);
        self.redraw()
    }

    fn complete(&mut self, name: &str, result: BenchmarkResult) -> Result<()> {
        self.board.record_complete(name, result);
        self.redraw()
    }

    fn summary(&mut self) -> Result<()> {
        let board = &self.board;
        let thread_count = self.thread_count;
        self.tui.draw(|f| render_summary(f, board, thread_count))?;
        self.tui.wait_for_key()?;
        self.tui.restore()?;
        Ok(())
    }
}

fn render_dashboard(f: &mut Frame, board: &SuiteBoard, thread_count: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Benchmark table
            Constraint::Length(3), // Footer gauge
        ])
        .split(f.size());

    render_title(f, chunks[0]);
    render_table(f, chunks[1], board, thread_count);
    render_footer(f, chunks[2], board, thread_count);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("CPU MATH BENCHMARK SUITE")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(title, area);
}

fn render_table(f: &mut Frame, area: Rect, board: &SuiteBoard, thread_count: usize) {
    // Single-thread runs show the one duration; multi-thread runs show the
    // min/max spread across workers.
    let time_header = if thread_count == 1 { "Time" } else { "Min/Max" };

    let header = Row::new(vec!["Benchmark", "Status", time_header, "Ops/sec"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = board
        .entries()
        .iter()
        .map(|entry| {
            let name = entry.result.name.clone();
            match entry.state {
                EntryState::Done => {
                    let time = if thread_count == 1 {
                        format_seconds(entry.result.avg_duration)
                    } else {
                        format!(
                            "{} / {}",
                            format_seconds(entry.result.min_duration().unwrap_or(0.0)),
                            format_seconds(entry.result.max_duration().unwrap_or(0.0))
                        )
                    };
                    Row::new(vec![
                        Cell::from(name),
                        Cell::from(Span::styled("✓ Done", Style::default().fg(Color::Green))),
                        Cell::from(time),
                        Cell::from(format_ops_per_sec(entry.result.ops_per_sec)),
                    ])
                }
                EntryState::Running => Row::new(vec![
                    Cell::from(name),
                    Cell::from(Span::styled(
                        "⟳ Running",
                        Style::default().fg(Color::Yellow),
                    )),
                    Cell::from("---"),
                    Cell::from("---"),
                ]),
                EntryState::Pending => Row::new(vec![
                    Cell::from(Span::styled(name, Style::default().fg(Color::DarkGray))),
                    Cell::from(Span::styled("Pending", Style::default().fg(Color::DarkGray))),
                    Cell::from("---"),
                    Cell::from("---"),
                ]),
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("Benchmarks")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .column_spacing(2);

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, board: &SuiteBoard, thread_count: usize) {
    let completed = board.completed_count();
    let total = board.len();
    let ratio = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    };

    let label = format!(
        "Threads: {} │ Completed: {}/{} │ Elapsed: {}s",
        thread_count,
        completed,
        total,
        board.elapsed().as_secs()
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent((ratio * 100.0) as u16)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_summary(f: &mut Frame, board: &SuiteBoard, thread_count: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(6), // Totals
            Constraint::Min(7),    // Ranking
            Constraint::Length(1), // Key hint
        ])
        .split(f.size());

    let title = Paragraph::new("BENCHMARK SUMMARY - ALL COMPLETE")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    f.render_widget(title, chunks[0]);

    let totals = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Total execution time: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format_seconds(board.total_cpu_seconds())),
            Span::styled(" (CPU seconds across all threads)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Threads used: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(thread_count.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Benchmarks completed: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(board.completed_count().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Wall-clock elapsed: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{}s", board.elapsed().as_secs())),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Totals"));
    f.render_widget(totals, chunks[1]);

    let rows: Vec<Row> = board
        .ranking(SUMMARY_TOP_N)
        .iter()
        .enumerate()
        .map(|(rank, result)| {
            Row::new(vec![
                Cell::from(format!("{}.", rank + 1)),
                Cell::from(result.name.clone()),
                Cell::from(Span::styled(
                    format_ops_per_sec(result.ops_per_sec),
                    Style::default().fg(Color::Green),
                )),
            ])
        })
        .collect();

    let ranking = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(28),
            Constraint::Min(12),
        ],
    )
    .block(
        Block::default()
            .title("Top Performers")
            .borders(Borders::ALL),
    )
    .column_spacing(2);
    f.render_widget(ranking, chunks[2]);

    let hint = Paragraph::new("Press any key to exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[3]);
}
