/// Report rendering - one text block per recorded move, then a summary
///
/// This module assembles the human-readable report from `MoveRecord`s. It
/// writes to any `std::io::Write` destination:
/// - Console (stdout) in the binary
/// - Byte buffers in tests
///
/// Placeholder markers stand in for missing board states and missing (or
/// sentinel-valued) reasoning; the wrapper is never called on empty text.
use crate::types::{MoveRecord, TraceSummary};
use crate::wrap::wrap_text;
use std::collections::HashSet;
use std::io::{self, Write};
use terminal_size::{Width, terminal_size};

/// Indent for board-state and reasoning lines under their section labels
const INDENT: &str = "     ";

/// Preferred rule widths, clamped to the terminal
const HEADER_RULE: usize = 70;
const BLOCK_RULE: usize = 40;
const SUMMARY_RULE: usize = 20;

const NO_BOARD_MARKER: &str = "[No board state recorded]";
const NO_REASONING_MARKER: &str = "[No reasoning provided]";

/// Get terminal width or default to 120
fn get_terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        120
    }
}

/// Writer for the trace report
pub struct ReportWriter<W: Write> {
    writer: W,
    wrap_width: usize,
    rule_width: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Create a writer sized to the current terminal
    pub fn new(writer: W, wrap_width: usize) -> Self {
        Self::with_rule_width(writer, wrap_width, get_terminal_width())
    }

    /// Create a writer with a fixed console width (for reproducible tests)
    pub fn with_rule_width(writer: W, wrap_width: usize, console_width: usize) -> Self {
        Self {
            writer,
            wrap_width,
            rule_width: HEADER_RULE.min(console_width.max(1)),
        }
    }

    /// Write the report title and record count
    pub fn write_report_header(&mut self, total: usize) -> io::Result<()> {
        writeln!(self.writer, "Board Game Arena - Reasoning Trace Report")?;
        writeln!(self.writer, "{}", "=".repeat(self.rule_width))?;
        writeln!(self.writer, "Found {} reasoning traces", total)?;
        writeln!(self.writer)
    }

    /// Write one formatted block for a single decision record
    pub fn write_trace_block(&mut self, record: &MoveRecord, ordinal: usize) -> io::Result<()> {
        writeln!(self.writer, "Reasoning Trace #{}", ordinal)?;
        writeln!(self.writer, "{}", "-".repeat(BLOCK_RULE.min(self.rule_width)))?;
        writeln!(self.writer, "Game: {}", record.game_name)?;
        writeln!(self.writer, "Episode: {}, Turn: {}", record.episode, record.turn)?;
        writeln!(self.writer, "Agent: {} ({})", record.agent_model, record.agent_type)?;
        writeln!(self.writer, "Action chosen: {}", record.action)?;

        writeln!(self.writer, "Board state at decision time:")?;
        match record.board_state_text() {
            Some(board) => {
                for line in board.lines() {
                    writeln!(self.writer, "{}{}", INDENT, line)?;
                }
            }
            None => writeln!(self.writer, "{}{}", INDENT, NO_BOARD_MARKER)?,
        }

        writeln!(self.writer, "Agent's reasoning:")?;
        match record.reasoning_text() {
            Some(reasoning) => {
                for line in wrap_text(reasoning, self.wrap_width) {
                    writeln!(self.writer, "{}{}", INDENT, line)?;
                }
            }
            None => writeln!(self.writer, "{}{}", INDENT, NO_REASONING_MARKER)?,
        }

        writeln!(self.writer, "Timestamp: {}", record.display_timestamp())?;
        writeln!(self.writer)
    }

    /// Write the aggregate summary block
    pub fn write_summary(&mut self, summary: &TraceSummary) -> io::Result<()> {
        writeln!(self.writer, "Summary")?;
        writeln!(self.writer, "{}", "-".repeat(SUMMARY_RULE.min(self.rule_width)))?;
        writeln!(
            self.writer,
            "Board states captured: {}/{}",
            summary.board_states, summary.total
        )?;
        writeln!(
            self.writer,
            "Reasoning captured: {}/{}",
            summary.reasoning, summary.total
        )?;
        writeln!(self.writer, "Games analyzed: {}", summary.games)?;
        writeln!(self.writer, "Episodes analyzed: {}", summary.episodes)
    }
}

/// Compute aggregate counts over all records
pub fn summarize(records: &[MoveRecord]) -> TraceSummary {
    let mut games = HashSet::new();
    let mut episodes = HashSet::new();
    let mut board_states = 0;
    let mut reasoning = 0;

    for record in records {
        games.insert(record.game_name.as_str());
        episodes.insert(record.episode);
        if record.has_board_state() {
            board_states += 1;
        }
        if record.has_reasoning() {
            reasoning += 1;
        }
    }

    TraceSummary {
        total: records.len(),
        board_states,
        reasoning,
        games: games.len(),
        episodes: episodes.len(),
    }
}

/// JSON document emitted by `--json`: the raw records plus the summary
#[derive(serde::Serialize)]
struct JsonReport<'a> {
    traces: &'a [MoveRecord],
    summary: TraceSummary,
}

/// Render records and summary as a pretty-printed JSON string
pub fn render_json(records: &[MoveRecord]) -> serde_json::Result<String> {
    let report = JsonReport {
        traces: records,
        summary: summarize(records),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
