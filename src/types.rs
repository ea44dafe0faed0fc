/// Core data structures for trace reporting
///
/// This module defines the record read from the results database and the
/// aggregate summary computed over a full run of records.
use chrono::{DateTime, NaiveDateTime};

/// Sentinel the capture layer stores when an agent returned no rationale.
/// It is a literal string in the database, not a SQL NULL.
pub const REASONING_SENTINEL: &str = "None";

/// One logged decision point: a single turn taken by an agent during a
/// game episode, with its rationale and the board as the agent saw it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoveRecord {
    pub game_name: String,
    pub episode: i64,
    pub turn: i64,
    pub action: String,
    pub reasoning: Option<String>,
    pub agent_type: String,
    pub agent_model: String,
    /// Newline-delimited rendering of the board at decision time
    pub board_state: Option<String>,
    pub timestamp: String,
}

impl MoveRecord {
    /// Board snapshot text, if one was recorded
    pub fn board_state_text(&self) -> Option<&str> {
        self.board_state.as_deref().filter(|s| !s.is_empty())
    }

    /// Reasoning text, treating the literal "None" sentinel as absent
    pub fn reasoning_text(&self) -> Option<&str> {
        self.reasoning
            .as_deref()
            .filter(|s| !s.is_empty() && *s != REASONING_SENTINEL)
    }

    pub fn has_board_state(&self) -> bool {
        self.board_state_text().is_some()
    }

    pub fn has_reasoning(&self) -> bool {
        self.reasoning_text().is_some()
    }

    /// Timestamp normalized for display. The arena runner has stored both
    /// RFC 3339 and bare "YYYY-MM-DD HH:MM:SS" strings over time; anything
    /// unparseable is shown as stored.
    pub fn display_timestamp(&self) -> String {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return ts.format("%Y-%m-%d %H:%M:%S %z").to_string();
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%d %H:%M:%S%.f") {
            return ts.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        self.timestamp.clone()
    }
}

/// Aggregate counts over all records in one report run
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TraceSummary {
    /// Total records read
    pub total: usize,
    /// Records with a non-empty board snapshot
    pub board_states: usize,
    /// Records with real reasoning text (sentinel and empty excluded)
    pub reasoning: usize,
    /// Distinct game names seen
    pub games: usize,
    /// Distinct episode numbers seen
    pub episodes: usize,
}
