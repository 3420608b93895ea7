//! Bounded event log for UI display, most recent entry first

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::config::EVENT_LOG_CAP;
use crate::core::types::Turn;

/// Category of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// The society overcame an event
    Success,
    /// The society failed an event
    Failure,
    /// Births, deaths, interventions
    Info,
    /// Terminal collapse
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: Turn,
    pub kind: LogKind,
    pub message: String,
}

/// Bounded deque of log entries, newest at the front
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl EventLog {
    pub fn push(&mut self, turn: Turn, kind: LogKind, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            turn,
            kind,
            message: message.into(),
        });
        self.entries.truncate(EVENT_LOG_CAP);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most-recent-first iteration
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The newest `n` entries
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().take(n)
    }

    pub fn entries_of_kind(&self, kind: LogKind) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_most_recent_first() {
        let mut log = EventLog::default();
        log.push(1, LogKind::Info, "primero");
        log.push(2, LogKind::Info, "segundo");
        assert_eq!(log.latest().map(|e| e.turn), Some(2));
        let turns: Vec<Turn> = log.iter().map(|e| e.turn).collect();
        assert_eq!(turns, vec![2, 1]);
    }

    #[test]
    fn test_log_truncates_at_cap() {
        let mut log = EventLog::default();
        for turn in 0..80 {
            log.push(turn, LogKind::Info, format!("entrada {turn}"));
        }
        assert_eq!(log.len(), EVENT_LOG_CAP);
        // Newest kept, oldest dropped
        assert_eq!(log.latest().map(|e| e.turn), Some(79));
        assert_eq!(log.iter().last().map(|e| e.turn), Some(30));
    }

    #[test]
    fn test_entries_of_kind_filters() {
        let mut log = EventLog::default();
        log.push(1, LogKind::Success, "bien");
        log.push(2, LogKind::Failure, "mal");
        log.push(3, LogKind::Critical, "colapso");
        assert_eq!(log.entries_of_kind(LogKind::Critical).count(), 1);
        assert_eq!(log.entries_of_kind(LogKind::Info).count(), 0);
    }
}
