//! Bounded activity log, newest entry first.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Maximum number of entries kept.
pub const LOG_CAPACITY: usize = 10;

/// One timestamped log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time the entry was recorded.
    pub time: DateTime<Local>,
    /// The message text.
    pub message: String,
}

/// The viewer's activity log.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
}

impl ActivityLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message stamped with the current local time.
    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(Local::now(), message);
    }

    /// Record a message with an explicit timestamp.
    ///
    /// The new entry goes to the front; anything past
    /// [`LOG_CAPACITY`] falls off the back.
    pub fn push_at(&mut self, time: DateTime<Local>, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            time,
            message: message.into(),
        });
        self.entries.truncate(LOG_CAPACITY);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut log = ActivityLog::new();
        log.push("first");
        log.push("second");
        let messages: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn keeps_only_ten_most_recent() {
        let mut log = ActivityLog::new();
        for i in 0..15 {
            log.push(format!("entry {i}"));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("entry 14"));
        assert_eq!(
            log.entries().last().map(|e| e.message.as_str()),
            Some("entry 5")
        );
    }
}
