//! Audit journal: caller-owned record of successful stock movements.

use chrono::{DateTime, Utc};

/// A single timestamped journal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl core::fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

/// Append-only sequence of journal entries.
///
/// Supplied by the caller as an optional output parameter; operations mutate
/// it in place and the caller keeps ownership throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message`, stamped with the current wall-clock time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.push(JournalEntry {
            at: Utc::now(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
