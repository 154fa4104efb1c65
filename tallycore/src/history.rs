//! Calculation history
//!
//! An ordered record of completed calculations, oldest first. Entries are
//! never edited; the log only grows until the user clears it. A cap can be
//! set, in which case the oldest entries are dropped to make room.

use std::collections::VecDeque;
use std::fmt;

/// One completed calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    expression: String,
    result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// e.g. `12 + 34`
    pub fn expression_text(&self) -> &str {
        &self.expression
    }

    pub fn result_text(&self) -> &str {
        &self.result
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    cap: Option<usize>,
}

impl HistoryLog {
    /// Unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log that keeps at most `cap` entries. A cap of zero is treated as
    /// one so the latest result is always available for copying.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(cap.clamp(1, 256)),
            cap: Some(cap.max(1)),
        }
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        if let Some(cap) = self.cap {
            while self.entries.len() >= cap {
                self.entries.pop_front();
            }
        }
        tracing::debug!(entry = %entry, "history append");
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.entries.len(), "history cleared");
        self.entries.clear();
    }

    /// Entries in insertion order, most recent last. Call `.rev()` for a
    /// newest-first listing.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn latest_result_text(&self) -> Option<&str> {
        self.latest().map(HistoryEntry::result_text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whole log as text, one `expression = result` per line.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
