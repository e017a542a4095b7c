//! Caller-owned history of classified headlines.

use hs_common::AnalysisRecord;
use std::collections::VecDeque;

/// Append-only history store with explicit lifecycle.
///
/// An explicit state object owned by the caller (one per CLI run, or one
/// per session in a multi-user shell), never a process-wide global. FIFO
/// order is preserved; `clear` discards everything; there is no
/// deduplication. Capacity is unbounded unless one is configured, in which
/// case the oldest record is dropped on overflow.
#[derive(Debug, Default, Clone)]
pub struct History {
    records: VecDeque<AnalysisRecord>,
    capacity: Option<usize>,
}

impl History {
    /// Empty, unbounded history.
    pub fn new() -> Self {
        History::default()
    }

    /// Empty history that holds at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        History {
            records: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// History with an optional bound, as configured.
    pub fn from_config(capacity: Option<usize>) -> Self {
        match capacity {
            Some(cap) => History::with_capacity(cap),
            None => History::new(),
        }
    }

    /// Append one record, dropping the oldest if at capacity.
    pub fn append(&mut self, record: AnalysisRecord) {
        if let Some(cap) = self.capacity {
            while self.records.len() >= cap {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// Discard all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records in append order.
    pub fn snapshot(&self) -> Vec<AnalysisRecord> {
        self.records.iter().cloned().collect()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Configured capacity, if any.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_common::{Label, ScoreBundle};

    fn record(headline: &str) -> AnalysisRecord {
        AnalysisRecord::new(headline, Label::Neutral, ScoreBundle::neutral())
    }

    #[test]
    fn test_append_preserves_fifo_order() {
        let mut history = History::new();
        history.append(record("first"));
        history.append(record("second"));
        history.append(record("third"));

        let snapshot = history.snapshot();
        let headlines: Vec<_> = snapshot.iter().map(|r| r.headline.as_str()).collect();
        assert_eq!(headlines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut history = History::new();
        history.append(record("a"));
        history.append(record("b"));
        assert_eq!(history.len(), 2);

        history.clear();
        assert!(history.is_empty());
        assert!(history.snapshot().is_empty());
    }

    #[test]
    fn test_no_deduplication() {
        let mut history = History::new();
        history.append(record("same"));
        history.append(record("same"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::with_capacity(2);
        history.append(record("a"));
        history.append(record("b"));
        history.append(record("c"));

        let snapshot = history.snapshot();
        let headlines: Vec<_> = snapshot.iter().map(|r| r.headline.as_str()).collect();
        assert_eq!(headlines, vec!["b", "c"]);
        assert_eq!(history.capacity(), Some(2));
    }

    #[test]
    fn test_from_config() {
        assert_eq!(History::from_config(None).capacity(), None);
        assert_eq!(History::from_config(Some(5)).capacity(), Some(5));
    }
}
