//! Per-label aggregation over a batch of records.

use hs_common::{AnalysisRecord, Label};
use serde::{Deserialize, Serialize};

/// Per-label record counts for one batch.
///
/// Counts always sum to the number of input records; input order never
/// affects the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    /// Count labels over a sequence of records.
    ///
    /// Empty input yields all-zero counts.
    pub fn aggregate(records: &[AnalysisRecord]) -> Self {
        let mut counts = LabelCounts::default();
        for record in records {
            counts.increment(record.label);
        }
        counts
    }

    /// Add one record's label.
    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Neutral => self.neutral += 1,
            Label::Negative => self.negative += 1,
        }
    }

    /// Count for one label.
    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Neutral => self.neutral,
            Label::Negative => self.negative,
        }
    }

    /// Total records counted.
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Percentage share per label.
    ///
    /// An empty batch reports 0.0 for every label rather than dividing by
    /// zero; consumers distinguish "no data" via `total`.
    pub fn percentages(&self) -> LabelPercentages {
        let total = self.total();
        if total == 0 {
            return LabelPercentages::default();
        }
        let share = |count: usize| 100.0 * count as f64 / total as f64;
        LabelPercentages {
            positive: share(self.positive),
            neutral: share(self.neutral),
            negative: share(self.negative),
        }
    }
}

/// Percentage share per label, in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelPercentages {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}
