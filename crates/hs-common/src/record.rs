//! Analysis records: one classified headline each.

use crate::id::RecordId;
use crate::label::Label;
use crate::score::ScoreBundle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One classified headline.
///
/// Created once per classification and never mutated afterwards; the history
/// store only ever appends, clears, or snapshots whole records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Record identity.
    pub id: RecordId,

    /// The headline text as submitted.
    pub headline: String,

    /// Label derived from the compound score.
    pub label: Label,

    /// Full polarity breakdown from the scorer.
    pub scores: ScoreBundle,

    /// When the classification happened.
    pub timestamp: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Create a record for a headline classified now.
    pub fn new(headline: impl Into<String>, label: Label, scores: ScoreBundle) -> Self {
        AnalysisRecord {
            id: RecordId::new(),
            headline: headline.into(),
            label,
            scores,
            timestamp: Utc::now(),
        }
    }

    /// The compound score the label was derived from.
    pub fn compound(&self) -> f64 {
        self.scores.compound
    }
}
