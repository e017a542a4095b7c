//! Score bundle produced by a sentiment scorer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tolerance for the `pos + neu + neg ≈ 1` mass invariant.
pub const MASS_TOLERANCE: f64 = 1e-6;

/// Polarity breakdown plus compound score for one text.
///
/// `pos`, `neu`, and `neg` are proportions in [0, 1]; lexicon-produced
/// bundles satisfy `pos + neu + neg ≈ 1` within floating tolerance. The
/// `compound` field is an independent scalar in [-1, 1] and is the sole
/// input to classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
    pub compound: f64,
}

impl ScoreBundle {
    /// Bundle for text with no scoreable content: fully neutral.
    pub fn neutral() -> Self {
        ScoreBundle {
            pos: 0.0,
            neu: 1.0,
            neg: 0.0,
            compound: 0.0,
        }
    }

    /// Validate field ranges.
    ///
    /// Every field must be finite; `pos`/`neu`/`neg` must lie in [0, 1] and
    /// `compound` in [-1, 1]. A bundle that fails here came from a broken
    /// scorer and must fault loudly rather than classify as Neutral.
    pub fn validate(&self) -> Result<()> {
        for part in [self.pos, self.neu, self.neg] {
            if !part.is_finite() || !(0.0..=1.0).contains(&part) {
                return Err(Error::Scoring(format!(
                    "polarity proportion {part} outside [0, 1]"
                )));
            }
        }
        if !self.compound.is_finite() || !(-1.0..=1.0).contains(&self.compound) {
            return Err(Error::ScoreOutOfRange {
                value: self.compound,
            });
        }
        Ok(())
    }

    /// Absolute deviation of `pos + neu + neg` from 1.
    pub fn mass_deviation(&self) -> f64 {
        (self.pos + self.neu + self.neg - 1.0).abs()
    }

    /// Whether the mass invariant holds within [`MASS_TOLERANCE`].
    pub fn mass_consistent(&self) -> bool {
        self.mass_deviation() <= MASS_TOLERANCE
    }
}
