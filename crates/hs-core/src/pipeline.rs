//! The headline classification pipeline.
//!
//! raw text → scorer → threshold classifier → record. The analyzer is
//! generic over the scorer so tests can substitute a fixed-score stub and
//! the CLI can pass a boxed backend chosen by configuration.

use hs_common::{AnalysisRecord, Error, Result, SentimentScorer};

use crate::batch::split_headlines;
use crate::classify::try_classify;

/// Classifies headlines with a scorer chosen by the caller.
pub struct Analyzer<S: SentimentScorer> {
    scorer: S,
}

impl<S: SentimentScorer> Analyzer<S> {
    pub fn new(scorer: S) -> Self {
        Analyzer { scorer }
    }

    /// Name of the active scorer backend.
    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Classify one headline.
    ///
    /// Blank input is rejected with [`Error::EmptyInput`] before scoring;
    /// the caller surfaces it as a warning, not a fatal error. Every bundle
    /// the scorer returns is validated, and a non-finite or out-of-range
    /// compound faults loudly instead of defaulting to Neutral.
    pub fn analyze(&self, text: &str) -> Result<AnalysisRecord> {
        let headline = text.trim();
        if headline.is_empty() {
            return Err(Error::EmptyInput);
        }

        let bundle = self.scorer.score(headline)?;
        bundle.validate()?;
        let label = try_classify(bundle.compound)?;

        tracing::debug!(
            headline,
            label = %label,
            compound = bundle.compound,
            scorer = self.scorer.name(),
            "classified headline"
        );
        Ok(AnalysisRecord::new(headline, label, bundle))
    }

    /// Classify every non-blank line of a multi-line blob, in order.
    ///
    /// A blob with no non-blank lines is [`Error::EmptyInput`].
    pub fn analyze_batch(&self, blob: &str) -> Result<Vec<AnalysisRecord>> {
        let headlines = split_headlines(blob);
        if headlines.is_empty() {
            return Err(Error::EmptyInput);
        }
        headlines.iter().map(|line| self.analyze(line)).collect()
    }

    /// Classify an already-split headline sequence, in order.
    ///
    /// Blank entries are skipped; an empty sequence yields an empty batch
    /// (the feed path reports zero records rather than warning).
    pub fn analyze_headlines(&self, headlines: &[String]) -> Result<Vec<AnalysisRecord>> {
        headlines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.analyze(line))
            .collect()
    }
}
