//! The sentiment scorer capability.

use crate::error::Result;
use crate::score::ScoreBundle;

/// Opaque scoring capability: text in, polarity bundle out.
///
/// Any lexicon-based or model-based scorer satisfying this contract is
/// substitutable; classification downstream only reads the compound field
/// and never depends on scorer internals. Implementations must return
/// bundles that pass [`ScoreBundle::validate`]; callers enforce it anyway
/// and fault loudly on violations.
pub trait SentimentScorer: Send + Sync {
    /// Score one text.
    fn score(&self, text: &str) -> Result<ScoreBundle>;

    /// Short backend name for logs and reports (e.g. "lexicon", "model").
    fn name(&self) -> &'static str;
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for Box<S> {
    fn score(&self, text: &str) -> Result<ScoreBundle> {
        (**self).score(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
