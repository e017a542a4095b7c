//! Scorer over a vectorizer + model artifact pair.

use hs_common::{Error, Label, Result, ScoreBundle, SentimentScorer};
use std::path::Path;

use crate::model::LinearModel;
use crate::vectorizer::TfidfVectorizer;

/// Model-based implementation of [`SentimentScorer`].
///
/// Probabilities map onto the bundle as `pos = P(Positive)`,
/// `neu = P(Neutral)`, `neg = P(Negative)`,
/// `compound = P(Positive) − P(Negative)`. The downstream threshold
/// classifier stays the single labeling authority; this scorer never
/// emits a label itself.
pub struct ModelScorer {
    vectorizer: TfidfVectorizer,
    model: LinearModel,
}

impl ModelScorer {
    /// Load both artifacts and check they belong together.
    pub fn load(model_path: &Path, vectorizer_path: &Path) -> Result<Self> {
        let vectorizer = TfidfVectorizer::load(vectorizer_path)?;
        let model = LinearModel::load(model_path)?;
        Self::new(model, vectorizer)
    }

    /// Pair already-loaded artifacts, checking dimension agreement.
    pub fn new(model: LinearModel, vectorizer: TfidfVectorizer) -> Result<Self> {
        if model.n_features() != vectorizer.n_features() {
            return Err(Error::ArtifactMismatch {
                model_dim: model.n_features(),
                vectorizer_dim: vectorizer.n_features(),
            });
        }
        Ok(ModelScorer { vectorizer, model })
    }

    /// Vectorize and score one text.
    pub fn score_text(&self, text: &str) -> ScoreBundle {
        let features = self.vectorizer.transform(text);
        let pos = self.model.probability_of(Label::Positive, &features);
        let neu = self.model.probability_of(Label::Neutral, &features);
        let neg = self.model.probability_of(Label::Negative, &features);

        ScoreBundle {
            pos,
            neu,
            neg,
            compound: (pos - neg).clamp(-1.0, 1.0),
        }
    }
}

impl SentimentScorer for ModelScorer {
    fn score(&self, text: &str) -> Result<ScoreBundle> {
        Ok(self.score_text(text))
    }

    fn name(&self) -> &'static str {
        "model"
    }
}
