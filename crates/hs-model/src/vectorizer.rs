//! Inference-only TF-IDF vectorizer loaded from a persisted artifact.

use hs_common::text::tokenize;
use hs_common::{schema, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Persisted vectorizer artifact.
///
/// Exported by the training pipeline; this crate only ever loads it. The
/// vocabulary maps each term to a feature index into `idf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Artifact schema version.
    pub schema_version: String,

    /// Term → feature index.
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature index.
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Load and validate a vectorizer artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidVectorizer(format!("{}: {}", path.display(), e)))?;
        let vectorizer: TfidfVectorizer = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidVectorizer(format!("{}: {}", path.display(), e)))?;
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Structural validation of the artifact.
    pub fn validate(&self) -> Result<()> {
        if !schema::is_compatible(&self.schema_version) {
            return Err(Error::InvalidVectorizer(format!(
                "schema version {} is incompatible with {}",
                self.schema_version,
                schema::SCHEMA_VERSION
            )));
        }
        if self.vocabulary.is_empty() {
            return Err(Error::InvalidVectorizer("empty vocabulary".to_string()));
        }
        for (term, &index) in &self.vocabulary {
            if index >= self.idf.len() {
                return Err(Error::InvalidVectorizer(format!(
                    "term '{}' maps to index {} but idf has {} entries",
                    term,
                    index,
                    self.idf.len()
                )));
            }
        }
        for (index, &weight) in self.idf.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidVectorizer(format!(
                    "idf[{index}] is {weight}; idf weights must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }

    /// Number of features this vectorizer produces.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Transform text into a sparse, L2-normalized TF-IDF vector.
    ///
    /// Out-of-vocabulary tokens are dropped; text with no in-vocabulary
    /// tokens transforms to the empty vector.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        features.sort_by_key(|&(index, _)| index);

        let norm = features
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut features {
                *weight /= norm;
            }
        }
        features
    }
}
