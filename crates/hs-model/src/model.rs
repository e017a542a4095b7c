//! Three-class linear classifier loaded from a persisted artifact.

use hs_common::{schema, Error, Label, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted linear classifier artifact.
///
/// One weight row and one intercept per class, in the order of `classes`.
/// Scores are softmax probabilities over `intercept + w · x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Artifact schema version.
    pub schema_version: String,

    /// Class order of the weight rows. Must contain each label exactly once.
    pub classes: Vec<Label>,

    /// Weight matrix, `classes.len()` rows of `n_features` columns.
    pub weights: Vec<Vec<f64>>,

    /// Intercept per class.
    pub intercepts: Vec<f64>,
}

impl LinearModel {
    /// Load and validate a model artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidModel(format!("{}: {}", path.display(), e)))?;
        let model: LinearModel = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidModel(format!("{}: {}", path.display(), e)))?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation of the artifact.
    pub fn validate(&self) -> Result<()> {
        if !schema::is_compatible(&self.schema_version) {
            return Err(Error::InvalidModel(format!(
                "schema version {} is incompatible with {}",
                self.schema_version,
                schema::SCHEMA_VERSION
            )));
        }

        if self.classes.len() != Label::ALL.len() {
            return Err(Error::InvalidModel(format!(
                "expected {} classes, got {}",
                Label::ALL.len(),
                self.classes.len()
            )));
        }
        for label in Label::ALL {
            if !self.classes.contains(&label) {
                return Err(Error::InvalidModel(format!("missing class {label}")));
            }
        }

        if self.weights.len() != self.classes.len() {
            return Err(Error::InvalidModel(format!(
                "{} weight rows for {} classes",
                self.weights.len(),
                self.classes.len()
            )));
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(Error::InvalidModel(format!(
                "{} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            )));
        }

        let n_features = self.n_features();
        for (row, weights) in self.weights.iter().enumerate() {
            if weights.len() != n_features {
                return Err(Error::InvalidModel(format!(
                    "weight row {} has {} columns, expected {}",
                    row,
                    weights.len(),
                    n_features
                )));
            }
            if weights.iter().any(|w| !w.is_finite()) {
                return Err(Error::InvalidModel(format!(
                    "weight row {row} contains a non-finite value"
                )));
            }
        }
        if self.intercepts.iter().any(|b| !b.is_finite()) {
            return Err(Error::InvalidModel(
                "intercepts contain a non-finite value".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of features each weight row expects.
    pub fn n_features(&self) -> usize {
        self.weights.first().map(Vec::len).unwrap_or(0)
    }

    /// Class probabilities for a sparse feature vector.
    ///
    /// Returned in the order of `self.classes`. With no active features the
    /// intercepts alone decide, which is the trained class prior.
    pub fn predict_proba(&self, features: &[(usize, f64)]) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept
                    + features
                        .iter()
                        .map(|&(index, value)| {
                            row.get(index).copied().unwrap_or(0.0) * value
                        })
                        .sum::<f64>()
            })
            .collect();

        softmax(&logits)
    }

    /// Probability of one label for a sparse feature vector.
    pub fn probability_of(&self, label: Label, features: &[(usize, f64)]) -> f64 {
        let probs = self.predict_proba(features);
        self.classes
            .iter()
            .position(|&c| c == label)
            .map(|i| probs[i])
            .unwrap_or(0.0)
    }
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinearModel {
        LinearModel {
            schema_version: schema::SCHEMA_VERSION.to_string(),
            classes: vec![Label::Positive, Label::Neutral, Label::Negative],
            weights: vec![
                vec![2.0, -1.0, 0.0],
                vec![0.0, 0.0, 0.0],
                vec![-2.0, 1.5, 0.0],
            ],
            intercepts: vec![0.0, 0.2, 0.0],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_class() {
        let mut m = sample();
        m.classes[1] = Label::Positive;
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_ragged_weights() {
        let mut m = sample();
        m.weights[2] = vec![1.0];
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let mut m = sample();
        m.weights[0][1] = f64::NAN;
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_predict_proba_sums_to_one() {
        let m = sample();
        let probs = m.predict_proba(&[(0, 1.0)]);
        assert_eq!(probs.len(), 3);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_feature_raises_positive_probability() {
        let m = sample();
        let base = m.probability_of(Label::Positive, &[]);
        let raised = m.probability_of(Label::Positive, &[(0, 1.0)]);
        assert!(raised > base);
    }

    #[test]
    fn test_no_features_uses_intercepts() {
        let m = sample();
        let probs = m.predict_proba(&[]);
        // Neutral has the only positive intercept
        assert!(probs[1] > probs[0]);
        assert!(probs[1] > probs[2]);
    }

    #[test]
    fn test_softmax_stability() {
        let probs = softmax(&[1000.0, 1000.0, 1000.0]);
        for p in probs {
            assert!((p - 1.0 / 3.0).abs() < 1e-9);
        }
    }
}
