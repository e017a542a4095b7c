//! Scorer backend construction from configuration.

use hs_common::{Error, Result, SentimentScorer};
use hs_config::{Config, ScorerBackend};
use hs_lexicon::LexiconScorer;
use hs_model::ModelScorer;

/// Build the configured scorer backend.
///
/// Constructed once at startup and injected into the pipeline; nothing
/// downstream knows which backend is active.
pub fn build_scorer(config: &Config) -> Result<Box<dyn SentimentScorer>> {
    match config.scorer.backend {
        ScorerBackend::Lexicon => match &config.scorer.lexicon_overlay {
            Some(path) => {
                let scorer = LexiconScorer::with_overlay(path)?;
                tracing::info!(overlay = %path.display(), "lexicon scorer with overlay");
                Ok(Box::new(scorer))
            }
            None => Ok(Box::new(LexiconScorer::new())),
        },
        ScorerBackend::Model => {
            let model_path = config.scorer.model_path.as_ref().ok_or_else(|| {
                Error::Config("scorer.model_path is required for the model backend".to_string())
            })?;
            let vectorizer_path = config.scorer.vectorizer_path.as_ref().ok_or_else(|| {
                Error::Config(
                    "scorer.vectorizer_path is required for the model backend".to_string(),
                )
            })?;
            let scorer = ModelScorer::load(model_path, vectorizer_path)?;
            tracing::info!(
                model = %model_path.display(),
                vectorizer = %vectorizer_path.display(),
                "model scorer loaded"
            );
            Ok(Box::new(scorer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_builds_lexicon() {
        let scorer = build_scorer(&Config::default()).unwrap();
        assert_eq!(scorer.name(), "lexicon");
    }

    #[test]
    fn test_model_backend_without_paths_errors() {
        let mut config = Config::default();
        config.scorer.backend = ScorerBackend::Model;
        assert!(matches!(
            build_scorer(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_model_backend_with_missing_files_errors() {
        let mut config = Config::default();
        config.scorer.backend = ScorerBackend::Model;
        config.scorer.model_path = Some(PathBuf::from("/nonexistent/model.json"));
        config.scorer.vectorizer_path = Some(PathBuf::from("/nonexistent/vectorizer.json"));
        assert!(matches!(
            build_scorer(&config),
            Err(Error::InvalidVectorizer(_)) | Err(Error::InvalidModel(_))
        ));
    }

    #[test]
    fn test_lexicon_overlay_applied() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"blorbo": 3.0}}"#).unwrap();

        let mut config = Config::default();
        config.scorer.lexicon_overlay = Some(file.path().to_path_buf());

        let scorer = build_scorer(&config).unwrap();
        let bundle = scorer.score("blorbo everywhere").unwrap();
        assert!(bundle.compound > 0.05);
    }
}
