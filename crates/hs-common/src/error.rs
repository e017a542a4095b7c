//! Error types for Headline Sentiment.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Recoverability hints for automation
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! Errors can be formatted for human consumption with headline, reason, and fix:
//! ```text
//! ✗ Feed Fetch Failed
//!   Reason: feed request failed: connection refused
//!   Fix: Check the feed URL and network connectivity, then re-run the command.
//! ```
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 30,
//!   "category": "feed",
//!   "message": "feed request failed: connection refused",
//!   "recoverable": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for Headline Sentiment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Configuration file errors (config, lexicon overlay, artifacts).
    Config,
    /// Scoring and classification errors.
    Scoring,
    /// Feed fetching and parsing errors.
    Feed,
    /// Export and serialization-to-table errors.
    Export,
    /// Input boundary errors (empty or unusable text).
    Input,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Scoring => write!(f, "scoring"),
            ErrorCategory::Feed => write!(f, "feed"),
            ErrorCategory::Export => write!(f, "export"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Headline Sentiment.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid lexicon file: {0}")]
    InvalidLexicon(String),

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("invalid vectorizer artifact: {0}")]
    InvalidVectorizer(String),

    #[error("artifact dimension mismatch: model expects {model_dim} features, vectorizer produces {vectorizer_dim}")]
    ArtifactMismatch {
        model_dim: usize,
        vectorizer_dim: usize,
    },

    // Scoring errors (20-29)
    #[error("scoring failed: {0}")]
    Scoring(String),

    #[error("compound score {value} outside [-1, 1] or not finite")]
    ScoreOutOfRange { value: f64 },

    // Feed errors (30-39)
    #[error("feed request failed: {0}")]
    FeedRequest(String),

    #[error("feed returned HTTP status {status}")]
    FeedStatus { status: u16 },

    #[error("feed parse failed: {0}")]
    FeedParse(String),

    // Export errors (40-49)
    #[error("export failed: {0}")]
    Export(String),

    // Input errors (50-59)
    #[error("input text is empty or whitespace-only")]
    EmptyInput,

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Scoring errors
    /// - 30-39: Feed errors
    /// - 40-49: Export errors
    /// - 50-59: Input errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidLexicon(_) => 11,
            Error::InvalidModel(_) => 12,
            Error::InvalidVectorizer(_) => 13,
            Error::ArtifactMismatch { .. } => 14,
            Error::Scoring(_) => 20,
            Error::ScoreOutOfRange { .. } => 21,
            Error::FeedRequest(_) => 30,
            Error::FeedStatus { .. } => 31,
            Error::FeedParse(_) => 32,
            Error::Export(_) => 40,
            Error::EmptyInput => 50,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_)
            | Error::InvalidLexicon(_)
            | Error::InvalidModel(_)
            | Error::InvalidVectorizer(_)
            | Error::ArtifactMismatch { .. } => ErrorCategory::Config,

            Error::Scoring(_) | Error::ScoreOutOfRange { .. } => ErrorCategory::Scoring,

            Error::FeedRequest(_) | Error::FeedStatus { .. } | Error::FeedParse(_) => {
                ErrorCategory::Feed
            }

            Error::Export(_) => ErrorCategory::Export,

            Error::EmptyInput => ErrorCategory::Input,

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable.
    ///
    /// There are no automatic retries anywhere; "recoverable" means the user
    /// (or calling agent) can fix the condition and re-trigger the operation.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Config errors: recoverable by fixing the file
            Error::Config(_) => true,
            Error::InvalidLexicon(_) => true,
            Error::InvalidModel(_) => true,
            Error::InvalidVectorizer(_) => true,
            Error::ArtifactMismatch { .. } => true,

            // A scorer that emits garbage needs a code or artifact fix
            Error::Scoring(_) => false,
            Error::ScoreOutOfRange { .. } => false,

            // Feed: transient by nature
            Error::FeedRequest(_) => true,
            Error::FeedStatus { .. } => true,
            Error::FeedParse(_) => true,

            Error::Export(_) => true,

            Error::EmptyInput => true,

            Error::Io(_) => true,
            Error::Json(_) => true,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => {
                "Run 'hs check' to validate configuration, or check syntax in sentiment.json."
            }
            Error::InvalidLexicon(_) => {
                "Check the lexicon overlay file: it must be a JSON object mapping words to numeric valences."
            }
            Error::InvalidModel(_) => {
                "Re-export the model artifact, or point --model at a valid artifact file."
            }
            Error::InvalidVectorizer(_) => {
                "Re-export the vectorizer artifact, or point --vectorizer at a valid artifact file."
            }
            Error::ArtifactMismatch { .. } => {
                "Model and vectorizer were not trained together. Export both from the same training run."
            }
            Error::Scoring(_) => {
                "This indicates a scorer bug. Run 'hs check' and report the failing input."
            }
            Error::ScoreOutOfRange { .. } => {
                "The configured scorer produced an invalid compound score. Validate its artifacts with 'hs check'."
            }
            Error::FeedRequest(_) => {
                "Check the feed URL and network connectivity, then re-run the command."
            }
            Error::FeedStatus { .. } => {
                "The feed server rejected the request. Verify the URL serves an RSS or Atom feed."
            }
            Error::FeedParse(_) => {
                "The response was not a well-formed feed. Verify the URL serves RSS or Atom XML."
            }
            Error::Export(_) => {
                "Check that the export path is writable and has free disk space."
            }
            Error::EmptyInput => {
                "Provide at least one non-blank line of text to classify."
            }
            Error::Io(_) => {
                "Check disk space, permissions, and that the target directories exist."
            }
            Error::Json(_) => {
                "Invalid JSON in file. Check syntax with 'cat <file> | jq .' or restore from backup."
            }
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidLexicon(_) => "Invalid Lexicon Overlay",
            Error::InvalidModel(_) => "Invalid Model Artifact",
            Error::InvalidVectorizer(_) => "Invalid Vectorizer Artifact",
            Error::ArtifactMismatch { .. } => "Artifact Dimension Mismatch",
            Error::Scoring(_) => "Scoring Error",
            Error::ScoreOutOfRange { .. } => "Score Out of Range",
            Error::FeedRequest(_) => "Feed Fetch Failed",
            Error::FeedStatus { .. } => "Feed Server Error",
            Error::FeedParse(_) => "Feed Parse Failed",
            Error::Export(_) => "Export Failed",
            Error::EmptyInput => "Empty Input",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }
}

/// Structured error response for JSON output.
///
/// Used by `--format json` for machine-parseable error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is potentially recoverable.
    pub recoverable: bool,

    /// Additional structured context (e.g., status, value).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::FeedStatus { status } => {
                context.insert("status".to_string(), serde_json::json!(status));
            }
            Error::ScoreOutOfRange { value } => {
                context.insert("value".to_string(), serde_json::json!(value));
            }
            Error::ArtifactMismatch {
                model_dim,
                vectorizer_dim,
            } => {
                context.insert("model_dim".to_string(), serde_json::json!(model_dim));
                context.insert(
                    "vectorizer_dim".to_string(),
                    serde_json::json!(vectorizer_dim),
                );
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(Error::Config("test".into()).code(), 10);
        assert_eq!(Error::ScoreOutOfRange { value: f64::NAN }.code(), 21);
        assert_eq!(Error::FeedStatus { status: 503 }.code(), 31);
        assert_eq!(Error::EmptyInput.code(), 50);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            Error::InvalidLexicon("test".into()).category(),
            ErrorCategory::Config
        );
        assert_eq!(
            Error::FeedParse("test".into()).category(),
            ErrorCategory::Feed
        );
        assert_eq!(Error::EmptyInput.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_error_recoverable() {
        assert!(Error::Config("test".into()).is_recoverable());
        assert!(Error::FeedRequest("timeout".into()).is_recoverable());
        assert!(!Error::ScoreOutOfRange { value: 2.0 }.is_recoverable());
    }

    #[test]
    fn test_structured_error_from_error() {
        let err = Error::FeedStatus { status: 404 };
        let structured = StructuredError::from(&err);

        assert_eq!(structured.code, 31);
        assert_eq!(structured.category, ErrorCategory::Feed);
        assert!(structured.recoverable);
        assert_eq!(
            structured.context.get("status"),
            Some(&serde_json::json!(404))
        );
    }

    #[test]
    fn test_structured_error_json() {
        let err = Error::ScoreOutOfRange { value: 2.5 };
        let structured = StructuredError::from(&err);
        let json = structured.to_json();

        assert!(json.contains(r#""code":21"#));
        assert!(json.contains(r#""category":"scoring""#));
        assert!(json.contains(r#""recoverable":false"#));
    }

    #[test]
    fn test_format_error_human() {
        let err = Error::EmptyInput;
        let formatted = format_error_human(&err, false);

        assert!(formatted.contains("Empty Input"));
        assert!(formatted.contains("whitespace-only"));
        assert!(formatted.contains("non-blank line"));
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Config.to_string(), "config");
        assert_eq!(ErrorCategory::Feed.to_string(), "feed");
        assert_eq!(ErrorCategory::Scoring.to_string(), "scoring");
    }
}
