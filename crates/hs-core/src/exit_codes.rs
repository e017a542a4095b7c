//! Exit codes for the hs CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.
//!
//! Exit code ranges:
//! - 0-6: Success/operational outcomes
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use hs_common::Error;

/// Exit codes for hs operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: classification produced (possibly an empty feed batch)
    Clean = 0,

    /// Input was empty or whitespace-only; warned, nothing classified
    NoInput = 1,

    /// Feed fetch failed; surfaced as an error plus an empty result
    FeedEmpty = 2,

    /// Invalid arguments
    ArgsError = 10,

    /// Configuration invalid or unreadable
    ConfigError = 11,

    /// Scorer artifacts missing, invalid, or mismatched
    ArtifactError = 12,

    /// Export destination not writable
    ExportError = 13,

    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates full success.
    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Check if this exit code indicates operational outcome (codes 0-6).
    /// These are not errors - they communicate workflow state.
    pub fn is_operational(self) -> bool {
        (self as i32) < 10
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Check if this exit code is an internal error (codes 20-29).
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::NoInput => "WARN_EMPTY_INPUT",
            ExitCode::FeedEmpty => "WARN_FEED_EMPTY",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::ArtifactError => "ERR_ARTIFACT",
            ExitCode::ExportError => "ERR_EXPORT",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }

    /// Exit code for a pipeline error.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Config(_) | Error::InvalidLexicon(_) => ExitCode::ConfigError,
            Error::InvalidModel(_)
            | Error::InvalidVectorizer(_)
            | Error::ArtifactMismatch { .. } => ExitCode::ArtifactError,
            Error::Scoring(_) | Error::ScoreOutOfRange { .. } => ExitCode::InternalError,
            Error::FeedRequest(_) | Error::FeedStatus { .. } | Error::FeedParse(_) => {
                ExitCode::FeedEmpty
            }
            Error::Export(_) => ExitCode::ExportError,
            Error::EmptyInput => ExitCode::NoInput,
            Error::Io(_) => ExitCode::IoError,
            Error::Json(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_ranges() {
        assert!(ExitCode::Clean.is_success());
        assert!(ExitCode::NoInput.is_operational());
        assert!(!ExitCode::NoInput.is_success());
        assert!(ExitCode::ConfigError.is_user_error());
        assert!(ExitCode::InternalError.is_internal_error());
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ExitCode::from_error(&Error::EmptyInput),
            ExitCode::NoInput
        );
        assert_eq!(
            ExitCode::from_error(&Error::FeedStatus { status: 500 }),
            ExitCode::FeedEmpty
        );
        assert_eq!(
            ExitCode::from_error(&Error::ScoreOutOfRange { value: 9.0 }),
            ExitCode::InternalError
        );
        assert_eq!(
            ExitCode::from_error(&Error::ArtifactMismatch {
                model_dim: 2,
                vectorizer_dim: 3
            }),
            ExitCode::ArtifactError
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ExitCode::Clean.to_string(), "OK (0)");
        assert_eq!(ExitCode::FeedEmpty.to_string(), "WARN_FEED_EMPTY (2)");
    }
}
