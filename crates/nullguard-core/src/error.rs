//! Shared error type across nullguard crates.

use thiserror::Error;

/// Stable error codes (for logs, CLI exit output, and test assertions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Absent argument with no matching rule.
    GenericAbsence,
    /// Absent argument rejected by an explicit rule.
    RuleAbsence,
    /// Malformed or invalid policy declarations.
    BadConfig,
    /// Unsupported declaration version.
    UnsupportedVersion,
    /// Lookup of an undeclared type or member.
    UnknownTarget,
    /// No declared constructor accepts the supplied arguments.
    NoMatchingConstructor,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::GenericAbsence => "GENERIC_ABSENCE",
            ErrorCode::RuleAbsence => "RULE_ABSENCE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::UnknownTarget => "UNKNOWN_TARGET",
            ErrorCode::NoMatchingConstructor => "NO_MATCHING_CONSTRUCTOR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NullGuardError>;

/// Unified error type used by core and runtime.
///
/// The two absence variants display the complete failure message, diagnostic
/// suffix included, so callers can surface `to_string()` unchanged.
#[derive(Debug, Error)]
pub enum NullGuardError {
    #[error("{message}")]
    GenericAbsence { position: usize, message: String },
    #[error("{message}")]
    RuleAbsence { position: usize, message: String },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported declaration version")]
    UnsupportedVersion,
    #[error("unknown target: {0}")]
    UnknownTarget(String),
    #[error("no matching constructor: {0}")]
    NoMatchingConstructor(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NullGuardError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            NullGuardError::GenericAbsence { .. } => ErrorCode::GenericAbsence,
            NullGuardError::RuleAbsence { .. } => ErrorCode::RuleAbsence,
            NullGuardError::BadConfig(_) => ErrorCode::BadConfig,
            NullGuardError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            NullGuardError::UnknownTarget(_) => ErrorCode::UnknownTarget,
            NullGuardError::NoMatchingConstructor(_) => ErrorCode::NoMatchingConstructor,
            NullGuardError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// True for the two absence failures produced by the resolver.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            NullGuardError::GenericAbsence { .. } | NullGuardError::RuleAbsence { .. }
        )
    }
}
