// ============================================================================
// domain/error.rs - INPUT ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any filesystem side effect happens, so
/// they are always safe to report and retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid module path '{path}': {reason}")]
    InvalidModulePath { path: String, reason: String },

    #[error("Module path '{path}' does not produce a usable identifier")]
    EmptyIdentifier { path: String },

    #[error("Invalid post-process command '{command}': {reason}")]
    InvalidCommand { command: String, reason: String },
}

impl DomainError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidModulePath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModulePath { .. } => vec![
                "Pass a module path like an import path: github.com/<owner>/<service>".into(),
                "Relative or absolute filesystem paths are not accepted".into(),
            ],
            Self::EmptyIdentifier { path } => vec![
                format!("The last segment of '{}' has no letters or digits", path),
                "Example: gosvc init github.com/acme/payments-api".into(),
            ],
            Self::InvalidCommand { .. } => vec![
                "Post-process commands are written as 'program arg1 arg2'".into(),
                "Check post_process.commands in your configuration".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModulePath { .. } | Self::EmptyIdentifier { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidCommand { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
