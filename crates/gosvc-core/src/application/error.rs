//! Application layer errors.
//!
//! These errors represent failures while touching the outside world through
//! ports. Input errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Why a template could not be turned into output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateErrorKind {
    /// Malformed template syntax.
    Syntax,
    /// Reference to a variable that is not in the context.
    UndefinedVariable,
    /// Any other failure while rendering.
    Render,
    /// Template content is not valid UTF-8.
    Encoding,
}

impl fmt::Display for TemplateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Syntax => "syntax error",
            Self::UndefinedVariable => "undefined variable",
            Self::Render => "render error",
            Self::Encoding => "invalid encoding",
        };
        f.write_str(s)
    }
}

/// Renderer-level failure, before the source path is attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RenderFailure {
    pub kind: TemplateErrorKind,
    pub message: String,
}

impl RenderFailure {
    pub fn new(kind: TemplateErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Errors that occur while materializing or post-processing a project.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A resource could not be listed or read.
    #[error("Failed to read resource '{path}': {reason}")]
    ResourceRead { path: String, reason: String },

    /// A template failed to parse or render.
    #[error("Template '{path}' failed ({kind}): {reason}")]
    Template {
        path: String,
        kind: TemplateErrorKind,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A post-process command failed.
    #[error("Command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    pub fn template(path: impl Into<String>, failure: RenderFailure) -> Self {
        Self::Template {
            path: path.into(),
            kind: failure.kind,
            reason: failure.message,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ResourceRead { path, .. } => vec![
                format!("The embedded resource '{}' could not be read", path),
                "This build of gosvc may be corrupted; try reinstalling".into(),
            ],
            Self::Template {
                kind: TemplateErrorKind::UndefinedVariable,
                ..
            } => vec![
                "A template references a variable that is not defined".into(),
                "Available: ExportedName, UnexportedName, FolderName, ModulePath, OwnerName".into(),
            ],
            Self::Template { path, .. } => vec![
                format!("Check the template syntax in '{}'", path),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("'{}' must be installed and on your PATH", command),
                "Re-run with --no-post-process to skip post-processing".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceRead { .. } => ErrorCategory::NotFound,
            Self::Template { .. }
            | Self::Filesystem { .. }
            | Self::CommandFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
