//! Value objects for the generator domain.
//!
//! Both types validate at construction, so holding one is proof the input
//! was checked.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DomainError;

// ============================================================================
// ModulePath
// ============================================================================

/// Slash-delimited identifier of the project to generate, usually an import
/// path such as `github.com/acme/payments`.
///
/// Invariant: non-empty and does not start with `.`, `/` or `\`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    /// Validate and wrap a module path.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        match raw.chars().next() {
            None => Err(DomainError::invalid_path(&raw, "module path cannot be empty")),
            Some(c @ ('.' | '/' | '\\')) => Err(DomainError::invalid_path(
                &raw,
                format!("module path cannot start with '{c}'"),
            )),
            Some(_) => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Slash-separated segments, empties included.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Text after the last `/` (the whole path when there is none).
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl FromStr for ModulePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ModulePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// PostProcessCommand
// ============================================================================

/// External command run inside the generated project, e.g. `go mod tidy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostProcessCommand {
    program: String,
    args: Vec<String>,
}

impl PostProcessCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a whitespace-separated command line. No quoting rules apply.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let mut parts = line.split_whitespace();
        let program = parts.next().ok_or_else(|| DomainError::InvalidCommand {
            command: line.to_string(),
            reason: "command is empty".into(),
        })?;

        Ok(Self::new(program, parts))
    }

    /// `go mod tidy` followed by `go generate ./...`.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("go", ["mod", "tidy"]),
            Self::new("go", ["generate", "./..."]),
        ]
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl FromStr for PostProcessCommand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PostProcessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
