use std::fmt;

/// Suffix marking a resource file as a template.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Logical, slash-separated path inside a resource tree.
///
/// The empty path is the tree root. Paths never start or end with `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath(String);

impl ResourcePath {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn new(path: impl AsRef<str>) -> Self {
        let trimmed = path.as_ref().trim_matches('/');
        Self(trimmed.to_string())
    }

    /// Append one entry name.
    pub fn join(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self::new(name)
        } else {
            Self(format!("{}/{}", self.0, name.trim_matches('/')))
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final entry name; empty for the root.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }
}

impl From<&str> for ResourcePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One child returned by a resource tree listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    name: String,
    kind: EntryKind,
}

impl ResourceEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Files named `*.tmpl` are rendered; everything else is copied.
    pub fn is_template(&self) -> bool {
        self.kind == EntryKind::File && self.name.ends_with(TEMPLATE_SUFFIX)
    }
}

/// Strip a trailing template marker from a destination name.
pub fn strip_template_suffix(name: &str) -> &str {
    name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name)
}
