use std::collections::HashMap;

use super::context::SubstitutionContext;

/// Placeholder directory replaced by the derived folder name.
pub const SERVICE_PLACEHOLDER: &str = "service";

/// Dotfiles stored without their leading dot in the resource tree.
const DOTFILES: &[&str] = &["gitignore", "dockerignore", "golangci.yml"];

/// Source-name to destination-name mapping applied during materialization.
///
/// Lookups are by exact entry name, never by path, so a nested `service`
/// directory is renamed just like a top-level one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameTable {
    entries: HashMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard table: the `service` placeholder plus dot-restored files.
    ///
    /// The placeholder entry is omitted when the context carries no folder
    /// name.
    pub fn for_context(context: &SubstitutionContext) -> Self {
        let mut table = Self::new();

        if let Some(folder) = context.folder_name() {
            table.insert(SERVICE_PLACEHOLDER, folder);
        }
        for name in DOTFILES {
            table.insert(*name, format!(".{name}"));
        }

        table
    }

    pub fn insert(&mut self, source: impl Into<String>, destination: impl Into<String>) {
        self.entries.insert(source.into(), destination.into());
    }

    pub fn with_entry(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.insert(source, destination);
        self
    }

    /// Destination name for `source`, or `source` itself when unmapped.
    pub fn apply<'a>(&'a self, source: &'a str) -> &'a str {
        self.entries.get(source).map_or(source, String::as_str)
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
