//! In-crate fakes for exercising services without real I/O.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{
        ApplicationError, RenderFailure, TemplateErrorKind,
        ports::{Filesystem, ResourceTree, TemplateRenderer},
    },
    domain::{ResourceEntry, ResourcePath, SubstitutionContext},
    error::GosvcResult,
};

/// Resource tree built from `(path, content)` pairs; listing order follows
/// insertion order.
#[derive(Default)]
pub struct FakeTree {
    files: Vec<(String, Vec<u8>)>,
    empty_dirs: Vec<String>,
}

impl FakeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.as_bytes().to_vec()));
        self
    }

    pub fn bytes(mut self, path: &str, content: &[u8]) -> Self {
        self.files.push((path.to_string(), content.to_vec()));
        self
    }

    pub fn empty_dir(mut self, path: &str) -> Self {
        self.empty_dirs.push(path.to_string());
        self
    }
}

impl ResourceTree for FakeTree {
    fn list_children(&self, path: &ResourcePath) -> GosvcResult<Vec<ResourceEntry>> {
        let prefix = if path.is_root() {
            String::new()
        } else {
            format!("{}/", path.as_str())
        };

        let all_paths = self
            .files
            .iter()
            .map(|(p, _)| (p.as_str(), false))
            .chain(self.empty_dirs.iter().map(|p| (p.as_str(), true)));

        let mut seen = BTreeSet::new();
        let mut entries = Vec::new();
        for (full, is_empty_dir) in all_paths {
            let Some(rest) = full.strip_prefix(&prefix) else {
                continue;
            };
            let (name, is_dir) = match rest.split_once('/') {
                Some((head, _)) => (head, true),
                None => (rest, is_empty_dir),
            };
            if seen.insert(name.to_string()) {
                entries.push(if is_dir {
                    ResourceEntry::directory(name)
                } else {
                    ResourceEntry::file(name)
                });
            }
        }

        Ok(entries)
    }

    fn read_file(&self, path: &ResourcePath) -> GosvcResult<Vec<u8>> {
        self.files
            .iter()
            .find(|(p, _)| p == path.as_str())
            .map(|(_, c)| c.clone())
            .ok_or_else(|| {
                ApplicationError::ResourceRead {
                    path: path.to_string(),
                    reason: "not found".into(),
                }
                .into()
            })
    }
}

#[derive(Debug, Default)]
struct FsState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    write_order: Vec<PathBuf>,
    fail_on: Option<PathBuf>,
}

/// Filesystem double that records every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingFs {
    state: Arc<Mutex<FsState>>,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to `path` fail.
    pub fn failing_on(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().fail_on = Some(path.into());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub fn read_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read(path).map(|b| String::from_utf8(b).unwrap())
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    pub fn write_order(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().write_order.clone()
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> GosvcResult<()> {
        let mut state = self.state.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            state.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GosvcResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            assert!(
                parent.as_os_str().is_empty() || state.dirs.contains(parent),
                "parent of {} was not created",
                path.display()
            );
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        state.write_order.push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> GosvcResult<()> {
        let mut state = self.state.lock().unwrap();
        state.files.retain(|p, _| !p.starts_with(path));
        state.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }
}

/// Minimal `{{Key}}` renderer with strict lookups.
pub struct BraceRenderer;

impl TemplateRenderer for BraceRenderer {
    fn render(
        &self,
        template: &str,
        context: &SubstitutionContext,
    ) -> Result<String, RenderFailure> {
        let mut out = String::new();
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                RenderFailure::new(TemplateErrorKind::Syntax, "unclosed '{{'")
            })?;
            let key = after[..end].trim();
            let value = context.get(key).ok_or_else(|| {
                RenderFailure::new(
                    TemplateErrorKind::UndefinedVariable,
                    format!("'{key}' is not defined"),
                )
            })?;
            out.push_str(value);
            rest = &after[end + 2..];
        }
        out.push_str(rest);

        Ok(out)
    }
}
