//! In-memory resource tree for testing.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use gosvc_core::{
    application::{ApplicationError, ports::ResourceTree},
    domain::{ResourceEntry, ResourcePath},
    error::GosvcResult,
};

/// Thread-safe in-memory resource tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceTree {
    inner: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryResourceTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at a `/`-separated path, replacing any previous content.
    pub fn insert(&self, path: &str, content: impl Into<Vec<u8>>) -> GosvcResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.insert(path.trim_matches('/').to_string(), content.into());
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(self, path: &str, content: impl Into<Vec<u8>>) -> GosvcResult<Self> {
        self.insert(path, content)?;
        Ok(self)
    }

    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceTree for MemoryResourceTree {
    fn list_children(&self, path: &ResourcePath) -> GosvcResult<Vec<ResourceEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        super::children_of(inner.keys().map(String::as_str), path).ok_or_else(|| {
            ApplicationError::ResourceRead {
                path: path.to_string(),
                reason: "no such directory".into(),
            }
            .into()
        })
    }

    fn read_file(&self, path: &ResourcePath) -> GosvcResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(path.as_str()).cloned().ok_or_else(|| {
            ApplicationError::ResourceRead {
                path: path.to_string(),
                reason: "no such file".into(),
            }
            .into()
        })
    }
}
