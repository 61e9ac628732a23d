//! Service skeleton compiled into the binary with `rust-embed`.

use rust_embed::RustEmbed;
use tracing::trace;

use gosvc_core::{
    application::{ApplicationError, ports::ResourceTree},
    domain::{ResourceEntry, ResourcePath},
    error::GosvcResult,
};

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Skeleton;

/// The Go service skeleton shipped with gosvc.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    pub fn new() -> Self {
        Self
    }

    /// All embedded file paths, sorted.
    pub fn files() -> Vec<String> {
        let mut files: Vec<String> = Skeleton::iter().map(|p| p.into_owned()).collect();
        files.sort();
        files
    }
}

impl ResourceTree for EmbeddedResources {
    fn list_children(&self, path: &ResourcePath) -> GosvcResult<Vec<ResourceEntry>> {
        let files = Self::files();
        let entries = super::children_of(files.iter().map(String::as_str), path).ok_or_else(|| {
            ApplicationError::ResourceRead {
                path: path.to_string(),
                reason: "no such embedded directory".into(),
            }
        })?;

        trace!(path = %path, children = entries.len(), "Listed embedded directory");
        Ok(entries)
    }

    fn read_file(&self, path: &ResourcePath) -> GosvcResult<Vec<u8>> {
        Skeleton::get(path.as_str())
            .map(|file| file.data.into_owned())
            .ok_or_else(|| {
                ApplicationError::ResourceRead {
                    path: path.to_string(),
                    reason: "no such embedded file".into(),
                }
                .into()
            })
    }
}
