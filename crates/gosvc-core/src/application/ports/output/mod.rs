//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gosvc-adapters` crate provides implementations.

use std::path::Path;

use crate::application::error::RenderFailure;
use crate::domain::{PostProcessCommand, ResourceEntry, ResourcePath, SubstitutionContext};
use crate::error::GosvcResult;

/// Port for the read-only source tree of skeleton files.
///
/// Implemented by:
/// - `gosvc_adapters::resources::EmbeddedResources` (compiled into the binary)
/// - `gosvc_adapters::resources::MemoryResourceTree` (testing)
pub trait ResourceTree: Send + Sync {
    /// Children of a directory, in a deterministic enumeration order.
    fn list_children(&self, path: &ResourcePath) -> GosvcResult<Vec<ResourceEntry>>;

    /// Raw bytes of a file.
    fn read_file(&self, path: &ResourcePath) -> GosvcResult<Vec<u8>>;
}

/// Port for destination filesystem operations.
///
/// Implemented by:
/// - `gosvc_adapters::filesystem::LocalFilesystem` (production)
/// - `gosvc_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors.
    fn create_dir_all(&self, path: &Path) -> GosvcResult<()>;

    /// Write bytes to a file, replacing existing content.
    fn write_file(&self, path: &Path, content: &[u8]) -> GosvcResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GosvcResult<()>;
}

/// Port for template rendering.
///
/// Implementations must fail on a reference to an undefined variable, and
/// must keep that failure distinguishable from a syntax error.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &SubstitutionContext)
    -> Result<String, RenderFailure>;
}

/// Port for running external post-processing commands.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `working_dir` as its current directory.
    ///
    /// On failure the error message should be the command's stderr when it
    /// wrote any, otherwise the exit status or spawn error.
    fn run(&self, command: &PostProcessCommand, working_dir: &Path) -> GosvcResult<()>;
}
