//! Infrastructure adapters for gosvc.
//!
//! This crate implements the ports defined in `gosvc_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod renderer;
pub mod resources;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemCommandRunner;
pub use renderer::HandlebarsRenderer;
pub use resources::{EmbeddedResources, MemoryResourceTree};
